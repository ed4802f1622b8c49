//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("klyx-grammar")
        .about("Load tree-sitter grammars from shared libraries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(cache_dir_arg())
        .arg(verbose_arg())
        .subcommand(load_command())
        .subcommand(info_command())
        .subcommand(parse_command())
}

/// Resolve a factory and print the handle it returns.
pub fn load_command() -> Command {
    Command::new("load")
        .about("Call a grammar factory and print the returned handle")
        .after_help(
            r#"EXAMPLES:
  klyx-grammar load /lib/libtree-sitter-json.so tree_sitter_json"#,
        )
        .arg(library_arg())
        .arg(symbol_positional_arg())
}

/// Summarise a grammar.
pub fn info_command() -> Command {
    Command::new("info")
        .about("Show node kind and field counts of a grammar")
        .after_help(
            r#"EXAMPLES:
  klyx-grammar info /lib/libtree-sitter-json.so -n json
  klyx-grammar info ./libcsharp.so -n c-sharp --kinds
  klyx-grammar info ./custom.so -n custom --symbol make_language"#,
        )
        .arg(library_arg())
        .arg(name_arg())
        .arg(symbol_arg())
        .arg(kinds_arg())
}

/// Parse source with a grammar.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse source with a grammar and print its syntax tree")
        .override_usage(
            "\
  klyx-grammar parse <LIBRARY> -n <NAME> <SOURCE>
  klyx-grammar parse <LIBRARY> -n <NAME> -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  klyx-grammar parse ./libtree-sitter-json.so -n json data.json
  klyx-grammar parse ./libtree-sitter-json.so -n json -s '[1, 2]' --raw
  cat data.json | klyx-grammar parse ./libtree-sitter-json.so -n json -"#,
        )
        .arg(library_arg())
        .arg(source_path_arg())
        .arg(name_arg())
        .arg(symbol_arg())
        .arg(source_text_arg())
        .arg(raw_arg())
        .arg(spans_arg())
}
