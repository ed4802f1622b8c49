//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Shared library holding the grammar (positional).
pub fn library_arg() -> Arg {
    Arg::new("library")
        .value_name("LIBRARY")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Shared library (.so/.dylib/.dll) exporting the grammar")
}

/// Factory symbol (positional, for `load`).
pub fn symbol_positional_arg() -> Arg {
    Arg::new("symbol")
        .value_name("SYMBOL")
        .required(true)
        .help("Exported zero-argument function returning the grammar")
}

/// Language name (-n/--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .required(true)
        .help("Language name; the factory is tree_sitter_<NAME>")
}

/// Factory symbol override (--symbol).
pub fn symbol_arg() -> Arg {
    Arg::new("symbol")
        .long("symbol")
        .value_name("SYMBOL")
        .help("Factory symbol (default: tree_sitter_<NAME>)")
}

/// Source file to parse (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("source_text")
        .help("Source file to parse (use \"-\" for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// List node kinds and fields (--kinds).
pub fn kinds_arg() -> Arg {
    Arg::new("kinds")
        .long("kinds")
        .action(ArgAction::SetTrue)
        .help("List named node kinds and field names")
}

/// Include anonymous nodes (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include anonymous nodes (literals, punctuation)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Staging directory (--cache-dir, global).
pub fn cache_dir_arg() -> Arg {
    Arg::new("cache_dir")
        .long("cache-dir")
        .value_name("DIR")
        .env("KLYX_GRAMMAR_CACHE_DIR")
        .global(true)
        .value_parser(value_parser!(PathBuf))
        .help("Copy libraries here before loading them")
}

/// Log verbosity (-v, repeatable, global).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log loader activity (-v debug, -vv trace)")
}
