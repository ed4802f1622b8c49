use std::fmt::Write;
use std::path::PathBuf;

use klyx_grammar::{LangImpl, LoaderConfig};

use super::grammar_resolver::require_lang;

pub struct InfoArgs {
    pub library: PathBuf,
    pub name: String,
    pub symbol: Option<String>,
    pub kinds: bool,
}

pub fn run(args: InfoArgs, config: LoaderConfig) {
    let (lang, symbol) = require_lang(config, &args.library, &args.name, args.symbol.as_deref());
    print!("{}", render_info(lang.as_ref(), &symbol, args.kinds));
}

pub fn render_info(lang: &dyn LangImpl, symbol: &str, list_kinds: bool) -> String {
    let named = lang.all_named_node_kinds();
    let fields = lang.all_field_names();

    let mut out = String::new();
    writeln!(out, "name:        {}", lang.name()).unwrap();
    writeln!(out, "symbol:      {symbol}").unwrap();
    writeln!(out, "handle:      {}", lang.handle()).unwrap();
    writeln!(out, "node kinds:  {} ({} named)", lang.node_kind_count(), named.len()).unwrap();
    writeln!(out, "fields:      {}", lang.field_count()).unwrap();

    if list_kinds {
        render_list(&mut out, "named kinds", &named);
        render_list(&mut out, "field names", &fields);
    }
    out
}

fn render_list(out: &mut String, label: &str, items: &[&str]) {
    let mut sorted = items.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    out.push('\n');
    out.push_str(label);
    out.push_str(":\n");
    for item in sorted {
        out.push_str("  ");
        out.push_str(item);
        out.push('\n');
    }
}
