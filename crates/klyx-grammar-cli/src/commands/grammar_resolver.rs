use std::path::Path;
use std::process::exit;

use klyx_grammar::{GrammarError, GrammarRegistry, Lang, LoaderConfig, symbol_for_language};

/// Load the grammar or exit with a user-facing message.
///
/// Returns the grammar together with the factory symbol that produced it.
pub fn require_lang(
    config: LoaderConfig,
    library: &Path,
    name: &str,
    symbol: Option<&str>,
) -> (Lang, String) {
    let symbol = symbol
        .map(str::to_owned)
        .unwrap_or_else(|| symbol_for_language(name));
    let registry = GrammarRegistry::new(config);

    // The user vouches for LIBRARY being a tree-sitter grammar.
    match unsafe { registry.load_symbol(name, &symbol, library) } {
        Ok(lang) => (lang, symbol),
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(hint) = hint_for(&err) {
                eprintln!();
                eprintln!("hint: {hint}");
            }
            exit(1);
        }
    }
}

pub fn hint_for(err: &GrammarError) -> Option<&'static str> {
    match err {
        GrammarError::Link(klyx_grammar::LinkError::Symbol { .. }) => {
            Some("use --symbol if the grammar exports a non-standard factory name")
        }
        GrammarError::AbsentHandle { .. } => {
            Some("the factory ran but produced no grammar; check the library build")
        }
        GrammarError::Incompatible { .. } => {
            Some("rebuild the grammar against a supported tree-sitter ABI version")
        }
        GrammarError::Link(_) | GrammarError::Staging { .. } => None,
    }
}
