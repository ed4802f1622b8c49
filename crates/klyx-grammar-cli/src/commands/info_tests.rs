use super::grammar_resolver::hint_for;
use super::info::render_info;
use super::test_utils::json_lang;

use klyx_grammar::{GrammarError, LinkError};

#[test]
fn summary_lines() {
    let lang = json_lang();
    let out = render_info(lang.as_ref(), "tree_sitter_json", false);
    let lines: Vec<_> = out.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "name:        json");
    assert_eq!(lines[1], "symbol:      tree_sitter_json");
    assert_eq!(lines[2], format!("handle:      {}", lang.handle()));
    assert!(lines[3].starts_with(&format!("node kinds:  {} (", lang.node_kind_count())));
    assert_eq!(lines[4], format!("fields:      {}", lang.field_count()));
}

#[test]
fn kind_listing_is_sorted_and_unique() {
    let lang = json_lang();
    let out = render_info(lang.as_ref(), "tree_sitter_json", true);

    let (_, kinds) = out.split_once("named kinds:\n").unwrap();
    let (kinds, fields) = kinds.split_once("\nfield names:\n").unwrap();
    let kinds: Vec<_> = kinds.lines().map(str::trim).collect();
    let fields: Vec<_> = fields.lines().map(str::trim).collect();

    let mut sorted = kinds.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(kinds, sorted);
    assert!(kinds.contains(&"object"));
    assert!(fields.contains(&"key"));
    assert!(fields.contains(&"value"));
}

#[test]
fn hints() {
    let symbol = GrammarError::Link(LinkError::Symbol {
        path: "/lib/libtree-sitter-json.so".into(),
        symbol: "tree_sitter_jsn".into(),
        message: "undefined symbol: tree_sitter_jsn".into(),
    });
    assert!(hint_for(&symbol).unwrap().contains("--symbol"));

    let load = GrammarError::Link(LinkError::Load {
        path: "/lib/libtree-sitter-json.so".into(),
        message: "cannot open shared object file".into(),
    });
    assert!(hint_for(&load).is_none());

    let absent = GrammarError::AbsentHandle {
        name: "json".into(),
        symbol: "tree_sitter_json".into(),
    };
    assert!(hint_for(&absent).is_some());
}
