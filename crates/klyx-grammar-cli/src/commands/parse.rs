use std::fmt::Write;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use arborium_tree_sitter as tree_sitter;
use klyx_grammar::LoaderConfig;
use tracing::warn;

use super::grammar_resolver::require_lang;

pub struct ParseArgs {
    pub library: PathBuf,
    pub name: String,
    pub symbol: Option<String>,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
}

pub fn run(args: ParseArgs, config: LoaderConfig) {
    let source = match (&args.source_text, &args.source_path) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => load_source(path),
        (Some(_), Some(_)) => {
            eprintln!("error: cannot use both --source and positional SOURCE");
            std::process::exit(1);
        }
        (None, None) => {
            eprintln!("error: source required (positional or --source)");
            std::process::exit(1);
        }
    };

    let (lang, _) = require_lang(config, &args.library, &args.name, args.symbol.as_deref());
    let tree = lang.parse(&source);
    if tree.root_node().has_error() {
        warn!(language = lang.name(), "source contains syntax errors");
    }
    print!("{}", dump_tree(&tree, &source, args.raw, args.spans));
}

fn load_source(path: &Path) -> String {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: failed to read stdin: {err}");
            std::process::exit(1);
        }
        return buf;
    }
    fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("error: file not found: {}", path.display());
        std::process::exit(1);
    })
}

/// Render `tree` as an indented S-expression, one node per line.
///
/// Leaves carry their source text, or only the quoted kind when the text is
/// the kind itself (punctuation, keywords). `raw` keeps anonymous nodes;
/// `spans` appends `[row:col-row:col]` to every node.
pub fn dump_tree(tree: &tree_sitter::Tree, source: &str, raw: bool, spans: bool) -> String {
    let mut printer = TreePrinter {
        source,
        raw,
        spans,
        out: String::new(),
    };
    printer.node(tree.root_node(), None, 0);
    printer.out.push('\n');
    printer.out
}

struct TreePrinter<'s> {
    source: &'s str,
    raw: bool,
    spans: bool,
    out: String,
}

impl TreePrinter<'_> {
    fn node(&mut self, node: tree_sitter::Node<'_>, field: Option<&str>, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        if let Some(field) = field {
            self.out.push_str(field);
            self.out.push_str(": ");
        }

        let children = self.shown_children(node);
        if children.is_empty() {
            self.leaf(node);
            self.span(node);
            return;
        }

        self.out.push('(');
        self.out.push_str(node.kind());
        self.span(node);
        for (child, child_field) in children {
            self.out.push('\n');
            self.node(child, child_field, depth + 1);
        }
        self.out.push(')');
    }

    fn shown_children<'t>(
        &self,
        node: tree_sitter::Node<'t>,
    ) -> Vec<(tree_sitter::Node<'t>, Option<&'static str>)> {
        let mut cursor = node.walk();
        let mut shown = Vec::new();
        let mut more = cursor.goto_first_child();
        while more {
            let child = cursor.node();
            if self.raw || child.is_named() {
                shown.push((child, cursor.field_name()));
            }
            more = cursor.goto_next_sibling();
        }
        shown
    }

    fn leaf(&mut self, node: tree_sitter::Node<'_>) {
        let source = self.source;
        let kind = node.kind();
        let text = node
            .utf8_text(source.as_bytes())
            .unwrap_or("<invalid utf8>");

        self.out.push('(');
        if text != kind {
            self.out.push_str(kind);
            self.out.push(' ');
        }
        self.out.push('"');
        push_escaped(&mut self.out, text);
        self.out.push_str("\")");
    }

    fn span(&mut self, node: tree_sitter::Node<'_>) {
        if !self.spans {
            return;
        }
        let (start, end) = (node.start_position(), node.end_position());
        let _ = write!(
            self.out,
            " [{}:{}-{}:{}]",
            start.row, start.column, end.row, end.column
        );
    }
}

/// Leaf text quoted the way a Rust string literal would be, except that
/// other control characters become `\u{XXXX}`.
fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:04x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
}
