use std::num::NonZeroU16;
use std::sync::Arc;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Language;

use crate::{GrammarError, LanguageHandle};

pub type NodeTypeId = u16;
pub type NodeFieldId = NonZeroU16;

/// User-facing language type.
pub type Lang = Arc<dyn LangImpl>;

/// Unified facade over tree-sitter's Language API for grammars bound at runtime.
pub trait LangImpl: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    /// Address the grammar factory returned.
    fn handle(&self) -> LanguageHandle;

    /// Parse source code into a tree-sitter tree.
    fn parse(&self, source: &str) -> tree_sitter::Tree;

    fn resolve_named_node(&self, kind: &str) -> Option<NodeTypeId>;
    fn resolve_anonymous_node(&self, kind: &str) -> Option<NodeTypeId>;
    fn resolve_field(&self, name: &str) -> Option<NodeFieldId>;

    fn node_kind_count(&self) -> usize;
    fn field_count(&self) -> usize;

    // Enumeration methods for listings
    fn all_named_node_kinds(&self) -> Vec<&'static str>;
    fn all_field_names(&self) -> Vec<&'static str>;
    fn node_type_name(&self, node_type_id: NodeTypeId) -> Option<&'static str>;
    fn field_name(&self, field_id: NodeFieldId) -> Option<&'static str>;
}

/// A grammar whose descriptor lives in a dynamically loaded library.
#[derive(Debug)]
pub struct DynamicLang {
    name: String,
    handle: LanguageHandle,
    ts_lang: Language,
}

impl DynamicLang {
    /// Wrap the descriptor behind `handle`.
    ///
    /// Rejects the absence handle, and grammars whose ABI version the linked
    /// tree-sitter runtime cannot parse with.
    ///
    /// # Safety
    ///
    /// A non-absent `handle` must be the address of a `TSLanguage` that stays
    /// mapped for the life of the process.
    pub unsafe fn from_handle(
        name: &str,
        symbol: &str,
        handle: LanguageHandle,
    ) -> Result<Lang, GrammarError> {
        if handle.is_absent() {
            return Err(GrammarError::AbsentHandle {
                name: name.to_owned(),
                symbol: symbol.to_owned(),
            });
        }

        let ts_lang = unsafe { Language::from_raw(handle.as_ptr().cast()) };

        tree_sitter::Parser::new()
            .set_language(&ts_lang)
            .map_err(|err| GrammarError::Incompatible {
                name: name.to_owned(),
                message: err.to_string(),
            })?;

        Ok(Arc::new(Self {
            name: name.to_owned(),
            handle,
            ts_lang,
        }))
    }
}

impl LangImpl for DynamicLang {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self) -> LanguageHandle {
        self.handle
    }

    fn parse(&self, source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.ts_lang)
            .expect("language was validated on load");
        parser.parse(source, None).expect("failed to parse source")
    }

    fn resolve_named_node(&self, kind: &str) -> Option<NodeTypeId> {
        let id = self.ts_lang.id_for_node_kind(kind, true);
        // For named nodes, 0 always means "not found"
        (id != 0).then_some(id)
    }

    fn resolve_anonymous_node(&self, kind: &str) -> Option<NodeTypeId> {
        let id = self.ts_lang.id_for_node_kind(kind, false);
        // 0 is both "not found" and the anonymous "end" node.
        if id != 0 {
            return Some(id);
        }
        (self.ts_lang.node_kind_for_id(0) == Some(kind)).then_some(0)
    }

    fn resolve_field(&self, name: &str) -> Option<NodeFieldId> {
        self.ts_lang.field_id_for_name(name)
    }

    fn node_kind_count(&self) -> usize {
        self.ts_lang.node_kind_count()
    }

    fn field_count(&self) -> usize {
        self.ts_lang.field_count()
    }

    fn all_named_node_kinds(&self) -> Vec<&'static str> {
        let count = self.ts_lang.node_kind_count();
        (0..count as u16)
            .filter(|&id| self.ts_lang.node_kind_is_named(id))
            .filter(|&id| self.ts_lang.node_kind_is_visible(id))
            .filter_map(|id| self.ts_lang.node_kind_for_id(id))
            .collect()
    }

    fn all_field_names(&self) -> Vec<&'static str> {
        let count = self.ts_lang.field_count();
        (1..=count as u16)
            .filter_map(|id| self.ts_lang.field_name_for_id(id))
            .collect()
    }

    fn node_type_name(&self, node_type_id: NodeTypeId) -> Option<&'static str> {
        self.ts_lang.node_kind_for_id(node_type_id)
    }

    fn field_name(&self, field_id: NodeFieldId) -> Option<&'static str> {
        self.ts_lang.field_name_for_id(field_id.get())
    }
}
