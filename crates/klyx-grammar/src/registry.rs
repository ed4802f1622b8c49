//! Process-lifetime cache of grammars loaded from shared libraries.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::{
    DynamicLang, GrammarError, Lang, LoaderConfig, load_language_handle, stage_library,
    symbol_for_language,
};

/// Grammars keyed by language name.
///
/// A name is bound at most once; later loads return the cached [`Lang`]
/// even when they point at a different library.
#[derive(Debug, Default)]
pub struct GrammarRegistry {
    config: LoaderConfig,
    langs: RwLock<HashMap<String, Lang>>,
}

impl GrammarRegistry {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            langs: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load `tree_sitter_<name>` from `library_path`, or return the cached grammar.
    ///
    /// # Safety
    ///
    /// `library_path` must be a tree-sitter grammar library; see
    /// [`load_language_handle`].
    pub unsafe fn load(&self, name: &str, library_path: &Path) -> Result<Lang, GrammarError> {
        let symbol = symbol_for_language(name);
        unsafe { self.load_symbol(name, &symbol, library_path) }
    }

    /// Like [`load`](Self::load) with an explicit factory symbol.
    ///
    /// # Safety
    ///
    /// See [`load_language_handle`].
    pub unsafe fn load_symbol(
        &self,
        name: &str,
        symbol: &str,
        library_path: &Path,
    ) -> Result<Lang, GrammarError> {
        if let Some(lang) = self.get(name) {
            trace!(name, "grammar cache hit");
            return Ok(lang);
        }

        let path = match &self.config.cache_dir {
            Some(dir) => {
                stage_library(dir, library_path).map_err(|source| GrammarError::Staging {
                    path: library_path.to_owned(),
                    source,
                })?
            }
            None => library_path.to_owned(),
        };

        let handle = unsafe { load_language_handle(&path, symbol) }?;
        let lang = unsafe { DynamicLang::from_handle(name, symbol, handle) }?;

        debug!(name, %handle, "loaded grammar");
        Ok(self.register(name, lang))
    }

    /// Bind `name` to an already constructed grammar.
    ///
    /// Returns the grammar that ends up registered: `lang`, or the one
    /// bound earlier under the same name.
    pub fn register(&self, name: &str, lang: Lang) -> Lang {
        let mut langs = self.langs.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(langs.entry(name.to_owned()).or_insert(lang))
    }

    pub fn get(&self, name: &str) -> Option<Lang> {
        self.langs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .map(Arc::clone)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let langs = self.langs.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<_> = langs.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.langs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry shared by the whole process, with default settings.
pub fn global() -> &'static GrammarRegistry {
    static REGISTRY: LazyLock<GrammarRegistry> = LazyLock::new(GrammarRegistry::default);
    &REGISTRY
}
