use std::path::PathBuf;

/// Settings for [`GrammarRegistry`](crate::GrammarRegistry).
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Libraries are copied here before loading when set.
    pub cache_dir: Option<PathBuf>,
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }
}
