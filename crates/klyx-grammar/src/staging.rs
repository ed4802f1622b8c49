//! Grammar naming and library staging.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

const SYMBOL_PREFIX: &str = "tree_sitter_";

/// Factory symbol exported by the grammar for `language`.
///
/// `c-sharp` → `tree_sitter_c_sharp`
pub fn symbol_for_language(language: &str) -> String {
    format!("{SYMBOL_PREFIX}{}", language.replace('-', "_"))
}

/// Copy `source` into `cache_dir` unless a file with the same name is already there.
///
/// An existing staged copy is reused untouched, so replacing a grammar
/// requires clearing the cache directory first.
pub fn stage_library(cache_dir: &Path, source: &Path) -> io::Result<PathBuf> {
    let Some(file_name) = source.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no file name", source.display()),
        ));
    };

    let dest = cache_dir.join(file_name);
    if dest.exists() {
        debug!(staged = %dest.display(), "reusing staged library");
        return Ok(dest);
    }

    std::fs::create_dir_all(cache_dir)?;
    std::fs::copy(source, &dest)?;
    debug!(source = %source.display(), staged = %dest.display(), "staged library");
    Ok(dest)
}
