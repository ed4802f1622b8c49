//! Dynamic language loading (runtime).
//!
//! Binds a tree-sitter grammar factory (`tree_sitter_<name>`) from a shared
//! library (.so/.dylib/.dll) and returns the address it produces.
//!
//! Libraries opened here are never closed. The returned handle points into
//! the library's data, so it stays valid for the rest of the process.

use std::ffi::c_void;
use std::mem::ManuallyDrop;
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::{debug, warn};

use crate::{LanguageHandle, LinkError};

/// Signature every tree-sitter grammar exports.
type LanguageFn = unsafe extern "C" fn() -> *const c_void;

/// A library path and the factory symbol to call inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub library_path: PathBuf,
    pub symbol_name: String,
}

impl LoadRequest {
    pub fn new(library_path: impl Into<PathBuf>, symbol_name: impl Into<String>) -> Self {
        Self {
            library_path: library_path.into(),
            symbol_name: symbol_name.into(),
        }
    }

    /// # Safety
    ///
    /// Same contract as [`load_language_handle`].
    pub unsafe fn load(&self) -> Result<LanguageHandle, LinkError> {
        unsafe { load_language_handle(&self.library_path, &self.symbol_name) }
    }
}

/// Load `library_path` with immediate binding, resolve `symbol_name` and call it.
///
/// A factory returning null yields [`LanguageHandle::ABSENT`], not an error.
///
/// # Safety
///
/// Loading runs the library's initialisers, and `symbol_name` must name a
/// function taking no arguments and returning a pointer. Neither can be
/// checked here.
pub unsafe fn load_language_handle(
    library_path: impl AsRef<Path>,
    symbol_name: &str,
) -> Result<LanguageHandle, LinkError> {
    let path = library_path.as_ref();
    debug!(library = %path.display(), symbol = symbol_name, "loading grammar library");

    let library = match unsafe { open_now(path) } {
        Ok(library) => ManuallyDrop::new(library),
        Err(err) => {
            let err = LinkError::load(path.to_owned(), diagnostic(&err));
            warn!(library = %path.display(), "{err}");
            return Err(err);
        }
    };

    let factory = match unsafe { library.get::<LanguageFn>(symbol_name.as_bytes()) } {
        Ok(factory) => factory,
        Err(err) => {
            let err = LinkError::symbol(path.to_owned(), symbol_name.to_owned(), diagnostic(&err));
            warn!(library = %path.display(), symbol = symbol_name, "{err}");
            return Err(err);
        }
    };

    let handle = LanguageHandle::from_ptr(unsafe { factory() });
    debug!(symbol = symbol_name, %handle, "grammar factory returned");
    Ok(handle)
}

#[cfg(unix)]
unsafe fn open_now(path: &Path) -> Result<Library, libloading::Error> {
    use libloading::os::unix::{Library as UnixLibrary, RTLD_LOCAL, RTLD_NOW};

    unsafe { UnixLibrary::open(Some(path), RTLD_NOW | RTLD_LOCAL) }.map(Library::from)
}

// LoadLibraryExW resolves imports eagerly; there is no lazy mode to opt out of.
#[cfg(windows)]
unsafe fn open_now(path: &Path) -> Result<Library, libloading::Error> {
    unsafe { Library::new(path) }
}

/// Platform text for a loader failure, empty when the platform gave none.
fn diagnostic(err: &libloading::Error) -> String {
    use libloading::Error as E;

    match err {
        E::DlOpenUnknown
        | E::DlSymUnknown
        | E::LoadLibraryExWUnknown
        | E::GetProcAddressUnknown => String::new(),
        other => other.to_string(),
    }
}
