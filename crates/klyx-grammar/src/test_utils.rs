use std::ffi::c_void;

use arborium_tree_sitter::Language;

use crate::{DynamicLang, Lang, LanguageHandle};

/// glibc exports both factories below with the `() -> pointer` shape:
/// `__errno_location` returns the calling thread's errno slot and `dlerror`
/// returns null once the last dynamic-linking call has succeeded.
#[cfg(all(target_os = "linux", target_env = "gnu"))]
pub const LIBC: &str = "libc.so.6";

pub const MISSING_LIBRARY: &str = "/nonexistent/libtree-sitter-missing.so";

/// Handle to the statically linked JSON grammar, as a runtime loader would return it.
pub fn json_handle() -> LanguageHandle {
    let lang: Language = arborium_json::language().into();
    LanguageHandle::from_ptr(lang.into_raw() as *const c_void)
}

pub fn json_lang() -> Lang {
    unsafe { DynamicLang::from_handle("json", "tree_sitter_json", json_handle()) }
        .expect("json grammar is compatible")
}
