use std::ffi::c_void;

use arborium_tree_sitter::Language;
use klyx_grammar::{DynamicLang, Lang, LanguageHandle};

/// The statically linked JSON grammar, wrapped as if loaded at runtime.
pub fn json_lang() -> Lang {
    let ts_lang: Language = arborium_json::language().into();
    let handle = LanguageHandle::from_ptr(ts_lang.into_raw() as *const c_void);
    unsafe { DynamicLang::from_handle("json", "tree_sitter_json", handle) }
        .expect("json grammar is compatible")
}
