use crate::test_utils::MISSING_LIBRARY;
use crate::{LanguageHandle, LinkError, LoadRequest, load_language_handle};

#[test]
fn missing_library_is_load_error() {
    let err = unsafe { load_language_handle(MISSING_LIBRARY, "tree_sitter_json") }.unwrap_err();

    assert!(matches!(err, LinkError::Load { .. }), "{err:?}");
    assert!(!err.message().is_empty());
    assert_eq!(err.path(), std::path::Path::new(MISSING_LIBRARY));
    assert_eq!(err.to_string(), err.message());
}

#[test]
#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn missing_library_carries_platform_message() {
    let err = unsafe { load_language_handle(MISSING_LIBRARY, "tree_sitter_json") }.unwrap_err();

    assert!(err.message().contains(MISSING_LIBRARY), "{err}");
}

#[test]
fn empty_diagnostic_falls_back_to_generic_message() {
    let load = LinkError::load("/lib/libtree-sitter-json.so".into(), String::new());
    insta::assert_snapshot!(load, @"failed to load library '/lib/libtree-sitter-json.so'");

    let symbol = LinkError::symbol(
        "/lib/libtree-sitter-json.so".into(),
        "tree_sitter_missing".into(),
        "  ".into(),
    );
    insta::assert_snapshot!(symbol, @"undefined symbol 'tree_sitter_missing' in '/lib/libtree-sitter-json.so'");
}

#[test]
fn platform_diagnostic_is_kept_verbatim() {
    let err = LinkError::load("/lib/x.so".into(), "x.so: invalid ELF header".into());
    assert_eq!(err.to_string(), "x.so: invalid ELF header");
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
mod glibc {
    use super::*;
    use crate::test_utils::LIBC;

    unsafe extern "C" {
        fn __errno_location() -> *mut i32;
    }

    #[test]
    fn factory_result_becomes_handle() {
        let handle = unsafe { load_language_handle(LIBC, "__errno_location") }.unwrap();

        let expected = unsafe { __errno_location() };
        assert!(!handle.is_absent());
        assert_eq!(handle.addr(), expected as usize);
    }

    #[test]
    fn repeated_loads_return_same_handle() {
        let first = unsafe { load_language_handle(LIBC, "__errno_location") }.unwrap();
        let second = unsafe { load_language_handle(LIBC, "__errno_location") }.unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn null_factory_result_is_absent_not_error() {
        let handle = unsafe { load_language_handle(LIBC, "dlerror") }.unwrap();

        assert_eq!(handle, LanguageHandle::ABSENT);
        assert_eq!(handle.as_i64(), 0);
    }

    #[test]
    fn missing_symbol_is_symbol_error() {
        let err = unsafe { load_language_handle(LIBC, "tree_sitter_missing") }.unwrap_err();

        match &err {
            LinkError::Symbol { symbol, .. } => assert_eq!(symbol, "tree_sitter_missing"),
            other => panic!("expected symbol error, got {other:?}"),
        }
        assert!(err.message().contains("tree_sitter_missing"), "{err}");
    }

    #[test]
    fn symbol_with_interior_nul_is_symbol_error() {
        let err = unsafe { load_language_handle(LIBC, "tree_sitter\0json") }.unwrap_err();

        assert!(matches!(err, LinkError::Symbol { .. }), "{err:?}");
        assert!(!err.message().is_empty());
    }

    #[test]
    fn load_request_delegates() {
        let request = LoadRequest::new(LIBC, "__errno_location");
        let via_request = unsafe { request.load() }.unwrap();
        let direct = unsafe { load_language_handle(LIBC, "__errno_location") }.unwrap();

        assert_eq!(via_request, direct);
    }
}
