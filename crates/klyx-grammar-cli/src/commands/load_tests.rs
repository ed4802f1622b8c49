use std::fs;

use klyx_grammar::{GrammarError, LinkError, LoaderConfig};

use super::load::{LoadArgs, bind};

const FAKE_LIBRARY: &str = "libtree-sitter-fake.so";

fn args(library: impl Into<std::path::PathBuf>) -> LoadArgs {
    LoadArgs {
        library: library.into(),
        symbol: "tree_sitter_fake".into(),
    }
}

#[test]
fn cache_dir_stages_before_loading() {
    let src = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let library = src.path().join(FAKE_LIBRARY);
    fs::write(&library, b"not an object file").unwrap();
    let staged = cache.path().join(FAKE_LIBRARY);

    let config = LoaderConfig::new().with_cache_dir(cache.path());
    let err = unsafe { bind(&args(&library), &config) }.unwrap_err();

    assert!(staged.exists());
    let GrammarError::Link(LinkError::Load { path, .. }) = err else {
        panic!("expected a load error, got {err:?}");
    };
    assert_eq!(path, staged);
}

#[test]
fn without_cache_dir_loads_in_place() {
    let src = tempfile::tempdir().unwrap();
    let library = src.path().join(FAKE_LIBRARY);
    fs::write(&library, b"not an object file").unwrap();

    let err = unsafe { bind(&args(&library), &LoaderConfig::new()) }.unwrap_err();

    let GrammarError::Link(LinkError::Load { path, .. }) = err else {
        panic!("expected a load error, got {err:?}");
    };
    assert_eq!(path, library);
}

#[test]
fn staging_failure_is_reported() {
    let cache = tempfile::tempdir().unwrap();
    let config = LoaderConfig::new().with_cache_dir(cache.path());

    let err = unsafe { bind(&args("/nonexistent/libtree-sitter-fake.so"), &config) }.unwrap_err();

    assert!(matches!(err, GrammarError::Staging { .. }), "{err:?}");
    assert!(!cache.path().join(FAKE_LIBRARY).exists());
    assert!(
        err.to_string()
            .starts_with("failed to stage library '/nonexistent/libtree-sitter-fake.so'"),
        "{err}"
    );
}
