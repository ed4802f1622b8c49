//! JNI entry points for `com.klyx.editor.treesitter.KlyxTreeSitter`.
//!
//! Built as `libklyx_tree_sitter.so`, which the Kotlin side loads with
//! `System.loadLibrary("klyx-tree-sitter")` after packaging renames it.

use jni::JNIEnv;
use jni::objects::{JClass, JString};
use jni::sys::jlong;
use klyx_grammar::{LinkError, load_language_handle};
use tracing::warn;

pub const LINK_ERROR_CLASS: &str = "java/lang/UnsatisfiedLinkError";
pub const ILLEGAL_ARGUMENT_CLASS: &str = "java/lang/IllegalArgumentException";

/// A Java exception waiting to be raised on the calling thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaException {
    pub class: &'static str,
    pub message: String,
}

impl JavaException {
    pub fn null_argument(param: &str) -> Self {
        Self {
            class: ILLEGAL_ARGUMENT_CLASS,
            message: format!("{param} must not be null"),
        }
    }

    pub fn invalid_argument(param: &str, err: impl std::fmt::Display) -> Self {
        Self {
            class: ILLEGAL_ARGUMENT_CLASS,
            message: format!("invalid {param}: {err}"),
        }
    }

    /// Raise on `env` unless an exception is already pending there.
    fn raise(&self, env: &mut JNIEnv<'_>) {
        if env.exception_check().unwrap_or(false) {
            return;
        }
        if let Err(err) = env.throw_new(self.class, &self.message) {
            warn!(class = self.class, message = %self.message, "failed to raise Java exception: {err}");
        }
    }
}

impl From<LinkError> for JavaException {
    fn from(err: LinkError) -> Self {
        Self {
            class: LINK_ERROR_CLASS,
            message: err.message().to_owned(),
        }
    }
}

/// `private external fun loadLanguageHandle(libPath: String, symbolName: String): Long`
///
/// Returns 0 after raising `UnsatisfiedLinkError` when the library or the
/// symbol cannot be bound. A factory returning null also yields 0, without
/// an exception.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_klyx_editor_treesitter_KlyxTreeSitter_loadLanguageHandle<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    lib_path: JString<'local>,
    symbol_name: JString<'local>,
) -> jlong {
    // symbolName is not read once libPath has failed, so a pending exception stays first.
    let args = read_string(&mut env, &lib_path, "libPath").and_then(|lib_path| {
        let symbol_name = read_string(&mut env, &symbol_name, "symbolName")?;
        Ok((lib_path, symbol_name))
    });

    // The Kotlin caller only passes grammar libraries and `tree_sitter_*` symbols.
    match unsafe { load_checked(args) } {
        Ok(handle) => handle,
        Err(exception) => {
            exception.raise(&mut env);
            0
        }
    }
}

/// Load from the already-read `(libPath, symbolName)` pair, with every
/// failure expressed as the exception the JVM caller will see.
///
/// # Safety
///
/// See [`load_language_handle`].
pub unsafe fn load_checked(
    args: Result<(String, String), JavaException>,
) -> Result<jlong, JavaException> {
    let (lib_path, symbol_name) = args?;
    Ok(unsafe { load_handle(&lib_path, &symbol_name) }?)
}

/// Handle for `symbol_name` in `lib_path`, widened to the JVM's `long`.
///
/// # Safety
///
/// See [`load_language_handle`].
pub unsafe fn load_handle(lib_path: &str, symbol_name: &str) -> Result<jlong, LinkError> {
    let handle = unsafe { load_language_handle(lib_path, symbol_name) }?;
    Ok(handle.as_i64())
}

fn read_string(
    env: &mut JNIEnv<'_>,
    value: &JString<'_>,
    param: &str,
) -> Result<String, JavaException> {
    if value.is_null() {
        return Err(JavaException::null_argument(param));
    }
    env.get_string(value)
        .map(String::from)
        .map_err(|err| JavaException::invalid_argument(param, err))
}
