use std::path::PathBuf;

/// Failure to bind a grammar factory from a shared library.
///
/// Both variants render as the platform loader's diagnostic. Callers that
/// only forward the message (the JNI bridge) cannot tell them apart; Rust
/// callers can match on the variant.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("{message}")]
    Load { path: PathBuf, message: String },

    #[error("{message}")]
    Symbol {
        path: PathBuf,
        symbol: String,
        message: String,
    },
}

impl LinkError {
    pub(crate) fn load(path: PathBuf, diagnostic: String) -> Self {
        let message = if diagnostic.trim().is_empty() {
            format!("failed to load library '{}'", path.display())
        } else {
            diagnostic
        };
        Self::Load { path, message }
    }

    pub(crate) fn symbol(path: PathBuf, symbol: String, diagnostic: String) -> Self {
        let message = if diagnostic.trim().is_empty() {
            format!("undefined symbol '{symbol}' in '{}'", path.display())
        } else {
            diagnostic
        };
        Self::Symbol {
            path,
            symbol,
            message,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Load { message, .. } | Self::Symbol { message, .. } => message,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Load { path, .. } | Self::Symbol { path, .. } => path,
        }
    }
}

/// Failure to turn a shared library into a usable [`Lang`](crate::Lang).
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error(transparent)]
    Link(#[from] LinkError),

    #[error("failed to load tree-sitter language '{name}': {symbol} returned null")]
    AbsentHandle { name: String, symbol: String },

    #[error("failed to stage library '{}': {source}", .path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("incompatible tree-sitter language '{name}': {message}")]
    Incompatible { name: String, message: String },
}
