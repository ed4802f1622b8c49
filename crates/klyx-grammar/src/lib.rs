//! Tree-sitter grammars bound at runtime from shared libraries.
//!
//! The core operation is [`load_language_handle`]: open a library, resolve a
//! zero-argument grammar factory by name, call it and hand back the address
//! it returns as an opaque [`LanguageHandle`]. [`GrammarRegistry`] layers
//! naming, staging and caching on top and yields parse-ready [`Lang`]s.

mod config;
pub mod dynamic;
mod error;
mod handle;
mod lang;
pub mod registry;
pub mod staging;

pub use config::LoaderConfig;
pub use dynamic::{LoadRequest, load_language_handle};
pub use error::{GrammarError, LinkError};
pub use handle::LanguageHandle;
pub use lang::{DynamicLang, Lang, LangImpl, NodeFieldId, NodeTypeId};
pub use registry::{GrammarRegistry, global};
pub use staging::{stage_library, symbol_for_language};

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod dynamic_tests;
