use std::path::PathBuf;
use std::process::exit;

use klyx_grammar::{GrammarError, LanguageHandle, LoadRequest, LoaderConfig, stage_library};

pub struct LoadArgs {
    pub library: PathBuf,
    pub symbol: String,
}

pub fn run(args: LoadArgs, config: LoaderConfig) {
    // The user vouches for SYMBOL having the `() -> pointer` shape.
    match unsafe { bind(&args, &config) } {
        Ok(handle) => {
            println!("{handle}");
            if handle.is_absent() {
                eprintln!("warning: {} returned null", args.symbol);
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

/// Stage the library into the configured cache directory, then call its factory.
///
/// # Safety
///
/// See [`klyx_grammar::load_language_handle`].
pub unsafe fn bind(
    args: &LoadArgs,
    config: &LoaderConfig,
) -> Result<LanguageHandle, GrammarError> {
    let library = match &config.cache_dir {
        Some(dir) => stage_library(dir, &args.library).map_err(|source| GrammarError::Staging {
            path: args.library.clone(),
            source,
        })?,
        None => args.library.clone(),
    };

    let request = LoadRequest::new(library, args.symbol.as_str());
    Ok(unsafe { request.load() }?)
}
