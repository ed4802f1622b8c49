//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! `Into<*Args>` impls bridge dispatch → command handlers.

use std::path::PathBuf;

use clap::ArgMatches;
use klyx_grammar::LoaderConfig;

use crate::commands::info::InfoArgs;
use crate::commands::load::LoadArgs;
use crate::commands::parse::ParseArgs;

/// Flags accepted before or after any subcommand.
pub struct GlobalParams {
    pub cache_dir: Option<PathBuf>,
    pub verbosity: u8,
}

impl GlobalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            cache_dir: m.get_one::<PathBuf>("cache_dir").cloned(),
            verbosity: m.get_count("verbose"),
        }
    }

    pub fn loader_config(&self) -> LoaderConfig {
        match &self.cache_dir {
            Some(dir) => LoaderConfig::new().with_cache_dir(dir),
            None => LoaderConfig::new(),
        }
    }
}

pub struct LoadParams {
    pub library: PathBuf,
    pub symbol: String,
}

impl LoadParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            library: m
                .get_one::<PathBuf>("library")
                .cloned()
                .expect("LIBRARY is required"),
            symbol: m
                .get_one::<String>("symbol")
                .cloned()
                .expect("SYMBOL is required"),
        }
    }
}

impl From<LoadParams> for LoadArgs {
    fn from(p: LoadParams) -> Self {
        Self {
            library: p.library,
            symbol: p.symbol,
        }
    }
}

pub struct InfoParams {
    pub library: PathBuf,
    pub name: String,
    pub symbol: Option<String>,
    pub kinds: bool,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            library: m
                .get_one::<PathBuf>("library")
                .cloned()
                .expect("LIBRARY is required"),
            name: m
                .get_one::<String>("name")
                .cloned()
                .expect("--name is required"),
            symbol: m.get_one::<String>("symbol").cloned(),
            kinds: m.get_flag("kinds"),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self {
            library: p.library,
            name: p.name,
            symbol: p.symbol,
            kinds: p.kinds,
        }
    }
}

pub struct ParseParams {
    pub library: PathBuf,
    pub name: String,
    pub symbol: Option<String>,
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            library: m
                .get_one::<PathBuf>("library")
                .cloned()
                .expect("LIBRARY is required"),
            name: m
                .get_one::<String>("name")
                .cloned()
                .expect("--name is required"),
            symbol: m.get_one::<String>("symbol").cloned(),
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            library: p.library,
            name: p.name,
            symbol: p.symbol,
            source_path: p.source_path,
            source_text: p.source_text,
            raw: p.raw,
            spans: p.spans,
        }
    }
}
