pub mod grammar_resolver;
pub mod info;
pub mod load;
pub mod parse;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod info_tests;
#[cfg(test)]
mod load_tests;
