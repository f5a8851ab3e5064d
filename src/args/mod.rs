//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::GeneratorArgs;
pub use types::RequestMode;

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
