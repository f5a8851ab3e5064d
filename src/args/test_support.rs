use clap::Parser;

use crate::error::{AppError, AppResult};

use super::GeneratorArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<GeneratorArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    GeneratorArgs::try_parse_from(args).map_err(AppError::from)
}
