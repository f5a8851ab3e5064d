use serde::Deserialize;

use crate::args::RequestMode;

/// Optional file-based defaults. Every field falls back to the CLI value.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    pub dest: Option<String>,
    pub req: Option<u64>,
    pub valid: Option<bool>,
    pub mode: Option<RequestMode>,
}
