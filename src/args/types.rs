use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::run::RequestKind;

/// Which request path a run drives.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// GET with a fixed valid/invalid forwarding address and a static custom header
    #[default]
    Variant,
    /// GET with a random forwarding address
    Get,
    /// PUT with a random forwarding address and a fixed body
    Put,
}

impl RequestMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestMode::Variant => "variant",
            RequestMode::Get => "get",
            RequestMode::Put => "put",
        }
    }

    #[must_use]
    pub const fn to_domain(self) -> RequestKind {
        match self {
            RequestMode::Variant => RequestKind::Variant,
            RequestMode::Get => RequestKind::Get,
            RequestMode::Put => RequestKind::Put,
        }
    }
}
