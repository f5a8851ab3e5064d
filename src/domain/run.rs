#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Variant,
    Get,
    Put,
}

impl RequestKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestKind::Variant => "variant",
            RequestKind::Get => "get",
            RequestKind::Put => "put",
        }
    }
}

/// Immutable run configuration, built once from CLI and config file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub destination: String,
    pub request_count: u64,
    pub use_valid_header: bool,
    pub kind: RequestKind,
}

impl RunConfig {
    #[must_use]
    pub fn target_url(&self) -> String {
        format!("http://{}", self.destination)
    }
}
