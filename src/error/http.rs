use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid destination '{dest}': {source}")]
    InvalidDestination {
        dest: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Test transport failure on request {attempt}.")]
    TestTransport { attempt: u64 },
}
