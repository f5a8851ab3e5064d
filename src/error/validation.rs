use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid request count '{value}': {source}")]
    InvalidRequestCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Destination must not be empty.")]
    EmptyDestination,
    #[error("{message}")]
    TestExpectation { message: &'static str },
    #[error("{message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
