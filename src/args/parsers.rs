use std::convert::Infallible;

use crate::error::ValidationError;

pub(crate) fn parse_request_count(s: &str) -> Result<u64, ValidationError> {
    s.trim()
        .parse::<u64>()
        .map_err(|err| ValidationError::InvalidRequestCount {
            value: s.to_owned(),
            source: err,
        })
}

pub(crate) fn parse_destination(s: &str) -> Result<String, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyDestination);
    }
    Ok(value.to_owned())
}

/// Any non-empty value other than an explicit "false" word disables color.
pub(crate) fn parse_no_color(s: &str) -> Result<bool, Infallible> {
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Ok(true),
    }
}
