//! Remote content API error types.

use thiserror::Error;

/// Errors from a single content API call.
///
/// The display strings are what the stores record as their user-visible
/// error, so they are kept short.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key or Blog ID is missing")]
    MissingCredentials,

    #[error("API error: {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_matches_store_error() {
        assert_eq!(ApiError::Status(404).to_string(), "API error: 404");
        assert_eq!(
            ApiError::MissingCredentials.to_string(),
            "API key or Blog ID is missing"
        );
    }

    #[test]
    fn test_decode_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(ApiError::from(err).to_string().starts_with("invalid response body"));
    }
}
