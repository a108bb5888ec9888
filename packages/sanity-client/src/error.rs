//! Error types for the Sanity client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SanityError>;

#[derive(Debug, Error)]
pub enum SanityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sanity API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<SanityError> for listings::FetchError {
    fn from(err: SanityError) -> Self {
        match err {
            SanityError::Json(e) => listings::FetchError::Malformed(e.to_string()),
            SanityError::Http(e) if e.is_decode() => {
                listings::FetchError::Malformed(e.to_string())
            }
            other => listings::FetchError::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failures_surface_as_malformed() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let fetch: listings::FetchError = SanityError::Json(json_err).into();
        assert!(matches!(fetch, listings::FetchError::Malformed(_)));
    }

    #[test]
    fn api_failures_surface_as_unavailable() {
        let fetch: listings::FetchError = SanityError::Api {
            status: 503,
            message: "down".into(),
        }
        .into();
        assert!(matches!(fetch, listings::FetchError::Unavailable(_)));
    }
}
