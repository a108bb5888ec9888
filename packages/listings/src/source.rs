//! The async port a CMS adapter implements.

use async_trait::async_trait;
use thiserror::Error;

use crate::record::ListingRecord;

/// Why a catalog fetch failed.
///
/// Distinct from an empty catalog: `Ok(vec![])` is a normal "no results"
/// state, while any `FetchError` puts the page into an error state with a
/// retry affordance. There is no automatic retry and no partial result:
/// either the full set arrives or this is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The collaborator could not be reached or answered with a failure.
    #[error("listing service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered, but the payload did not decode.
    #[error("listing data malformed: {0}")]
    Malformed(String),
}

/// Read-only bulk access to the property catalog.
///
/// Any collaborator with "list all" and "get by slug" operations suffices;
/// the core does not depend on the CMS query language. `fetch_all` is
/// called once per page view and the result is filtered in memory.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ListingRecord>, FetchError>;

    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<ListingRecord>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_and_empty_catalog_are_distinguishable() {
        // Scenario F depends on the type system keeping these apart.
        let empty: Result<Vec<ListingRecord>, FetchError> = Ok(Vec::new());
        let failed: Result<Vec<ListingRecord>, FetchError> =
            Err(FetchError::Unavailable("connection refused".into()));

        assert!(matches!(empty, Ok(ref records) if records.is_empty()));
        assert!(failed.is_err());
    }

    #[test]
    fn errors_render_with_their_cause() {
        let err = FetchError::Malformed("missing field `slug`".into());
        assert_eq!(err.to_string(), "listing data malformed: missing field `slug`");
    }
}
