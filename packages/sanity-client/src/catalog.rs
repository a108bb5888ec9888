//! The [`ListingSource`] adapter over the Sanity client.

use async_trait::async_trait;

use listings::{FetchError, ListingRecord, ListingSource};

use crate::queries;
use crate::types::RawProperty;
use crate::SanityClient;

/// Read-only property catalog backed by the CMS.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    client: SanityClient,
}

impl PropertyCatalog {
    pub fn new(client: SanityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ListingSource for PropertyCatalog {
    async fn fetch_all(&self) -> Result<Vec<ListingRecord>, FetchError> {
        let raw: Vec<RawProperty> = self.client.query(queries::PROPERTIES, &[]).await?;
        tracing::debug!(count = raw.len(), "fetched property catalog");

        raw.into_iter()
            .map(|doc| {
                doc.into_record()
                    .map_err(|e| FetchError::Malformed(e.to_string()))
            })
            .collect()
    }

    async fn fetch_by_slug(&self, slug: &str) -> Result<Option<ListingRecord>, FetchError> {
        let raw: Option<RawProperty> = self
            .client
            .query(queries::PROPERTY_BY_SLUG, &[("slug", slug)])
            .await?;

        raw.map(|doc| {
            doc.into_record()
                .map_err(|e| FetchError::Malformed(e.to_string()))
        })
        .transpose()
    }
}
