//! Sanity CMS query client and catalog adapter.
//!
//! A minimal client for the Sanity HTTP query API: GROQ in, JSON out. The
//! content studio owns the data; this crate only reads it. On top of the
//! client sits [`PropertyCatalog`], the [`listings::ListingSource`] adapter
//! that normalizes raw CMS documents into [`listings::ListingRecord`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use sanity_client::{PropertyCatalog, SanityClient, SanityConfig};
//! use listings::ListingSource;
//!
//! let client = SanityClient::new(SanityConfig::from_env()?);
//! let catalog = PropertyCatalog::new(client);
//!
//! let records = catalog.fetch_all().await?;
//! println!("{} properties live", records.len());
//! ```

pub mod catalog;
pub mod error;
pub mod queries;
pub mod types;

pub use catalog::PropertyCatalog;
pub use error::{Result, SanityError};
pub use types::{RawAgent, RawAuthor, RawBlogPage, RawBlogPost, RawImage, RawLocation, RawProperty, RawSlug};

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Connection settings for one Sanity project.
#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Serve from the CDN edge. Turn off when fresh data matters more than
    /// latency.
    pub use_cdn: bool,
}

impl SanityConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: "production".into(),
            api_version: "2023-01-01".into(),
            use_cdn: true,
        }
    }

    /// Read settings from the environment. `SANITY_PROJECT_ID` is required;
    /// `SANITY_DATASET`, `SANITY_API_VERSION`, and `SANITY_USE_CDN` fall
    /// back to the project defaults.
    pub fn from_env() -> Result<Self> {
        let project_id = std::env::var("SANITY_PROJECT_ID")
            .map_err(|_| SanityError::Config("SANITY_PROJECT_ID is not set".into()))?;

        let mut config = Self::new(project_id);
        if let Ok(dataset) = std::env::var("SANITY_DATASET") {
            config.dataset = dataset;
        }
        if let Ok(version) = std::env::var("SANITY_API_VERSION") {
            config.api_version = version;
        }
        if let Ok(use_cdn) = std::env::var("SANITY_USE_CDN") {
            config.use_cdn = use_cdn != "false";
        }
        Ok(config)
    }
}

/// Response envelope for the query endpoint.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Client for the Sanity HTTP query API.
#[derive(Debug, Clone)]
pub struct SanityClient {
    client: reqwest::Client,
    config: SanityConfig,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Run a GROQ query and decode its `result`.
    ///
    /// `params` become GROQ parameters (`$name`); values are passed as JSON
    /// strings, which covers every parameter this site uses (slugs and
    /// categories).
    pub async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let mut url = format!(
            "{}?query={}",
            self.query_endpoint(),
            urlencoding::encode(groq)
        );
        for (name, value) in params {
            let json_value = serde_json::to_string(value)?;
            url.push_str(&format!("&%24{}={}", name, urlencoding::encode(&json_value)));
        }

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Sanity query failed");
            return Err(SanityError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: QueryResponse<T> = resp.json().await?;
        Ok(envelope.result)
    }

    fn query_endpoint(&self) -> String {
        let host = if self.config.use_cdn {
            "apicdn.sanity.io"
        } else {
            "api.sanity.io"
        };
        format!(
            "https://{}.{}/v{}/data/query/{}",
            self.config.project_id, host, self.config.api_version, self.config.dataset
        )
    }
}
