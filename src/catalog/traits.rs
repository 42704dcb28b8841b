//! Trait definitions for feed sources.
//!
//! [`CatalogSource`] is the seam between the catalog provider and the network.
//! Production code uses [`HttpFetcher`]; tests substitute the mocks below.

use async_trait::async_trait;

use super::domain::{FetchError, RawDocument};
use super::fetcher::HttpFetcher;

/// Something that can produce a feed document for a URL.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Retrieve and parse the document at `url`.
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError>;
}

#[async_trait]
impl CatalogSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        self.fetch(url).await
    }
}
