//! Catalog provider - builds the catalog once and serves it from memory after that
//!
//! The first successful build is kept for the lifetime of the provider and is
//! returned for every later call, whatever URL that call passes. A failed build
//! leaves nothing behind, so the next call fetches again.
//!
//! Concurrent callers share a single in-flight build: only one fetch runs, and
//! everyone waiting receives its result.

use std::sync::Arc;

use tokio::sync::OnceCell;

use super::adapter;
use super::domain::{BuildError, Catalog, SchemaPolicy};
use super::fetcher::HttpFetcher;
use super::traits::CatalogSource;
use crate::config::Config;

/// Build-once holder for the video catalog
pub struct CatalogProvider<S = HttpFetcher> {
    source: S,
    policy: SchemaPolicy,
    catalog: OnceCell<Arc<Catalog>>,
}

impl CatalogProvider<HttpFetcher> {
    /// Create a provider backed by an HTTP fetcher configured from `config`
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let fetcher = HttpFetcher::with_settings(config.http.timeout(), config.http.user_agent())?;
        Ok(Self::with_policy(fetcher, config.catalog.schema_policy))
    }
}

impl<S: CatalogSource> CatalogProvider<S> {
    /// Create a provider that aborts on malformed entries
    pub fn new(source: S) -> Self {
        Self::with_policy(source, SchemaPolicy::default())
    }

    pub fn with_policy(source: S, policy: SchemaPolicy) -> Self {
        Self {
            source,
            policy,
            catalog: OnceCell::new(),
        }
    }

    /// Return the catalog, fetching it from `url` if none has been built yet.
    ///
    /// Once a build succeeds, `url` is ignored by every later call.
    pub async fn build(&self, url: &str) -> Result<Arc<Catalog>, BuildError> {
        if let Some(catalog) = self.catalog.get() {
            tracing::debug!("Catalog already built, not fetching {}", url);
            return Ok(Arc::clone(catalog));
        }

        let catalog = self
            .catalog
            .get_or_try_init(|| self.fetch_and_convert(url))
            .await?;
        Ok(Arc::clone(catalog))
    }

    async fn fetch_and_convert(&self, url: &str) -> Result<Arc<Catalog>, BuildError> {
        tracing::debug!("Building catalog from {}", url);

        let document = self.source.fetch(url).await.inspect_err(|e| {
            tracing::warn!("Failed to fetch catalog from {}: {}", url, e);
        })?;

        let catalog = adapter::to_catalog(document, self.policy).inspect_err(|e| {
            tracing::warn!("Failed to build catalog from {}: {}", url, e);
        })?;

        tracing::info!("Built catalog of {} videos from {}", catalog.len(), url);
        Ok(Arc::new(catalog))
    }

    /// The built catalog, if any, without fetching
    pub fn cached(&self) -> Option<Arc<Catalog>> {
        self.catalog.get().cloned()
    }

    pub fn is_cached(&self) -> bool {
        self.catalog.initialized()
    }

    pub fn policy(&self) -> SchemaPolicy {
        self.policy
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
