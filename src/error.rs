//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`BuildError`], [`ConfigError`]) for detailed handling;
//!   fetch failures reach callers wrapped in [`BuildError::Unavailable`]
//!
//! # Example
//!
//! ```ignore
//! use video_catalog::error::{Error, Result, ResultExt};
//!
//! async fn first_title(provider: &CatalogProvider, url: &str) -> Result<String> {
//!     let catalog = provider.build(url).await.with_context("loading catalog")?;
//!     let record = catalog.get(0).ok_or_else(|| Error::not_found("first video"))?;
//!     Ok(record.title.clone())
//! }
//! ```

use crate::catalog::BuildError;
use crate::config::ConfigError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog could not be built
    #[error("Catalog error: {0}")]
    Build(#[from] BuildError),

    /// Config file could not be written
    #[error("Config file error: {0}")]
    ConfigFile(#[from] ConfigError),

    /// Configuration is incomplete or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a not found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, BuildError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Build(e).context(ctx))
    }
}
