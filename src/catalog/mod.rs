//! Video catalog module - fetches a remote video feed and turns it into playable media records.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Records, the catalog, and error types
//! - **Feed DTOs** (`dto.rs`) - The shape of the feed document
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models, derives URLs, joins artists
//! - **Fetcher** (`fetcher.rs`) - HTTP download and ISO-8859-1 decoding
//! - **Traits** (`traits.rs`) - The source seam used for dependency injection
//! - **Provider** (`provider.rs`) - Builds the catalog once and caches it
//!
//! # Usage
//!
//! ```ignore
//! use video_catalog::catalog::{CatalogProvider, HttpFetcher};
//!
//! let provider = CatalogProvider::new(HttpFetcher::new()?);
//! let catalog = provider.build("https://example.com/videos.json").await?;
//! for record in catalog.iter() {
//!     println!("{} - {}", record.title, record.artist);
//! }
//! ```

pub mod adapter;
pub mod domain;
pub mod dto;
pub mod fetcher;
pub mod provider;
pub mod traits;

pub use adapter::{derive_content_url, join_artist_names};
pub use domain::{
    BuildError, Catalog, FetchError, MAX_VIDEOS, MediaRecord, RawDocument, SchemaPolicy,
    StreamType,
};
pub use fetcher::HttpFetcher;
pub use provider::CatalogProvider;
pub use traits::CatalogSource;
