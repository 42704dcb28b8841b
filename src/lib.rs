//! Video Catalog - builds a playable video catalog from a remote JSON feed.
//!
//! The feed is fetched once, each entry is validated and turned into a
//! [`MediaRecord`](catalog::MediaRecord), and the resulting
//! [`Catalog`](catalog::Catalog) is kept in memory for the life of its
//! [`CatalogProvider`](catalog::CatalogProvider). Presentation of the records
//! is left to the embedding application.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod test_utils;

pub use catalog::{
    BuildError, Catalog, CatalogProvider, CatalogSource, FetchError, HttpFetcher, MediaRecord,
    SchemaPolicy, StreamType,
};
