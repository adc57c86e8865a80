//! Catalog integration layer for the TMDB movie provider.
//!
//! A catalog call flows through these modules in order:
//!
//! - [`query`] -- Builds the endpoint and parameters from the curation policy.
//! - [`client`] -- Authenticated fetch with the single 401 re-auth retry.
//! - [`models`] -- Provider wire types decoded from the response.
//! - [`filter`] -- Content appropriateness policy.
//! - [`localization`] -- Translation fallback for title, overview and tagline.
//! - [`normalize`] -- Mapping into [`NormalizedMovie`](movietracker_common::NormalizedMovie).
//! - [`envelope`] -- Page envelope with recounted results.
//!
//! [`TmdbCatalog`] ties them together behind the [`MovieCatalog`] trait.

pub mod client;
pub mod envelope;
pub mod filter;
pub mod localization;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod query;
pub mod tmdb;

pub use client::TmdbClient;
pub use filter::{ContentFilter, Rejection};
pub use localization::LocalizedText;
pub use provider::MovieCatalog;
pub use query::{CatalogQuery, RequestSpec};
pub use tmdb::TmdbCatalog;
