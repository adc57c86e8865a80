//! Trait definition for movie catalogs.
//!
//! Handlers depend on [`MovieCatalog`] rather than on the TMDB client, so
//! tests can hand the router a stub catalog.

use async_trait::async_trait;
use movietracker_common::{NormalizedMovie, Page, Result};

/// Curated, localized access to a movie catalog.
///
/// Implementations hold no mutable state and are shared behind an `Arc`.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Curated listing for `page` (1-based). Inadmissible movies are dropped
    /// and `total_results` reflects only what is left.
    async fn discover_movies(&self, page: u32) -> Result<Page<NormalizedMovie>>;

    /// Title search for `query`, filtered like [`discover_movies`](Self::discover_movies).
    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<NormalizedMovie>>;

    /// Single movie by provider id, localized through its translations.
    ///
    /// An inadmissible movie is an error, not an empty result.
    async fn get_movie(&self, id: u64) -> Result<NormalizedMovie>;
}
