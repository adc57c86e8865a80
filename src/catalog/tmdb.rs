//! TMDB-backed [`MovieCatalog`].
//!
//! Wires the request builder, authenticated client, content filter,
//! localization and normalization together for each operation.

use async_trait::async_trait;
use movietracker_common::{NormalizedMovie, Page, Result};
use tracing::debug;

use super::client::TmdbClient;
use super::envelope;
use super::filter::ContentFilter;
use super::localization;
use super::models::{ProviderMovie, ProviderPage};
use super::normalize::normalize;
use super::provider::MovieCatalog;
use super::query::{self, CatalogQuery};
use crate::config::{Config, CurationPolicy};

/// Movie catalog backed by the TMDB v3 API.
///
/// # Examples
///
/// ```no_run
/// use movietracker::catalog::{MovieCatalog, TmdbCatalog};
/// use movietracker::config::Config;
///
/// # async fn run() -> movietracker_common::Result<()> {
/// let catalog = TmdbCatalog::new(&Config::default());
/// let page = catalog.discover_movies(1).await?;
/// println!("{} movies", page.total_results);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    client: TmdbClient,
    policy: CurationPolicy,
    filter: ContentFilter,
}

impl TmdbCatalog {
    pub fn new(config: &Config) -> Self {
        Self::with_parts(
            TmdbClient::new(&config.tmdb),
            config.curation.clone(),
            ContentFilter::from_config(&config.content_filter),
        )
    }

    pub fn with_parts(client: TmdbClient, policy: CurationPolicy, filter: ContentFilter) -> Self {
        Self {
            client,
            policy,
            filter,
        }
    }

    async fn list(&self, op: CatalogQuery<'_>) -> Result<Page<NormalizedMovie>> {
        let request = query::build(&op, &self.policy)?;
        let mut provider_page: ProviderPage<ProviderMovie> =
            self.client.fetch_json(&request).await?;

        let received = provider_page.results.len();
        let admitted = self
            .filter
            .filter_list(std::mem::take(&mut provider_page.results));
        debug!(
            path = %request.path,
            received,
            admitted = admitted.len(),
            "Filtered catalog listing"
        );

        let results = admitted.into_iter().map(|m| self.localize(m)).collect();
        Ok(envelope::wrap(&provider_page, results))
    }

    fn localize(&self, movie: ProviderMovie) -> NormalizedMovie {
        let (language, country) = self.policy.locale_parts();
        let text = localization::resolve(&movie, language, country);
        normalize(movie, text)
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn discover_movies(&self, page: u32) -> Result<Page<NormalizedMovie>> {
        self.list(CatalogQuery::Discover { page }).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<Page<NormalizedMovie>> {
        self.list(CatalogQuery::Search { query, page }).await
    }

    async fn get_movie(&self, id: u64) -> Result<NormalizedMovie> {
        let request = query::build(&CatalogQuery::GetById { id }, &self.policy)?;
        let movie: ProviderMovie = self.client.fetch_json(&request).await?;

        self.filter.require_admissible(&movie)?;
        Ok(self.localize(movie))
    }
}
