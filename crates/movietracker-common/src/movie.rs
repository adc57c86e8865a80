//! Movie values returned by the catalog.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Internal movie representation handed to API consumers.
///
/// Built once from the provider's payload after localization and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NormalizedMovie {
    /// Provider identifier.
    pub id: u64,
    /// Title after localization.
    pub title: String,
    /// Poster path fragment, empty when the provider has none.
    pub poster_path: String,
    /// Backdrop path fragment, empty when the provider has none.
    pub background_path: String,
    /// First four characters of the release date, or empty.
    pub year: String,
    /// Overview after localization.
    pub description: String,
    /// Genre names in provider order.
    pub genre: Vec<String>,
    /// Runtime in minutes as a string, empty when unknown.
    pub duration: String,
    /// Tagline after localization.
    pub tagline: String,
    pub vote_average: f64,
    pub vote_count: u64,
    pub popularity: f64,
    pub status: String,
    pub release_date: String,
    pub original_title: String,
    pub original_language: String,
    pub homepage: String,
    pub imdb_id: Option<String>,
    pub budget: u64,
    pub revenue: u64,
    pub runtime: u32,
    #[schema(value_type = Vec<Object>)]
    pub production_companies: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub production_countries: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub spoken_languages: Vec<serde_json::Value>,
}

/// One page of a catalog listing.
///
/// `total_pages` is the provider's figure and may overstate what later pages
/// hold once filtering drops entries; `total_results` only counts `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl<T> Page<T> {
    /// Wrap `results`, deriving `total_results` from their count.
    pub fn new(page: u32, total_pages: u32, results: Vec<T>) -> Self {
        let total_results = u32::try_from(results.len()).unwrap_or(u32::MAX);
        Self {
            results,
            page,
            total_pages,
            total_results,
        }
    }

    /// Convert every result, keeping the pagination figures.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_results: self.total_results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
