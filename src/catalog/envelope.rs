//! Page envelope for filtered listings.

use movietracker_common::Page;

use super::models::ProviderPage;

/// Wrap `results` with the provider's page number and page count.
///
/// `total_results` is recounted from `results`; `total_pages` is copied as
/// reported and is not corrected for entries dropped by filtering.
pub fn wrap<T, U>(provider_page: &ProviderPage<T>, results: Vec<U>) -> Page<U> {
    Page::new(provider_page.page, provider_page.total_pages, results)
}
