//! Request construction for the three catalog operations.
//!
//! Listings carry the full curation policy; a lookup by id only asks for the
//! configured language and the embedded translations, leaving admissibility
//! to the content filter.

use movietracker_common::{Error, Result};

use crate::config::CurationPolicy;

/// A catalog operation with its caller-supplied arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogQuery<'a> {
    Discover { page: u32 },
    Search { query: &'a str, page: u32 },
    GetById { id: u64 },
}

/// Endpoint path (relative to the provider base URL) plus query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

impl RequestSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Value of the first parameter named `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build the request for `op` under `policy`.
///
/// Fails with [`Error::Validation`] for a blank search query or page 0.
pub fn build(op: &CatalogQuery<'_>, policy: &CurationPolicy) -> Result<RequestSpec> {
    match *op {
        CatalogQuery::Discover { page } => {
            check_page(page)?;
            let request = RequestSpec::new("/discover/movie")
                .with("page", page.to_string())
                .with("sort_by", policy.sort_by.clone())
                .with("include_adult", "false")
                .with("include_video", "false");
            Ok(with_policy_filters(request, policy, policy.min_vote_count))
        }
        CatalogQuery::Search { query, page } => {
            let query = query.trim();
            if query.is_empty() {
                return Err(Error::validation("search query is required"));
            }
            check_page(page)?;
            let request = RequestSpec::new("/search/movie")
                .with("query", query)
                .with("page", page.to_string())
                .with("include_adult", "false");
            Ok(with_policy_filters(
                request,
                policy,
                policy.search_min_vote_count,
            ))
        }
        CatalogQuery::GetById { id } => Ok(RequestSpec::new(format!("/movie/{id}"))
            .with("language", policy.locale.clone())
            .with("append_to_response", "translations")),
    }
}

fn with_policy_filters(request: RequestSpec, policy: &CurationPolicy, min_votes: u32) -> RequestSpec {
    request
        .with("language", policy.locale.clone())
        .with("region", policy.region.clone())
        .with("certification_country", policy.certification_country.clone())
        .with("certification.lte", policy.certification_max.clone())
        .with("with_release_type", join(&policy.release_types, "|"))
        .with("without_genres", join(&policy.excluded_genre_ids, ","))
        .with("vote_count.gte", min_votes.to_string())
        .with("vote_average.gte", decimal(policy.min_vote_average))
}

fn check_page(page: u32) -> Result<()> {
    if page == 0 {
        return Err(Error::validation("page must be at least 1"));
    }
    Ok(())
}

fn join(values: &[u32], sep: &str) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Keep one decimal place for whole numbers ("3.0" rather than "3").
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CurationPolicy {
        CurationPolicy::default()
    }

    #[test]
    fn discover_applies_full_policy() {
        let request = build(&CatalogQuery::Discover { page: 3 }, &policy()).unwrap();

        assert_eq!(request.path, "/discover/movie");
        assert_eq!(request.param("page"), Some("3"));
        assert_eq!(request.param("sort_by"), Some("popularity.desc"));
        assert_eq!(request.param("include_adult"), Some("false"));
        assert_eq!(request.param("include_video"), Some("false"));
        assert_eq!(request.param("language"), Some("pt-BR"));
        assert_eq!(request.param("region"), Some("BR"));
        assert_eq!(request.param("certification_country"), Some("BR"));
        assert_eq!(request.param("certification.lte"), Some("12"));
        assert_eq!(request.param("with_release_type"), Some("2|3"));
        assert_eq!(request.param("without_genres"), Some("27,10749,10751,99,10769"));
        assert_eq!(request.param("vote_count.gte"), Some("50"));
        assert_eq!(request.param("vote_average.gte"), Some("3.0"));
        assert_eq!(request.param("query"), None);
    }

    #[test]
    fn search_uses_relaxed_vote_floor() {
        let request = build(
            &CatalogQuery::Search {
                query: "  matrix ",
                page: 1,
            },
            &policy(),
        )
        .unwrap();

        assert_eq!(request.path, "/search/movie");
        assert_eq!(request.param("query"), Some("matrix"));
        assert_eq!(request.param("vote_count.gte"), Some("10"));
        assert_eq!(request.param("include_adult"), Some("false"));
        assert_eq!(request.param("include_video"), None);
        assert_eq!(request.param("sort_by"), None);
    }

    #[test]
    fn search_rejects_blank_query() {
        let err = build(&CatalogQuery::Search { query: "   ", page: 1 }, &policy()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn page_zero_is_rejected() {
        let err = build(&CatalogQuery::Discover { page: 0 }, &policy()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn get_by_id_only_asks_for_language_and_translations() {
        let request = build(&CatalogQuery::GetById { id: 603 }, &policy()).unwrap();

        assert_eq!(request.path, "/movie/603");
        assert_eq!(request.params.len(), 2);
        assert_eq!(request.param("language"), Some("pt-BR"));
        assert_eq!(request.param("append_to_response"), Some("translations"));
    }

    #[test]
    fn decimal_formatting() {
        assert_eq!(decimal(3.0), "3.0");
        assert_eq!(decimal(6.5), "6.5");
        assert_eq!(decimal(0.0), "0.0");
    }
}
