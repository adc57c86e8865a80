//! TMDB wire types.
//!
//! These mirror the provider's JSON and live only for the duration of one
//! response; everything handed to callers goes through
//! [`normalize`](super::normalize::normalize) first.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode JSON `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A movie as returned by `/discover/movie`, `/search/movie` or `/movie/{id}`.
///
/// List endpoints omit most detail fields (`genres`, `runtime`, ...); they
/// decode to their empty values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderMovie {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Minutes; 0 when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub runtime: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub adult: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub video: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: String,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub revenue: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin_country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre_ids: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub production_companies: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub production_countries: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spoken_languages: Vec<serde_json::Value>,
    /// Present only when requested with `append_to_response=translations`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<TranslationSet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub translations: Vec<Translation>,
}

/// One localized variant of a movie's text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Translation {
    /// Country code (ISO-3166-1), e.g. "BR".
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_3166_1: String,
    /// Language code (ISO-639-1), e.g. "pt".
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_639_1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub english_name: String,
    #[serde(default)]
    pub data: TranslationData,
}

/// Localized text; an empty string means the translation does not provide it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
}

/// Paginated list envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Body of `GET /authentication`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthCheck {
    #[serde(default)]
    pub success: bool,
}
