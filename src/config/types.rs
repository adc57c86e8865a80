use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub curation: CurationPolicy,

    #[serde(default)]
    pub content_filter: ContentFilterConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origin ("*" allows any)
    #[serde(default = "default_allow_origin")]
    pub allow_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_allow_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allow_origin: default_allow_origin(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token (overridden by the TMDB_API_KEY environment variable)
    #[serde(default)]
    pub api_token: String,

    /// Per-request deadline applied by the HTTP client
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_request_timeout() -> u64 {
    30
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Filters applied when requesting catalog listings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurationPolicy {
    /// Language tag sent as `language`, e.g. "pt-BR"
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_country")]
    pub region: String,

    #[serde(default = "default_country")]
    pub certification_country: String,

    /// Age rating ceiling sent as `certification.lte`
    #[serde(default = "default_certification_max")]
    pub certification_max: String,

    #[serde(default = "default_release_types")]
    pub release_types: Vec<u32>,

    #[serde(default = "default_excluded_genres")]
    pub excluded_genre_ids: Vec<u32>,

    #[serde(default = "default_min_vote_count")]
    pub min_vote_count: u32,

    /// Relaxed vote floor used by search
    #[serde(default = "default_search_min_vote_count")]
    pub search_min_vote_count: u32,

    #[serde(default = "default_min_vote_average")]
    pub min_vote_average: f64,

    #[serde(default = "default_sort_by")]
    pub sort_by: String,
}

fn default_locale() -> String {
    "pt-BR".to_string()
}
fn default_country() -> String {
    "BR".to_string()
}
fn default_certification_max() -> String {
    "12".to_string()
}
fn default_release_types() -> Vec<u32> {
    vec![2, 3]
}
fn default_excluded_genres() -> Vec<u32> {
    // horror, romance, family, documentary, foreign
    vec![27, 10749, 10751, 99, 10769]
}
fn default_min_vote_count() -> u32 {
    50
}
fn default_search_min_vote_count() -> u32 {
    10
}
fn default_min_vote_average() -> f64 {
    3.0
}
fn default_sort_by() -> String {
    "popularity.desc".to_string()
}

impl Default for CurationPolicy {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            region: default_country(),
            certification_country: default_country(),
            certification_max: default_certification_max(),
            release_types: default_release_types(),
            excluded_genre_ids: default_excluded_genres(),
            min_vote_count: default_min_vote_count(),
            search_min_vote_count: default_search_min_vote_count(),
            min_vote_average: default_min_vote_average(),
            sort_by: default_sort_by(),
        }
    }
}

impl CurationPolicy {
    /// Language and country parts of `locale` ("pt-BR" -> ("pt", Some("BR"))).
    pub fn locale_parts(&self) -> (&str, Option<&str>) {
        match self.locale.split_once(['-', '_']) {
            Some((language, country)) if !country.is_empty() => (language, Some(country)),
            Some((language, _)) => (language, None),
            None => (self.locale.as_str(), None),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentFilterConfig {
    /// Case-insensitive substrings rejected in titles
    #[serde(default = "default_blocked_keywords")]
    pub blocked_keywords: Vec<String>,
}

impl Default for ContentFilterConfig {
    fn default() -> Self {
        Self {
            blocked_keywords: default_blocked_keywords(),
        }
    }
}

pub fn default_blocked_keywords() -> Vec<String> {
    [
        "porn", "xxx", "adult", "sex", "nude", "erotic", "pornographic", "explicit",
        "hardcore", "softcore", "adult film", "adult movie", "sex film", "sex movie",
        "nude film", "nude movie", "erotic film", "erotic movie", "porn film", "porn movie",
        "xxx film", "xxx movie", "adult content", "adult entertainment", "adult video",
        "sex video", "nude video", "erotic video", "porn video", "xxx video",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
