//! Content appropriateness policy.
//!
//! Rules are checked in a fixed order and the first failing rule decides the
//! rejection reason:
//!
//! 1. the provider's adult flag,
//! 2. a case-insensitive keyword blocklist over `title` and `original_title`,
//! 3. a low average rating, only once enough votes make it meaningful.
//!
//! Listings drop rejected movies quietly; a lookup by id turns the rejection
//! into [`Error::ContentPolicy`].

use std::fmt;

use movietracker_common::{Error, Result};
use tracing::debug;

use super::models::ProviderMovie;
use crate::config::ContentFilterConfig;

/// Vote count above which a low average is trusted.
pub const MEANINGFUL_VOTE_COUNT: u64 = 100;

/// Averages below this are rejected once the vote count is meaningful.
pub const RATING_FLOOR: f64 = 3.0;

/// Why a movie was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Adult,
    InappropriateKeyword,
    LowRating,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Adult => "adult content",
            Self::InappropriateKeyword => "inappropriate keyword",
            Self::LowRating => "low rating with statistically meaningful vote count",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Decides whether a provider movie may be shown.
///
/// The blocklist is fixed at construction.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    blocked_keywords: Vec<String>,
}

impl ContentFilter {
    /// Build a filter from raw keywords; matching is case-insensitive and
    /// blank entries are ignored.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let blocked_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { blocked_keywords }
    }

    pub fn from_config(config: &ContentFilterConfig) -> Self {
        Self::new(&config.blocked_keywords)
    }

    /// Check `movie` against every rule in order.
    pub fn check(&self, movie: &ProviderMovie) -> std::result::Result<(), Rejection> {
        if movie.adult {
            return Err(Rejection::Adult);
        }

        if self.has_blocked_keyword(movie) {
            return Err(Rejection::InappropriateKeyword);
        }

        if movie.vote_count > MEANINGFUL_VOTE_COUNT && movie.vote_average < RATING_FLOOR {
            return Err(Rejection::LowRating);
        }

        Ok(())
    }

    pub fn is_admissible(&self, movie: &ProviderMovie) -> bool {
        self.check(movie).is_ok()
    }

    /// Keep only admissible movies, preserving order.
    pub fn filter_list(&self, movies: Vec<ProviderMovie>) -> Vec<ProviderMovie> {
        movies
            .into_iter()
            .filter(|movie| match self.check(movie) {
                Ok(()) => true,
                Err(rejection) => {
                    debug!(id = movie.id, reason = %rejection, "Dropping movie from listing");
                    false
                }
            })
            .collect()
    }

    /// Single-item form of [`check`](Self::check).
    pub fn require_admissible(&self, movie: &ProviderMovie) -> Result<()> {
        self.check(movie)
            .map_err(|rejection| Error::content_policy(rejection.reason()))
    }

    fn has_blocked_keyword(&self, movie: &ProviderMovie) -> bool {
        let title = movie.title.to_lowercase();
        let original_title = movie.original_title.to_lowercase();

        self.blocked_keywords
            .iter()
            .any(|k| title.contains(k.as_str()) || original_title.contains(k.as_str()))
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::from_config(&ContentFilterConfig::default())
    }
}
