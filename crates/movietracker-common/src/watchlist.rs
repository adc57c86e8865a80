//! Watch-list entries and partial updates.
//!
//! Updates distinguish "leave this field alone" from "clear this field" with
//! [`Patch`], so a JSON body of `{"rating": null}` removes a rating while
//! `{}` keeps it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 10;

/// Viewing progress of a watch-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    /// Added but not started.
    #[default]
    Unwatched,
    /// Currently being watched.
    Watching,
    /// Queued for later.
    #[serde(rename = "plan to watch")]
    PlanToWatch,
    /// Finished.
    Watched,
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unwatched => write!(f, "unwatched"),
            Self::Watching => write!(f, "watching"),
            Self::PlanToWatch => write!(f, "plan to watch"),
            Self::Watched => write!(f, "watched"),
        }
    }
}

impl FromStr for WatchStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unwatched" => Ok(Self::Unwatched),
            "watching" => Ok(Self::Watching),
            "plan to watch" => Ok(Self::PlanToWatch),
            "watched" => Ok(Self::Watched),
            other => Err(Error::validation(format!("unknown watch status: {other}"))),
        }
    }
}

/// A movie on a user's watch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WatchlistItem {
    pub user_id: i32,
    pub movie_id: i32,
    pub status: WatchStatus,
    pub favorite: bool,
    pub comments: Option<String>,
    pub rating: Option<u8>,
}

/// Body for adding a movie to a watch list.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WatchlistCreate {
    pub movie_id: i32,
    #[serde(default)]
    pub status: Option<WatchStatus>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl WatchlistCreate {
    /// Validate and build the entry owned by `user_id`.
    pub fn into_item(self, user_id: i32) -> Result<WatchlistItem> {
        if let Some(rating) = self.rating {
            check_rating(rating)?;
        }
        Ok(WatchlistItem {
            user_id,
            movie_id: self.movie_id,
            status: self.status.unwrap_or_default(),
            favorite: self.favorite,
            comments: self.comments,
            rating: self.rating,
        })
    }
}

/// A field update that can also remove the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Field absent from the request.
    Unchanged,
    /// Field explicitly set to `null`.
    Clear,
    /// Field set to a new value.
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    /// Write the patch into an optional field.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Patch::Unchanged => {}
            Patch::Clear => *target = None,
            Patch::Set(value) => *target = Some(value),
        }
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

// Only reached when the key is present; absent keys fall back to `Default`
// through `#[serde(default)]` on the containing struct.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

/// Partial update of a watch-list entry.
///
/// `status` and `favorite` always hold a value, so they can only be replaced;
/// `comments` and `rating` can also be cleared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchlistUpdate {
    #[serde(default)]
    pub status: Option<WatchStatus>,
    #[serde(default)]
    pub favorite: Option<bool>,
    #[serde(default)]
    pub comments: Patch<String>,
    #[serde(default)]
    pub rating: Patch<u8>,
}

impl WatchlistUpdate {
    /// Reject ratings outside `MIN_RATING..=MAX_RATING`.
    pub fn validate(&self) -> Result<()> {
        if let Some(&rating) = self.rating.as_set() {
            check_rating(rating)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.favorite.is_none()
            && self.comments.is_unchanged()
            && self.rating.is_unchanged()
    }
}

impl WatchlistItem {
    /// Validate `update` and apply it in place.
    pub fn apply(&mut self, update: WatchlistUpdate) -> Result<()> {
        update.validate()?;

        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(favorite) = update.favorite {
            self.favorite = favorite;
        }
        update.comments.apply_to(&mut self.comments);
        update.rating.apply_to(&mut self.rating);
        Ok(())
    }
}

fn check_rating(rating: u8) -> Result<()> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}
