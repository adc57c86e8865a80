//! Movietracker-Common: Shared types and the unified error.
//!
//! This crate provides the values that cross the catalog's public boundary
//! and the watch-list domain model:
//!
//! - **Movies**: The normalized movie DTO and the [`Page`] envelope
//! - **Watch list**: Watch statuses, items, and tri-state partial updates
//! - **Error Handling**: The unified [`Error`] type and result alias
//!
//! # Examples
//!
//! ```
//! use movietracker_common::{Error, Page, Result};
//!
//! let page: Page<u32> = Page::new(1, 10, vec![1, 2, 3]);
//! assert_eq!(page.total_results, 3);
//!
//! fn lookup() -> Result<()> {
//!     Err(Error::not_found("movie", 42))
//! }
//! assert_eq!(lookup().unwrap_err().http_status(), 404);
//! ```

pub mod error;
pub mod movie;
pub mod watchlist;

pub use error::{Error, Result};
pub use movie::*;
pub use watchlist::*;
