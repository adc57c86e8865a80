//! Movietracker - curated movie catalog backed by TMDB
//!
//! This library crate exposes the catalog, configuration and HTTP server for
//! the binary and for integration testing.

pub mod catalog;
pub mod config;
pub mod server;
