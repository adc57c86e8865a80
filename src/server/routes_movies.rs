//! Movie catalog API routes.
//!
//! Thin handlers over [`MovieCatalog`](crate::catalog::MovieCatalog): they
//! parse query and path parameters and hand back the catalog's DTOs as JSON.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use movietracker_common::{Error, NormalizedMovie, Page};
use serde::Deserialize;

use super::error::AppError;
use super::AppContext;

/// Create movie routes.
pub fn movie_routes() -> Router<AppContext> {
    Router::new()
        .route("/movies", get(discover_movies))
        .route("/movies/search", get(search_movies))
        .route("/movies/:id", get(get_movie))
}

/// Query parameters for listing endpoints.
///
/// Kept as raw strings so a malformed page falls back to 1 instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub query: Option<String>,
}

/// Parse a page parameter; missing, non-numeric or non-positive values give 1.
pub fn page_or_default(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|&p| p > 0)
        .unwrap_or(1)
}

/// Discover curated movies.
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    params(("page" = Option<u32>, Query, description = "Page number (default: 1)")),
    responses(
        (status = 200, description = "Curated page of movies", body = Page<NormalizedMovie>),
        (status = 502, description = "Provider failure", body = super::error::ErrorResponse)
    )
)]
pub async fn discover_movies(
    State(ctx): State<AppContext>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<NormalizedMovie>>, AppError> {
    let page = page_or_default(params.page.as_deref());
    let movies = ctx.catalog.discover_movies(page).await?;
    Ok(Json(movies))
}

/// Search movies by title.
#[utoipa::path(
    get,
    path = "/api/movies/search",
    tag = "movies",
    params(
        ("query" = String, Query, description = "Search query"),
        ("page" = Option<u32>, Query, description = "Page number (default: 1)")
    ),
    responses(
        (status = 200, description = "Matching movies", body = Page<NormalizedMovie>),
        (status = 400, description = "Missing query", body = super::error::ErrorResponse),
        (status = 502, description = "Provider failure", body = super::error::ErrorResponse)
    )
)]
pub async fn search_movies(
    State(ctx): State<AppContext>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<NormalizedMovie>>, AppError> {
    let query = params.query.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(Error::validation("query parameter is required").into());
    }

    let page = page_or_default(params.page.as_deref());
    let movies = ctx.catalog.search_movies(query, page).await?;
    Ok(Json(movies))
}

/// Get a single movie.
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = u64, Path, description = "TMDB movie id")),
    responses(
        (status = 200, description = "Movie details", body = NormalizedMovie),
        (status = 400, description = "Invalid id", body = super::error::ErrorResponse),
        (status = 404, description = "Unknown or not permitted", body = super::error::ErrorResponse)
    )
)]
pub async fn get_movie(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<NormalizedMovie>, AppError> {
    let id: u64 = id
        .parse()
        .map_err(|_| Error::validation(format!("invalid movie id: {id}")))?;

    let movie = ctx.catalog.get_movie(id).await?;
    Ok(Json(movie))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults() {
        assert_eq!(page_or_default(None), 1);
        assert_eq!(page_or_default(Some("")), 1);
        assert_eq!(page_or_default(Some("abc")), 1);
        assert_eq!(page_or_default(Some("0")), 1);
        assert_eq!(page_or_default(Some("-3")), 1);
        assert_eq!(page_or_default(Some("7")), 7);
        assert_eq!(page_or_default(Some(" 2 ")), 2);
    }
}
