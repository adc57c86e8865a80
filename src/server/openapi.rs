//! OpenAPI documentation.
//!
//! The generated document is served as JSON at `/api/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use super::AppContext;

/// OpenAPI documentation for Movietracker.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movietracker API",
        version = "0.1.0",
        description = "Curated, localized movie catalog backed by TMDB",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "/", description = "Default server")
    ),
    paths(
        super::routes_movies::discover_movies,
        super::routes_movies::search_movies,
        super::routes_movies::get_movie,
    ),
    components(
        schemas(
            movietracker_common::NormalizedMovie,
            movietracker_common::WatchStatus,
            movietracker_common::WatchlistItem,
            super::error::ErrorResponse,
        )
    ),
    tags(
        (name = "movies", description = "Movie catalog")
    )
)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document.
pub fn openapi_routes() -> Router<AppContext> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
