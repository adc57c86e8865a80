//! Mapping from provider movies to [`NormalizedMovie`].

use movietracker_common::NormalizedMovie;

use super::localization::LocalizedText;
use super::models::ProviderMovie;

/// Build the public movie DTO from a provider movie and its resolved text.
pub fn normalize(movie: ProviderMovie, text: LocalizedText) -> NormalizedMovie {
    NormalizedMovie {
        id: movie.id,
        title: text.title,
        poster_path: movie.poster_path.unwrap_or_default(),
        background_path: movie.backdrop_path.unwrap_or_default(),
        year: release_year(&movie.release_date),
        description: text.overview,
        genre: movie.genres.into_iter().map(|g| g.name).collect(),
        duration: duration(movie.runtime),
        tagline: text.tagline,
        vote_average: movie.vote_average,
        vote_count: movie.vote_count,
        popularity: movie.popularity,
        status: movie.status,
        release_date: movie.release_date,
        original_title: movie.original_title,
        original_language: movie.original_language,
        homepage: movie.homepage,
        imdb_id: movie.imdb_id,
        budget: movie.budget,
        revenue: movie.revenue,
        runtime: movie.runtime,
        production_companies: movie.production_companies,
        production_countries: movie.production_countries,
        spoken_languages: movie.spoken_languages,
    }
}

/// First four characters of a release date, or empty when shorter.
pub fn release_year(release_date: &str) -> String {
    let year: String = release_date.chars().take(4).collect();
    if year.chars().count() == 4 {
        year
    } else {
        String::new()
    }
}

/// Runtime in minutes as text, empty when unknown.
pub fn duration(runtime: u32) -> String {
    if runtime > 0 {
        runtime.to_string()
    } else {
        String::new()
    }
}
