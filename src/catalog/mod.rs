//! Movie catalog search (TMDb) for adding movies by title.

use crate::core::config::TmdbConfig;
use crate::core::constants::TMDB_IMAGE_BASE_URL;
use crate::error::CatalogError;
use serde::Deserialize;

/// One search hit from the catalog
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CatalogMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

impl CatalogMovie {
    /// Release year for listings, if the catalog has a date
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .get(..4)
            .filter(|y| y.chars().all(|c| c.is_ascii_digit()))
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<CatalogMovie>,
}

/// Full poster URL for a catalog poster path, or "" when there is none.
pub fn poster_url(poster_path: Option<&str>, size: &str) -> String {
    match poster_path {
        Some(path) if !path.is_empty() => format!("{}{}{}", TMDB_IMAGE_BASE_URL, size, path),
        _ => String::new(),
    }
}

/// Search the catalog by title. Adult titles are excluded; first page only.
pub fn search_movies(config: &TmdbConfig, query: &str) -> Result<Vec<CatalogMovie>, CatalogError> {
    let api_key = config.api_key.as_deref().ok_or(CatalogError::MissingApiKey)?;
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let url = format!("{}/search/movie", config.base_url);
    log::debug!("Searching catalog for {query:?}");
    let response: SearchResponse = ureq::get(&url)
        .set("User-Agent", "movie-roulette")
        .query("api_key", api_key)
        .query("query", query)
        .query("include_adult", "false")
        .query("page", "1")
        .call()
        .map_err(|e| CatalogError::Request(e.to_string()))?
        .into_json()?;

    Ok(response.results)
}
