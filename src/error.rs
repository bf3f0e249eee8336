use thiserror::Error;

/// Failure of a spin. Nothing has been mutated when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpinError {
    #[error("No eligible movies to spin")]
    NoEligibleItems,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Unknown movie: {0}")]
    UnknownMovie(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Movie search is not configured (set TMDB_API_KEY)")]
    MissingApiKey,

    #[error("Catalog request failed: {0}")]
    Request(String),

    #[error("Catalog response could not be parsed: {0}")]
    Parse(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
