use crate::{RecommenderError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Build and query settings, loaded from `MOVIE_REC_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Movie facts table (id, title, overview, genres, keywords, ...)
    #[serde(default = "default_movies_path")]
    pub movies_path: PathBuf,

    /// Credits table (movie_id, title, cast, crew)
    #[serde(default = "default_credits_path")]
    pub credits_path: PathBuf,

    /// Upper bound on vocabulary size
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Number of titles returned by a recommendation
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Leading cast members kept per movie
    #[serde(default = "default_cast_limit")]
    pub cast_limit: usize,

    /// Titles returned when browsing a genre
    #[serde(default = "default_genre_browse_limit")]
    pub genre_browse_limit: usize,
}

fn default_movies_path() -> PathBuf {
    PathBuf::from("tmdb_5000_movies.csv")
}

fn default_credits_path() -> PathBuf {
    PathBuf::from("tmdb_5000_credits.csv")
}

fn default_max_features() -> usize {
    5000
}

fn default_top_k() -> usize {
    5
}

fn default_cast_limit() -> usize {
    3
}

fn default_genre_browse_limit() -> usize {
    20
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("MOVIE_REC_")
            .from_env::<Config>()
            .map_err(|e| RecommenderError::ConfigError(format!("Failed to load config: {}", e)))
    }

    pub fn with_paths<P: Into<PathBuf>, Q: Into<PathBuf>>(movies_path: P, credits_path: Q) -> Self {
        Self {
            movies_path: movies_path.into(),
            credits_path: credits_path.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            movies_path: default_movies_path(),
            credits_path: default_credits_path(),
            max_features: default_max_features(),
            top_k: default_top_k(),
            cast_limit: default_cast_limit(),
            genre_browse_limit: default_genre_browse_limit(),
        }
    }
}
