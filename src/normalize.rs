//! Extraction of structured sub-fields from the raw joined rows.
//!
//! Encoded fields (`genres`, `keywords`, `cast`, `crew`) are JSON arrays of
//! objects carrying at least a `name`. Parsing is lossy: a field that fails to
//! parse yields its default instead of an error, see [`parse_or`].

use crate::loader::JoinedRow;
use serde::Deserialize;
use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Entry {
    name: String,
    #[serde(default)]
    job: Option<String>,
}

/// Unwrap a parse result, falling back to `default` on failure.
///
/// Every encoded-field parse site goes through here so that malformed input
/// never escapes the normalizer.
pub fn parse_or<T, E: Display>(field: &str, result: Result<T, E>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!("Unparseable {} field, using default: {}", field, e);
            default
        }
    }
}

fn parse_entries(raw: &str) -> serde_json::Result<Vec<Entry>> {
    serde_json::from_str(raw)
}

/// `name` of every object in an encoded list, in source order.
pub fn parse_names(field: &str, raw: &str) -> Vec<String> {
    parse_or(
        field,
        parse_entries(raw).map(|entries| entries.into_iter().map(|e| e.name).collect()),
        Vec::new(),
    )
}

/// The first `limit` cast names in billing order.
pub fn parse_cast(raw: &str, limit: usize) -> Vec<String> {
    let mut names = parse_names("cast", raw);
    names.truncate(limit);
    names
}

/// Names of every crew member whose job is "Director".
pub fn parse_directors(raw: &str) -> Vec<String> {
    parse_or(
        "crew",
        parse_entries(raw).map(|entries| {
            entries
                .into_iter()
                .filter(|e| e.job.as_deref() == Some("Director"))
                .map(|e| e.name)
                .collect()
        }),
        Vec::new(),
    )
}

/// Whitespace tokenisation; punctuation stays attached to its word.
pub fn tokenize_overview(overview: &str) -> Vec<String> {
    overview.split_whitespace().map(str::to_string).collect()
}

/// A joined movie with every sub-field extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub movie_id: i64,
    pub title: String,
    pub overview: String,
    pub genres: Vec<String>,
    pub keywords: Vec<String>,
    pub cast: Vec<String>,
    pub director: Vec<String>,
}

impl MovieRecord {
    /// Normalize a joined row. Returns `None` when a required raw field is
    /// missing; the row is then excluded from the working set.
    pub fn normalize(row: &JoinedRow, cast_limit: usize) -> Option<Self> {
        let (Some(movie_id), Some(overview), Some(genres), Some(keywords), Some(cast), Some(crew)) = (
            row.movie_id,
            row.overview.as_deref(),
            row.genres.as_deref(),
            row.keywords.as_deref(),
            row.cast.as_deref(),
            row.crew.as_deref(),
        ) else {
            debug!("Dropping {:?}: missing required field", row.title);
            return None;
        };

        Some(Self {
            movie_id,
            title: row.title.clone(),
            overview: overview.to_string(),
            genres: parse_names("genres", genres),
            keywords: parse_names("keywords", keywords),
            cast: parse_cast(cast, cast_limit),
            director: parse_directors(crew),
        })
    }

    pub fn overview_tokens(&self) -> Vec<String> {
        tokenize_overview(&self.overview)
    }
}
