use crate::{RecommenderError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

const MOVIE_COLUMNS: &[&str] = &["title", "overview", "genres", "keywords"];
const CREDIT_COLUMNS: &[&str] = &["movie_id", "title", "cast", "crew"];

/// One row of the movie facts table. Columns not named here are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRow {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub genres: Option<String>,
    pub keywords: Option<String>,
}

/// One row of the credits table.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRow {
    #[serde(deserialize_with = "csv::invalid_option")]
    pub movie_id: Option<i64>,
    pub title: Option<String>,
    pub cast: Option<String>,
    pub crew: Option<String>,
}

/// A movie row joined with its credits row on title. Fields stay raw; an
/// empty CSV cell is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinedRow {
    pub movie_id: Option<i64>,
    pub title: String,
    pub overview: Option<String>,
    pub genres: Option<String>,
    pub keywords: Option<String>,
    pub cast: Option<String>,
    pub crew: Option<String>,
}

fn read_rows<T, P>(path: P, required: &[&str], kind: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {} file {}", kind, path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read {} header row", kind))?
        .clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(RecommenderError::SourceError(format!(
                "{} file {} has no `{}` column",
                kind,
                path.display(),
                column
            )));
        }
    }

    let mut rows = Vec::new();
    for (line, result) in reader.deserialize().enumerate() {
        let row: T = result
            .with_context(|| format!("Failed to parse {} record {}", kind, line + 1))?;
        rows.push(row);
    }

    info!("Loaded {} {} rows from {:?}", rows.len(), kind, path);
    Ok(rows)
}

pub fn load_movies<P: AsRef<Path>>(path: P) -> Result<Vec<MovieRow>> {
    read_rows(path, MOVIE_COLUMNS, "movies")
}

pub fn load_credits<P: AsRef<Path>>(path: P) -> Result<Vec<CreditRow>> {
    read_rows(path, CREDIT_COLUMNS, "credits")
}

/// Inner join on title. Output follows movie order; a movie matching several
/// credits rows yields one joined row per match, in credits order.
pub fn join(movies: Vec<MovieRow>, credits: Vec<CreditRow>) -> Vec<JoinedRow> {
    let mut by_title: HashMap<String, Vec<CreditRow>> = HashMap::new();
    for credit in credits {
        if let Some(title) = credit.title.clone() {
            by_title.entry(title).or_default().push(credit);
        }
    }

    let mut joined = Vec::new();
    for movie in movies {
        let Some(title) = movie.title.as_ref() else {
            continue;
        };
        let Some(matches) = by_title.get(title) else {
            continue;
        };
        for credit in matches {
            joined.push(JoinedRow {
                movie_id: credit.movie_id,
                title: title.clone(),
                overview: movie.overview.clone(),
                genres: movie.genres.clone(),
                keywords: movie.keywords.clone(),
                cast: credit.cast.clone(),
                crew: credit.crew.clone(),
            });
        }
    }
    joined
}

/// Read both tables and join them.
pub fn load_joined<P: AsRef<Path>, Q: AsRef<Path>>(movies_path: P, credits_path: Q) -> Result<Vec<JoinedRow>> {
    let movies = load_movies(movies_path)?;
    let credits = load_credits(credits_path)?;
    let movie_count = movies.len();
    let joined = join(movies, credits);
    info!("Joined {} of {} movies with credits", joined.len(), movie_count);
    Ok(joined)
}
