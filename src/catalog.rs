use crate::loader::JoinedRow;
use crate::normalize::parse_names;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Human-readable details of a movie, as given in the source tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovieDetails {
    pub title: String,
    pub overview: String,
    pub genres: Vec<String>,
}

/// Every joined row, including rows later excluded from the working set.
/// Title lookups resolve to the first row carrying that title.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<MovieDetails>,
    by_title: HashMap<String, usize>,
    genres: Vec<String>,
}

impl Catalog {
    pub fn from_rows(rows: &[JoinedRow]) -> Self {
        let mut catalog = Self::default();
        for row in rows {
            catalog.insert(MovieDetails {
                title: row.title.clone(),
                overview: row.overview.clone().unwrap_or_default(),
                genres: row
                    .genres
                    .as_deref()
                    .map(|raw| parse_names("genres", raw))
                    .unwrap_or_default(),
            });
        }
        catalog.genres = catalog
            .entries
            .iter()
            .flat_map(|entry| entry.genres.iter().map(|g| g.to_lowercase()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        catalog
    }

    fn insert(&mut self, details: MovieDetails) {
        let idx = self.entries.len();
        self.by_title.entry(details.title.clone()).or_insert(idx);
        self.entries.push(details);
    }

    pub fn get(&self, title: &str) -> Option<&MovieDetails> {
        self.by_title.get(title).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[MovieDetails] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Sorted, lower-cased union of every entry's genres.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.binary_search_by(|g| g.as_str().cmp(genre)).is_ok()
    }

    /// Titles of entries tagged with `genre` (case-insensitive), in table
    /// order, at most `limit` of them.
    pub fn titles_in_genre(&self, genre: &str, limit: usize) -> Vec<String> {
        let wanted = genre.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.genres.iter().any(|g| g.to_lowercase() == wanted))
            .map(|entry| entry.title.clone())
            .take(limit)
            .collect()
    }
}
