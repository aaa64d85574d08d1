use crate::{catalog::MovieDetails, corpus::Corpus, index::Index, Config};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// How a free-text search was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    Genre { genre: String, titles: Vec<String> },
    Recommendations { title: String, titles: Vec<String> },
    NoMatch,
}

/// Read-only queries over a built corpus. Unknown titles produce empty
/// results, never errors.
pub struct QueryEngine<'a> {
    corpus: &'a Corpus,
    index: &'a dyn Index,
    top_k: usize,
    genre_browse_limit: usize,
}

impl<'a> QueryEngine<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> Self {
        Self::with_index(corpus, corpus.similarity(), config)
    }

    pub fn with_index(corpus: &'a Corpus, index: &'a dyn Index, config: &Config) -> Self {
        Self {
            corpus,
            index,
            top_k: config.top_k,
            genre_browse_limit: config.genre_browse_limit,
        }
    }

    /// Up to `top_k` titles most similar to `title`, best first. The query
    /// title itself and repeated titles are skipped.
    pub fn recommend(&self, title: &str) -> Vec<String> {
        self.recommend_with_scores(title)
            .into_iter()
            .map(|(title, _)| title)
            .collect()
    }

    pub fn recommend_with_scores(&self, title: &str) -> Vec<(String, f32)> {
        let Some(row) = self.corpus.position(title) else {
            return Vec::new();
        };

        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(title);

        let mut results = Vec::new();
        for (other, score) in self.index.ranked(row) {
            if results.len() >= self.top_k {
                break;
            }
            let Some(record) = self.corpus.record(other) else {
                continue;
            };
            if seen.insert(record.title.as_str()) {
                results.push((record.title.clone(), score));
            }
        }
        results
    }

    /// `(overview, genres)` of `title` as given in the source tables, or
    /// `("", [])` when unknown.
    pub fn lookup(&self, title: &str) -> (String, Vec<String>) {
        self.details(title)
            .map(|details| (details.overview.clone(), details.genres.clone()))
            .unwrap_or_default()
    }

    pub fn details(&self, title: &str) -> Option<&'a MovieDetails> {
        self.corpus.catalog().get(title)
    }

    /// Sorted distinct titles of the working set.
    pub fn titles(&self) -> Vec<String> {
        self.corpus
            .records()
            .iter()
            .map(|record| record.title.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct lower-cased genre names.
    pub fn genres(&self) -> &'a [String] {
        self.corpus.catalog().genres()
    }

    pub fn movies_in_genre(&self, genre: &str) -> Vec<String> {
        self.corpus
            .catalog()
            .titles_in_genre(genre, self.genre_browse_limit)
    }

    /// A genre name wins over a title; titles must match exactly.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let genre = query.trim().to_lowercase();
        if self.corpus.catalog().has_genre(&genre) {
            let titles = self.movies_in_genre(&genre);
            return SearchOutcome::Genre { genre, titles };
        }
        if self.corpus.position(query).is_some() {
            return SearchOutcome::Recommendations {
                title: query.to_string(),
                titles: self.recommend(query),
            };
        }
        SearchOutcome::NoMatch
    }

    pub fn count_movies(&self) -> usize {
        self.corpus.len()
    }
}
