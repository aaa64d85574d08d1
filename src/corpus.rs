//! One-time build of every derived structure: load → normalize → tags →
//! vectors → similarity. A built `Corpus` is never mutated.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::index::SimilarityMatrix;
use crate::loader::{self, JoinedRow};
use crate::normalize::MovieRecord;
use crate::tags::TagString;
use crate::vectorizer::CountVectorizer;
use crate::Result;
use ndarray::{Array2, ArrayView1};
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<MovieRecord>,
    tags: Vec<TagString>,
    vectorizer: CountVectorizer,
    vectors: Array2<f32>,
    similarity: SimilarityMatrix,
    catalog: Catalog,
    rows_by_title: HashMap<String, usize>,
}

impl Corpus {
    /// Load both source tables named in `config` and build.
    pub fn build(config: &Config) -> Result<Self> {
        let rows = loader::load_joined(&config.movies_path, &config.credits_path)?;
        Self::from_rows(rows, config)
    }

    /// Build from already-joined rows.
    pub fn from_rows(rows: Vec<JoinedRow>, config: &Config) -> Result<Self> {
        let catalog = Catalog::from_rows(&rows);

        let records: Vec<MovieRecord> = rows
            .iter()
            .filter_map(|row| MovieRecord::normalize(row, config.cast_limit))
            .collect();
        let dropped = rows.len() - records.len();
        if dropped > 0 {
            info!("Dropped {} rows with missing required fields", dropped);
        }

        // First occurrence wins for duplicated titles.
        let mut rows_by_title = HashMap::new();
        let mut duplicates = 0usize;
        for (idx, record) in records.iter().enumerate() {
            if rows_by_title.contains_key(&record.title) {
                duplicates += 1;
            } else {
                rows_by_title.insert(record.title.clone(), idx);
            }
        }
        if duplicates > 0 {
            warn!("{} rows repeat an earlier title; lookups resolve to the first", duplicates);
        }

        let tags: Vec<TagString> = records.iter().map(TagString::from_record).collect();

        let mut vectorizer = CountVectorizer::new(config.max_features);
        let vectors = vectorizer.fit_transform(&tags)?;
        let similarity = SimilarityMatrix::build(&vectors);

        info!(
            "Corpus ready: {} movies, {} terms",
            records.len(),
            vectorizer.vocabulary().len()
        );

        Ok(Self {
            records,
            tags,
            vectorizer,
            vectors,
            similarity,
            catalog,
            rows_by_title,
        })
    }

    /// Working-set row of `title`, first match on duplicates.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.rows_by_title.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn record(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    pub fn tags(&self) -> &[TagString] {
        &self.tags
    }

    pub fn vectorizer(&self) -> &CountVectorizer {
        &self.vectorizer
    }

    pub fn vectors(&self) -> &Array2<f32> {
        &self.vectors
    }

    pub fn vector(&self, row: usize) -> ArrayView1<'_, f32> {
        self.vectors.row(row)
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
