pub mod catalog;
pub mod config;
pub mod corpus;
pub mod index;
pub mod loader;
pub mod normalize;
pub mod query;
pub mod stem;
pub mod tags;
pub mod utils;
pub mod vectorizer;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("Source Error: {0}")]
    SourceError(String),
    #[error("Vectorizer Error: {0}")]
    VectorizerError(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RecommenderError>;

// Re-export main types for convenience
pub use catalog::{Catalog, MovieDetails};
pub use config::Config;
pub use corpus::Corpus;
pub use index::{Index, SimilarityMatrix};
pub use loader::JoinedRow;
pub use normalize::{parse_or, MovieRecord};
pub use query::{QueryEngine, SearchOutcome};
pub use stem::stem;
pub use tags::TagString;
pub use utils::{cosine_similarity, normalize_rows};
pub use vectorizer::CountVectorizer;
