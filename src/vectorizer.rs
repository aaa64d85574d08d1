//! Bag-of-words term counts over a frozen, frequency-selected vocabulary.

use crate::{RecommenderError, Result};
use ndarray::Array2;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Classic English stop-word list.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

const MIN_TOKEN_LENGTH: usize = 2;

/// Split into runs of word characters, case-folded, dropping single characters.
pub fn analyze(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_LENGTH)
        .map(str::to_lowercase)
        .collect()
}

/// Document-term count vectorizer. The vocabulary is fixed by [`fit`] and
/// never grows afterwards.
///
/// [`fit`]: CountVectorizer::fit
#[derive(Debug, Clone, PartialEq)]
pub struct CountVectorizer {
    max_features: usize,
    vocabulary: Vec<String>,
    positions: HashMap<String, usize>,
}

impl CountVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            vocabulary: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Select the vocabulary: the `max_features` terms with the highest
    /// total count across `documents` (ties by term), stop words excluded.
    /// Columns are ordered alphabetically.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for document in documents {
            for token in analyze(document.as_ref()) {
                if !stop_words.contains(token.as_str()) {
                    *counts.entry(token).or_insert(0) += 1;
                }
            }
        }

        if counts.is_empty() {
            return Err(RecommenderError::VectorizerError(
                "empty vocabulary; documents contain only stop words or no tokens".to_string(),
            ));
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        vocabulary.sort();

        self.positions = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        self.vocabulary = vocabulary;

        info!("Fitted vocabulary of {} terms", self.vocabulary.len());
        Ok(())
    }

    /// One row per document, one column per vocabulary term, raw counts.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f32> {
        let mut vectors = Array2::<f32>::zeros((documents.len(), self.vocabulary.len()));
        for (row, document) in documents.iter().enumerate() {
            for token in analyze(document.as_ref()) {
                if let Some(&col) = self.positions.get(&token) {
                    vectors[[row, col]] += 1.0;
                }
            }
        }
        vectors
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Array2<f32>> {
        self.fit(documents)?;
        Ok(self.transform(documents))
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }
}
