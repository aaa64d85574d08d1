use crate::normalize::MovieRecord;
use crate::stem::stem;
use std::fmt;

/// Lower-cased, stemmed content signature of one movie: overview tokens,
/// then genres, keywords, cast and director names, space separated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagString(String);

impl TagString {
    pub fn from_record(record: &MovieRecord) -> Self {
        let raw = record
            .overview_tokens()
            .into_iter()
            .chain(record.genres.iter().cloned())
            .chain(record.keywords.iter().cloned())
            .chain(record.cast.iter().cloned())
            .chain(record.director.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        Self::from_text(&raw)
    }

    /// Lower-case and stem every whitespace-separated token of `text`.
    pub fn from_text(text: &str) -> Self {
        let tags = text
            .split_whitespace()
            .map(|token| stem(&token.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" ");
        Self(tags)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
