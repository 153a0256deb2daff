//! The ranked wordlist every strategy draws from.
//!
//! A corpus is read from a headered CSV with at least `word` and
//! `normalized_frequency` columns. Rows are kept in descending weight order
//! and optionally capped to the most frequent `max_words`.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::word::Word;

/// One ranked word with its frequency weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusEntry {
    pub word: Word,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
struct WordRecord {
    word: String,
    normalized_frequency: f64,
}

/// Read-only, weight-ordered word table.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Load a wordlist CSV from disk.
    pub fn load(path: impl AsRef<Path>, max_words: Option<usize>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_reader(file, max_words)?;
        debug!("loaded {} words from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Load a wordlist CSV from any reader.
    ///
    /// Rows with a malformed word or weight are skipped with a warning rather
    /// than failing the whole load.
    pub fn from_reader<R: Read>(reader: R, max_words: Option<usize>) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut pairs = Vec::new();
        for (row, record) in csv_reader.deserialize::<WordRecord>().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!("skipping wordlist row {}: {}", row + 1, err);
                    continue;
                }
            };
            match Word::parse(&record.word) {
                Ok(word) => pairs.push((word, record.normalized_frequency)),
                Err(err) => warn!("skipping wordlist row {}: {}", row + 1, err),
            }
        }

        Ok(Self::from_entries(pairs, max_words))
    }

    /// Build a corpus from in-memory pairs.
    ///
    /// Negative or non-finite weights are dropped, as are repeated words
    /// (the first occurrence wins). The rest are stable-sorted by descending
    /// weight and truncated to `max_words`.
    pub fn from_entries(
        pairs: impl IntoIterator<Item = (Word, f64)>,
        max_words: Option<usize>,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut entries: Vec<CorpusEntry> = pairs
            .into_iter()
            .filter(|(word, weight)| {
                if !weight.is_finite() || *weight < 0.0 {
                    warn!("skipping {word}: invalid weight {weight}");
                    return false;
                }
                seen.insert(*word)
            })
            .map(|(word, weight)| CorpusEntry { word, weight })
            .collect();

        entries.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        if let Some(max) = max_words {
            entries.truncate(max);
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> + '_ {
        self.entries.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        self.entries.iter().map(|entry| entry.word)
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|entry| entry.word == *word)
    }

    pub fn weight(&self, word: &Word) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.word == *word)
            .map(|entry| entry.weight)
    }
}
