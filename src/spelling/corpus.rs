//! Corpus sources for suggestion ranking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;
use async_trait::async_trait;

use crate::error::Result;

/// A source of known-correct words.
///
/// Implementations back the suggestion engine with whatever actually holds
/// the vocabulary: an in-process list, an index, a database, a remote
/// service. The engine only ever issues reads, so implementations need to be
/// safe for concurrent reads but nothing more.
///
/// `get_all` must enumerate words in a stable, deterministic order for a
/// given corpus state; that order is also the tie-break applied when ranked
/// candidates share a score.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Return every word the corpus currently contains.
    async fn get_all(&self) -> Result<Vec<String>>;

    /// Case-insensitive exact-membership test.
    async fn exists(&self, word: &str) -> Result<bool>;
}

/// An in-memory corpus.
///
/// Words enumerate in insertion order; membership checks fold to lowercase.
/// Case-insensitive duplicate insertions are ignored, so enumeration stays
/// deterministic and duplicate-free.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    words: Vec<String>,
    folded: AHashSet<String>,
}

impl MemoryCorpus {
    /// Create a new empty corpus.
    pub fn new() -> Self {
        MemoryCorpus {
            words: Vec::new(),
            folded: AHashSet::new(),
        }
    }

    /// Create a corpus from an iterator of words, preserving their order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut corpus = MemoryCorpus::new();
        for word in words {
            corpus.add_word(word);
        }
        corpus
    }

    /// Add a word to the corpus. Case-insensitive duplicates are ignored.
    pub fn add_word<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        if self.folded.insert(word.to_lowercase()) {
            self.words.push(word);
        }
    }

    /// Check if a word is in the corpus, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.folded.contains(&word.to_lowercase())
    }

    /// All words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build a corpus from free text.
    ///
    /// Splits on non-alphabetic characters, folds to lowercase, and skips
    /// single letters.
    pub fn from_text(text: &str) -> Self {
        let words = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|word| word.len() > 1)
            .map(|word| word.to_lowercase());

        MemoryCorpus::from_words(words)
    }

    /// Load a corpus from a text file with one word per line.
    ///
    /// Lines that are empty or contain non-alphabetic characters are
    /// skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut corpus = MemoryCorpus::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) {
                corpus.add_word(word);
            }
        }

        Ok(corpus)
    }
}

#[async_trait]
impl CorpusSource for MemoryCorpus {
    async fn get_all(&self) -> Result<Vec<String>> {
        Ok(self.words.clone())
    }

    async fn exists(&self, word: &str) -> Result<bool> {
        Ok(self.contains(word))
    }
}
