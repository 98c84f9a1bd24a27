use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::query::NGramRange;
use crate::utils;
use super::*;

impl Indexer {
    /// Create a new empty index in an "indexing" state with default n-gram
    /// sizes.
    pub fn new() -> Indexer {
        Indexer {
            range: NGramRange::default(),
            db: HashMap::with_capacity_and_hasher(32768, FastHash::new()),
            words: Vec::new(),
            positions: HashMap::with_hasher(FastHash::new()),
        }
    }

    /// Create an empty index using a custom n-gram range. Fails before
    /// anything is allocated if the range is unusable.
    pub fn with_range(range: NGramRange) -> Result<Indexer> {
        range.validate()?;
        let mut indexer = Indexer::new();
        indexer.range = range;
        Ok(indexer)
    }

    pub fn ngram_range(&self) -> NGramRange {
        self.range
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Append a word to the dictionary and return its position. Words must
    /// be unique; on a duplicate the indexer is left untouched.
    pub fn add_word(&mut self, word: &str) -> Result<usize> {
        if let Some(&position) = self.positions.get(word) {
            return Err(Error::DuplicateWord { word: word.to_string(), position });
        }

        let position = self.words.len();
        for hash in utils::ngrams(word, &self.range) {
            /* Hashes are unique per word and positions grow, so lists stay sorted */
            self.db.entry(hash).or_insert_with(Vec::new).push(position);
        }
        self.words.push(word.to_string());
        self.positions.insert(word.to_string(), position);
        Ok(position)
    }

    /// Add words in order; stops at the first duplicate.
    pub fn add_words<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref())?;
        }
        Ok(())
    }

    /// Consume the Indexer and return a queryable Index with a lookup cache
    /// of a given size.
    pub fn finish_with_cache(mut self, cache_size: usize) -> Index {
        self.db.shrink_to_fit();
        debug!("Indexed {} words into {} distinct n-grams of sizes {:?}",
               self.words.len(), self.db.len(), self.range.sizes());
        Index::new(self, cache_size)
    }

    /// Consume the Indexer and return a queryable Index with a default cache
    /// of 2000 lookups.
    pub fn finish(self) -> Index {
        self.finish_with_cache(2000)
    }
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new()
    }
}
