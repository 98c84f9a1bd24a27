use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sizes of n-gram windows used by the index, `min` inclusive, `max`
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramRange {
    pub min: usize,
    pub max: usize,
}

impl NGramRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            return Err(Error::invalid_configuration("minimal n-gram size must be positive"));
        }
        if self.min >= self.max {
            return Err(Error::invalid_configuration(format!(
                "n-gram range [{}, {}) is empty", self.min, self.max)));
        }
        Ok(())
    }

    pub fn sizes(&self) -> Range<usize> {
        self.min..self.max
    }
}

impl Default for NGramRange {
    /// Single characters up to trigrams.
    fn default() -> Self {
        Self { min: 1, max: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Possibly misspelled word.
    pub word: String,
    /// Max levenshtein distance of a suggestion, inclusive.
    pub threshold: usize,
    /// How many index candidates are scored with the edit distance.
    pub max_candidates: usize,
    /// Candidates whose length differs more than this are never scored.
    pub length_delta: usize,
    /// Keep a suggestion equal to the query word (distance 0).
    pub include_exact: bool,
}

impl Query {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            threshold: 2,
            max_candidates: 200,
            length_delta: 3,
            include_exact: true,
        }
    }

    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn length_delta(mut self, length_delta: usize) -> Self {
        self.length_delta = length_delta;
        self
    }

    pub fn include_exact(mut self, include_exact: bool) -> Self {
        self.include_exact = include_exact;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(Error::invalid_configuration("max_candidates must be positive"));
        }
        Ok(())
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new("")
    }
}
