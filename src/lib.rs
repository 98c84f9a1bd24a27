//! Spelling suggestions over an in-memory dictionary.
//!
//! Words are indexed by hashed n-grams; a query is matched against the
//! index to get a short list of candidates which are then scored with the
//! exact Levenshtein distance.
//!
//! ```
//! let index = autocorrect::build_index(["cat", "cot", "dog", "cats"]).unwrap();
//! let suggestions = autocorrect::suggest(&index, "cot", 1, 10, 3).unwrap();
//! let words: Vec<(&str, usize)> = suggestions.iter().map(|s| (s.word, s.distance)).collect();
//! assert_eq!(words, vec![("cot", 0), ("cat", 1)]);
//! ```

pub mod utils;
pub mod error;
pub mod query;
pub mod autocorrect;

#[cfg(feature = "python")]
mod python;

pub use crate::autocorrect::{CacheStats, Candidate, Index, Indexer, Suggestion};
pub use crate::error::{Error, Result};
pub use crate::query::{NGramRange, Query};

/// Levenshtein distance between two words.
pub fn edit_distance(side_a: &str, side_b: &str) -> usize {
    utils::distance(side_a, side_b)
}

/// Index a dictionary of distinct words using the default n-gram range.
pub fn build_index<I, S>(words: I) -> Result<Index>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_index_with(words, NGramRange::default())
}

/// Index a dictionary of distinct words with custom n-gram sizes.
pub fn build_index_with<I, S>(words: I, range: NGramRange) -> Result<Index>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut indexer = Indexer::with_range(range)?;
    indexer.add_words(words)?;
    Ok(indexer.finish())
}

/// Ranked suggestions for `word`: at most `max_candidates` index
/// candidates, whose length differs by at most `length_delta_cap`, within
/// `threshold` edits.
pub fn suggest<'a>(index: &'a Index, word: &str, threshold: usize,
                   max_candidates: usize, length_delta_cap: usize) -> Result<Vec<Suggestion<'a>>> {
    let query = Query::new(word)
        .threshold(threshold)
        .max_candidates(max_candidates)
        .length_delta(length_delta_cap);
    index.search(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_exposes_boundary_operations() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);

        let index = build_index(["cat", "cot", "dog", "cats"]).unwrap();
        let results = suggest(&index, "cot", 1, 10, 3).unwrap();
        let results: Vec<(&str, usize)> = results.iter().map(|s| (s.word, s.distance)).collect();
        assert_eq!(results, vec![("cot", 0), ("cat", 1)]);

        assert!(matches!(suggest(&index, "cot", 1, 0, 3), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(build_index_with(["a"], NGramRange { min: 2, max: 2 }),
                         Err(Error::InvalidConfiguration(_))));
        assert!(matches!(build_index(["a", "b", "a"]), Err(Error::DuplicateWord { position: 0, .. })));
    }

    #[test]
    fn it_accepts_owned_words() {
        let words: Vec<String> = vec!["alpha".to_string(), "beta".to_string()];
        let index = build_index(&words).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.words(), &words[..]);

        let range = NGramRange::new(2, 3).unwrap();
        let index = build_index_with(words, range).unwrap();
        assert_eq!(index.ngram_range(), range);
        let results = suggest(&index, "alpah", 2, 5, 1).unwrap();
        assert_eq!(results, vec![Suggestion { word: "alpha", distance: 2 }]);
    }
}
