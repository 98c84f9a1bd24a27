use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::utils::NGramHash;
use crate::query::NGramRange;

mod indexer;
mod seeker;
pub mod filter;
pub mod ranker;


pub use seeker::CacheStats;
pub use ranker::Suggestion;

/* Fast hashing, but requires AES-ni extensions */
type FastHash = ahash::RandomState;

/// Dictionary position proposed by the n-gram index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Position of the word in the dictionary.
    pub position: usize,
    /// Number of distinct query n-grams the word shares.
    pub count: u32,
}

/// Initial state of the index: gathers words, but can't be queried.
#[derive(Debug)]
pub struct Indexer {
    /// Window sizes used for both indexing and querying.
    range: NGramRange,

    /// Inverted index: n-gram hash -> ascending, unique word positions.
    db: HashMap<NGramHash, Vec<usize>, FastHash>,

    /// Dictionary in insertion order; position is the identity.
    words: Vec<String>,

    /// Word -> position, rejects duplicates.
    positions: HashMap<String, usize, FastHash>,
}

/// Produced by Indexer::finish(); read-only and can be queried.
pub struct Index {
    /// Finished inverted index.
    index: Indexer,

    /// LRU cache of lookups keyed by (query, max_candidates).
    cache: Mutex<seeker::LookupCache>,
}
