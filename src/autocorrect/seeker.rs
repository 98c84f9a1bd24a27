use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, trace};
use lru::LruCache;

use crate::error::{Error, Result};
use crate::query::{NGramRange, Query};
use crate::utils::{self, NGramHash};
use super::{filter, ranker};
use super::{Candidate, FastHash, Index, Indexer, Suggestion};

mod scoreboard;

use scoreboard::Scoreboard;

/// Lookup cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub inserts: usize,
}

pub(super) struct LookupCache {
    entries: LruCache<(String, usize), Arc<Vec<Candidate>>, FastHash>,
    stats: CacheStats,
}

impl LookupCache {
    fn new(size: usize) -> LookupCache {
        LookupCache {
            entries: LruCache::with_hasher(size.max(1), FastHash::new()),
            stats: CacheStats::default(),
        }
    }
}

impl Index {
    pub(super) fn new(indexer: Indexer, cache_size: usize) -> Index {
        Index {
            index: indexer,
            cache: Mutex::new(LookupCache::new(cache_size)),
        }
    }

    /// Number of dictionary words.
    pub fn len(&self) -> usize {
        self.index.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.words.is_empty()
    }

    /// Word stored at a given dictionary position.
    pub fn word(&self, position: usize) -> Option<&str> {
        self.index.words.get(position).map(String::as_str)
    }

    /// Dictionary in position order.
    pub fn words(&self) -> &[String] {
        &self.index.words
    }

    pub fn ngram_range(&self) -> NGramRange {
        self.index.range
    }

    /// Number of distinct n-gram hashes in the index.
    pub fn ngram_count(&self) -> usize {
        self.index.db.len()
    }

    /// Ascending positions of words that produced the hash.
    pub fn positions(&self, hash: NGramHash) -> &[usize] {
        self.index.db.get(&hash).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, LookupCache> {
        /* Cache holds only finished results; a poisoned one is still consistent */
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count shared n-grams per position and keep the best ones.
    fn score(&self, word: &str, max_candidates: usize) -> Vec<Candidate> {
        let db = &self.index.db;
        let mut scoreboard = Scoreboard::new();

        for hash in utils::ngrams(word, &self.index.range) {
            if let Some(positions) = db.get(&hash) {
                for &position in positions.iter() {
                    scoreboard.hit(position);
                }
            }
        }
        scoreboard.best(max_candidates)
    }

    /// Cached variant of `score`.
    fn candidates(&self, word: &str, max_candidates: usize) -> Arc<Vec<Candidate>> {
        let key = (word.to_string(), max_candidates);

        /* LRU cache updates position even on get and needs mutable reference */
        {
            let mut cache = self.lock_cache();
            if let Some(candidates) = cache.entries.get(&key) {
                /* Shared to avoid copying candidate lists */
                let candidates = candidates.clone();
                cache.stats.hits += 1;
                trace!("Lookup cache hit for {:?}", word);
                return candidates;
            }
            cache.stats.misses += 1;
        }

        let candidates = Arc::new(self.score(word, max_candidates));
        {
            let mut cache = self.lock_cache();
            cache.entries.put(key, candidates.clone());
            cache.stats.inserts += 1;
        }
        candidates
    }

    /// Dictionary positions sharing n-grams with `word`, best first: by
    /// shared n-gram count descending, then by position. At most
    /// `max_candidates` are returned and only those with a non-zero count.
    pub fn lookup(&self, word: &str, max_candidates: usize) -> Result<Vec<Candidate>> {
        if max_candidates == 0 {
            return Err(Error::invalid_configuration("max_candidates must be positive"));
        }
        Ok(self.candidates(word, max_candidates).as_ref().clone())
    }

    /// Suggest dictionary words for the query: index lookup, length filter,
    /// then exact distance ranking.
    pub fn search(&self, query: &Query) -> Result<Vec<Suggestion>> {
        query.validate()?;
        let candidates = self.candidates(&query.word, query.max_candidates);
        let words: Vec<&str> = candidates.iter()
            .map(|candidate| self.index.words[candidate.position].as_str())
            .collect();
        Ok(self.rank(query, &words, candidates.len()))
    }

    /// Same as `search`, but every dictionary word is a candidate. Used as a
    /// fallback when the index can't help (eg. empty query) and as the
    /// reference when checking index recall.
    pub fn search_exhaustive(&self, query: &Query) -> Result<Vec<Suggestion>> {
        query.validate()?;
        let words: Vec<&str> = self.index.words.iter().map(String::as_str).collect();
        Ok(self.rank(query, &words, words.len()))
    }

    fn rank<'a>(&'a self, query: &Query, words: &[&'a str],
                candidate_count: usize) -> Vec<Suggestion<'a>> {
        let words = filter::by_length(words, &query.word, query.length_delta);
        let mut suggestions = ranker::rank(&words, &query.word, query.threshold);
        if !query.include_exact {
            suggestions.retain(|suggestion| suggestion.distance > 0);
        }
        debug!("Query {:?}: {} candidates, {} after length filter, {} suggestions",
               query.word, candidate_count, words.len(), suggestions.len());
        suggestions
    }
}
