use std::mem;

use itertools::Itertools;

use crate::query::NGramRange;

/// Radix of the polynomial n-gram hash.
pub const RADIX: u64 = 16;

/// Hash of a single n-gram window.
pub type NGramHash = u64;

/// Polynomial rolling hash over the character codes of a window. Arithmetic
/// wraps at 2^64 and no modulus is applied; an index built with one hashing
/// scheme can't be queried with another.
pub fn hash_ngram(window: &[char]) -> NGramHash {
    window.iter().fold(0, |hash: NGramHash, &ch| {
        hash.wrapping_mul(RADIX).wrapping_add(ch as NGramHash)
    })
}

/// Split a word into non-overlapping windows for every size in `range` and
/// return the distinct hashes, sorted.
///
/// The last window of each size keeps whatever characters remain, so
/// "cats" with size 3 gives "cat" and "s". Sizes larger than the word are
/// skipped; a word shorter than `range.min` has no n-grams at all.
pub fn ngrams(word: &str, range: &NGramRange) -> Vec<NGramHash> {
    let chars: Vec<char> = word.chars().collect();
    range.sizes()
        .take_while(|&size| size <= chars.len())
        .flat_map(|size| chars.chunks(size).map(hash_ngram))
        .sorted_unstable()
        .dedup()
        .collect()
}

/// Levenshtein distance counted in unicode scalar values.
pub fn distance(side_a: &str, side_b: &str) -> usize {
    let chars_a: Vec<char> = side_a.chars().collect();
    let chars_b: Vec<char> = side_b.chars().collect();
    /* The distance never exceeds the longer length, so the bound never cuts */
    let bound = std::cmp::max(chars_a.len(), chars_b.len());
    levenshtein(&chars_a, &chars_b, bound).unwrap_or(bound)
}

/// Levenshtein distance if it is at most `limit`, None otherwise. Gives up
/// early once every cell of a row is over the limit.
pub fn distance_within(side_a: &str, side_b: &str, limit: usize) -> Option<usize> {
    let chars_a: Vec<char> = side_a.chars().collect();
    let chars_b: Vec<char> = side_b.chars().collect();
    levenshtein(&chars_a, &chars_b, limit)
}

/// Two-row dynamic programming over character slices. The shorter side is
/// used for the rows.
fn levenshtein(side_a: &[char], side_b: &[char], limit: usize) -> Option<usize> {
    let (long, short) = if side_a.len() >= side_b.len() {
        (side_a, side_b)
    } else {
        (side_b, side_a)
    };

    if long.len() - short.len() > limit {
        return None;
    }
    if short.is_empty() {
        return Some(long.len());
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current: Vec<usize> = vec![0; short.len() + 1];

    for (i, ch_long) in long.iter().enumerate() {
        current[0] = i + 1;
        let mut row_min = current[0];

        for (j, ch_short) in short.iter().enumerate() {
            let cell = if ch_long == ch_short {
                previous[j]
            } else {
                /* replace, delete, insert */
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
            current[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        /* Row minimums never decrease */
        if row_min > limit {
            return None;
        }
        mem::swap(&mut previous, &mut current);
    }

    let distance = previous[short.len()];
    if distance <= limit {
        Some(distance)
    } else {
        None
    }
}
