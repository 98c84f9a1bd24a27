use serde::Serialize;

use crate::utils;

/// Suggested word with its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion<'a> {
    pub word: &'a str,
    /// Levenshtein distance to the query.
    pub distance: usize,
}

/// Score candidates against the query and keep those within `threshold`
/// (inclusive, so an exact match is kept with distance 0). The result is
/// ordered by distance, then alphabetically.
pub fn rank<'a>(candidates: &[&'a str], query: &str, threshold: usize) -> Vec<Suggestion<'a>> {
    /* Each distance is calculated once and carried into the sort */
    let mut suggestions: Vec<Suggestion<'a>> = candidates
        .iter()
        .filter_map(|&word| {
            utils::distance_within(word, query, threshold)
                .map(|distance| Suggestion { word, distance })
        })
        .collect();

    suggestions.sort_unstable_by(|a, b| {
        (a.distance, a.word).cmp(&(b.distance, b.word))
    });
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs<'a>(suggestions: &[Suggestion<'a>]) -> Vec<(&'a str, usize)> {
        suggestions.iter().map(|s| (s.word, s.distance)).collect()
    }

    #[test]
    fn it_ranks_by_distance_then_word() {
        let candidates = ["dog", "cats", "cot", "cat"];
        assert_eq!(pairs(&rank(&candidates, "cot", 1)), vec![("cot", 0), ("cat", 1)]);
        /* "dog" is two substitutions away from "cot" */
        assert_eq!(pairs(&rank(&candidates, "cot", 2)),
                   vec![("cot", 0), ("cat", 1), ("cats", 2), ("dog", 2)]);

        /* Ties are alphabetical */
        let candidates = ["dot", "cut", "bot", "cog"];
        assert_eq!(pairs(&rank(&candidates, "cot", 1)),
                   vec![("bot", 1), ("cog", 1), ("cut", 1), ("dot", 1)]);
    }

    #[test]
    fn it_keeps_exact_matches() {
        let suggestions = rank(&["word"], "word", 0);
        assert_eq!(pairs(&suggestions), vec![("word", 0)]);
    }

    #[test]
    fn it_handles_empty_inputs() {
        assert!(rank(&[], "cot", 5).is_empty());
        assert_eq!(pairs(&rank(&["ab", "abcd"], "", 2)), vec![("ab", 2)]);
    }
}
