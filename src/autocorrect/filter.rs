//! Cheap candidate pruning before the edit distance is calculated.

/// Keep candidates whose length (in characters) differs from the query by
/// at most `max_delta`. The edit distance is never lower than the length
/// difference, so nothing within a threshold of `max_delta` is lost.
/// Preserves candidate order.
pub fn by_length<'a>(candidates: &[&'a str], query: &str, max_delta: usize) -> Vec<&'a str> {
    let query_len = query.chars().count();
    candidates
        .iter()
        .copied()
        .filter(|candidate| candidate.chars().count().abs_diff(query_len) <= max_delta)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_drops_length_outliers() {
        let candidates = ["cat", "catalogue", "c", "cats", "", "kot"];
        assert_eq!(by_length(&candidates, "cot", 1), vec!["cat", "cats", "kot"]);
        assert_eq!(by_length(&candidates, "cot", 0), vec!["cat", "kot"]);
        assert_eq!(by_length(&candidates, "cot", 3), vec!["cat", "c", "cats", "", "kot"]);
        assert_eq!(by_length(&candidates, "", 1), vec!["c", ""]);
        assert!(by_length(&[], "cot", 3).is_empty());
    }

    #[test]
    fn it_counts_characters_not_bytes() {
        /* 4 characters, 7 bytes */
        let candidates = ["łódź", "lodzia"];
        assert_eq!(by_length(&candidates, "lodz", 0), vec!["łódź"]);
    }
}
