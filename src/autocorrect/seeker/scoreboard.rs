use std::cmp::Ordering;
use std::collections::HashMap;

use super::{Candidate, FastHash};

/// Per-query shared n-gram counts: position -> count.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    counts: HashMap<usize, u32, FastHash>,
}

/// Higher count first, lower position breaks ties.
fn by_rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.count.cmp(&a.count).then(a.position.cmp(&b.position))
}

impl Scoreboard {
    pub fn new() -> Scoreboard {
        Scoreboard {
            counts: HashMap::with_capacity_and_hasher(64, FastHash::new()),
        }
    }

    pub fn hit(&mut self, position: usize) {
        *self.counts.entry(position).or_insert(0) += 1;
    }

    /// Best `limit` candidates in a deterministic order. Shorter if fewer
    /// positions were hit.
    pub fn best(self, limit: usize) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self.counts
            .into_iter()
            .map(|(position, count)| Candidate { position, count })
            .collect();

        if limit == 0 {
            return Vec::new();
        }
        if candidates.len() > limit {
            /* Partition around the cutoff before sorting the winners only */
            candidates.select_nth_unstable_by(limit - 1, by_rank);
            candidates.truncate(limit);
        }
        candidates.sort_unstable_by(by_rank);
        candidates
    }
}
