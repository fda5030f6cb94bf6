//! Access-frequency ranking of trace tokens.
//!
//! `FreqTable` counts how often each LBA appears in a raw trace and ranks
//! the distinct LBAs most-to-least frequent. Ties keep the order in which
//! the tokens first appeared, so a ranking is deterministic for a given
//! trace and two runs over the same file agree.

use serde::Serialize;
use std::collections::HashMap;

struct Entry {
    count: u64,
    first_seen: usize,
}

/// One row of a ranking export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedLba {
    pub lba: String,
    pub count: u64,
}

/// Multiset of trace tokens with per-token access counts.
#[derive(Default)]
pub struct FreqTable {
    entries: HashMap<String, Entry>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one access. Returns true when the token is new to the table.
    pub fn insert(&mut self, token: &str) -> bool {
        let next_rank = self.entries.len();
        match self.entries.get_mut(token) {
            Some(e) => {
                e.count += 1;
                false
            }
            None => {
                self.entries.insert(
                    token.to_string(),
                    Entry {
                        count: 1,
                        first_seen: next_rank,
                    },
                );
                true
            }
        }
    }

    /// Number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total accesses counted across all tokens.
    pub fn total(&self) -> u64 {
        self.entries.values().map(|e| e.count).sum()
    }

    /// Distinct tokens most-to-least frequent, ties in first-seen order.
    pub fn ranked(&self) -> Vec<RankedLba> {
        let mut rows: Vec<(&String, &Entry)> = self.entries.iter().collect();
        rows.sort_by(|(_, a), (_, b)| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });
        rows.into_iter()
            .map(|(token, e)| RankedLba {
                lba: token.clone(),
                count: e.count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let mut table = FreqTable::new();
        assert!(table.is_empty());
        assert!(table.insert("7"));
        assert!(!table.insert("7"));
        assert!(table.insert("3"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut table = FreqTable::new();
        for token in ["b", "a", "b", "a", "c"] {
            table.insert(token);
        }
        let ranked = table.ranked();
        let order: Vec<&str> = ranked.iter().map(|r| r.lba.as_str()).collect();
        assert_eq!(order, ["b", "a", "c"]);
    }
}
