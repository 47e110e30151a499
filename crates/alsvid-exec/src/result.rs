//! Execution results and readout tallies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A tally of readout bitstrings to occurrence counts.
///
/// Bitstrings are rendered with cell 0 as the first character.
/// [`Counts::insert`] accumulates, so per-shot inserts of `1` sum up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from bitstring/count pairs.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, u64)>) -> Self {
        let mut counts = Self::new();
        for (bitstring, count) in pairs {
            counts.insert(bitstring, count);
        }
        counts
    }

    /// Add `count` occurrences of a bitstring.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Occurrences of a bitstring, zero when absent.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Number of distinct bitstrings observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all bitstrings.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The most frequent outcome. Ties resolve to the lexicographically
    /// smallest bitstring.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|(ka, va), (kb, vb)| va.cmp(vb).then_with(|| kb.cmp(ka)))
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
    }

    /// Iterate over the recorded bitstring/count pairs.
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }

    /// The pairs sorted by descending count, then bitstring.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut pairs: Vec<_> = self
            .counts
            .iter()
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
            .collect();
        pairs.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then_with(|| ka.cmp(kb)));
        pairs
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a String, &'a u64);
    type IntoIter = std::collections::hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// The outcome of running a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Tally of readout bitstrings.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result from a tally and its shot count.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Record the wall-clock execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates() {
        let mut counts = Counts::new();
        counts.insert("01", 1);
        counts.insert("01", 1);
        counts.insert("10", 5);

        assert_eq!(counts.get("01"), 2);
        assert_eq!(counts.get("10"), 5);
        assert_eq!(counts.get("11"), 0);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total_shots(), 7);
    }

    #[test]
    fn test_most_frequent_breaks_ties_lexicographically() {
        let counts = Counts::from_pairs([("11", 4), ("00", 4), ("01", 1)]);
        assert_eq!(counts.most_frequent(), Some(("00", 4)));
    }

    #[test]
    fn test_sorted_orders_by_count_then_bitstring() {
        let counts = Counts::from_pairs([("01", 1), ("11", 4), ("00", 4)]);
        assert_eq!(counts.sorted(), vec![("00", 4), ("11", 4), ("01", 1)]);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = ExecutionResult::new(Counts::from_pairs([("00", 500), ("11", 500)]), 1000)
            .with_execution_time(12);

        let json = serde_json::to_string(&result).unwrap();
        let back: ExecutionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_execution_time_is_omitted_when_unset() {
        let result = ExecutionResult::new(Counts::new(), 0);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("execution_time_ms"));
    }
}
