//! Statistics for match-finding operations.

use serde::{Deserialize, Serialize};

use crate::types::Match;

/// Counters accumulated by a match finder across submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    /// Number of `find_matches` calls.
    pub calls: u64,

    /// Total bytes submitted.
    pub bytes_in: u64,

    /// Records carrying a copy (`length > 0`).
    pub matches: u64,

    /// Bytes covered by copies.
    pub matched_bytes: u64,

    /// Bytes emitted as literals.
    pub literal_bytes: u64,

    /// Number of times the history buffer was trimmed.
    pub trims: u64,
}

impl MatchStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one submission of `bytes_in` bytes that produced `records`.
    pub fn record_call(&mut self, bytes_in: usize, records: &[Match]) {
        self.calls += 1;
        self.bytes_in += bytes_in as u64;
        for m in records {
            if !m.is_literal_only() {
                self.matches += 1;
                self.matched_bytes += m.length as u64;
            }
            self.literal_bytes += m.unmatched as u64;
        }
    }

    /// Record a history trim.
    pub fn record_trim(&mut self) {
        self.trims += 1;
    }

    /// Fraction of submitted bytes covered by copies (0.0 to 1.0).
    pub fn match_coverage(&self) -> f64 {
        if self.bytes_in == 0 {
            return 0.0;
        }
        self.matched_bytes as f64 / self.bytes_in as f64
    }

    /// Average copy length.
    pub fn average_match_length(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.matched_bytes as f64 / self.matches as f64
    }

    /// Merge stats from another finder.
    pub fn merge(&mut self, other: &MatchStats) {
        self.calls += other.calls;
        self.bytes_in += other.bytes_in;
        self.matches += other.matches;
        self.matched_bytes += other.matched_bytes;
        self.literal_bytes += other.literal_bytes;
        self.trims += other.trims;
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get stats summary as string.
    pub fn summary(&self) -> String {
        format!(
            "Calls: {}, Bytes: {} ({} matched, {} literal), Matches: {} (avg {:.1}), Coverage: {:.1}%, Trims: {}",
            self.calls,
            self.bytes_in,
            self.matched_bytes,
            self.literal_bytes,
            self.matches,
            self.average_match_length(),
            self.match_coverage() * 100.0,
            self.trims,
        )
    }
}
