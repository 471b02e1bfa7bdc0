//! M4: hash-table match finder with three-deep lookahead parsing.
//!
//! Candidates come from a direct-mapped hash table probed at every input
//! position. Instead of committing to the first match, the finder keeps up
//! to three overlapping matches in flight and resolves them once a later
//! match shows which of them are worth keeping. This is the "advanced
//! parsing" strategy described at
//! <https://fastcompression.blogspot.com/2011/12/advanced-parsing-strategies.html>.
//!
//! ## Per-position steps
//!
//! 1. Flush pending matches once the scan passes the newest one's end
//! 2. Probe the table (read the candidate, then overwrite with `i`)
//! 3. Reject empty, too-distant, same-distance, or non-4-byte candidates
//! 4. Extend forward and backward
//! 5. Keep only strict improvements over the newest pending match
//! 6. Resolve the oldest pending match once three are in flight

use brotli_matchfinder_core::{CompressionLevel, Error, Match, MatchFinder, MatchStats, Result};
use tracing::{debug, trace};

use crate::config::M4Config;
use crate::extend::{extend_backward, extend_match, read_u32_le, read_u64_le};
use crate::history::History;
use crate::table::{HashTable, hash, hash_mask};

/// Bytes past `i` the scan needs: one 8-byte hash load.
const SCAN_MARGIN: usize = 7;

/// Largest history the `u32` table can address (slots hold `pos + 1`).
const MAX_HISTORY: usize = u32::MAX as usize - 1;

/// A match expressed as positions in the history buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AbsoluteMatch {
    /// Index of the first byte.
    start: usize,
    /// Index one past the last byte.
    end: usize,
    /// Index of the earlier data it repeats.
    matched: usize,
}

impl AbsoluteMatch {
    #[inline]
    fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    fn distance(&self) -> usize {
        self.start - self.matched
    }

    /// Shorten so the match ends no later than `limit`.
    #[inline]
    fn clipped_to(mut self, limit: usize) -> Self {
        if self.end > limit {
            self.end = limit;
        }
        self
    }
}

/// Matches found but not yet emitted; `[0]` is the newest.
type Pending = [Option<AbsoluteMatch>; 3];

/// Converts absolute matches into records relative to the last emitted byte.
struct Emitter<'a> {
    dst: &'a mut Vec<Match>,
    next_emit: usize,
    min_length: usize,
}

impl Emitter<'_> {
    /// Emit `m` unless clipping left it shorter than the minimum length.
    fn emit(&mut self, m: AbsoluteMatch) {
        let length = m.len();
        if length < self.min_length {
            return;
        }
        debug_assert!(m.start >= self.next_emit, "match starts before emitted data");
        self.dst.push(Match::new(m.start - self.next_emit, length, m.distance()));
        self.next_emit = m.end;
    }

    /// Emit the two newest pending matches, oldest first, without overlap.
    fn flush(&mut self, pending: &Pending) {
        if let Some(newest) = pending[0] {
            if let Some(older) = pending[1] {
                self.emit(older.clipped_to(newest.start));
            }
            self.emit(newest);
        }
    }

    /// Cover any bytes after the last match with a literal-only record.
    fn finish(&mut self, len: usize) {
        if self.next_emit < len {
            self.dst.push(Match::literals(len - self.next_emit));
            self.next_emit = len;
        }
    }
}

/// Hash-table match finder with lookahead parsing.
///
/// Each instance owns its history and table; use one instance per stream.
/// Independent instances may run on separate threads.
#[derive(Debug, Clone)]
pub struct M4 {
    config: M4Config,
    hash_mask: u64,
    table: HashTable,
    history: History,
    stats: MatchStats,
    max_history: usize,
}

impl Default for M4 {
    fn default() -> Self {
        let config = M4Config::default();
        Self {
            hash_mask: hash_mask(config.hash_len),
            config,
            table: HashTable::new(),
            history: History::new(),
            stats: MatchStats::new(),
            max_history: MAX_HISTORY,
        }
    }
}

impl M4 {
    /// Create a match finder, rejecting out-of-range parameters.
    pub fn new(config: M4Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            hash_mask: hash_mask(config.hash_len),
            ..Self::default()
        })
    }

    /// Create a match finder with a level preset.
    pub fn with_level(level: CompressionLevel) -> Self {
        let config = M4Config::from_level(level);
        Self {
            config,
            hash_mask: hash_mask(config.hash_len),
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &M4Config {
        &self.config
    }

    /// Counters accumulated since construction or the last reset.
    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Bytes currently retained as history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[cfg(test)]
    fn with_history_limit(mut self, limit: usize) -> Self {
        self.max_history = limit;
        self
    }

    /// Trim stale history and append `src`, returning where `src` begins.
    fn submit(&mut self, src: &[u8]) -> Result<usize> {
        let max_distance = self.config.max_distance;
        let retained = if self.history.len() > max_distance.saturating_mul(2) {
            max_distance
        } else {
            self.history.len()
        };
        let len = retained.saturating_add(src.len());
        if len > self.max_history {
            return Err(Error::InputTooLarge {
                len,
                max: self.max_history,
            });
        }

        if let Some(delta) = self.history.trim(max_distance) {
            self.table.rebase(delta);
            self.stats.record_trim();
            debug!(delta, retained = self.history.len(), "trimmed match history");
        }
        Ok(self.history.append(src))
    }
}

impl MatchFinder for M4 {
    fn find_matches(&mut self, dst: &mut Vec<Match>, src: &[u8]) -> Result<()> {
        let first_record = dst.len();
        let start = self.submit(src)?;

        let M4Config {
            max_distance,
            min_length,
            ..
        } = self.config;
        let mask = self.hash_mask;
        let buf = self.history.as_slice();
        let table = &mut self.table;

        let mut out = Emitter {
            dst,
            next_emit: start,
            min_length,
        };
        let mut pending: Pending = [None; 3];

        for i in start..buf.len().saturating_sub(SCAN_MARGIN) {
            if let Some(newest) = pending[0] {
                if i >= newest.end {
                    // Nothing found from here on can overlap what is pending.
                    out.flush(&pending);
                    pending = [None; 3];
                }
            }

            let h = hash(read_u64_le(buf, i), mask);
            let Some(candidate) = table.replace(h, i) else {
                continue;
            };
            debug_assert!(candidate < i);

            let distance = i - candidate;
            if distance > max_distance {
                continue;
            }
            if pending[0].is_some_and(|best| best.distance() == distance) {
                continue;
            }
            if read_u32_le(buf, candidate) != read_u32_le(buf, i) {
                continue;
            }

            let end = extend_match(buf, candidate + 4, i + 4);
            let (match_start, matched) = extend_backward(buf, i, candidate, out.next_emit);
            let found = AbsoluteMatch {
                start: match_start,
                end,
                matched,
            };

            if found.len() <= pending[0].map_or(0, |best| best.len()) {
                continue;
            }

            pending = [Some(found), pending[0], pending[1]];
            let Some(oldest) = pending[2] else {
                continue;
            };

            if found.start < oldest.end {
                // Newest overlaps oldest; the middle one is superseded.
                pending = [Some(found), Some(oldest), None];
            } else if found.start < oldest.end + min_length {
                // No room for another match between them.
                out.emit(oldest);
                pending = [Some(found), None, None];
            } else {
                let middle_start = pending[1].map_or(oldest.end, |middle| middle.start);
                out.emit(oldest.clipped_to(middle_start));
                pending[2] = None;
            }
        }

        out.flush(&pending);
        out.finish(buf.len());

        let records = &out.dst[first_record..];
        self.stats.record_call(src.len(), records);
        trace!(
            bytes = src.len(),
            records = records.len(),
            history = buf.len(),
            "found matches"
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.table.reset();
        self.history.reset();
        self.stats.reset();
        debug!("match finder reset");
    }
}
