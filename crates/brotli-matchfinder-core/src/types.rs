//! Core type definitions for match finding.

use serde::{Deserialize, Serialize};

/// One token of a match finder's output.
///
/// A record covers `unmatched` literal bytes followed by `length` bytes
/// copied from `distance` bytes back. Records are laid end to end, so the
/// sum of `unmatched + length` over a submission equals its byte count.
///
/// A record with `length == 0` describes only trailing literals; it ends
/// the output of a submission whose tail was not covered by a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Match {
    /// Literal bytes preceding the copy.
    pub unmatched: usize,
    /// Length of the copy (0 for a literal-only record).
    pub length: usize,
    /// Backward offset of the copy source.
    pub distance: usize,
}

impl Match {
    /// Create a new match record.
    #[inline]
    pub fn new(unmatched: usize, length: usize, distance: usize) -> Self {
        Self {
            unmatched,
            length,
            distance,
        }
    }

    /// Create a record holding only `count` trailing literals.
    #[inline]
    pub fn literals(count: usize) -> Self {
        Self {
            unmatched: count,
            length: 0,
            distance: 0,
        }
    }

    /// True if this record carries no copy.
    #[inline]
    pub fn is_literal_only(&self) -> bool {
        self.length == 0
    }

    /// Number of input bytes this record accounts for.
    #[inline]
    pub fn covered(&self) -> usize {
        self.unmatched + self.length
    }
}

/// Highest quality the Brotli encoder accepts.
pub const MAX_QUALITY: u32 = 11;

/// How hard the encoder works, expressed as named Brotli qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompressionLevel {
    /// Quality 0.
    None,
    /// Quality 1.
    Fast,
    /// Quality 6.
    #[default]
    Default,
    /// Quality 10.
    Best,
    /// Quality 11, the slowest setting.
    Ultra,
    /// Any other quality; values outside `0..=11` are clamped.
    Custom(i32),
}

impl CompressionLevel {
    /// Brotli quality for this level, in `0..=MAX_QUALITY`.
    pub fn quality(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Fast => 1,
            Self::Default => 6,
            Self::Best => 10,
            Self::Ultra => MAX_QUALITY,
            Self::Custom(q) => q.clamp(0, MAX_QUALITY as i32) as u32,
        }
    }

    /// Named level for a quality, or `Custom` when no preset has it.
    /// Qualities above `MAX_QUALITY` are clamped.
    pub fn from_quality(quality: u32) -> Self {
        match quality.min(MAX_QUALITY) {
            0 => Self::None,
            1 => Self::Fast,
            6 => Self::Default,
            10 => Self::Best,
            MAX_QUALITY => Self::Ultra,
            q => Self::Custom(q as i32),
        }
    }
}

/// Sizes before and after one codec pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionRatio {
    /// Bytes fed to the encoder.
    pub input_len: usize,
    /// Bytes it produced.
    pub output_len: usize,
}

impl CompressionRatio {
    pub fn new(input_len: usize, output_len: usize) -> Self {
        Self {
            input_len,
            output_len,
        }
    }

    /// `input_len / output_len`; 0 when nothing was produced.
    pub fn ratio(&self) -> f64 {
        match self.output_len {
            0 => 0.0,
            out => self.input_len as f64 / out as f64,
        }
    }

    /// Percentage of the input saved. Negative when the output grew.
    pub fn savings_percent(&self) -> f64 {
        match self.input_len {
            0 => 0.0,
            len => 100.0 * (len as f64 - self.output_len as f64) / len as f64,
        }
    }
}
