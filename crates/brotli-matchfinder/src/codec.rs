//! Brotli codec facade.
//!
//! The entropy-coding layer is provided by the `brotli` crate. This wrapper
//! sizes its window from a match-finder configuration and maps its errors
//! into this crate's error type, so malformed streams surface as
//! [`Error::CorruptedData`] rather than as silently wrong output.

use brotli::enc::BrotliEncoderParams;
use brotli_matchfinder_core::{Codec, CompressionLevel, Compressor, Decompressor, Error, Result};

use crate::config::M4Config;
use crate::constants::WINDOW_GAP;

/// Window bits used when no match-finder configuration is given.
const DEFAULT_WINDOW_BITS: u32 = 22;

/// Window bits accepted by standard (non-large-window) Brotli.
const WINDOW_BITS: std::ops::RangeInclusive<u32> = 10..=24;

/// Smallest window whose reach covers `max_distance`.
pub fn window_bits_for(max_distance: usize) -> u32 {
    WINDOW_BITS
        .clone()
        .find(|&bits| (1usize << bits) - WINDOW_GAP >= max_distance)
        .unwrap_or(*WINDOW_BITS.end())
}

/// One-shot Brotli compression and decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrotliCodec {
    level: CompressionLevel,
    window_bits: u32,
}

impl BrotliCodec {
    /// Codec at the default quality (6) with a 4 MiB window.
    pub fn new() -> Self {
        Self::with_level(CompressionLevel::Default)
    }

    /// Codec at `level` with a 4 MiB window.
    pub fn with_level(level: CompressionLevel) -> Self {
        Self {
            level,
            window_bits: DEFAULT_WINDOW_BITS,
        }
    }

    /// Codec whose window reaches as far back as `config` lets the finder look.
    pub fn for_config(config: &M4Config, level: CompressionLevel) -> Self {
        Self {
            level,
            window_bits: window_bits_for(config.max_distance),
        }
    }

    /// log2 of the encoder window.
    pub fn window_bits(&self) -> u32 {
        self.window_bits
    }

    fn params(&self, size_hint: usize) -> BrotliEncoderParams {
        let mut params = BrotliEncoderParams::default();
        params.quality = self.level.quality() as i32;
        params.lgwin = self.window_bits as i32;
        params.size_hint = size_hint;
        params
    }
}

impl Default for BrotliCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for BrotliCodec {
    fn level(&self) -> CompressionLevel {
        self.level
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut reader = input;
        let mut output = Vec::with_capacity(input.len() / 2 + 16);
        brotli::BrotliCompress(&mut reader, &mut output, &self.params(input.len()))
            .map_err(|e| Error::algorithm("brotli", e.to_string()))?;
        Ok(output)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Uncompressed meta-blocks: 4 header bytes per 16 KiB, plus stream framing.
        if input_len == 0 {
            return 2;
        }
        input_len + 4 * (input_len >> 14) + 6
    }
}

impl Decompressor for BrotliCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut reader = input;
        let mut output = Vec::new();
        if let Err(e) = brotli::BrotliDecompress(&mut reader, &mut output) {
            return Err(Error::CorruptedData {
                message: format!(
                    "brotli stream rejected after {} of {} input bytes",
                    input.len() - reader.len(),
                    input.len()
                ),
                source: Some(Box::new(e)),
            });
        }
        Ok(output)
    }
}

impl Codec for BrotliCodec {}
