//! Core traits for match finding and byte-level codecs.
//!
//! A [`MatchFinder`] produces the records an entropy encoder consumes. The
//! codec traits describe the full byte-to-byte transform around it.

use crate::error::Result;
use crate::types::{CompressionLevel, CompressionRatio, Match};

/// Incremental LZ77 match finding.
///
/// Successive calls to [`find_matches`](MatchFinder::find_matches) are
/// treated as one logical stream: later chunks may match against bytes
/// submitted earlier, up to the finder's maximum distance.
pub trait MatchFinder {
    /// Find matches in `src` and append them to `dst`.
    ///
    /// The records appended for one call cover exactly `src.len()` bytes.
    fn find_matches(&mut self, dst: &mut Vec<Match>, src: &[u8]) -> Result<()>;

    /// Discard history and hash state so the next call starts a new stream.
    fn reset(&mut self);

    /// Find matches in `src`, collecting them into a new vector.
    fn find_all(&mut self, src: &[u8]) -> Result<Vec<Match>> {
        let mut dst = Vec::new();
        self.find_matches(&mut dst, src)?;
        Ok(dst)
    }
}

/// Whole-buffer encoding.
pub trait Compressor {
    fn level(&self) -> CompressionLevel;

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Upper bound on `compress(input).len()` for an input of `input_len` bytes.
    fn max_compressed_size(&self, input_len: usize) -> usize;
}

/// Whole-buffer decoding. Malformed input is an error, never partial output.
pub trait Decompressor {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Encoder and decoder for the same format.
pub trait Codec: Compressor + Decompressor {
    /// Encode then decode `data`, reporting whether the bytes survived.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let decoded = self.decompress(&self.compress(data)?)?;
        Ok(decoded == data)
    }

    fn measure_ratio(&self, data: &[u8]) -> Result<CompressionRatio> {
        let encoded_len = self.compress(data)?.len();
        Ok(CompressionRatio::new(data.len(), encoded_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Finder that never matches; exercises the provided methods.
    struct LiteralsOnly;

    impl MatchFinder for LiteralsOnly {
        fn find_matches(&mut self, dst: &mut Vec<Match>, src: &[u8]) -> Result<()> {
            if !src.is_empty() {
                dst.push(Match::literals(src.len()));
            }
            Ok(())
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn test_find_all_collects() {
        let mut finder = LiteralsOnly;
        let matches = finder.find_all(b"hello").unwrap();
        assert_eq!(matches, vec![Match::literals(5)]);
        assert!(finder.find_all(b"").unwrap().is_empty());
    }

    /// Stores bytes behind a one-byte marker.
    struct Stored;

    impl Compressor for Stored {
        fn level(&self) -> CompressionLevel {
            CompressionLevel::None
        }

        fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
            let mut out = vec![0xAA];
            out.extend_from_slice(input);
            Ok(out)
        }

        fn max_compressed_size(&self, input_len: usize) -> usize {
            input_len + 1
        }
    }

    impl Decompressor for Stored {
        fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
            match input.split_first() {
                Some((0xAA, rest)) => Ok(rest.to_vec()),
                _ => Err(crate::Error::unexpected_eof(input.len())),
            }
        }
    }

    impl Codec for Stored {}

    #[test]
    fn test_codec_defaults() {
        let codec = Stored;
        assert!(codec.verify_roundtrip(b"abcdabcdabcd").unwrap());
        let ratio = codec.measure_ratio(&[0; 99]).unwrap();
        assert_eq!(ratio, CompressionRatio::new(99, 100));
        assert!(codec.decompress(b"").is_err());
    }
}
