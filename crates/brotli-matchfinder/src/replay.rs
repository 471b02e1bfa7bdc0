//! Replaying match records back into bytes.
//!
//! This is the inverse of match finding: literals are taken from the
//! submitted input and copies are resolved against the output produced so
//! far. It validates every record, so it doubles as a checker for finder
//! output and for record streams read back from an encoder.

use brotli_matchfinder_core::{Error, Match, Result};

/// Append the bytes described by `matches` to `dst`.
///
/// Literals are read from `src` in order; copies read from `dst`, which
/// may already hold output from earlier submissions of the same stream.
/// Overlapping copies (`distance < length`) repeat the pattern as LZ77
/// requires.
///
/// Returns the number of `src` bytes consumed as literals plus copies,
/// which equals `src.len()` for a complete record sequence.
pub fn apply_matches(dst: &mut Vec<u8>, src: &[u8], matches: &[Match]) -> Result<usize> {
    let mut pos: usize = 0;

    for m in matches {
        let literal_end = pos
            .checked_add(m.unmatched)
            .filter(|&end| end <= src.len())
            .ok_or_else(|| Error::unexpected_eof(src.len()))?;
        dst.extend_from_slice(&src[pos..literal_end]);
        pos = literal_end;

        if m.is_literal_only() {
            continue;
        }

        if m.distance == 0 {
            return Err(Error::corrupted_at("invalid zero distance", dst.len()));
        }
        if m.distance > dst.len() {
            return Err(Error::corrupted_at("distance beyond output", dst.len()));
        }
        let copy_end = pos
            .checked_add(m.length)
            .filter(|&end| end <= src.len())
            .ok_or_else(|| Error::unexpected_eof(src.len()))?;

        let match_start = dst.len() - m.distance;
        if m.distance >= m.length {
            dst.extend_from_within(match_start..match_start + m.length);
        } else {
            // Overlapping: copy byte by byte
            dst.reserve(m.length);
            for k in 0..m.length {
                let byte = dst[match_start + k];
                dst.push(byte);
            }
        }
        pos = copy_end;
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_only() {
        let mut out = Vec::new();
        let used = apply_matches(&mut out, b"hello", &[Match::literals(5)]).unwrap();
        assert_eq!(used, 5);
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_overlapping_copy() {
        let mut out = Vec::new();
        let src = b"abcdabcdabcd";
        apply_matches(&mut out, src, &[Match::new(4, 8, 4)]).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_run_length_copy() {
        let mut out = Vec::new();
        let src = [b'A'; 40];
        apply_matches(&mut out, &src, &[Match::new(1, 39, 1)]).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_copy_from_previous_submission() {
        let mut out = b"0123456789".to_vec();
        let used = apply_matches(&mut out, b"xx23456", &[Match::new(2, 5, 10)]).unwrap();
        assert_eq!(used, 7);
        assert_eq!(&out[10..], b"xx23456");
    }

    #[test]
    fn test_rejects_zero_distance() {
        let mut out = Vec::new();
        let err = apply_matches(&mut out, b"aaaaaaaa", &[Match::new(4, 4, 0)]).unwrap_err();
        assert!(matches!(err, Error::CorruptedData { .. }));
    }

    #[test]
    fn test_rejects_distance_beyond_output() {
        let mut out = Vec::new();
        let err = apply_matches(&mut out, b"abcdabcd", &[Match::new(2, 4, 4)]).unwrap_err();
        assert!(matches!(err, Error::CorruptedData { .. }));
    }

    #[test]
    fn test_rejects_overrun() {
        let mut out = Vec::new();
        let err = apply_matches(&mut out, b"abc", &[Match::literals(4)]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
    }

    #[test]
    fn test_oversized_literal_count_is_eof() {
        let mut out = Vec::new();
        let records = [Match::literals(1), Match::new(usize::MAX, 0, 0)];
        let err = apply_matches(&mut out, b"abcdefgh", &records).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { bytes_read: 8 }));
    }

    #[test]
    fn test_oversized_copy_length_is_eof() {
        let mut out = Vec::new();
        let err = apply_matches(&mut out, b"abcdefgh", &[Match::new(4, usize::MAX, 1)]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { bytes_read: 8 }));
        assert_eq!(out, b"abcd");
    }
}
