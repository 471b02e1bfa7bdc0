//! Match extension primitives.

/// Read 8 bytes as u64 (little-endian).
#[inline(always)]
pub(crate) fn read_u64_le(data: &[u8], pos: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&data[pos..pos + 8]);
    u64::from_le_bytes(word)
}

/// Read 4 bytes as u32 (little-endian).
#[inline(always)]
pub(crate) fn read_u32_le(data: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]])
}

/// Extend a match forward.
///
/// Returns the largest `k <= src.len()` such that `src[i..i + (k - j)]`
/// equals `src[j..k]`. Requires `i < j <= src.len()`.
#[inline]
pub fn extend_match(src: &[u8], mut i: usize, mut j: usize) -> usize {
    debug_assert!(i < j && j <= src.len());

    // Compare a word at a time while a full word remains. The first
    // differing byte is the lowest set byte of the XOR on little-endian loads.
    #[cfg(target_pointer_width = "64")]
    while j + 8 < src.len() {
        let diff = read_u64_le(src, i) ^ read_u64_le(src, j);
        if diff != 0 {
            return j + (diff.trailing_zeros() >> 3) as usize;
        }
        i += 8;
        j += 8;
    }

    #[cfg(not(target_pointer_width = "64"))]
    while j + 4 < src.len() {
        let diff = read_u32_le(src, i) ^ read_u32_le(src, j);
        if diff != 0 {
            return j + (diff.trailing_zeros() >> 3) as usize;
        }
        i += 4;
        j += 4;
    }

    extend_match_bytewise(src, i, j)
}

/// Portable byte-at-a-time form of [`extend_match`].
#[inline]
pub fn extend_match_bytewise(src: &[u8], mut i: usize, mut j: usize) -> usize {
    while j < src.len() && src[i] == src[j] {
        i += 1;
        j += 1;
    }
    j
}

/// Extend a match backward.
///
/// Walks `start` and `candidate` down together while the preceding bytes
/// are equal, `start` stays above `floor`, and `candidate` stays at or
/// above zero. Returns the new `(start, candidate)`.
#[inline]
pub fn extend_backward(
    src: &[u8],
    mut start: usize,
    mut candidate: usize,
    floor: usize,
) -> (usize, usize) {
    while start > floor && candidate > 0 && src[start - 1] == src[candidate - 1] {
        start -= 1;
        candidate -= 1;
    }
    (start, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_to_end() {
        let src = b"abcdabcdabcd";
        assert_eq!(extend_match(src, 4, 8), 12);
        assert_eq!(extend_match(src, 0, 4), 12);
    }

    #[test]
    fn test_extend_stops_at_mismatch() {
        let src = b"abcdefgh_abcdefXh";
        assert_eq!(extend_match(src, 0, 9), 15);
    }

    #[test]
    fn test_extend_word_path_mismatch_inside_word() {
        // 40-byte run, then a differing byte deep enough to hit the word loop.
        let mut src = vec![0u8; 100];
        for (k, b) in src.iter_mut().enumerate() {
            *b = (k % 7) as u8;
        }
        src[7 + 37] = 0xFF;
        let k = extend_match(&src, 0, 7);
        assert_eq!(k, 7 + 37);
        assert_eq!(k, extend_match_bytewise(&src, 0, 7));
    }

    #[test]
    fn test_extend_at_end_of_buffer() {
        let src = b"aaaa";
        assert_eq!(extend_match(src, 0, 4), 4);
        assert_eq!(extend_match(src, 1, 2), 4);
    }

    #[test]
    fn test_word_and_byte_forms_agree() {
        let src: Vec<u8> = b"the cat sat on the mat; the cat sat on the hat"
            .iter()
            .copied()
            .collect();
        for i in 0..src.len() {
            for j in i + 1..=src.len() {
                assert_eq!(
                    extend_match(&src, i, j),
                    extend_match_bytewise(&src, i, j),
                    "i={i} j={j}"
                );
            }
        }
    }

    #[test]
    fn test_backward_respects_floor() {
        let src = b"xyzabcdxyzabcd";
        // Forward hit at 10 against 3; bytes before both are "xyz".
        assert_eq!(extend_backward(src, 10, 3, 0), (7, 0));
        assert_eq!(extend_backward(src, 10, 3, 9), (9, 2));
    }

    #[test]
    fn test_backward_stops_at_zero() {
        let src = b"aaaaaaaa";
        assert_eq!(extend_backward(src, 5, 1, 0), (4, 0));
    }

    #[test]
    fn test_readers() {
        let src = b"\x01\x02\x03\x04\x05\x06\x07\x08";
        assert_eq!(read_u32_le(src, 0), 0x0403_0201);
        assert_eq!(read_u64_le(src, 0), 0x0807_0605_0403_0201);
    }
}
