//! Brotli format constants (RFC 7932).
//!
//! These are fixed by the format and owned by the encoder/decoder layer.
//! The match finder itself only consults [`MAX_ALLOWED_DISTANCE`] and
//! [`WINDOW_GAP`]; the rest are exposed for the encoder that serializes
//! match records.

// Section 3.3: alphabet sizes.

/// Number of literal symbols.
pub const NUM_LITERAL_SYMBOLS: usize = 256;

/// Number of insert-and-copy length symbols.
pub const NUM_COMMAND_SYMBOLS: usize = 704;

/// Number of block-length symbols.
pub const NUM_BLOCK_LEN_SYMBOLS: usize = 26;

// Section 3.5: complex prefix codes.

/// Code length symbol meaning "repeat the previous non-zero length".
pub const REPEAT_PREVIOUS_CODE_LENGTH: u32 = 16;

/// Code length symbol meaning "repeat zero".
pub const REPEAT_ZERO_CODE_LENGTH: u32 = 17;

/// Size of the code-length code alphabet.
pub const CODE_LENGTH_CODES: usize = REPEAT_ZERO_CODE_LENGTH as usize + 1;

/// "code length of 8 is repeated"
pub const INITIAL_REPEATED_CODE_LENGTH: u32 = 8;

// Large window brotli.

/// Maximum distance bits in large-window mode.
pub const LARGE_MAX_DISTANCE_BITS: u32 = 62;

/// Smallest window bits in large-window mode.
pub const LARGE_MIN_WBITS: u32 = 10;

/// Largest window bits in large-window mode.
pub const LARGE_MAX_WBITS: u32 = 30;

// Section 4: encoding of distances.

/// Number of distance short codes.
pub const NUM_DISTANCE_SHORT_CODES: u32 = 16;

/// Maximum NPOSTFIX value.
pub const MAX_NPOSTFIX: u32 = 3;

/// Maximum distance bits in standard mode.
pub const MAX_DISTANCE_BITS: u32 = 24;

/// Largest backward distance the format can express.
pub const MAX_ALLOWED_DISTANCE: usize = 0x7FFF_FFFC;

/// Size of the distance alphabet for the given parameters.
pub const fn distance_alphabet_size(npostfix: u32, ndirect: u32, max_nbits: u32) -> u32 {
    NUM_DISTANCE_SHORT_CODES + ndirect + (max_nbits << (npostfix + 1))
}

// Section 7: context modeling.

/// Context IDs for literals are in the range 0..64.
pub const LITERAL_CONTEXT_BITS: u32 = 6;

/// Context IDs for distances are in the range 0..4.
pub const DISTANCE_CONTEXT_BITS: u32 = 2;

// Section 9.1: stream header.

/// Slack bytes between the window size and the maximum backward distance.
pub const WINDOW_GAP: usize = 16;

/// Range of values belonging to a prefix code: `[offset, offset + 2^nbits)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixCodeRange {
    pub offset: u32,
    pub nbits: u32,
}

const fn range(offset: u32, nbits: u32) -> PrefixCodeRange {
    PrefixCodeRange { offset, nbits }
}

/// Block-length prefix codes (section 6).
pub const BLOCK_LENGTH_PREFIX_CODE: [PrefixCodeRange; NUM_BLOCK_LEN_SYMBOLS] = [
    range(1, 2),
    range(5, 2),
    range(9, 2),
    range(13, 2),
    range(17, 3),
    range(25, 3),
    range(33, 3),
    range(41, 3),
    range(49, 4),
    range(65, 4),
    range(81, 4),
    range(97, 4),
    range(113, 5),
    range(145, 5),
    range(177, 5),
    range(209, 5),
    range(241, 6),
    range(305, 6),
    range(369, 7),
    range(497, 8),
    range(753, 9),
    range(1265, 10),
    range(2289, 11),
    range(4337, 12),
    range(8433, 13),
    range(16625, 24),
];

/// A block length split into its prefix symbol and extra bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLengthCode {
    /// Prefix symbol, `0..NUM_BLOCK_LEN_SYMBOLS`.
    pub code: usize,
    /// Number of extra bits following the symbol.
    pub n_extra: u32,
    /// Value of the extra bits.
    pub extra: u32,
}

/// Look up the prefix code for a block length.
///
/// Returns `None` for 0 and for lengths beyond the last range.
pub fn block_length_prefix_code(len: u32) -> Option<BlockLengthCode> {
    let last = BLOCK_LENGTH_PREFIX_CODE[NUM_BLOCK_LEN_SYMBOLS - 1];
    if len == 0 || u64::from(len) >= u64::from(last.offset) + (1u64 << last.nbits) {
        return None;
    }

    // Coarse jump into the table, then walk forward.
    let mut code = if len >= 177 {
        if len >= 753 { 20 } else { 14 }
    } else if len >= 41 {
        7
    } else {
        0
    };
    while code < NUM_BLOCK_LEN_SYMBOLS - 1 && len >= BLOCK_LENGTH_PREFIX_CODE[code + 1].offset {
        code += 1;
    }

    let entry = BLOCK_LENGTH_PREFIX_CODE[code];
    Some(BlockLengthCode {
        code,
        n_extra: entry.nbits,
        extra: len - entry.offset,
    })
}
