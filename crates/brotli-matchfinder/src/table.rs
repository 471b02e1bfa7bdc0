//! Direct-mapped hash table of recent positions.
//!
//! Each slot remembers only the most recent position whose window hashed to
//! it. Slots store `position + 1` so that 0 can mean "empty" without
//! losing position 0 as a candidate.

/// log2 of the number of table slots.
pub const TABLE_BITS: u32 = 17;

/// Number of table slots.
pub const TABLE_SIZE: usize = 1 << TABLE_BITS;

const TABLE_MASK: usize = TABLE_SIZE - 1;

/// Multiplier for the window hash.
const HASH_MUL64: u64 = 0x1E35_A7BD_1E35_A7BD;

/// Mask selecting the low `hash_len` bytes of a little-endian word.
#[inline]
pub fn hash_mask(hash_len: usize) -> u64 {
    debug_assert!((1..=8).contains(&hash_len));
    if hash_len >= 8 {
        u64::MAX
    } else {
        (1u64 << (8 * hash_len)) - 1
    }
}

/// Hash the masked window into a slot index.
#[inline(always)]
pub fn hash(window: u64, mask: u64) -> usize {
    (((window & mask).wrapping_mul(HASH_MUL64)) >> (64 - TABLE_BITS)) as usize & TABLE_MASK
}

/// Fixed-size table from window hash to most recent position.
#[derive(Clone)]
pub struct HashTable {
    slots: Box<[u32]>,
}

impl core::fmt::Debug for HashTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("slots", &format_args!("[u32; {}]", self.slots.len()))
            .field("occupied", &self.occupied())
            .finish()
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HashTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: vec![0u32; TABLE_SIZE].into_boxed_slice(),
        }
    }

    /// Mark every slot empty.
    pub fn reset(&mut self) {
        self.slots.fill(0);
    }

    /// Record `pos` in slot `h` and return the position it displaced.
    ///
    /// `pos` must fit in `u32::MAX - 1`; the caller enforces this on the
    /// history length.
    #[inline(always)]
    pub fn replace(&mut self, h: usize, pos: usize) -> Option<usize> {
        let prev = core::mem::replace(&mut self.slots[h], pos as u32 + 1);
        prev.checked_sub(1).map(|p| p as usize)
    }

    #[cfg(test)]
    fn get(&self, h: usize) -> Option<usize> {
        self.slots[h].checked_sub(1).map(|p| p as usize)
    }

    /// Shift every stored position down by `delta`.
    ///
    /// Positions that would fall below zero are no longer reachable and
    /// become empty.
    pub fn rebase(&mut self, delta: usize) {
        let delta = u32::try_from(delta).unwrap_or(u32::MAX);
        for slot in self.slots.iter_mut() {
            *slot = slot.saturating_sub(delta);
        }
    }

    /// Count of non-empty slots.
    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().filter(|&&s| s != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(hash_mask(1), 0xFF);
        assert_eq!(hash_mask(6), 0xFFFF_FFFF_FFFF);
        assert_eq!(hash_mask(8), u64::MAX);
    }

    #[test]
    fn test_hash_ignores_bytes_beyond_len() {
        let a = u64::from_le_bytes(*b"abcdefXY");
        let b = u64::from_le_bytes(*b"abcdefZW");
        assert_eq!(hash(a, hash_mask(6)), hash(b, hash_mask(6)));
        assert!(hash(a, hash_mask(8)) < TABLE_SIZE);
    }

    #[test]
    fn test_replace_is_last_write_wins() {
        let mut table = HashTable::new();
        assert_eq!(table.replace(7, 0), None);
        assert_eq!(table.replace(7, 5), Some(0));
        assert_eq!(table.replace(7, 9), Some(5));
        assert_eq!(table.get(7), Some(9));
        assert_eq!(table.occupied(), 1);
    }

    #[test]
    fn test_position_zero_is_not_empty() {
        let mut table = HashTable::new();
        table.replace(3, 0);
        assert_eq!(table.get(3), Some(0));
    }

    #[test]
    fn test_rebase_clamps_to_empty() {
        let mut table = HashTable::new();
        table.replace(1, 10);
        table.replace(2, 100);
        table.replace(3, 99);

        table.rebase(100);

        assert_eq!(table.get(1), None);
        assert_eq!(table.get(2), Some(0));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn test_reset_clears() {
        let mut table = HashTable::new();
        table.replace(0, 1);
        table.replace(TABLE_SIZE - 1, 2);
        table.reset();
        assert_eq!(table.occupied(), 0);
    }
}
