//! Fixed-size bit set over dense indices
//!
//! Used to mark occupied columns while expanding a determinant and to mark
//! already-selected slots during deferred selection.

use alloc::vec;
use alloc::vec::Vec;

const WORD_BITS: usize = u64::BITS as usize;

/// Bit set holding indices in `[0, len)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    /// Bit array, `WORD_BITS` indices per word
    words: Vec<u64>,
    /// Number of addressable indices
    len: usize,
}

impl BitSet {
    /// Create an empty set able to hold indices below `len`
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Number of addressable indices
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
    }

    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < self.len, "bit index {index} out of range {}", self.len);
        self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len && self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// First index `>= from` that is not in the set
    pub fn next_clear(&self, from: usize) -> Option<usize> {
        let mut index = from;
        while index < self.len {
            let word = self.words[index / WORD_BITS] >> (index % WORD_BITS);
            if word & 1 == 0 {
                return Some(index);
            }
            // jump over the run of set bits; stops at the word end at most
            index += word.trailing_ones() as usize;
        }
        None
    }

    /// Remove every index
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}
