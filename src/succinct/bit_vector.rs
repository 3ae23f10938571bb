//! Two-phase bit vector with constant-time rank and select
//!
//! Bits are appended while the vector is mutable, then `finalize` computes
//! block-level rank caches and coarse select samples. After finalization the
//! vector is immutable and answers rank in O(1) (block cache plus a local
//! popcount) and select via a sample-bounded binary search over blocks.
//! Rank and select are the only navigation primitives the trie uses; no
//! parent or child pointers exist anywhere in the structure.

use crate::error::{Result, TrieError};
use std::fmt;

const BITS_PER_WORD: usize = 64;
/// Rank cache granularity: cumulative counts per 256-bit block (4 words).
const BLOCK_SIZE: usize = 256;
const WORDS_PER_BLOCK: usize = BLOCK_SIZE / BITS_PER_WORD;
/// Select samples record the block of every 512th matching bit.
const SELECT_SAMPLE_RATE: usize = 512;

/// A compact bit vector supporting O(1) rank and cache-guided select
///
/// `BitVector` has two phases. While mutable, bits are appended with
/// [`push`](BitVector::push). [`finalize`](BitVector::finalize) computes the
/// rank/select indices exactly once; afterwards the vector is immutable and
/// `push` fails with an invalid-state error.
///
/// # Examples
///
/// ```rust
/// use louds_trie::BitVector;
///
/// let mut bv = BitVector::new();
/// for i in 0..100 {
///     bv.push(i % 3 == 0)?;
/// }
/// bv.finalize()?;
///
/// assert_eq!(bv.rank1(10), Ok(4));
/// assert_eq!(bv.select1(4), Ok(12));
/// # Ok::<(), louds_trie::TrieError>(())
/// ```
#[derive(Clone)]
pub struct BitVector {
    words: Vec<u64>,
    len: usize,
    n_ones: usize,
    /// Cumulative ones at the end of each 256-bit block
    rank_blocks: Vec<u32>,
    /// Block index of every 512th set bit
    select1_hints: Vec<u32>,
    /// Block index of every 512th clear bit
    select0_hints: Vec<u32>,
    finalized: bool,
}

impl BitVector {
    /// Create a new empty bit vector in the appendable phase
    #[inline]
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
            n_ones: 0,
            rank_blocks: Vec::new(),
            select1_hints: Vec::new(),
            select0_hints: Vec::new(),
            finalized: false,
        }
    }

    /// Create an appendable bit vector with capacity for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        let mut bv = Self::new();
        bv.words = Vec::with_capacity(capacity.div_ceil(BITS_PER_WORD));
        bv
    }

    /// Get the number of bits in the vector
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the bit vector is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `finalize` has been called
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Get the total number of set bits
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.n_ones
    }

    /// Get the total number of clear bits
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.len - self.n_ones
    }

    /// Get the bit at the specified position
    ///
    /// Valid in both phases. Returns `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let word = self.words[index / BITS_PER_WORD];
        Some((word >> (index % BITS_PER_WORD)) & 1 == 1)
    }

    /// Append a bit to the end of the vector
    ///
    /// Fails with [`TrieError::InvalidState`] once the vector is finalized.
    pub fn push(&mut self, value: bool) -> Result<()> {
        if self.finalized {
            return Err(TrieError::invalid_state(
                "push called on a finalized bit vector",
            ));
        }
        let bit_index = self.len % BITS_PER_WORD;
        if bit_index == 0 {
            self.words.push(0);
        }
        if value {
            *self.words.last_mut().unwrap() |= 1u64 << bit_index;
            self.n_ones += 1;
        }
        self.len += 1;
        Ok(())
    }

    /// Compute the rank and select indices and freeze the vector
    ///
    /// May be called exactly once; a second call fails with
    /// [`TrieError::InvalidState`].
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Err(TrieError::invalid_state(
                "finalize called on a finalized bit vector",
            ));
        }

        let num_blocks = self.len.div_ceil(BLOCK_SIZE);
        self.rank_blocks = Vec::with_capacity(num_blocks);

        let mut ones = 0usize;
        for block_idx in 0..num_blocks {
            let word_start = block_idx * WORDS_PER_BLOCK;
            let word_end = (word_start + WORDS_PER_BLOCK).min(self.words.len());
            for word in &self.words[word_start..word_end] {
                ones += word.count_ones() as usize;
            }
            self.rank_blocks.push(ones as u32);

            let block_end = ((block_idx + 1) * BLOCK_SIZE).min(self.len);
            let zeros = block_end - ones;
            while self.select1_hints.len() * SELECT_SAMPLE_RATE < ones {
                self.select1_hints.push(block_idx as u32);
            }
            while self.select0_hints.len() * SELECT_SAMPLE_RATE < zeros {
                self.select0_hints.push(block_idx as u32);
            }
        }

        debug_assert_eq!(ones, self.n_ones);
        self.finalized = true;
        Ok(())
    }

    /// Count the set bits in the range `[0, pos)`
    ///
    /// Requires a finalized vector and `pos <= len`.
    pub fn rank1(&self, pos: usize) -> Result<usize> {
        if !self.finalized {
            return Err(TrieError::invalid_state(
                "rank1 called on an unfinalized bit vector",
            ));
        }
        if pos > self.len {
            return Err(TrieError::out_of_bounds(pos, self.len));
        }
        if pos == 0 {
            return Ok(0);
        }

        let block_idx = pos / BLOCK_SIZE;
        let mut rank = if block_idx == 0 {
            0
        } else {
            self.rank_blocks[block_idx - 1] as usize
        };

        for word in &self.words[block_idx * WORDS_PER_BLOCK..pos / BITS_PER_WORD] {
            rank += word.count_ones() as usize;
        }
        let partial_bits = pos % BITS_PER_WORD;
        if partial_bits > 0 {
            let mask = (1u64 << partial_bits) - 1;
            rank += (self.words[pos / BITS_PER_WORD] & mask).count_ones() as usize;
        }
        Ok(rank)
    }

    /// Count the clear bits in the range `[0, pos)`
    #[inline]
    pub fn rank0(&self, pos: usize) -> Result<usize> {
        Ok(pos - self.rank1(pos)?)
    }

    /// Find the position of the k-th set bit (0-indexed)
    ///
    /// Requires a finalized vector and `k < count_ones()`.
    pub fn select1(&self, k: usize) -> Result<usize> {
        if !self.finalized {
            return Err(TrieError::invalid_state(
                "select1 called on an unfinalized bit vector",
            ));
        }
        if k >= self.n_ones {
            return Err(TrieError::out_of_bounds(k, self.n_ones));
        }

        let block_idx = self.find_block(k, &self.select1_hints, |b| self.ones_at_block_end(b));
        let ones_before = if block_idx == 0 {
            0
        } else {
            self.rank_blocks[block_idx - 1] as usize
        };
        let mut remaining = k - ones_before;

        let word_start = block_idx * WORDS_PER_BLOCK;
        for word_idx in word_start..self.words.len() {
            let word = self.words[word_idx];
            let ones = word.count_ones() as usize;
            if remaining < ones {
                return Ok(word_idx * BITS_PER_WORD + select_in_word(word, remaining));
            }
            remaining -= ones;
        }

        Err(TrieError::invalid_data("select1 position not found"))
    }

    /// Find the position of the k-th clear bit (0-indexed)
    ///
    /// Requires a finalized vector and `k < count_zeros()`.
    pub fn select0(&self, k: usize) -> Result<usize> {
        if !self.finalized {
            return Err(TrieError::invalid_state(
                "select0 called on an unfinalized bit vector",
            ));
        }
        if k >= self.count_zeros() {
            return Err(TrieError::out_of_bounds(k, self.count_zeros()));
        }

        let block_idx = self.find_block(k, &self.select0_hints, |b| self.zeros_at_block_end(b));
        let zeros_before = if block_idx == 0 {
            0
        } else {
            self.zeros_at_block_end(block_idx - 1)
        };
        let mut remaining = k - zeros_before;

        let word_start = block_idx * WORDS_PER_BLOCK;
        for word_idx in word_start..self.words.len() {
            // Mask off bits past the logical length; they are stored as
            // zeros and would otherwise count as clear bits.
            let valid_bits = (self.len - word_idx * BITS_PER_WORD).min(BITS_PER_WORD);
            let mask = if valid_bits == BITS_PER_WORD {
                !0u64
            } else {
                (1u64 << valid_bits) - 1
            };
            let word = !self.words[word_idx] & mask;
            let zeros = word.count_ones() as usize;
            if remaining < zeros {
                return Ok(word_idx * BITS_PER_WORD + select_in_word(word, remaining));
            }
            remaining -= zeros;
        }

        Err(TrieError::invalid_data("select0 position not found"))
    }

    /// Approximate in-memory footprint in bytes, indices included
    pub fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.words.len() * 8
            + self.rank_blocks.len() * 4
            + self.select1_hints.len() * 4
            + self.select0_hints.len() * 4
    }

    /// Cumulative ones at the end of block `b`
    #[inline]
    fn ones_at_block_end(&self, b: usize) -> usize {
        self.rank_blocks[b] as usize
    }

    /// Cumulative zeros at the end of block `b`
    #[inline]
    fn zeros_at_block_end(&self, b: usize) -> usize {
        let block_end = ((b + 1) * BLOCK_SIZE).min(self.len);
        block_end - self.rank_blocks[b] as usize
    }

    /// Binary search for the block containing the (k+1)-th matching bit,
    /// bounded by the coarse select samples.
    fn find_block<F>(&self, k: usize, hints: &[u32], cumulative: F) -> usize
    where
        F: Fn(usize) -> usize,
    {
        let hint_idx = k / SELECT_SAMPLE_RATE;
        let mut lo = hints[hint_idx] as usize;
        let mut hi = if hint_idx + 1 < hints.len() {
            hints[hint_idx + 1] as usize + 1
        } else {
            self.rank_blocks.len()
        };

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if cumulative(mid) <= k {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

/// Position of the k-th set bit within a single word (0-indexed).
/// The caller guarantees the word contains more than `k` set bits.
fn select_in_word(word: u64, k: usize) -> usize {
    let mut remaining = k;
    let mut w = word;
    loop {
        let bit = w.trailing_zeros() as usize;
        if remaining == 0 {
            return bit;
        }
        w &= w - 1;
        remaining -= 1;
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("ones", &self.n_ones)
            .field("finalized", &self.finalized)
            .finish()
    }
}
