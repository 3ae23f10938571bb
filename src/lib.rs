//! # louds-trie: a succinct level-order trie
//!
//! This crate implements a space-efficient trie over byte-string keys using
//! the LOUDS (Level-Order Unary Degree Sequence) representation: the tree
//! shape is stored as one bit vector per depth and navigated entirely with
//! rank/select arithmetic, so the structure carries no per-node allocations
//! and no parent/child pointers.
//!
//! ## Key Features
//!
//! - **Bit-packed encoding**: one unary degree sequence, label array and
//!   terminal bitmap per level, with O(1) rank and cache-guided select
//! - **Batch construction**: keys are staged in any order, then sorted,
//!   deduplicated and encoded breadth-first in a single build step
//! - **Exact-match lookup**: binary search over sorted sibling labels,
//!   returning a dense per-build key ID
//! - **Merging**: two built tries combine into a new one containing the
//!   union of their key sets, by decode-and-rebuild
//! - **Build-once, read-many**: after `build` the trie is immutable and
//!   safe to query from multiple readers without synchronization
//!
//! ## Quick Start
//!
//! ```rust
//! use louds_trie::{merge_trie, LoudsTrie};
//!
//! let mut trie = LoudsTrie::new();
//! trie.add(b"apple")?;
//! trie.add(b"banana")?;
//! trie.add(b"cherry")?;
//! trie.build()?;
//!
//! assert!(trie.lookup(b"banana")?.is_some());
//! assert!(trie.lookup(b"grape")?.is_none());
//! assert_eq!(trie.n_keys()?, 3);
//!
//! let mut other = LoudsTrie::new();
//! other.add(b"cherry")?;
//! other.add(b"date")?;
//! other.build()?;
//!
//! let merged = merge_trie(&trie, &other)?;
//! assert_eq!(merged.n_keys()?, 4);
//! # Ok::<(), louds_trie::TrieError>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod succinct;
pub mod trie;

pub use error::{Result, TrieError};
pub use succinct::BitVector;
pub use trie::{merge_trie, LoudsTrie, TrieStats};

/// Identity of a key within one built trie
///
/// IDs are non-negative, unique and dense in `0..n_keys` for a given build,
/// assigned to terminal nodes in breadth-first order. They are not
/// preserved across merges: a merged trie assigns fresh IDs over the
/// unioned key set.
pub type KeyId = u64;
