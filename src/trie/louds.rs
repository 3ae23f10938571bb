//! LOUDS (Level-Order Unary Degree Sequence) trie
//!
//! The tree structure is encoded as one unary degree sequence per depth,
//! navigated purely with rank/select arithmetic; no node objects or child
//! pointers exist. The trie has two lifecycle phases: keys are staged with
//! [`LoudsTrie::add`], then [`LoudsTrie::build`] sorts, deduplicates and
//! encodes them exactly once, after which the structure is immutable and
//! safe to query from any number of readers.

use std::collections::VecDeque;

use crate::error::{Result, TrieError};
use crate::trie::builder;
use crate::trie::level::Level;
use crate::trie::stats::TrieStats;
use crate::KeyId;

/// The immutable level-order encoding of a built trie
///
/// This is the query engine: all navigation runs on the per-level bit
/// vectors via rank/select. A node is identified by `(level, index)` where
/// the index is the node's breadth-first position within its level; the
/// root is the single implicit node of level 0.
#[derive(Debug, Clone)]
pub(crate) struct TrieCore {
    levels: Vec<Level>,
    n_keys: usize,
    n_nodes: usize,
}

impl TrieCore {
    pub(crate) fn new(levels: Vec<Level>, n_keys: usize, n_nodes: usize) -> Self {
        Self {
            levels,
            n_keys,
            n_nodes,
        }
    }

    /// The zero-key trie: no levels at all, every lookup misses.
    pub(crate) fn empty() -> Self {
        Self {
            levels: Vec::new(),
            n_keys: 0,
            n_nodes: 0,
        }
    }

    #[inline]
    pub(crate) fn n_keys(&self) -> usize {
        self.n_keys
    }

    #[inline]
    pub(crate) fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Exact-match lookup returning the key's ID, or `None`
    ///
    /// Descends one level per query byte: the current node's child block is
    /// located with select arithmetic on the degree bits, then the sorted
    /// label run is binary searched. A node reached with all bytes consumed
    /// is a hit only if its terminal flag is set; an internal node that no
    /// key ends at is not a match.
    pub(crate) fn lookup(&self, key: &[u8]) -> Result<Option<KeyId>> {
        // A key of length L terminates at a depth-L node.
        if key.len() >= self.levels.len() {
            return Ok(None);
        }

        let mut node = 0usize;
        for (depth, &label) in key.iter().enumerate() {
            let level = &self.levels[depth];
            let (first_edge, end_edge) = level.child_edges(node)?;
            match level.label_run(first_edge, end_edge).binary_search(&label) {
                Ok(offset) => node = first_edge + offset,
                Err(_) => return Ok(None),
            }
        }

        let level = &self.levels[key.len()];
        if level.outs.get(node) == Some(true) {
            let preceding = level.outs.rank1(node)? as u64;
            Ok(Some(level.key_offset + preceding))
        } else {
            Ok(None)
        }
    }

    /// Reconstruct every stored key by level-order traversal
    ///
    /// Keys come back in breadth-first order, which is all the merge path
    /// needs since rebuilding re-sorts anyway.
    pub(crate) fn collect_keys(&self) -> Result<Vec<Vec<u8>>> {
        let mut out = Vec::with_capacity(self.n_keys);
        if self.levels.is_empty() {
            return Ok(out);
        }

        let mut queue: VecDeque<(usize, usize, Vec<u8>)> = VecDeque::new();
        queue.push_back((0, 0, Vec::new()));

        while let Some((depth, node, path)) = queue.pop_front() {
            let level = &self.levels[depth];
            if level.outs.get(node) == Some(true) {
                out.push(path.clone());
            }
            let (first_edge, end_edge) = level.child_edges(node)?;
            for edge in first_edge..end_edge {
                let mut child_path = path.clone();
                child_path.push(level.labels[edge]);
                queue.push_back((depth + 1, edge, child_path));
            }
        }

        Ok(out)
    }

    /// Total in-memory footprint of the encoding in bytes
    pub(crate) fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self
                .levels
                .iter()
                .map(|level| level.size_in_bytes())
                .sum::<usize>()
    }

    pub(crate) fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            num_keys: self.n_keys,
            num_nodes: self.n_nodes,
            num_edges: self.levels.iter().map(|l| l.n_edges()).sum(),
            num_levels: self.levels.len(),
            memory_usage: self.size_in_bytes(),
            bits_per_key: 0.0,
        };
        stats.calculate_bits_per_key();
        stats
    }
}

/// Lifecycle phase of a [`LoudsTrie`]
#[derive(Debug, Clone)]
enum TrieState {
    /// Accepting keys; no queries permitted
    Staging { keys: Vec<Vec<u8>> },
    /// Immutable and queryable; no further keys accepted
    Built(TrieCore),
}

/// A succinct, level-order trie over byte-string keys
///
/// Keys are staged with [`add`](LoudsTrie::add) in any order (duplicates
/// allowed), then [`build`](LoudsTrie::build) encodes them into bit-packed
/// levels. After building, [`lookup`](LoudsTrie::lookup) answers exact-match
/// queries with a dense per-build key ID, and tries can be merged into new
/// ones (see [`merge_trie`](crate::merge_trie)). Every operation checks the
/// lifecycle phase and fails loudly on misuse.
///
/// # Examples
///
/// ```rust
/// use louds_trie::LoudsTrie;
///
/// let mut trie = LoudsTrie::new();
/// trie.add(b"cat")?;
/// trie.add(b"car")?;
/// trie.add(b"card")?;
/// trie.build()?;
///
/// assert!(trie.lookup(b"car")?.is_some());
/// assert!(trie.lookup(b"ca")?.is_none());
/// assert_eq!(trie.n_keys()?, 3);
/// # Ok::<(), louds_trie::TrieError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LoudsTrie {
    state: TrieState,
}

impl LoudsTrie {
    /// Create an empty trie in the staging phase
    pub fn new() -> Self {
        Self {
            state: TrieState::Staging { keys: Vec::new() },
        }
    }

    /// Wrap an already-encoded core; used by build and merge.
    pub(crate) fn from_core(core: TrieCore) -> Self {
        Self {
            state: TrieState::Built(core),
        }
    }

    /// Access the built encoding, or fail if still staging.
    pub(crate) fn core(&self) -> Result<&TrieCore> {
        match &self.state {
            TrieState::Built(core) => Ok(core),
            TrieState::Staging { .. } => Err(TrieError::invalid_state(
                "operation requires a built trie; call build() first",
            )),
        }
    }

    /// Whether `build` has completed
    pub fn is_built(&self) -> bool {
        matches!(self.state, TrieState::Built(_))
    }

    /// Stage a key for the next build
    ///
    /// Legal only before [`build`](LoudsTrie::build); order and duplicates
    /// are irrelevant, duplicates collapse at build time.
    pub fn add(&mut self, key: &[u8]) -> Result<()> {
        match &mut self.state {
            TrieState::Staging { keys } => {
                keys.push(key.to_vec());
                Ok(())
            }
            TrieState::Built(_) => Err(TrieError::invalid_state(
                "add called on an already built trie",
            )),
        }
    }

    /// Sort, deduplicate and encode the staged keys
    ///
    /// Transitions staging -> built exactly once; a second call fails with
    /// an invalid-state error and leaves the built structure untouched.
    pub fn build(&mut self) -> Result<()> {
        let core = match &mut self.state {
            TrieState::Staging { keys } => builder::encode(keys)?,
            TrieState::Built(_) => {
                return Err(TrieError::invalid_state(
                    "build called on an already built trie",
                ))
            }
        };
        self.state = TrieState::Built(core);
        Ok(())
    }

    /// Exact-match lookup
    ///
    /// Returns the key's ID on a hit and `Ok(None)` on a miss, including
    /// the case where the query is a strict prefix of stored keys but was
    /// never itself added. IDs are dense in `0..n_keys` and unique within
    /// one build, but are reassigned by merges.
    pub fn lookup(&self, key: &[u8]) -> Result<Option<KeyId>> {
        self.core()?.lookup(key)
    }

    /// Number of keys in the built trie
    pub fn n_keys(&self) -> Result<usize> {
        Ok(self.core()?.n_keys())
    }

    /// Number of trie nodes, the implicit root included
    pub fn n_nodes(&self) -> Result<usize> {
        Ok(self.core()?.n_nodes())
    }

    /// Approximate in-memory size of the built trie in bytes
    pub fn size(&self) -> Result<usize> {
        Ok(self.core()?.size_in_bytes())
    }

    /// Reconstruct the full key set by traversal
    pub fn keys(&self) -> Result<Vec<Vec<u8>>> {
        self.core()?.collect_keys()
    }

    /// Structural and memory statistics of the built trie
    pub fn stats(&self) -> Result<TrieStats> {
        Ok(self.core()?.stats())
    }
}

impl Default for LoudsTrie {
    fn default() -> Self {
        Self::new()
    }
}
