//! Per-depth storage for the level-order trie encoding
//!
//! A [`Level`] holds everything the trie knows about one depth, in
//! breadth-first order: the unary degree bits of every node at that depth,
//! the labels of the edges leaving them, and the terminal flags. Nodes are
//! never materialized; a node is just its breadth-first index within its
//! level, and its children are located with select arithmetic on the degree
//! bits.

use crate::error::Result;
use crate::succinct::BitVector;

/// One trie depth in level order
///
/// For every node at this depth (breadth-first), `louds` contains one set
/// bit per child edge followed by a clear terminator bit. The set bits
/// align index-wise with `labels`, so the number of clear bits equals the
/// number of nodes at this depth and `outs` carries one terminal flag per
/// node in the same order.
#[derive(Debug, Clone, Default)]
pub struct Level {
    /// Unary degree sequence: `1` per child edge, `0` closing each node
    pub(crate) louds: BitVector,
    /// Edge labels, aligned with the set bits of `louds`
    pub(crate) labels: Vec<u8>,
    /// Terminal flag per node at this depth
    pub(crate) outs: BitVector,
    /// Number of keys terminating at shallower depths
    pub(crate) key_offset: u64,
}

impl Level {
    /// Create an empty, appendable level
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of nodes at this depth
    #[inline]
    pub(crate) fn n_nodes(&self) -> usize {
        self.outs.len()
    }

    /// Number of edges leaving this depth
    #[inline]
    pub(crate) fn n_edges(&self) -> usize {
        self.labels.len()
    }

    /// Finalize both bit vectors, freezing the level
    pub(crate) fn finalize(&mut self) -> Result<()> {
        self.louds.finalize()?;
        self.outs.finalize()?;
        Ok(())
    }

    /// Child edge index range of `node` in the next level's node numbering
    ///
    /// The node's degree block in `louds` starts one past the terminator of
    /// the previous node (located with select0) and runs to its own
    /// terminator. Subtracting the number of preceding terminators turns
    /// bit positions into edge indices, which are exactly the breadth-first
    /// node indices one level deeper.
    pub(crate) fn child_edges(&self, node: usize) -> Result<(usize, usize)> {
        let block_start = if node == 0 {
            0
        } else {
            self.louds.select0(node - 1)? + 1
        };
        let block_end = self.louds.select0(node)?;
        Ok((block_start - node, block_end - node))
    }

    /// Labels of the node's child edges, ascending by construction
    #[inline]
    pub(crate) fn label_run(&self, first_edge: usize, end_edge: usize) -> &[u8] {
        &self.labels[first_edge..end_edge]
    }

    /// In-memory footprint of this level in bytes
    pub(crate) fn size_in_bytes(&self) -> usize {
        self.louds.size_in_bytes() + self.outs.size_in_bytes() + self.labels.len()
    }
}
