//! Structural and memory statistics for built tries

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics about trie structure and memory usage
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrieStats {
    /// Number of keys stored
    pub num_keys: usize,
    /// Number of trie nodes, the implicit root included
    pub num_nodes: usize,
    /// Total number of edges
    pub num_edges: usize,
    /// Number of levels (maximum key length plus one)
    pub num_levels: usize,
    /// Memory usage in bytes
    pub memory_usage: usize,
    /// Space efficiency (bits per key)
    pub bits_per_key: f64,
}

impl TrieStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute `bits_per_key` from the current counts
    pub fn calculate_bits_per_key(&mut self) {
        if self.num_keys > 0 {
            self.bits_per_key = (self.memory_usage * 8) as f64 / self.num_keys as f64;
        }
    }
}
