//! Level-order trie: staging, breadth-first encoding, queries and merging
//!
//! The public entry point is [`LoudsTrie`]; [`merge_trie`] combines two
//! built tries into a new one.

pub(crate) mod builder;
pub(crate) mod level;
pub mod louds;
pub mod merge;
pub mod stats;

pub use louds::LoudsTrie;
pub use merge::merge_trie;
pub use stats::TrieStats;
