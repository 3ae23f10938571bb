//! Breadth-first encoder turning a key batch into the level-order encoding
//!
//! The encoder sorts and deduplicates the staged keys, then walks the
//! implicit trie breadth-first. Each queue entry is a contiguous range of
//! sorted keys sharing a prefix, which is exactly one trie node; grouping
//! the range by its next byte yields the node's child edges in ascending
//! label order, and the per-level unary degree bits fall out of the visit
//! order for free.

use std::collections::VecDeque;

use log::debug;

use crate::error::Result;
use crate::trie::level::Level;
use crate::trie::louds::TrieCore;

/// One implicit trie node during construction: the sorted keys in
/// `lo..hi` share a common prefix of `depth` bytes.
struct KeyRange {
    lo: usize,
    hi: usize,
    depth: usize,
}

/// Sort, deduplicate and breadth-first encode `keys` into levels.
///
/// On success the staged key list has served its purpose; on failure it is
/// left holding the same key set (sorted and deduplicated), so a failed
/// build does not lose staged keys.
pub(crate) fn encode(keys: &mut Vec<Vec<u8>>) -> Result<TrieCore> {
    keys.sort_unstable();
    keys.dedup();

    let n_keys = keys.len();
    if n_keys == 0 {
        return Ok(TrieCore::empty());
    }

    let max_len = keys.iter().map(|k| k.len()).max().unwrap_or(0);
    let mut levels: Vec<Level> = (0..=max_len).map(|_| Level::new()).collect();
    let mut n_nodes = 0usize;

    let mut queue = VecDeque::new();
    queue.push_back(KeyRange {
        lo: 0,
        hi: n_keys,
        depth: 0,
    });

    while let Some(KeyRange { lo, hi, depth }) = queue.pop_front() {
        let level = &mut levels[depth];
        n_nodes += 1;

        // Sorted order puts the key that ends exactly here first.
        let terminal = keys[lo].len() == depth;
        level.outs.push(terminal)?;

        let mut pos = lo + usize::from(terminal);
        while pos < hi {
            let label = keys[pos][depth];
            let mut end = pos + 1;
            while end < hi && keys[end][depth] == label {
                end += 1;
            }
            level.louds.push(true)?;
            level.labels.push(label);
            queue.push_back(KeyRange {
                lo: pos,
                hi: end,
                depth: depth + 1,
            });
            pos = end;
        }
        level.louds.push(false)?;
    }

    let mut key_offset = 0u64;
    for level in &mut levels {
        level.finalize()?;
        level.key_offset = key_offset;
        key_offset += level.outs.count_ones() as u64;
    }

    debug!(
        "encoded {} keys into {} nodes across {} levels",
        n_keys,
        n_nodes,
        levels.len()
    );

    Ok(TrieCore::new(levels, n_keys, n_nodes))
}
