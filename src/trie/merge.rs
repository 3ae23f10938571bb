//! Merging built tries into new ones
//!
//! Merging decodes the full key set of each input by rank/select traversal,
//! unions the sets by value, and runs the union through the ordinary
//! builder. Correctness is therefore a corollary of build correctness; no
//! bit-level splicing of the two encodings is attempted. Cost is linear in
//! the total key bytes of both inputs.

use log::debug;

use crate::error::Result;
use crate::trie::builder;
use crate::trie::louds::LoudsTrie;

/// Build a new trie containing the union of both inputs' key sets
///
/// Both inputs must be built; neither is modified. The result is freshly
/// owned and starts directly in the built phase. Keys present in both
/// inputs collapse to a single entry, and key IDs are assigned anew by the
/// resulting build.
///
/// # Examples
///
/// ```rust
/// use louds_trie::{merge_trie, LoudsTrie};
///
/// let mut a = LoudsTrie::new();
/// a.add(b"apple")?;
/// a.add(b"cherry")?;
/// a.build()?;
///
/// let mut b = LoudsTrie::new();
/// b.add(b"banana")?;
/// b.add(b"cherry")?;
/// b.build()?;
///
/// let merged = merge_trie(&a, &b)?;
/// assert_eq!(merged.n_keys()?, 3);
/// assert!(merged.lookup(b"banana")?.is_some());
/// # Ok::<(), louds_trie::TrieError>(())
/// ```
pub fn merge_trie(a: &LoudsTrie, b: &LoudsTrie) -> Result<LoudsTrie> {
    let mut keys = a.core()?.collect_keys()?;
    keys.extend(b.core()?.collect_keys()?);

    let core = builder::encode(&mut keys)?;
    debug!(
        "merged tries of {} and {} keys into {} keys",
        a.core()?.n_keys(),
        b.core()?.n_keys(),
        core.n_keys()
    );
    Ok(LoudsTrie::from_core(core))
}

impl LoudsTrie {
    /// Merge `other`'s keys into this trie in place
    ///
    /// Both tries must be built. The receiver is rebuilt as the union of
    /// its own keys and `other`'s; `other` is read-only. The replacement
    /// happens only after the merged trie is fully constructed, so a failed
    /// merge leaves the receiver unchanged. Exclusive access through
    /// `&mut self` keeps readers from observing a partial rebuild.
    pub fn merge(&mut self, other: &LoudsTrie) -> Result<()> {
        let merged = merge_trie(&*self, other)?;
        *self = merged;
        Ok(())
    }
}
