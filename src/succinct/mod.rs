//! Succinct primitives underlying the trie encoding
//!
//! Provides the append-then-finalize bit vector with rank (count of set bits
//! up to a position) and select (position of the nth set/clear bit) support
//! that all trie navigation is built on.

pub mod bit_vector;

pub use bit_vector::BitVector;
