//! Keccak-256 hashing and the commutative pair-combine.
//!
//! - One-shot hashing: `keccak256(bytes)`
//! - Sibling merge: `keccak256(min(a, b) || max(a, b))`
//!
//! The pair is sorted byte-lexicographically before hashing, which makes
//! `combine(a, b) == combine(b, a)`. A verifier recomputing upward from a
//! leaf only needs the sibling digest, never its side.

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let hash = Keccak256::new().chain_update(data).finalize();
    hash.into()
}

/// Merge two sibling digests into their parent:
/// `keccak256(min(a, b) || max(a, b))`.
pub fn combine(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut input = [0u8; 64];
    input[..32].copy_from_slice(lo);
    input[32..].copy_from_slice(hi);
    keccak256(&input)
}
