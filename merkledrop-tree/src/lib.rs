//! Keccak-256 Merkle distribution tree.
//!
//! Computes a deterministic commitment over a set of
//! `(index, recipient, amount)` entries and derives, for each entry, an
//! inclusion proof checkable against the root by an external verifier.
//!
//! Hash scheme:
//! - Leaf digests: `keccak256(index_u256_be || recipient_20 || amount_u256_be)`
//! - Internal nodes: `keccak256(min(a, b) || max(a, b))`
//!
//! Sorting the pair before hashing makes [`combine`] commutative, so a
//! verifier folding a proof upward never needs to know whether a sibling
//! was the left or right child. Layer 0 is the deduplicated, byte-sorted
//! leaf set; an odd tail in any layer is carried to the next layer
//! unhashed.
//!
//! # Core types
//!
//! - [`MerkleTree`]: build layers from leaf digests, expose the root,
//!   derive proofs.
//! - [`MerkleProof`]: ordered sibling digests (verify, compute root,
//!   binary encode/decode).

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
mod leaf;
mod proof;
mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::MerkleTreeError;
pub use hash::{combine, keccak256};
pub use leaf::{ADDRESS_LEN, PACKED_ENTRY_LEN, leaf_digest, packed_entry, parse_address};
pub use proof::MerkleProof;
pub use tree::MerkleTree;
