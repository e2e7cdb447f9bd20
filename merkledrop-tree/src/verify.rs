//! Proof verification.
//!
//! Pure function of the proof and the claimed leaf; no tree required.
//! Recomputes the root by folding the commutative pair-combine over the
//! sibling digests and compares it to the expected root.

use crate::{MerkleProof, MerkleTreeError, hash::combine};

impl MerkleProof {
    /// Recompute the root implied by this proof for `leaf`.
    ///
    /// For a leaf present in the tree this reproduces
    /// [`MerkleTree::root`](crate::MerkleTree::root) exactly; an empty
    /// proof returns the leaf itself (single-leaf tree).
    pub fn compute_root(&self, leaf: &[u8; 32]) -> [u8; 32] {
        self.siblings
            .iter()
            .fold(*leaf, |acc, sibling| combine(&acc, sibling))
    }

    /// Verify this proof against an expected root.
    ///
    /// Fails with [`MerkleTreeError::InvalidProof`] carrying both digests
    /// if the recomputed root differs.
    pub fn verify(&self, leaf: &[u8; 32], expected_root: &[u8; 32]) -> Result<(), MerkleTreeError> {
        let computed = self.compute_root(leaf);
        if &computed != expected_root {
            return Err(MerkleTreeError::InvalidProof(format!(
                "root mismatch: expected 0x{}, got 0x{}",
                hex::encode(expected_root),
                hex::encode(computed)
            )));
        }
        Ok(())
    }
}
