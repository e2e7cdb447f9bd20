//! Inclusion proof type and binary encoding.
//!
//! A proof is the ordered sequence of sibling digests from the leaf layer
//! upward. Layers where the proved element was the unpaired carried tail
//! contribute no sibling, so a proof may be shorter than the tree height
//! minus one.

use bincode::{Decode, Encode};

use crate::MerkleTreeError;

/// Proofs deeper than this exceed any addressable leaf set and are
/// rejected at decode time.
const MAX_PROOF_DEPTH: usize = 64;

/// An inclusion proof: ordered sibling digests from leaf to root.
///
/// Folding [`combine`](crate::combine) over the siblings, starting from
/// the leaf digest, reproduces the tree root.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MerkleProof {
    pub(crate) siblings: Vec<[u8; 32]>,
}

impl MerkleProof {
    /// Assemble a proof from sibling digests, ordered leaf layer first.
    pub fn from_siblings(siblings: Vec<[u8; 32]>) -> Self {
        MerkleProof { siblings }
    }

    /// The sibling digests, ordered leaf layer first.
    pub fn siblings(&self) -> &[[u8; 32]] {
        &self.siblings
    }

    /// Number of sibling digests in this proof.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof carries no siblings (single-leaf tree).
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects proofs deeper than 64 layers.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, MerkleTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 1024 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| MerkleTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.siblings.len() > MAX_PROOF_DEPTH {
            return Err(MerkleTreeError::InvalidProof(format!(
                "proof depth {} exceeds maximum {}",
                proof.siblings.len(),
                MAX_PROOF_DEPTH
            )));
        }
        Ok(proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let proof = MerkleProof::from_siblings(vec![[1u8; 32], [2u8; 32], [3u8; 32]]);
        let bytes = proof.encode_to_vec().expect("encode should succeed");
        let decoded = MerkleProof::decode_from_slice(&bytes).expect("decode should succeed");
        assert_eq!(proof, decoded);
    }

    #[test]
    fn test_encode_decode_empty_proof() {
        let proof = MerkleProof::from_siblings(vec![]);
        let bytes = proof.encode_to_vec().expect("encode should succeed");
        let decoded = MerkleProof::decode_from_slice(&bytes).expect("decode should succeed");
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(MerkleProof::decode_from_slice(&[0xFFu8; 7]).is_err());
    }

    #[test]
    fn test_decode_rejects_excessive_depth() {
        let proof = MerkleProof::from_siblings(vec![[0u8; 32]; MAX_PROOF_DEPTH + 1]);
        let bytes = proof.encode_to_vec().expect("encode should succeed");
        let err = MerkleProof::decode_from_slice(&bytes).expect_err("depth 65 should be rejected");
        assert!(matches!(err, MerkleTreeError::InvalidProof(_)));
    }
}
