use thiserror::Error;

/// Errors from Merkle distribution tree operations.
#[derive(Debug, Error)]
pub enum MerkleTreeError {
    /// Malformed or out-of-range entry fields at encode time.
    #[error("encoding error: {0}")]
    Encoding(String),
    /// Tree construction attempted on an empty leaf set.
    #[error("cannot build a tree from an empty leaf set")]
    EmptyLeafSet,
    /// Proof requested for a digest absent from layer 0.
    #[error("leaf {0} is not present in the tree")]
    LeafNotFound(String),
    /// Proof verification or decoding failed.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
