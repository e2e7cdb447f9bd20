use thiserror::Error;

/// Errors from distribution document assembly and verification.
#[derive(Debug, Error)]
pub enum DistributionError {
    /// An error propagated from the underlying tree core.
    #[error(transparent)]
    Tree(#[from] merkledrop_tree::MerkleTreeError),
    /// The sum of all amounts overflows the token total.
    #[error("token total overflows u128")]
    AmountOverflow,
    /// A claim field could not be interpreted.
    #[error("malformed claim for {recipient}: {message}")]
    MalformedClaim {
        /// The claim's recipient key as it appears in the document.
        recipient: String,
        /// What was wrong with it.
        message: String,
    },
    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
