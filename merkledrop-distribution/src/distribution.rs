//! Distribution document: build, verify, JSON round-trip.

use indexmap::IndexMap;
use merkledrop_tree::{ADDRESS_LEN, MerkleProof, MerkleTree, leaf_digest, parse_address};
use serde::{Deserialize, Serialize};

use crate::DistributionError;

/// One recipient's claim: tree index, amount, and inclusion proof.
///
/// `amount` is minimal `0x`-prefixed hex; `proof` digests are full
/// 32-byte `0x`-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Zero-based index assigned from balance iteration order.
    pub index: u64,
    /// Claimable amount, minimal hex.
    pub amount: String,
    /// Sibling digests from leaf to root.
    pub proof: Vec<String>,
}

/// The complete distribution document.
///
/// `claims` preserves balance insertion order, the same order that
/// assigned each entry its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Hex-encoded root of the commitment tree.
    #[serde(rename = "merkleRoot")]
    pub merkle_root: String,
    /// Hex-encoded sum of all amounts.
    #[serde(rename = "tokenTotal")]
    pub token_total: String,
    /// Recipient address to claim, insertion-ordered.
    pub claims: IndexMap<String, Claim>,
}

impl Distribution {
    /// Build the distribution document from an ordered balance mapping.
    ///
    /// Iteration order assigns each recipient its zero-based index. Every
    /// entry is packed, hashed, committed into the tree, and paired with
    /// its inclusion proof.
    pub fn build(balances: &IndexMap<[u8; ADDRESS_LEN], u128>) -> Result<Self, DistributionError> {
        let leaves: Vec<[u8; 32]> = balances
            .iter()
            .enumerate()
            .map(|(index, (recipient, amount))| leaf_digest(index as u64, recipient, *amount))
            .collect();

        let tree = MerkleTree::build(leaves.iter().copied())?;

        let token_total = balances
            .values()
            .try_fold(0u128, |acc, amount| acc.checked_add(*amount))
            .ok_or(DistributionError::AmountOverflow)?;

        let mut claims = IndexMap::with_capacity(balances.len());
        for (index, (recipient, amount)) in balances.iter().enumerate() {
            let proof = tree.proof(&leaves[index])?;
            claims.insert(
                format!("0x{}", hex::encode(recipient)),
                Claim {
                    index: index as u64,
                    amount: format!("{:#x}", amount),
                    proof: proof
                        .siblings()
                        .iter()
                        .map(|digest| format!("0x{}", hex::encode(digest)))
                        .collect(),
                },
            );
        }

        Ok(Distribution {
            merkle_root: format!("0x{}", hex::encode(tree.root())),
            token_total: format!("{:#x}", token_total),
            claims,
        })
    }

    /// Check every claim against `merkleRoot`.
    ///
    /// Re-derives each claim's leaf digest from its recipient, index, and
    /// amount, then folds its proof and compares against the root, the
    /// same computation an on-chain verifier performs.
    pub fn verify(&self) -> Result<(), DistributionError> {
        let root = parse_digest(&self.merkle_root).map_err(|message| {
            DistributionError::MalformedClaim {
                recipient: "merkleRoot".into(),
                message,
            }
        })?;

        for (recipient_str, claim) in &self.claims {
            let malformed = |message: String| DistributionError::MalformedClaim {
                recipient: recipient_str.clone(),
                message,
            };

            let recipient =
                parse_address(recipient_str).map_err(|e| malformed(e.to_string()))?;
            let amount = parse_amount(&claim.amount).map_err(malformed)?;
            let siblings = claim
                .proof
                .iter()
                .map(|digest| parse_digest(digest))
                .collect::<Result<Vec<_>, _>>()
                .map_err(malformed)?;

            let leaf = leaf_digest(claim.index, &recipient, amount);
            MerkleProof::from_siblings(siblings).verify(&leaf, &root)?;
        }
        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DistributionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, DistributionError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parse a `0x`-prefixed 32-byte hex digest.
fn parse_digest(hex_str: &str) -> Result<[u8; 32], String> {
    let cleaned = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    if cleaned.len() != 64 {
        return Err(format!(
            "digest {} has {} hex chars, expected 64",
            hex_str,
            cleaned.len()
        ));
    }
    let mut out = [0u8; 32];
    hex::decode_to_slice(cleaned, &mut out)
        .map_err(|e| format!("digest {} is not valid hex: {}", hex_str, e))?;
    Ok(out)
}

/// Parse a minimal `0x`-prefixed hex amount.
fn parse_amount(hex_str: &str) -> Result<u128, String> {
    let cleaned = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    u128::from_str_radix(cleaned, 16)
        .map_err(|e| format!("amount {} is not valid hex: {}", hex_str, e))
}
