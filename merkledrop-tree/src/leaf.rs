//! Leaf entry encoding.
//!
//! Each `(index, recipient, amount)` entry is packed into a fixed 84-byte
//! layout with no delimiters or length prefixes:
//!
//! `index (32 BE) || recipient (20) || amount (32 BE)`
//!
//! and hashed with Keccak-256 to produce the leaf digest. Integers occupy
//! full 32-byte fields, zero-extended, so the digest matches what a
//! verifier recomputes from `uint256`-width fields. Identical entries
//! always yield identical digests across runs and implementations.

use crate::{MerkleTreeError, hash::keccak256};

/// Byte length of a recipient address.
pub const ADDRESS_LEN: usize = 20;

/// Byte length of a packed `(index, recipient, amount)` entry.
pub const PACKED_ENTRY_LEN: usize = 84;

/// Parse a recipient address from a hex string, with or without a `0x`
/// prefix.
pub fn parse_address(addr: &str) -> Result<[u8; ADDRESS_LEN], MerkleTreeError> {
    let cleaned = addr.trim();
    let cleaned = cleaned.strip_prefix("0x").unwrap_or(cleaned);
    if cleaned.len() != ADDRESS_LEN * 2 {
        return Err(MerkleTreeError::Encoding(format!(
            "address {} has {} hex chars, expected {}",
            addr,
            cleaned.len(),
            ADDRESS_LEN * 2
        )));
    }
    let mut out = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(cleaned, &mut out)
        .map_err(|e| MerkleTreeError::Encoding(format!("address {} is not valid hex: {}", addr, e)))?;
    Ok(out)
}

/// Pack an entry into its fixed 84-byte layout.
pub fn packed_entry(index: u64, recipient: &[u8; ADDRESS_LEN], amount: u128) -> [u8; PACKED_ENTRY_LEN] {
    let mut out = [0u8; PACKED_ENTRY_LEN];
    // u64 index zero-extended into the 32-byte field
    out[24..32].copy_from_slice(&index.to_be_bytes());
    out[32..52].copy_from_slice(recipient);
    // u128 amount zero-extended into the 32-byte field
    out[68..84].copy_from_slice(&amount.to_be_bytes());
    out
}

/// Compute the leaf digest of an entry: `keccak256(packed_entry(..))`.
pub fn leaf_digest(index: u64, recipient: &[u8; ADDRESS_LEN], amount: u128) -> [u8; 32] {
    keccak256(&packed_entry(index, recipient, amount))
}
