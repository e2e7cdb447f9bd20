//! Test fixtures: the reference three-entry distribution.
//!
//! Addresses, amounts, and expected digests come from the original
//! distributor's published values, so these constants double as a
//! cross-implementation compatibility check.

use crate::{ADDRESS_LEN, leaf_digest, parse_address};

/// The three reference recipients, in assignment order.
pub(crate) const RECIPIENTS: [&str; 3] = [
    "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
    "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
    "0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc",
];

/// Amounts for the reference recipients: 1e18, 2e18, 3e18.
pub(crate) const AMOUNTS: [u128; 3] = [
    1_000_000_000_000_000_000,
    2_000_000_000_000_000_000,
    3_000_000_000_000_000_000,
];

/// Root committed over the three reference entries.
pub(crate) const REFERENCE_ROOT: &str =
    "ef34a453dc84c8f17f34dedc58a66dcd2558aaac344cb41f33c0a244f8bf49a0";

/// Decode a 64-char hex string into a digest.
pub(crate) fn digest(hex_str: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut out).expect("test digest should be valid hex");
    out
}

/// Leaf digests of the three reference entries, in assignment order.
pub(crate) fn reference_leaves() -> Vec<[u8; 32]> {
    RECIPIENTS
        .iter()
        .zip(AMOUNTS)
        .enumerate()
        .map(|(index, (addr, amount))| {
            let recipient: [u8; ADDRESS_LEN] =
                parse_address(addr).expect("reference address should parse");
            leaf_digest(index as u64, &recipient, amount)
        })
        .collect()
}
