//! Claims document assembly for Merkle token distributions.
//!
//! The collaborator surface around the core tree: takes an
//! insertion-ordered mapping of recipient address to amount, assigns each
//! entry its zero-based index, builds the commitment tree, and emits the
//! JSON claims document consumed by downstream verifier tooling:
//!
//! ```json
//! {
//!   "merkleRoot": "0x…",
//!   "tokenTotal": "0x…",
//!   "claims": { "0x<address>": { "index": 0, "amount": "0x…", "proof": ["0x…"] } }
//! }
//! ```
//!
//! Field names are part of the wire contract and never change.

#![warn(missing_docs)]

mod distribution;
mod error;

pub use distribution::{Claim, Distribution};
pub use error::DistributionError;
