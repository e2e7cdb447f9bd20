//! Tree construction and proof derivation.
//!
//! Layer 0 is the deduplicated, byte-sorted leaf set. Each further layer
//! pairs elements at `(0,1), (2,3), …` and merges them with
//! [`combine`](crate::combine); an odd tail is carried to the next layer
//! unhashed. Construction stops at a single-element layer, the root.
//!
//! Canonical sorting makes the root independent of input iteration order:
//! two distributors enumerating the same balances in different order
//! publish the identical commitment.

use std::collections::BTreeSet;

use crate::{MerkleProof, MerkleTreeError, hash::combine};

/// An immutable Merkle tree over a set of 32-byte leaf digests.
///
/// The tree owns every layer for its lifetime and is never mutated after
/// [`build`](MerkleTree::build); it may be shared freely across concurrent
/// proof derivations.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    layers: Vec<Vec<[u8; 32]>>,
}

impl MerkleTree {
    /// Build a tree from leaf digests.
    ///
    /// Input digests are deduplicated (set semantics) and sorted in
    /// unsigned byte-lexicographic order before layering, so the order and
    /// multiplicity of the input are irrelevant. If two entries encode to
    /// the same digest, only one leaf participates in the tree; the
    /// collapse is silent and only that single leaf is provable.
    ///
    /// Fails with [`MerkleTreeError::EmptyLeafSet`] if the deduplicated
    /// set is empty.
    pub fn build<I>(leaves: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = [u8; 32]>,
    {
        let sorted: BTreeSet<[u8; 32]> = leaves.into_iter().collect();
        if sorted.is_empty() {
            return Err(MerkleTreeError::EmptyLeafSet);
        }

        let mut layers: Vec<Vec<[u8; 32]>> = vec![sorted.into_iter().collect()];
        while layers[layers.len() - 1].len() > 1 {
            let next = Self::next_layer(&layers[layers.len() - 1]);
            layers.push(next);
        }
        Ok(MerkleTree { layers })
    }

    /// Derive the parent layer: pairs merged with `combine`, odd tail
    /// carried forward unchanged.
    fn next_layer(layer: &[[u8; 32]]) -> Vec<[u8; 32]> {
        layer
            .chunks(2)
            .map(|pair| match pair {
                [a, b] => combine(a, b),
                [tail] => *tail,
                _ => unreachable!("chunks(2) yields one- or two-element slices"),
            })
            .collect()
    }

    /// The root digest: the single element of the final layer.
    pub fn root(&self) -> [u8; 32] {
        self.layers[self.layers.len() - 1][0]
    }

    /// Number of distinct leaves in layer 0.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of layers, from leaves to root inclusive.
    pub fn height(&self) -> usize {
        self.layers.len()
    }

    /// The sorted layer-0 digests.
    pub fn leaves(&self) -> &[[u8; 32]] {
        &self.layers[0]
    }

    /// Position of `leaf` in sorted layer 0, if present.
    pub fn leaf_index(&self, leaf: &[u8; 32]) -> Option<usize> {
        self.layers[0].binary_search(leaf).ok()
    }

    /// Derive the inclusion proof for `leaf`.
    ///
    /// Walks from the leaf's layer-0 position upward, appending the
    /// sibling digest (`index ^ 1`) of each layer. When the position is an
    /// unpaired tail the layer contributes nothing, mirroring the carry in
    /// construction.
    ///
    /// Fails with [`MerkleTreeError::LeafNotFound`] if `leaf` is not in
    /// layer 0, including a digest that collapsed into another at build
    /// time.
    pub fn proof(&self, leaf: &[u8; 32]) -> Result<MerkleProof, MerkleTreeError> {
        let mut index = self
            .leaf_index(leaf)
            .ok_or_else(|| MerkleTreeError::LeafNotFound(format!("0x{}", hex::encode(leaf))))?;

        let mut siblings = Vec::new();
        for layer in &self.layers {
            let sibling = index ^ 1;
            if sibling < layer.len() {
                siblings.push(layer[sibling]);
            }
            index /= 2;
        }
        Ok(MerkleProof::from_siblings(siblings))
    }
}
