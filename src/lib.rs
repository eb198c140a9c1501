//! Verifier for flat Merkle-Patricia map proofs.
//!
//! Given a compact proof artifact produced by an untrusted party, reconstructs
//! the root hash of a sparse binary Merkle-Patricia trie keyed by fixed-width
//! binary paths, and returns either the reconstructed index hash together
//! with the confirmed present/absent key sets, or a specific rejection
//! reason. See `check` for the single entry point.
//!
//! The proof format encodes only the leaves and the sibling branches
//! strictly required to recompute the root; intermediate branches are not
//! transmitted. [`fold::fold_root`] is the component that reconstructs them,
//! in the order the original tree would have used, from the sorted mixed
//! list of proof entries and hashed leaves.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod entry;
mod fold;
mod hasher;
mod path;
mod proof;
mod validate;
mod verify;

pub use entry::{Hash32, MapEntry, Node, ProofEntry};
pub use hasher::{
    hash_branch, hash_index, hash_leaf_value, hash_single_entry, Hasher, INDEX_PREFIX,
    LEAF_VALUE_PREFIX, MAP_NODE_PREFIX,
};
#[cfg(feature = "blake3-hasher")]
pub use hasher::Blake3Hasher;
#[cfg(feature = "sha2-hasher")]
pub use hasher::Sha256Hasher;
pub use path::{KeyBytes, NodeType, Path, HASH_WIDTH, HASH_WIDTH_BITS};
pub use proof::{Proof, Status, Verdict};
pub use verify::check;
