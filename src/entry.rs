//! The proof's wire-level data model: entries as handed to the verifier by
//! the parser collaborator (spec.md §6).

use crate::path::{KeyBytes, Path};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A 32-byte cryptographic hash.
pub type Hash32 = [u8; 32];

/// A `(path, hash)` pair asserting that the subtree rooted at `path` hashes
/// to `hash`. `hash` is not yet known to be 32 bytes; that is checked by
/// the structural validator (spec.md §4.3, check 2).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofEntry {
    pub path: Path,
    pub hash: Vec<u8>,
}

/// A requested present key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapEntry {
    pub key: KeyBytes,
    pub value: Vec<u8>,
}

/// A size-validated `(path, hash)` pair used internally once the structural
/// validator has confirmed `hash` is exactly 32 bytes. This is what the
/// contour folder and single-entry path actually operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub path: Path,
    pub hash: Hash32,
}
