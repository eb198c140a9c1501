//! The proof input and the verdict output.

use crate::entry::{MapEntry, ProofEntry};
use crate::path::KeyBytes;

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::collections::{BTreeMap, BTreeSet};

/// An untrusted proof artifact: the subtrees a prover claims hash to the
/// values in `proof_entries`, the keys it claims are present with the given
/// values, and the keys it claims are absent.
///
/// Borrowed for the duration of a `check` call; never mutated.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof {
    pub proof_entries: Vec<ProofEntry>,
    pub entries: Vec<MapEntry>,
    pub missing_keys: Vec<KeyBytes>,
}

/// The specific reason a proof was rejected, or `CORRECT` to indicate that
/// no structural check failed (only ever observed nested inside
/// `Verdict::Correct` conceptually; `check` never returns
/// `Invalid(Status::Correct)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Correct,
    InvalidOrder,
    DuplicatePath,
    EmbeddedPath,
    NonTerminalNode,
    InvalidHashSize,
}

/// The result of checking a proof.
#[derive(Debug, Clone)]
pub enum Verdict {
    /// The proof is structurally sound and folds to `index_hash`. The
    /// caller must still compare `index_hash` against its own trusted root;
    /// `check` does not know what root the caller expects.
    Correct {
        index_hash: [u8; 32],
        entries: BTreeMap<KeyBytes, Vec<u8>>,
        missing_keys: BTreeSet<KeyBytes>,
    },
    /// The proof was rejected for the given reason.
    Invalid(Status),
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }

    pub fn status(&self) -> Status {
        match self {
            Verdict::Correct { .. } => Status::Correct,
            Verdict::Invalid(status) => *status,
        }
    }
}
