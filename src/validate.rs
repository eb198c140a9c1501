//! Structural validation over the raw proof, run before any hashing.
//!
//! Three checks, in order, the first failure short-circuiting the verdict
//! (spec.md §4.3, §4.5): ordering/duplicate/embedded among `proof_entries`,
//! hash-size, then embedded-prefix against the requested keys.

use core::cmp::Ordering;

use crate::path::{KeyBytes, Path, HASH_WIDTH};
use crate::proof::{Proof, Status};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

pub fn validate(proof: &Proof) -> Result<(), Status> {
    check_order(&proof.proof_entries)?;
    check_hash_sizes(&proof.proof_entries)?;
    check_embedded_against_requested(proof)?;
    Ok(())
}

fn check_order(proof_entries: &[crate::entry::ProofEntry]) -> Result<(), Status> {
    for pair in proof_entries.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        match prev.path.cmp(&cur.path) {
            Ordering::Equal => return Err(Status::DuplicatePath),
            Ordering::Greater => return Err(Status::InvalidOrder),
            Ordering::Less => {
                if prev.path.is_prefix_of(&cur.path) {
                    return Err(Status::EmbeddedPath);
                }
            }
        }
    }
    Ok(())
}

fn check_hash_sizes(proof_entries: &[crate::entry::ProofEntry]) -> Result<(), Status> {
    for entry in proof_entries {
        if entry.hash.len() != HASH_WIDTH {
            return Err(Status::InvalidHashSize);
        }
    }
    Ok(())
}

/// Any proof-entry path that is a prefix of a requested (present or
/// missing) key's leaf path makes the membership claim ambiguous.
///
/// Implements the binary-search resolution of spec.md §9's Open Question:
/// the requested keys are sorted once, then each proof entry is checked
/// against that sorted list via `partition_point` over the entry's
/// `[lower, upper]` leaf range, rather than scanning every (entry, key)
/// pair.
fn check_embedded_against_requested(proof: &Proof) -> Result<(), Status> {
    let mut requested: Vec<KeyBytes> =
        Vec::with_capacity(proof.entries.len() + proof.missing_keys.len());
    requested.extend(proof.entries.iter().map(|e| e.key));
    requested.extend(proof.missing_keys.iter().copied());
    requested.sort_unstable();

    for entry in &proof.proof_entries {
        if any_requested_key_in_range(&requested, &entry.path) {
            return Err(Status::EmbeddedPath);
        }
    }
    Ok(())
}

fn any_requested_key_in_range(sorted_keys: &[KeyBytes], path: &Path) -> bool {
    let (lower, upper) = path.leaf_range();
    let idx = sorted_keys.partition_point(|k| *k < lower);
    idx < sorted_keys.len() && sorted_keys[idx] <= upper
}
