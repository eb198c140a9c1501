//! The verifier facade: dispatches empty / singleton / general cases and
//! assembles the final verdict (spec.md §4.5).

use crate::entry::{Hash32, Node};
use crate::fold::fold_root;
use crate::hasher::{hash_index, hash_leaf_value, hash_single_entry, Hasher};
use crate::path::{NodeType, Path, HASH_WIDTH};
use crate::proof::{Proof, Status, Verdict};
use crate::validate::validate;

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::collections::{BTreeMap, BTreeSet};

/// Verify a proof against no particular expected root: reconstruct the
/// index hash and let the caller compare it to its own trusted root.
///
/// Structural errors (ordering, duplicates, embedded paths, hash-size
/// mismatches, non-terminal singletons) are reported as
/// `Verdict::Invalid(status)`. There is no other failure mode: the hash
/// primitive is assumed total and infallible (spec.md §7).
pub fn check<H: Hasher>(proof: &Proof) -> Verdict {
    if let Err(status) = validate(proof) {
        return Verdict::Invalid(status);
    }

    let root = match compute_root::<H>(proof) {
        Ok(root) => root,
        Err(status) => return Verdict::Invalid(status),
    };

    let entries: BTreeMap<_, _> = proof
        .entries
        .iter()
        .map(|e| (e.key, e.value.clone()))
        .collect();
    let missing_keys: BTreeSet<_> = proof.missing_keys.iter().copied().collect();

    Verdict::Correct {
        index_hash: hash_index::<H>(&root),
        entries,
        missing_keys,
    }
}

fn compute_root<H: Hasher>(proof: &Proof) -> Result<Hash32, Status> {
    let total = proof.proof_entries.len() + proof.entries.len();
    match total {
        0 => Ok([0u8; HASH_WIDTH]),
        1 => single_entry_root::<H>(proof),
        _ => Ok(fold_root::<H>(merge_nodes(proof)?)),
    }
}

fn single_entry_root<H: Hasher>(proof: &Proof) -> Result<Hash32, Status> {
    if let Some(entry) = proof.proof_entries.first() {
        if entry.path.node_type() == NodeType::Branch {
            return Err(Status::NonTerminalNode);
        }
        let hash = to_hash32(&entry.hash)?;
        return Ok(hash_single_entry::<H>(&entry.path, &hash));
    }

    let entry = proof.entries.first().expect("total == 1");
    let leaf_value_hash = hash_leaf_value::<H>(&entry.value);
    Ok(hash_single_entry::<H>(
        &Path::new_leaf(&entry.key),
        &leaf_value_hash,
    ))
}

/// Synthesize leaf nodes for every requested present entry, merge them
/// with the already size-validated `proof_entries`.
fn merge_nodes<H: Hasher>(proof: &Proof) -> Result<Vec<Node>, Status> {
    let mut nodes = Vec::with_capacity(proof.proof_entries.len() + proof.entries.len());
    for entry in &proof.proof_entries {
        nodes.push(Node {
            path: entry.path,
            hash: to_hash32(&entry.hash)?,
        });
    }
    for entry in &proof.entries {
        nodes.push(Node {
            path: Path::new_leaf(&entry.key),
            hash: hash_leaf_value::<H>(&entry.value),
        });
    }
    Ok(nodes)
}

fn to_hash32(bytes: &[u8]) -> Result<Hash32, Status> {
    bytes.try_into().map_err(|_| Status::InvalidHashSize)
}
