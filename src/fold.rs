//! The contour fold: reconstructs the Merkle root from the sorted, merged
//! list of hashed leaves and supplied proof entries (spec.md §4.4).
//!
//! Iterative rather than recursive, following the teacher's own rationale
//! for its `pending_siblings` left-frontier loop in `verify_update`: a
//! fully right-leaning proof would blow the native stack with a recursive
//! tree build, so the contour is an explicit `Vec`-backed stack instead.

use crate::entry::Node;
use crate::hasher::Hasher;
use crate::path::Path;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Fold `entries` (already containing at least two nodes) into a single
/// Merkle root.
///
/// `entries` need not be pre-sorted; this sorts them by path ascending
/// before folding.
pub fn fold_root<H: Hasher>(mut entries: Vec<Node>) -> crate::entry::Hash32 {
    debug_assert!(entries.len() >= 2);
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    let mut iter = entries.into_iter();
    let mut stack: Vec<Node> = Vec::new();
    // UNWRAP: caller guarantees len >= 2 (checked above, enforced by the
    // facade's size dispatch before this is ever called).
    stack.push(iter.next().unwrap());
    stack.push(iter.next().unwrap());

    let mut last_prefix = Path::common_prefix(&stack[0].path, &stack[1].path);

    for cur in iter {
        // UNWRAP: stack always holds at least one entry inside this loop.
        let new_prefix = Path::common_prefix(&stack.last().unwrap().path, &cur.path);
        while stack.len() > 1 && new_prefix.num_significant_bits() < last_prefix.num_significant_bits() {
            last_prefix = fold_one::<H>(&mut stack, last_prefix);
        }
        stack.push(cur);
        last_prefix = new_prefix;
    }

    while stack.len() > 1 {
        last_prefix = fold_one::<H>(&mut stack, last_prefix);
    }

    // UNWRAP: the loops above leave exactly one entry on the stack.
    stack.pop().unwrap().hash
}

/// Combine the top two entries of `stack` into one entry rooted at `prefix`,
/// returning the common prefix between the new entry and whatever is now
/// below it (or `prefix` unchanged if nothing is below it — the caller
/// never reads that value in that case).
fn fold_one<H: Hasher>(stack: &mut Vec<Node>, prefix: Path) -> Path {
    // UNWRAP: callers only invoke fold_one while stack.len() > 1.
    let right = stack.pop().unwrap();
    let left = stack.pop().unwrap();
    let hash = crate::hasher::hash_branch::<H>(&left, &right);

    let result_prefix = match stack.last() {
        Some(below) => Path::common_prefix(&below.path, &prefix),
        None => prefix,
    };

    stack.push(Node { path: prefix, hash });
    result_prefix
}
