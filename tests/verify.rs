//! End-to-end scenarios from spec.md §8, driving the public `check` facade
//! exactly the way a client holding only a trusted root hash would: build a
//! `Proof`, call `check`, and inspect the `Verdict`.

use flatproof_core::{
    check, hash_branch, hash_index, hash_leaf_value, hash_single_entry, KeyBytes, MapEntry, Node,
    Path, ProofEntry, Sha256Hasher, Status, Verdict, HASH_WIDTH,
};

fn key(tag: u8) -> KeyBytes {
    let mut k = [0u8; HASH_WIDTH];
    k[0] = tag;
    k
}

fn branch_path(bits: u8, n: u16) -> Path {
    let mut bytes = [0u8; HASH_WIDTH];
    bytes[0] = bits;
    Path::from_parts(bytes, n).unwrap()
}

fn empty_proof() -> flatproof_core::Proof {
    flatproof_core::Proof {
        proof_entries: Vec::new(),
        entries: Vec::new(),
        missing_keys: Vec::new(),
    }
}

/// S1 — empty proof.
#[test]
fn s1_empty_proof_is_correct() {
    let verdict = check::<Sha256Hasher>(&empty_proof());
    match verdict {
        Verdict::Correct { index_hash, entries, missing_keys } => {
            assert_eq!(index_hash, hash_index::<Sha256Hasher>(&[0u8; HASH_WIDTH]));
            assert!(entries.is_empty());
            assert!(missing_keys.is_empty());
        }
        other => panic!("expected Correct, got {:?}", other),
    }
}

/// S2 — singleton present entry.
#[test]
fn s2_singleton_present() {
    let k = key(0x11);
    let mut proof = empty_proof();
    proof.entries.push(MapEntry {
        key: k,
        value: vec![0xAA],
    });

    let verdict = check::<Sha256Hasher>(&proof);
    let Verdict::Correct { index_hash, entries, .. } = verdict else {
        panic!("expected Correct");
    };
    assert_eq!(entries.get(&k), Some(&vec![0xAA]));

    let leaf_value_hash = hash_leaf_value::<Sha256Hasher>(&[0xAA]);
    let root = hash_single_entry::<Sha256Hasher>(&Path::new_leaf(&k), &leaf_value_hash);
    assert_eq!(index_hash, hash_index::<Sha256Hasher>(&root));
}

/// S3 — singleton branch proof-entry (no present entries) is non-terminal.
#[test]
fn s3_singleton_branch_is_non_terminal() {
    let mut proof = empty_proof();
    proof.proof_entries.push(ProofEntry {
        path: branch_path(0b1000_0000, 1),
        hash: vec![0u8; 32],
    });

    assert_eq!(
        check::<Sha256Hasher>(&proof).status(),
        Status::NonTerminalNode
    );
}

/// S4 — duplicate proof-entry paths.
#[test]
fn s4_duplicate_path_rejected() {
    let p = branch_path(0b1000_0000, 1);
    let mut proof = empty_proof();
    proof.proof_entries.push(ProofEntry {
        path: p,
        hash: vec![1u8; 32],
    });
    proof.proof_entries.push(ProofEntry {
        path: p,
        hash: vec![2u8; 32],
    });

    assert_eq!(
        check::<Sha256Hasher>(&proof).status(),
        Status::DuplicatePath
    );
}

/// S5 — out-of-order proof entries.
#[test]
fn s5_out_of_order_rejected() {
    let p0 = branch_path(0b0000_0000, 1);
    let p1 = branch_path(0b1000_0000, 1);
    let mut proof = empty_proof();
    proof.proof_entries.push(ProofEntry {
        path: p1,
        hash: vec![1u8; 32],
    });
    proof.proof_entries.push(ProofEntry {
        path: p0,
        hash: vec![2u8; 32],
    });

    assert_eq!(
        check::<Sha256Hasher>(&proof).status(),
        Status::InvalidOrder
    );
}

/// S6 — a proof entry embedding a requested present key.
#[test]
fn s6_embedded_path_rejected() {
    let k = key(0b1010_0000);
    let prefix = branch_path(0b1000_0000, 1); // covers every key starting with bit 1

    let mut proof = empty_proof();
    proof.proof_entries.push(ProofEntry {
        path: prefix,
        hash: vec![0u8; 32],
    });
    proof.entries.push(MapEntry {
        key: k,
        value: vec![1],
    });

    assert_eq!(
        check::<Sha256Hasher>(&proof).status(),
        Status::EmbeddedPath
    );
}

/// S7 — two sibling leaves fold to one branch, wrapped in the index hash.
#[test]
fn s7_two_siblings_fold_correctly() {
    let k0 = key(0b0000_0000);
    let k1 = key(0b1000_0000);
    let h0 = [0xAAu8; 32];
    let h1 = [0xBBu8; 32];

    let mut proof = empty_proof();
    proof.proof_entries.push(ProofEntry {
        path: Path::new_leaf(&k0),
        hash: h0.to_vec(),
    });
    proof.proof_entries.push(ProofEntry {
        path: Path::new_leaf(&k1),
        hash: h1.to_vec(),
    });

    let verdict = check::<Sha256Hasher>(&proof);
    let Verdict::Correct { index_hash, .. } = verdict else {
        panic!("expected Correct")
    };

    let left = Node {
        path: Path::new_leaf(&k0),
        hash: h0,
    };
    let right = Node {
        path: Path::new_leaf(&k1),
        hash: h1,
    };
    let expected_root = hash_branch::<Sha256Hasher>(&left, &right);
    assert_eq!(index_hash, hash_index::<Sha256Hasher>(&expected_root));
}

/// Boundary: proof-entry hash of 31 or 33 bytes is rejected regardless of
/// where else it appears in the proof.
#[test]
fn boundary_hash_size_31_and_33() {
    for size in [31usize, 33] {
        let mut proof = empty_proof();
        proof.proof_entries.push(ProofEntry {
            path: branch_path(0b1000_0000, 1),
            hash: vec![0u8; size],
        });
        assert_eq!(
            check::<Sha256Hasher>(&proof).status(),
            Status::InvalidHashSize,
            "size {size} should be rejected",
        );
    }
}

/// Boundary: singleton absent — no entries, one leaf-type proof-entry.
#[test]
fn boundary_singleton_absent() {
    let k = key(0x42);
    let mut proof = empty_proof();
    proof.proof_entries.push(ProofEntry {
        path: Path::new_leaf(&k),
        hash: vec![5u8; 32],
    });

    assert!(check::<Sha256Hasher>(&proof).is_correct());
}

/// Property 2 (spec.md §8): reordering `proof_entries` only ever yields
/// CORRECT for the unique ascending ordering; any other ordering is
/// rejected (never silently accepted with a different root).
#[test]
fn reordering_proof_entries_is_rejected_unless_ascending() {
    let k0 = key(0b0000_0000);
    let k1 = key(0b1000_0000);
    let h0 = [0x01u8; 32];
    let h1 = [0x02u8; 32];

    let ascending = {
        let mut p = empty_proof();
        p.proof_entries.push(ProofEntry {
            path: Path::new_leaf(&k0),
            hash: h0.to_vec(),
        });
        p.proof_entries.push(ProofEntry {
            path: Path::new_leaf(&k1),
            hash: h1.to_vec(),
        });
        p
    };
    let descending = {
        let mut p = empty_proof();
        p.proof_entries.push(ProofEntry {
            path: Path::new_leaf(&k1),
            hash: h1.to_vec(),
        });
        p.proof_entries.push(ProofEntry {
            path: Path::new_leaf(&k0),
            hash: h0.to_vec(),
        });
        p
    };

    assert!(check::<Sha256Hasher>(&ascending).is_correct());
    assert_eq!(
        check::<Sha256Hasher>(&descending).status(),
        Status::InvalidOrder
    );
}

/// Property 3 (spec.md §8): mutating a single byte of a proof-entry hash
/// changes the reconstructed index hash.
#[test]
fn mutating_a_hash_byte_changes_the_root() {
    let k0 = key(0b0000_0000);
    let k1 = key(0b1000_0000);

    let build = |h0_byte: u8| {
        let mut p = empty_proof();
        p.proof_entries.push(ProofEntry {
            path: Path::new_leaf(&k0),
            hash: vec![h0_byte; 32],
        });
        p.proof_entries.push(ProofEntry {
            path: Path::new_leaf(&k1),
            hash: vec![0x02; 32],
        });
        p
    };

    let original = check::<Sha256Hasher>(&build(0x01));
    let mutated = check::<Sha256Hasher>(&build(0x03));

    let (Verdict::Correct { index_hash: h1, .. }, Verdict::Correct { index_hash: h2, .. }) =
        (original, mutated)
    else {
        panic!("expected both proofs to be structurally correct");
    };
    assert_ne!(h1, h2);
}

/// `check` is pure: two calls on equal inputs produce equal verdicts.
#[test]
fn check_is_pure() {
    let k = key(0x77);
    let mut proof = empty_proof();
    proof.entries.push(MapEntry {
        key: k,
        value: vec![9, 9, 9],
    });
    proof.missing_keys.push(key(0x88));

    let v1 = check::<Sha256Hasher>(&proof);
    let v2 = check::<Sha256Hasher>(&proof);
    assert_eq!(v1.status(), v2.status());
    if let (Verdict::Correct { index_hash: h1, .. }, Verdict::Correct { index_hash: h2, .. }) =
        (&v1, &v2)
    {
        assert_eq!(h1, h2);
    }
}
