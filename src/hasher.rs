//! Domain-separated hash derivations for leaves, branches, single-entry
//! roots, and the index hash.

use crate::entry::{Hash32, Node};
use crate::path::{Path, HASH_WIDTH};

use arrayvec::ArrayVec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Leaf value hash prefix: `H_leaf(v) = hash(0x00 || v)`.
pub const LEAF_VALUE_PREFIX: u8 = 0x00;
/// Index (map root) hash prefix: `H_index(root) = hash(0x03 || root)`.
pub const INDEX_PREFIX: u8 = 0x03;
/// Map node (branch / single-entry) hash prefix.
pub const MAP_NODE_PREFIX: u8 = 0x04;

/// A reentrant cryptographic hash function producing a 32-byte digest.
///
/// Implementations must be pure and side-effect free; `check` assumes the
/// hasher can be called from any thread with no shared state.
pub trait Hasher {
    fn hash(bytes: &[u8]) -> Hash32;
}

/// Hash of a leaf's raw value.
pub fn hash_leaf_value<H: Hasher>(value: &[u8]) -> Hash32 {
    let mut buf = Vec::with_capacity(1 + value.len());
    buf.push(LEAF_VALUE_PREFIX);
    buf.extend_from_slice(value);
    H::hash(&buf)
}

/// Merkle root of a proof consisting of exactly one leaf entry.
pub fn hash_single_entry<H: Hasher>(path: &Path, leaf_value_hash: &Hash32) -> Hash32 {
    let mut buf = ArrayVec::<u8, { 1 + HASH_WIDTH + 1 + HASH_WIDTH }>::new();
    buf.push(MAP_NODE_PREFIX);
    encode_path_full(path, &mut buf);
    buf.try_extend_from_slice(leaf_value_hash).expect("capacity");
    H::hash(&buf)
}

/// Hash of a branch combining `left` and `right`, in that order.
pub fn hash_branch<H: Hasher>(left: &Node, right: &Node) -> Hash32 {
    let mut buf = Vec::with_capacity(1 + HASH_WIDTH * 2 + (1 + HASH_WIDTH) * 2);
    buf.push(MAP_NODE_PREFIX);
    buf.extend_from_slice(&left.hash);
    buf.extend_from_slice(&right.hash);
    let mut compressed = ArrayVec::<u8, { HASH_WIDTH + 1 }>::new();
    encode_path_compressed(&left.path, &mut compressed);
    buf.extend_from_slice(&compressed);
    compressed.clear();
    encode_path_compressed(&right.path, &mut compressed);
    buf.extend_from_slice(&compressed);
    H::hash(&buf)
}

/// Top-level wrap of the reconstructed Merkle root.
pub fn hash_index<H: Hasher>(root: &Hash32) -> Hash32 {
    let mut buf = ArrayVec::<u8, { 1 + HASH_WIDTH }>::new();
    buf.push(INDEX_PREFIX);
    buf.try_extend_from_slice(root).expect("capacity");
    H::hash(&buf)
}

/// Full-form path encoding: `HASH_WIDTH` raw bytes followed by the
/// significant-bit count as one byte (33 bytes total for `HASH_WIDTH = 32`).
///
/// The significant-bit count for a full-width leaf path is `8 * HASH_WIDTH`,
/// which does not fit in one byte; it is encoded truncated to its low byte
/// (`0` for `HASH_WIDTH = 32`). This is safe: the count is redundant with
/// the node-type context it is hashed in (single-entry roots are always
/// hashed from a terminal, whose width is fixed by `HASH_WIDTH`), so the
/// truncation cannot be exploited to forge a different path.
fn encode_path_full(path: &Path, out: &mut impl Extend<u8>) {
    out.extend(path.raw_bytes().iter().copied());
    out.extend(core::iter::once((path.num_significant_bits() & 0xFF) as u8));
}

/// Compressed-form path encoding: only the minimum whole bytes needed to
/// hold `n` significant bits, followed by `n` as one byte.
fn encode_path_compressed(path: &Path, out: &mut impl Extend<u8>) {
    let n = path.num_significant_bits() as usize;
    let whole_bytes = (n + 7) / 8;
    out.extend(path.raw_bytes()[..whole_bytes].iter().copied());
    out.extend(core::iter::once((n & 0xFF) as u8));
}

#[cfg(feature = "sha2-hasher")]
pub struct Sha256Hasher;

#[cfg(feature = "sha2-hasher")]
impl Hasher for Sha256Hasher {
    fn hash(bytes: &[u8]) -> Hash32 {
        use sha2::Digest;
        let digest = sha2::Sha256::digest(bytes);
        let mut out = [0u8; HASH_WIDTH];
        out.copy_from_slice(&digest);
        out
    }
}

#[cfg(feature = "blake3-hasher")]
pub struct Blake3Hasher;

#[cfg(feature = "blake3-hasher")]
impl Hasher for Blake3Hasher {
    fn hash(bytes: &[u8]) -> Hash32 {
        *blake3::hash(bytes).as_bytes()
    }
}
