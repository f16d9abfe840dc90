//! FNV-1a hashing for byte-string keys.
//!
//! The table's default hasher. FNV-1a is branch-free, allocation-free, and
//! distributes short ASCII/Unicode keys well enough for bucket selection; it
//! makes no avalanche or cryptographic guarantee. Packaged as a
//! `Hasher`/`BuildHasher` pair so `ByteTable` can stay generic over the
//! hasher while defaulting to this one.

use core::hash::{BuildHasher, Hasher};

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// Return the FNV-1a 64-bit digest of `data`.
///
/// Deterministic, sensitive to byte order and length, and defined for empty
/// input (the digest of `b""` is the offset basis). Every byte value is
/// hashed as-is; NUL gets no special treatment.
pub fn fnv1a(data: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in data {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Streaming FNV-1a 64-bit hasher.
#[derive(Clone, Debug)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// `BuildHasher` producing [`FnvHasher`]. Carries no seed, so digests are
/// stable across instances and across processes.
#[derive(Clone, Debug, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> Self::Hasher {
        FnvHasher::new()
    }
}
