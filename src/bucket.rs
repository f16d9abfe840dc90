//! Bucket chains: the collision-resolution layer under `ByteTable`.
//!
//! A bucket holds every entry whose hash selected its slot, in a growable
//! chain with no observable order. The chain only needs O(1) append and a
//! full-scan equality lookup; `table` decides which bucket an operation
//! touches.

use std::collections::TryReserveError;

/// One owned key/value pair plus its precomputed hash. The stored hash lets
/// a chain scan reject non-matching entries without a byte compare.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) hash: u64,
    pub(crate) key: Box<[u8]>,
    pub(crate) value: Box<[u8]>,
}

impl Entry {
    /// Build an entry holding owned copies of `key` and `value`. Fails only
    /// if either copy cannot be allocated.
    pub(crate) fn new(hash: u64, key: &[u8], value: &[u8]) -> Result<Self, TryReserveError> {
        Ok(Self {
            hash,
            key: copy_bytes(key)?,
            value: copy_bytes(value)?,
        })
    }
}

/// Fallibly copy a byte slice into an owned boxed slice.
pub(crate) fn copy_bytes(src: &[u8]) -> Result<Box<[u8]>, TryReserveError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())?;
    buf.extend_from_slice(src);
    Ok(buf.into_boxed_slice())
}

#[derive(Debug, Default)]
pub(crate) struct Bucket {
    entries: Vec<Entry>,
}

impl Bucket {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Scan the chain for an entry whose key is byte-equal to `key`. The
    /// hash check runs first; byte comparison only disambiguates entries
    /// that collided on the full 64-bit digest.
    pub(crate) fn find(&self, hash: u64, key: &[u8]) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.hash == hash && &*e.key == key)
    }

    pub(crate) fn find_mut(&mut self, hash: u64, key: &[u8]) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.hash == hash && &*e.key == key)
    }

    /// Append an entry to the chain. Reserves before pushing so a failed
    /// allocation leaves the chain untouched.
    pub(crate) fn try_push(&mut self, entry: Entry) -> Result<(), TryReserveError> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
