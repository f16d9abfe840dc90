//! ByteTable: the public fixed-capacity table over bucket chains.

use core::hash::{BuildHasher, Hasher};

use crate::bucket::{copy_bytes, Bucket, Entry};
use crate::err::{CreateError, PutError};
use crate::fnv::FnvBuildHasher;

/// A fixed-capacity hash table mapping byte-string keys to byte-string
/// values.
///
/// The table owns copies of every key and value passed to [`put`]; callers
/// keep their own buffers and may mutate or free them after the call
/// returns. Keys are compared byte-for-byte, so two textually identical keys
/// in different caller buffers name the same entry. Any byte content is
/// accepted, including embedded NUL and length zero.
///
/// Capacity is chosen at creation and fixed for the table's life. Collisions
/// resolve by open chaining, so correctness holds at any load factor; lookup
/// cost grows linearly with chain length once entries outnumber buckets.
///
/// Dropping the table releases every entry's key and value, every chain, and
/// the bucket array. Move semantics stand in for an explicit destroy
/// operation: a dropped table cannot be used again.
///
/// [`put`]: ByteTable::put
pub struct ByteTable<S = FnvBuildHasher> {
    hasher: S,
    buckets: Box<[Bucket]>,
    len: usize,
}

impl ByteTable<FnvBuildHasher> {
    /// Create a table with `capacity` empty buckets, hashed with FNV-1a.
    pub fn with_capacity(capacity: usize) -> Result<Self, CreateError> {
        Self::with_capacity_and_hasher(capacity, FnvBuildHasher)
    }
}

impl<S: BuildHasher> ByteTable<S> {
    /// Create a table with `capacity` empty buckets and a caller-chosen
    /// hasher. Fails for zero capacity or if the bucket array cannot be
    /// allocated; no partial table is observable on failure.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self, CreateError> {
        if capacity == 0 {
            return Err(CreateError::ZeroCapacity);
        }
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(capacity)?;
        buckets.resize_with(capacity, Bucket::new);
        Ok(Self {
            hasher,
            buckets: buckets.into_boxed_slice(),
            len: 0,
        })
    }

    // Feed the raw key bytes to the hasher directly rather than through
    // `<[u8] as Hash>::hash`, which mixes in a length prefix and would make
    // digests diverge from the hasher's documented byte-stream output.
    fn hash_key(&self, key: &[u8]) -> u64 {
        let mut h = self.hasher.build_hasher();
        h.write(key);
        h.finish()
    }

    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Insert `key` → `value`, or replace the value if the key is already
    /// present (last write wins, including the value's length).
    ///
    /// Both byte slices are copied; the table never aliases caller memory.
    /// On allocation failure the error is returned and the table is left in
    /// its prior state: no partial entry, no clobbered value.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), PutError> {
        let hash = self.hash_key(key);
        let index = self.bucket_index(hash);

        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.find_mut(hash, key) {
            // Copy first, assign after: a failed copy leaves the old value
            // in place.
            entry.value = copy_bytes(value)?;
            return Ok(());
        }
        let entry = Entry::new(hash, key, value)?;
        bucket.try_push(entry)?;
        self.len += 1;
        Ok(())
    }

    /// Look up `key`, returning a view of the most recently stored value, or
    /// `None` if the key was never inserted. Never mutates the table; a miss
    /// is a normal outcome, not an error.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        let hash = self.hash_key(key);
        let bucket = &self.buckets[self.bucket_index(hash)];
        bucket.find(hash, key).map(|e| &*e.value)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket-array length fixed at creation.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of entries to buckets. A performance signal only: chains grow
    /// past 1.0 without affecting correctness.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Iterate over `(key, value)` views of every entry, in no particular
    /// order.
    pub fn iter(&self) -> Iter<'_> {
        let mut buckets = self.buckets.iter();
        let entries = buckets.next().map(|b| b.entries().iter());
        Iter { buckets, entries }
    }
}

/// Iterator over the entries of a [`ByteTable`], bucket by bucket.
pub struct Iter<'a> {
    buckets: core::slice::Iter<'a, Bucket>,
    entries: Option<core::slice::Iter<'a, Entry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.entries.as_mut()?.next() {
                return Some((&e.key, &e.value));
            }
            self.entries = self.buckets.next().map(|b| b.entries().iter());
        }
    }
}
