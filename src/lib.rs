//! byte-table: a fixed-capacity, single-threaded hash table mapping
//! byte-string keys to byte-string values.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, auditable chained hash table whose capacity is chosen
//!   once at creation, with strict ownership of every stored byte.
//! - Layers:
//!   - fnv: FNV-1a 64-bit digest packaged as `Hasher`/`BuildHasher` so the
//!     table stays generic over hashing while defaulting to a stable,
//!     unseeded algorithm.
//!   - bucket: chain mechanics — owned `Entry` records, equality scans
//!     keyed on (stored hash, key bytes), fallible append.
//!   - table: public `ByteTable<S>` — bucket selection via
//!     `hash(key) % capacity`, put/get semantics, size introspection,
//!     iteration.
//!
//! Constraints
//! - Single-threaded: no internal locking; `&mut self` receivers are the
//!   whole mutation story.
//! - Fixed capacity: the bucket array never grows or rehashes. Chains grow
//!   without bound, so correctness holds at any load factor.
//! - Ownership: the table stores copies of caller bytes and never aliases
//!   caller memory; callers may reuse or free their buffers immediately.
//! - Fallible allocation: create and put report `TryReserveError`-backed
//!   errors instead of aborting, and a failed call leaves the table in its
//!   prior state.
//!
//! Why this split?
//! - Localize invariants: bucket only scans and appends; table owns key
//!   uniqueness, bucket selection, and the entry count.
//! - The hasher is a seam: tests swap in a constant hasher to force every
//!   key into one chain.
//!
//! Semantics
//! - `put` is last-write-wins: re-putting a key replaces the owned value
//!   (including its length); the entry count rises by at most one per call.
//! - `get` is read-only and returns `None` for a never-inserted key; a miss
//!   is a normal outcome, not an error.
//! - Destroy is `Drop`. Ownership makes use-after-destroy and double-destroy
//!   unrepresentable instead of merely undefined.
//! - Keys and values are opaque bytes: any value, any length including zero,
//!   embedded NUL allowed. No text encoding is assumed.
//!
//! Notes and non-goals
//! - No remove/clear: entries live until the table is dropped.
//! - No resize/rehash; pick the capacity for the expected load.
//! - No persistence, no iteration-order guarantee, no keyed/seeded hashing
//!   (this is not a DoS-hardened map).

mod bucket;
mod err;
pub mod fnv;
mod table;

// Public surface
pub use err::{CreateError, PutError};
pub use fnv::{FnvBuildHasher, FnvHasher};
pub use table::{ByteTable, Iter};
