//! Error types for the `byte-table` crate.

use std::collections::TryReserveError;

/// Errors that can occur while creating a table.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CreateError {
    /// Capacity is fixed at creation, so a zero-bucket table could never
    /// hold an entry.
    #[error("table capacity must be at least 1")]
    ZeroCapacity,

    /// The bucket array could not be allocated.
    #[error("failed to allocate the bucket array: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Errors that can occur while inserting or updating an entry.
///
/// "Key already present" is not an error: `put` replaces the value. A
/// returned error guarantees the table is exactly as it was before the call.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PutError {
    /// Storage for the entry's owned key or value copy could not be
    /// allocated.
    #[error("failed to allocate entry storage: {0}")]
    Alloc(#[from] TryReserveError),
}
