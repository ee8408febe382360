//! Store Module
//!
//! The authoritative in-memory key/value mapping shared by every transport.
//!
//! ## Responsibilities
//! - Add / update / delete with existence checks
//! - Point reads, size and full dumps
//! - Snapshot save and load (see `crate::snapshot` for the encoding)
//!
//! ## Concurrency
//! One `RwLock` guards the whole map. Mutations hold the write lock across
//! the existence check and the change; reads share the read lock.

mod table;

pub use table::Store;

use bytes::Bytes;

/// One key/value pair held by the Store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Bytes,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
