//! Snapshot codec
//!
//! Encoding and decoding between the in-memory map and JSON bytes.

use std::collections::{BTreeMap, HashMap};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Serializable view of the Store's contents
///
/// `BTreeMap` keeps the encoding deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub entries: BTreeMap<String, String>,
}

impl Snapshot {
    /// Build a snapshot from the live map
    pub fn from_entries(entries: &HashMap<String, Bytes>) -> Self {
        let entries = entries
            .iter()
            .map(|(key, value)| (key.clone(), String::from_utf8_lossy(value).into_owned()))
            .collect();
        Self { entries }
    }

    /// Convert back into the Store's map representation
    pub fn into_entries(self) -> HashMap<String, Bytes> {
        self.entries
            .into_iter()
            .map(|(key, value)| (key, Bytes::from(value)))
            .collect()
    }
}

/// Encode the full mapping as JSON
pub fn encode(entries: &HashMap<String, Bytes>) -> Result<Vec<u8>> {
    let mut encoded = serde_json::to_vec(&Snapshot::from_entries(entries))?;
    encoded.push(b'\n');
    Ok(encoded)
}

/// Decode JSON bytes back into a mapping
///
/// Whitespace-only input is an empty mapping; anything else that is not a
/// JSON object of strings is a `Decode` error.
pub fn decode(raw: &[u8]) -> Result<HashMap<String, Bytes>> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(HashMap::new());
    }

    let snapshot: Snapshot = serde_json::from_slice(raw)?;
    Ok(snapshot.into_entries())
}
