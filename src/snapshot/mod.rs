//! Snapshot Module
//!
//! Durable text representation of the Store's contents.
//!
//! ## File Format
//! A single JSON object mapping key to value, keys in sorted order:
//! ```text
//! {"alpha":"1","beta":"two words","quote":"say \"hi\""}
//! ```
//! JSON string escaping covers quotes, backslashes and control characters,
//! so any UTF-8 value round-trips exactly. Non-UTF-8 bytes are written
//! lossily.
//!
//! ## Write Strategy
//! The encoded bytes go to `<name>.tmp` next to the destination and are
//! renamed over it, so a failed save never leaves a half-written snapshot
//! under the real name.

mod codec;
mod file;

pub use codec::{decode, encode, Snapshot};
pub use file::{read_file, write_file};
