//! # TriCache
//!
//! An in-memory key-value cache with:
//! - One shared store behind a reader/writer lock
//! - A compact text command protocol over TCP and UDP
//! - A path-parameterized HTTP API
//! - JSON snapshot save/load
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────────────┐
//! │ TCP stream │   │ UDP dgram  │   │        HTTP        │
//! └─────┬──────┘   └─────┬──────┘   └─────────┬──────────┘
//!       │                │                    │
//!       ▼                ▼                    │
//! ┌─────────────────────────────┐             │
//! │      Command Protocol       │             │
//! │  (decode / dispatch / reply)│             │
//! └──────────────┬──────────────┘             │
//!                │                            │
//!                ▼                            ▼
//!         ┌──────────────────────────────────────┐
//!         │            Store (RwLock)            │
//!         └──────────────────┬───────────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │  Snapshot   │
//!                     │   (JSON)    │
//!                     └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod snapshot;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CacheError, Result};
pub use config::Config;
pub use store::{Entry, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TriCache
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
