//! Network Module
//!
//! The three front ends over one shared Store.
//!
//! ## Architecture
//! - Stream (TCP) and datagram (UDP) listeners on the same address, each
//!   decoding one protocol message at a time
//! - HTTP listener on its own address, calling the Store directly
//! - All three run as independent tokio tasks until shutdown

mod server;
mod connection;
mod datagram;
pub mod http;

pub use server::Server;
pub use connection::Connection;

use std::sync::Arc;

use crate::error::{CacheError, Result};
use crate::protocol::process_message;
use crate::store::Store;

/// Run one protocol message on the blocking pool
///
/// Snapshot commands touch the filesystem while holding the Store lock, so
/// they stay off the async workers.
pub(crate) async fn dispatch(message: Vec<u8>, store: Arc<Store>) -> Result<Option<Vec<u8>>> {
    tokio::task::spawn_blocking(move || process_message(&message, &store))
        .await
        .map_err(|e| CacheError::Network(format!("command task failed: {e}")))
}
