//! Command dispatch
//!
//! Runs decoded commands against the Store and turns every outcome,
//! including failures, into a textual reply.

use super::{decode_command, quote, Command, Response};
use crate::error::{CacheError, Result};
use crate::store::Store;

/// Decode one message, run it, and encode the reply
///
/// Returns `None` for unrecognized operation tokens; those are dropped
/// without a reply.
pub fn process_message(message: &[u8], store: &Store) -> Option<Vec<u8>> {
    match decode_command(message) {
        Ok(command) => {
            tracing::trace!("Executing {:?}", command);
            Some(execute(command, store).into_bytes())
        }
        Err(CacheError::UnrecognizedOperation(token)) => {
            tracing::debug!("Dropping message with unrecognized operation {:?}", token);
            None
        }
        Err(e) => Some(Response::error(e.to_string()).into_bytes()),
    }
}

/// Execute a command and return a response
pub fn execute(command: Command, store: &Store) -> Response {
    match command {
        Command::Add { key, value } => {
            let reply = format!("{key} added");
            outcome(store.add(key, value), reply)
        }
        Command::Update { key, value } => {
            outcome(store.update(&key, value), format!("{key} updated"))
        }
        Command::Delete { key } => outcome(store.delete(&key), format!("{key} deleted")),
        Command::Read { key } => match store.get(&key) {
            Some(value) => Response::entry(&key, &value),
            None => Response::not_found(format!("{} does not exist", quote(&key))),
        },
        Command::Info => Response::ok(format!("Cache has {} items", store.size())),
        Command::Load { path } => match store.load_from(&path) {
            Ok(count) => {
                tracing::info!("Loaded {} entries from {}", count, path);
                Response::ok("File Loaded")
            }
            Err(e) => {
                tracing::warn!("Failed to load snapshot {}: {}", path, e);
                Response::error("File failed to load please check location")
            }
        },
        Command::Save { path } => match store.save_to(&path) {
            Ok(()) => {
                tracing::info!("Saved snapshot to {}", path);
                Response::ok("File Saved")
            }
            Err(e) => {
                tracing::warn!("Failed to save snapshot {}: {}", path, e);
                Response::error("File was not able to save")
            }
        },
        Command::Print => {
            let mut entries = store.dump_all();
            entries.sort_by(|a, b| a.key.cmp(&b.key));
            Response::listing(&entries)
        }
    }
}

fn outcome(result: Result<()>, success: String) -> Response {
    match result {
        Ok(()) => Response::ok(success),
        Err(e @ CacheError::AlreadyExists(_)) => Response::conflict(e.to_string()),
        Err(e @ CacheError::NotFound(_)) => Response::not_found(e.to_string()),
        Err(e) => Response::error(e.to_string()),
    }
}
