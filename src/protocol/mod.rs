//! Protocol Module
//!
//! Transport-neutral command protocol shared by the TCP and UDP listeners.
//!
//! ## Request Format
//! ```text
//! ┌──────────┬──────────┬──────────────────────────────┐
//! │ Cmd (1)  │ Sep (1)  │  arg1 [ ':' arg2 ]           │
//! └──────────┴──────────┴──────────────────────────────┘
//! ```
//!
//! ### Commands (token is case-insensitive)
//! - `A:key:value` - add a new key
//! - `U:key:value` - update an existing key
//! - `D:key`       - delete a key
//! - `R:key`       - read a key
//! - `I`           - number of items
//! - `L:file`      - replace the cache with a snapshot file
//! - `S:file`      - save the cache to a snapshot file
//! - `P`           - print every pair
//!
//! ### Replies
//! Plain UTF-8 text, no framing. Unknown tokens get no reply at all.

mod command;
mod response;
mod codec;
mod handler;

pub use command::{Command, CommandType};
pub use response::{quote, Response, Status};
pub use codec::{decode_command, encode_command, SEPARATOR};
pub use handler::{execute, process_message};
