//! Command definitions
//!
//! Represents commands from clients.

use bytes::Bytes;

/// Command tokens as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandType {
    Add = b'A',
    Update = b'U',
    Delete = b'D',
    Read = b'R',
    Info = b'I',
    Load = b'L',
    Save = b'S',
    Print = b'P',
}

impl CommandType {
    /// Look up a token byte, ignoring ASCII case
    pub fn from_token(token: u8) -> Option<Self> {
        match token.to_ascii_uppercase() {
            b'A' => Some(CommandType::Add),
            b'U' => Some(CommandType::Update),
            b'D' => Some(CommandType::Delete),
            b'R' => Some(CommandType::Read),
            b'I' => Some(CommandType::Info),
            b'L' => Some(CommandType::Load),
            b'S' => Some(CommandType::Save),
            b'P' => Some(CommandType::Print),
            _ => None,
        }
    }

    /// Upper-case token byte
    pub fn token(self) -> u8 {
        self as u8
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a key that must not exist yet
    Add { key: String, value: Bytes },

    /// Replace the value of an existing key
    Update { key: String, value: Bytes },

    /// Remove an existing key
    Delete { key: String },

    /// Read a key
    Read { key: String },

    /// Count entries
    Info,

    /// Replace the cache with a snapshot file
    Load { path: String },

    /// Save the cache to a snapshot file
    Save { path: String },

    /// List every pair
    Print,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Add { .. } => CommandType::Add,
            Command::Update { .. } => CommandType::Update,
            Command::Delete { .. } => CommandType::Delete,
            Command::Read { .. } => CommandType::Read,
            Command::Info => CommandType::Info,
            Command::Load { .. } => CommandType::Load,
            Command::Save { .. } => CommandType::Save,
            Command::Print => CommandType::Print,
        }
    }
}
