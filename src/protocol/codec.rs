//! Protocol codec
//!
//! Decoding and encoding of single request messages.
//!
//! ## Argument Rules
//! - Byte 0 is the operation token, byte 1 a separator (any byte).
//! - Key/value operations split the rest on `:` and keep only the first two
//!   fields, so `A:k:x:1:5` stores `x` under `k`. Values cannot contain `:`.
//! - Single-argument operations take the whole rest verbatim.
//! - One trailing `\n` or `\r\n` is dropped first.

use bytes::Bytes;

use super::{Command, CommandType};
use crate::error::{CacheError, Result};

/// Argument delimiter
pub const SEPARATOR: u8 = b':';

/// Offset of the first argument byte
const ARGS_OFFSET: usize = 2;

// =============================================================================
// Decoding
// =============================================================================

/// Decode a command from one message
///
/// Unknown tokens return `UnrecognizedOperation`; a known token with missing
/// arguments returns `Protocol`.
pub fn decode_command(message: &[u8]) -> Result<Command> {
    let message = strip_line_ending(message);

    let token = *message
        .first()
        .ok_or_else(|| CacheError::Protocol("empty message".to_string()))?;

    let command_type = CommandType::from_token(token)
        .ok_or(CacheError::UnrecognizedOperation(char::from(token)))?;

    let args = message.get(ARGS_OFFSET..);

    match command_type {
        CommandType::Add => {
            let (key, value) = key_value(command_type, args)?;
            Ok(Command::Add { key, value })
        }
        CommandType::Update => {
            let (key, value) = key_value(command_type, args)?;
            Ok(Command::Update { key, value })
        }
        CommandType::Delete => Ok(Command::Delete {
            key: single_arg(command_type, args, "key")?,
        }),
        CommandType::Read => Ok(Command::Read {
            key: single_arg(command_type, args, "key")?,
        }),
        CommandType::Info => Ok(Command::Info),
        CommandType::Load => Ok(Command::Load {
            path: single_arg(command_type, args, "filename")?,
        }),
        CommandType::Save => Ok(Command::Save {
            path: single_arg(command_type, args, "filename")?,
        }),
        CommandType::Print => Ok(Command::Print),
    }
}

fn strip_line_ending(message: &[u8]) -> &[u8] {
    match message.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => message,
    }
}

fn key_value(command_type: CommandType, args: Option<&[u8]>) -> Result<(String, Bytes)> {
    let args = args.ok_or_else(|| missing(command_type, "key and value"))?;

    let mut fields = args.split(|b| *b == SEPARATOR);
    let key = fields.next().unwrap_or_default();
    let value = fields
        .next()
        .ok_or_else(|| missing(command_type, "value"))?;

    Ok((lossy(key), Bytes::copy_from_slice(value)))
}

fn single_arg(command_type: CommandType, args: Option<&[u8]>, what: &str) -> Result<String> {
    args.map(lossy).ok_or_else(|| missing(command_type, what))
}

fn missing(command_type: CommandType, what: &str) -> CacheError {
    CacheError::Protocol(format!(
        "{} requires {}",
        char::from(command_type.token()),
        what
    ))
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a command as a wire message
///
/// A value containing `:` is sent as-is and will be truncated by the
/// receiving side.
pub fn encode_command(command: &Command) -> Vec<u8> {
    let mut message = vec![command.command_type().token()];

    match command {
        Command::Add { key, value } | Command::Update { key, value } => {
            message.push(SEPARATOR);
            message.extend_from_slice(key.as_bytes());
            message.push(SEPARATOR);
            message.extend_from_slice(value);
        }
        Command::Delete { key } | Command::Read { key } => {
            message.push(SEPARATOR);
            message.extend_from_slice(key.as_bytes());
        }
        Command::Load { path } | Command::Save { path } => {
            message.push(SEPARATOR);
            message.extend_from_slice(path.as_bytes());
        }
        Command::Info | Command::Print => {}
    }

    message
}
