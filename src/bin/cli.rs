//! TriCache CLI Client
//!
//! Sends one protocol message over TCP or UDP and prints the reply.

use std::io::{Read, Write};
use std::net::{TcpStream, UdpSocket};
use std::time::Duration;

use clap::{Parser, Subcommand};
use tricache::config::{DEFAULT_BUFFER_SIZE, DEFAULT_LISTEN_ADDR};
use tricache::protocol::{encode_command, Command};
use tricache::Result;

/// TriCache CLI
#[derive(Parser, Debug)]
#[command(name = "tricache-cli")]
#[command(about = "CLI for the TriCache key-value cache")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
    server: String,

    /// Send over UDP instead of TCP
    #[arg(short, long)]
    udp: bool,

    /// Seconds to wait for a reply
    #[arg(short, long, default_value = "5")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new key
    Add {
        key: String,
        /// Everything after the first ':' is dropped by the server
        value: String,
    },

    /// Update an existing key
    Update { key: String, value: String },

    /// Delete a key
    Delete { key: String },

    /// Read a key
    Get { key: String },

    /// Number of items in the cache
    Info,

    /// Replace the cache with a snapshot file on the server
    Load { file: String },

    /// Save the cache to a snapshot file on the server
    Save { file: String },

    /// Print every pair
    Print,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Add { key, value } => Command::Add { key, value: value.into() },
            Commands::Update { key, value } => Command::Update { key, value: value.into() },
            Commands::Delete { key } => Command::Delete { key },
            Commands::Get { key } => Command::Read { key },
            Commands::Info => Command::Info,
            Commands::Load { file } => Command::Load { path: file },
            Commands::Save { file } => Command::Save { path: file },
            Commands::Print => Command::Print,
        }
    }
}

fn main() {
    let args = Args::parse();
    let timeout = Duration::from_secs(args.timeout);
    let message = encode_command(&Command::from(args.command));

    let reply = if args.udp {
        send_datagram(&args.server, &message, timeout)
    } else {
        send_stream(&args.server, &message, timeout)
    };

    match reply {
        Ok(reply) if reply.is_empty() => eprintln!("(no reply)"),
        Ok(reply) => println!("{}", String::from_utf8_lossy(&reply)),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn send_stream(server: &str, message: &[u8], timeout: Duration) -> Result<Vec<u8>> {
    let mut stream = TcpStream::connect(server)?;
    stream.set_read_timeout(Some(timeout))?;
    stream.write_all(message)?;

    // The server closes the connection after its reply
    let mut reply = Vec::new();
    stream.read_to_end(&mut reply)?;
    Ok(reply)
}

fn send_datagram(server: &str, message: &[u8], timeout: Duration) -> Result<Vec<u8>> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.set_read_timeout(Some(timeout))?;
    socket.send_to(message, server)?;

    let mut buffer = vec![0u8; DEFAULT_BUFFER_SIZE];
    let n = socket.recv(&mut buffer)?;
    buffer.truncate(n);
    Ok(buffer)
}
