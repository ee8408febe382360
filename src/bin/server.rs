//! TriCache Server Binary
//!
//! Starts the TCP, UDP and HTTP listeners over one shared store.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};
use tricache::config::{StreamMode, DEFAULT_BUFFER_SIZE, DEFAULT_HTTP_ADDR, DEFAULT_LISTEN_ADDR};
use tricache::network::Server;
use tricache::{Config, Store};

/// TriCache Server
#[derive(Parser, Debug)]
#[command(name = "tricache-server")]
#[command(about = "In-memory key-value cache over TCP, UDP and HTTP")]
#[command(version)]
struct Args {
    /// TCP and UDP listen address (host:port)
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
    listen: String,

    /// HTTP listen address (host:port)
    #[arg(long, default_value = DEFAULT_HTTP_ADDR)]
    http: String,

    /// Largest accepted message in bytes
    #[arg(short, long, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Stream read timeout in milliseconds (0 disables)
    #[arg(long, default_value = "5000")]
    read_timeout_ms: u64,

    /// How TCP connections are scheduled
    #[arg(long, value_enum, default_value_t = Mode::Sequential)]
    stream_mode: Mode,

    /// Snapshot to load before serving
    #[arg(long)]
    load: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Sequential,
    Concurrent,
}

impl From<Mode> for StreamMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => StreamMode::Sequential,
            Mode::Concurrent => StreamMode::Concurrent,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tricache=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("TriCache Server v{}", tricache::VERSION);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .http_addr(&args.http)
        .buffer_size(args.buffer_size)
        .read_timeout_ms(args.read_timeout_ms)
        .stream_mode(args.stream_mode.into())
        .build();

    let store = Arc::new(Store::new());

    if let Some(path) = &args.load {
        match store.load_from(path) {
            Ok(count) => tracing::info!("Loaded {} entries from {}", count, path),
            Err(e) => tracing::warn!("Starting empty, could not load {}: {}", path, e),
        }
    }

    let server = match Server::bind(config, store).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, initiating shutdown...");
    };

    if let Err(e) = server.run(shutdown).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
