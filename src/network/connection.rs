//! Connection Handler
//!
//! Stream listener loop and the per-connection exchange.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;

use super::dispatch;
use crate::config::{Config, StreamMode};
use crate::error::{CacheError, Result};
use crate::store::Store;

/// Accept connections until shutdown
///
/// In `Sequential` mode each connection is finished before the next accept.
pub(crate) async fn serve(
    listener: TcpListener,
    store: Arc<Store>,
    config: Config,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                tracing::debug!("Stream listener stopped");
                break;
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    let connection = Connection::new(stream, peer, Arc::clone(&store), &config);
                    match config.stream_mode {
                        StreamMode::Sequential => connection.handle().await,
                        StreamMode::Concurrent => {
                            tokio::spawn(connection.handle());
                        }
                    }
                }
                Err(e) => tracing::warn!("Failed to accept stream connection: {}", e),
            }
        }
    }
}

/// Handles a single client connection
///
/// One read, one reply, then the connection is closed.
pub struct Connection {
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: SocketAddr,

    store: Arc<Store>,

    buffer_size: usize,

    read_timeout: Option<Duration>,
}

impl Connection {
    pub fn new(stream: TcpStream, peer_addr: SocketAddr, store: Arc<Store>, config: &Config) -> Self {
        let read_timeout =
            (config.read_timeout_ms > 0).then(|| Duration::from_millis(config.read_timeout_ms));

        Self {
            stream,
            peer_addr,
            store,
            buffer_size: config.buffer_size,
            read_timeout,
        }
    }

    /// Serve the connection, logging instead of returning errors
    pub async fn handle(mut self) {
        tracing::debug!("Connection established from {}", self.peer_addr);

        match self.exchange().await {
            Ok(()) => {}
            Err(CacheError::Io(ref e))
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::ConnectionReset
                        | std::io::ErrorKind::ConnectionAborted
                        | std::io::ErrorKind::BrokenPipe
                        | std::io::ErrorKind::TimedOut
                ) =>
            {
                tracing::debug!("Client {} went away: {}", self.peer_addr, e);
            }
            Err(e) => tracing::warn!("Error serving {}: {}", self.peer_addr, e),
        }
    }

    async fn exchange(&mut self) -> Result<()> {
        let mut buffer = vec![0u8; self.buffer_size];
        let n = self.read(&mut buffer).await?;
        if n == 0 {
            tracing::debug!("Client {} closed without sending", self.peer_addr);
            return Ok(());
        }
        buffer.truncate(n);

        if let Some(reply) = dispatch(buffer, Arc::clone(&self.store)).await? {
            self.stream.write_all(&reply).await?;
        }
        self.stream.shutdown().await?;

        Ok(())
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let Some(limit) = self.read_timeout else {
            return Ok(self.stream.read(buffer).await?);
        };

        match tokio::time::timeout(limit, self.stream.read(buffer)).await {
            Ok(read) => Ok(read?),
            Err(_) => Err(CacheError::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "read timed out",
            ))),
        }
    }
}
