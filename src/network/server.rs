//! Server
//!
//! Binds every listener and runs them side by side.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::broadcast;

use super::{connection, datagram, http};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::store::Store;

/// TCP, UDP and HTTP front ends for one Store
pub struct Server {
    config: Config,
    store: Arc<Store>,
    stream_listener: TcpListener,
    datagram_socket: UdpSocket,
    http_listener: TcpListener,
}

impl Server {
    /// Bind all three listeners
    ///
    /// The UDP socket binds the address the TCP listener actually got, so a
    /// `:0` port in `listen_addr` still yields one shared port. Failing to
    /// bind is the only fatal server error.
    pub async fn bind(config: Config, store: Arc<Store>) -> Result<Self> {
        if config.buffer_size == 0 {
            return Err(CacheError::Config(
                "buffer_size must be greater than zero".to_string(),
            ));
        }

        let stream_listener = TcpListener::bind(&config.listen_addr)
            .await
            .map_err(|e| bind_error("TCP", &config.listen_addr, e))?;

        let stream_addr = stream_listener.local_addr()?;
        let datagram_socket = UdpSocket::bind(stream_addr)
            .await
            .map_err(|e| bind_error("UDP", &stream_addr.to_string(), e))?;

        let http_listener = TcpListener::bind(&config.http_addr)
            .await
            .map_err(|e| bind_error("HTTP", &config.http_addr, e))?;

        Ok(Self {
            config,
            store,
            stream_listener,
            datagram_socket,
            http_listener,
        })
    }

    /// Address of the TCP listener
    pub fn stream_addr(&self) -> Result<SocketAddr> {
        Ok(self.stream_listener.local_addr()?)
    }

    /// Address of the UDP socket
    pub fn datagram_addr(&self) -> Result<SocketAddr> {
        Ok(self.datagram_socket.local_addr()?)
    }

    /// Address of the HTTP listener
    pub fn http_addr(&self) -> Result<SocketAddr> {
        Ok(self.http_listener.local_addr()?)
    }

    /// Serve until `shutdown` resolves, then stop all three listeners
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        tracing::info!("Stream listener on {}", self.stream_addr()?);
        tracing::info!("Datagram listener on {}", self.datagram_addr()?);
        tracing::info!("HTTP listener on {}", self.http_addr()?);

        let (shutdown_tx, _) = broadcast::channel(1);

        let tasks = [
            tokio::spawn(connection::serve(
                self.stream_listener,
                Arc::clone(&self.store),
                self.config.clone(),
                shutdown_tx.subscribe(),
            )),
            tokio::spawn(datagram::serve(
                self.datagram_socket,
                Arc::clone(&self.store),
                self.config.buffer_size,
                shutdown_tx.subscribe(),
            )),
            tokio::spawn(http::serve(
                self.http_listener,
                Arc::clone(&self.store),
                shutdown_tx.subscribe(),
            )),
        ];

        shutdown.await;
        tracing::info!("Shutting down listeners");
        let _ = shutdown_tx.send(());

        for task in tasks {
            if let Err(e) = task.await {
                tracing::error!("Listener task failed: {}", e);
            }
        }

        Ok(())
    }
}

fn bind_error(kind: &str, addr: &str, err: std::io::Error) -> CacheError {
    CacheError::Network(format!("failed to bind {kind} listener on {addr}: {err}"))
}
