//! Datagram listener
//!
//! One datagram in, at most one datagram back to the sender.

use std::sync::Arc;

use tokio::net::UdpSocket;
use tokio::sync::broadcast;

use super::dispatch;
use crate::store::Store;

/// Receive and answer datagrams until shutdown, one at a time
pub(crate) async fn serve(
    socket: UdpSocket,
    store: Arc<Store>,
    buffer_size: usize,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let (n, peer) = tokio::select! {
            _ = shutdown.recv() => {
                tracing::debug!("Datagram listener stopped");
                break;
            }
            received = socket.recv_from(&mut buffer) => match received {
                Ok(received) => received,
                Err(e) => {
                    tracing::warn!("Failed to receive datagram: {}", e);
                    continue;
                }
            }
        };

        tracing::trace!("Datagram of {} bytes from {}", n, peer);

        let reply = match dispatch(buffer[..n].to_vec(), Arc::clone(&store)).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Datagram from {} failed: {}", peer, e);
                continue;
            }
        };

        if let Some(reply) = reply {
            if let Err(e) = socket.send_to(&reply, peer).await {
                tracing::warn!("Failed to reply to {}: {}", peer, e);
            }
        }
    }
}
