use crate::probes::Probe;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

/// Full-handshake connect probe. The stream is dropped as soon as the
/// connection is established; no bytes are exchanged.
pub struct TcpConnectProbe;

#[async_trait]
impl Probe for TcpConnectProbe {
    async fn is_open(&self, addr: SocketAddr, limit: Duration) -> bool {
        match timeout(limit, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                true
            }
            Ok(Err(e)) => {
                trace!(%addr, error = %e, "connect failed");
                false
            }
            Err(_) => {
                trace!(%addr, "connect timed out");
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "tcp-connect"
    }
}
