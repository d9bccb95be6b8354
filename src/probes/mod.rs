pub mod tcp;

pub use tcp::TcpConnectProbe;

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Single-capability seam over the connection layer so tests can swap in
/// a fake instead of depending on live network reachability.
#[async_trait]
pub trait Probe: Send + Sync {
    /// One connect attempt against `addr`, bounded by `timeout`.
    /// A port that refuses, times out, or is unreachable is simply "not open".
    async fn is_open(&self, addr: SocketAddr, timeout: Duration) -> bool;

    /// Human name for logging
    fn name(&self) -> &'static str {
        "generic"
    }
}

pub type ProbeHandle = Arc<dyn Probe>;

pub fn default_probe() -> ProbeHandle {
    Arc::new(TcpConnectProbe)
}
