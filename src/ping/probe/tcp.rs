use tokio::net::TcpStream;
use tokio::time::{timeout, Instant};

use crate::ping::{method::ProbeMethod, result::ProbeResult, setting::ProbeTarget};

use super::ProbeStrategy;

/// Probe by timing a TCP handshake to the target port.
///
/// Any listener on the port counts as reachable, whether or not it is the
/// service the caller had in mind.
#[derive(Clone, Copy, Debug, Default)]
pub struct TcpProbe;

impl TcpProbe {
    pub fn new() -> Self {
        TcpProbe
    }
}

impl ProbeStrategy for TcpProbe {
    fn method(&self) -> ProbeMethod {
        ProbeMethod::TcpConnect
    }

    async fn run(&self, target: &ProbeTarget) -> ProbeResult {
        let start_time = Instant::now();
        // Name resolution and connect share one deadline
        let connect = TcpStream::connect((target.host(), target.port()));
        match timeout(target.timeout(), connect).await {
            Ok(Ok(stream)) => {
                let elapsed = start_time.elapsed();
                drop(stream);
                tracing::debug!("TCP {}:{} connected in {:?}", target.host(), target.port(), elapsed);
                ProbeResult::from_elapsed(elapsed)
            }
            Ok(Err(e)) => {
                tracing::debug!("TCP {}:{} failed: {}", target.host(), target.port(), e);
                ProbeResult::unreachable()
            }
            Err(_) => {
                tracing::debug!("TCP {}:{} timed out after {:?}", target.host(), target.port(), target.timeout());
                ProbeResult::unreachable()
            }
        }
    }
}
