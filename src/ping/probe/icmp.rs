use std::io::{self, Read};
use std::net::{SocketAddr, SocketAddrV4, ToSocketAddrs};
use std::time::{Duration, Instant};

use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use crate::config::default::{
    DEFAULT_ICMP_PAYLOAD, LEGACY_SOCKET_RECV_TIMEOUT_SECS, SOCKET_READ_BUFFER_SIZE,
};
use crate::packet::icmp::{build_echo_request, icmp_type};
use crate::ping::{method::ProbeMethod, result::ProbeResult, setting::ProbeTarget};

use super::ProbeStrategy;

/// Probe by sending an ICMP echo request over a raw IPv4 socket.
///
/// Raw sockets need elevated privileges on most systems. Without them the
/// socket cannot be created and the host is reported unreachable.
#[derive(Clone, Debug)]
pub struct IcmpProbe {
    payload: Vec<u8>,
    /// Fixed receive timeout. `None` uses the target timeout.
    recv_timeout: Option<Duration>,
}

impl Default for IcmpProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl IcmpProbe {
    pub fn new() -> Self {
        Self {
            payload: DEFAULT_ICMP_PAYLOAD.to_vec(),
            recv_timeout: None,
        }
    }
    /// Always wait 10 seconds for the reply, whatever the target timeout.
    pub fn legacy() -> Self {
        Self::new().with_recv_timeout(Duration::from_secs(LEGACY_SOCKET_RECV_TIMEOUT_SECS))
    }
    /// Wait a fixed time for the reply regardless of the target timeout.
    pub fn with_recv_timeout(mut self, recv_timeout: Duration) -> Self {
        self.recv_timeout = Some(recv_timeout);
        self
    }
    pub fn with_payload(mut self, payload: &[u8]) -> Self {
        self.payload = payload.to_vec();
        self
    }
    /// The echo request sent to every target.
    pub fn packet(&self) -> Vec<u8> {
        build_echo_request(0, 0, &self.payload)
    }
    fn recv_timeout_for(&self, target: &ProbeTarget) -> Duration {
        self.recv_timeout.unwrap_or_else(|| target.timeout())
    }
}

impl ProbeStrategy for IcmpProbe {
    fn method(&self) -> ProbeMethod {
        ProbeMethod::RawSocket
    }

    async fn run(&self, target: &ProbeTarget) -> ProbeResult {
        if !privilege::user::privileged() {
            tracing::debug!("Not running privileged, raw ICMP socket may be refused");
        }
        let recv_timeout = self.recv_timeout_for(target);
        let packet = self.packet();
        let owned_target = target.clone();
        let task = tokio::task::spawn_blocking(move || echo(&owned_target, &packet, recv_timeout));

        // Resolution, send and receive each stay within the receive timeout
        let limit = recv_timeout * 2 + Duration::from_secs(1);
        match tokio::time::timeout(limit, task).await {
            Ok(Ok(Ok(Some(rtt)))) => ProbeResult::from_elapsed(rtt),
            Ok(Ok(Ok(None))) => {
                tracing::debug!("No ICMP reply from {} within {:?}", target.host(), recv_timeout);
                ProbeResult::unreachable()
            }
            Ok(Ok(Err(e))) => {
                tracing::debug!("Raw socket probe to {} failed: {}", target.host(), e);
                ProbeResult::unreachable()
            }
            Ok(Err(e)) => {
                tracing::warn!("Raw socket probe task failed: {}", e);
                ProbeResult::unreachable()
            }
            Err(_) => {
                tracing::debug!("Raw socket probe to {} timed out after {:?}", target.host(), limit);
                ProbeResult::unreachable()
            }
        }
    }
}

/// Resolve the first IPv4 address of a host.
fn resolve_ipv4(host: &str) -> io::Result<SocketAddrV4> {
    (host, 0)
        .to_socket_addrs()?
        .find_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(v4),
            SocketAddr::V6(_) => None,
        })
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no IPv4 address for {}", host)))
}

/// Send one echo request and wait for any datagram back.
///
/// Returns `Ok(None)` when the read times out. The socket is closed when it
/// goes out of scope on every path.
fn echo(target: &ProbeTarget, packet: &[u8], recv_timeout: Duration) -> io::Result<Option<Duration>> {
    let addr = resolve_ipv4(target.host())?;
    let mut socket = Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
    socket.set_read_timeout(Some(recv_timeout))?;
    socket.set_write_timeout(Some(recv_timeout))?;
    // A TTL of 0 is rejected by most stacks, keep the system default
    if target.ttl() > 0 {
        socket.set_ttl(target.ttl() as u32)?;
    }
    socket.connect(&SockAddr::from(addr))?;

    let start_time = Instant::now();
    socket.send(packet)?;
    let mut buf = [0u8; SOCKET_READ_BUFFER_SIZE];
    match socket.read(&mut buf) {
        Ok(n) => {
            let rtt = start_time.elapsed();
            tracing::trace!("{} bytes from {}, icmp type {:?}", n, addr.ip(), icmp_type(&buf[..n]));
            Ok(Some(rtt))
        }
        Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => Ok(None),
        Err(e) => Err(e),
    }
}
