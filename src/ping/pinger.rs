use crate::error::Result;
use crate::ping::probe::{exec::ExecProbe, icmp::IcmpProbe, tcp::TcpProbe, ProbeStrategy};
use crate::ping::{method::ProbeMethod, result::ProbeResult, setting::ProbeTarget};

/// Pinger structure.
///
/// Runs a single probe with one of the three strategies. No retries: callers
/// that want several attempts call [`Pinger::probe`] again.
#[derive(Clone, Debug, Default)]
pub struct Pinger {
    exec: ExecProbe,
    icmp: IcmpProbe,
    tcp: TcpProbe,
}

impl Pinger {
    /// Create a new Pinger with strategies for the running system.
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_exec(mut self, exec: ExecProbe) -> Self {
        self.exec = exec;
        self
    }
    pub fn with_icmp(mut self, icmp: IcmpProbe) -> Self {
        self.icmp = icmp;
        self
    }
    /// Probe the target with the given method.
    ///
    /// Only an invalid target is an error; an unreachable host is a normal
    /// result.
    pub async fn probe(&self, target: &ProbeTarget, method: ProbeMethod) -> Result<ProbeResult> {
        target.validate()?;
        tracing::debug!("Probing {} via {}", target.host(), method);
        let result = match method {
            ProbeMethod::Exec => self.exec.run(target).await,
            ProbeMethod::RawSocket => self.icmp.run(target).await,
            ProbeMethod::TcpConnect => self.tcp.run(target).await,
        };
        match result.latency_ms() {
            Some(ms) => tracing::info!("{} is up ({}), latency {} ms", target.host(), method, ms),
            None => tracing::info!("{} is down or unreachable ({})", target.host(), method),
        }
        Ok(result)
    }
    /// Probe with a method given by name, e.g. from configuration.
    ///
    /// An unknown name fails before any network activity.
    pub async fn probe_named(&self, target: &ProbeTarget, method: &str) -> Result<ProbeResult> {
        let method: ProbeMethod = method.parse()?;
        self.probe(target, method).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn unknown_method_is_a_configuration_error() {
        // Would hang for the full timeout if any I/O were attempted
        let target = ProbeTarget::new("192.0.2.1").with_timeout_secs(30);
        let started = std::time::Instant::now();
        let err = Pinger::new().probe_named(&target, "carrier-pigeon").await.unwrap_err();
        assert!(matches!(err, ProbeError::UnsupportedMethod(ref m) if m == "carrier-pigeon"));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[tokio::test]
    async fn invalid_target_is_rejected() {
        let target = ProbeTarget::new("127.0.0.1").with_timeout_secs(0);
        let err = Pinger::new().probe(&target, ProbeMethod::TcpConnect).await.unwrap_err();
        assert!(matches!(err, ProbeError::InvalidTarget { .. }));
    }

    #[tokio::test]
    async fn dispatches_tcp_by_name() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let target = ProbeTarget::new("127.0.0.1").with_port(port).with_timeout_secs(2);
        let result = Pinger::new().probe_named(&target, "fsockopen").await.unwrap();
        assert!(result.is_reachable());
    }

    #[tokio::test]
    async fn exec_spawn_failure_collapses_to_unreachable() {
        let pinger = Pinger::new().with_exec(ExecProbe::new().with_program("pingboard-no-such-program"));
        let target = ProbeTarget::new("127.0.0.1").with_timeout_secs(1);
        let result = pinger.probe(&target, ProbeMethod::Exec).await.unwrap();
        assert!(!result.is_reachable());
    }

    #[tokio::test]
    async fn raw_socket_uses_configured_icmp_probe() {
        let icmp = IcmpProbe::new()
            .with_payload(b"pingboard")
            .with_recv_timeout(std::time::Duration::from_secs(1));
        let pinger = Pinger::new().with_icmp(icmp);
        // IPv6 literals are not resolved by the ICMPv4 socket
        let target = ProbeTarget::new("::1").with_timeout_secs(5);
        let started = std::time::Instant::now();
        let result = pinger.probe(&target, ProbeMethod::RawSocket).await.unwrap();
        assert!(!result.is_reachable());
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }
}
