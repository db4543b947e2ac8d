use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::default::{DEFAULT_TCP_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_TTL};
use crate::error::{ProbeError, Result};

/// What to probe and how long to wait for it.
///
/// A target is built once per probe call and never mutated afterwards;
/// the `with_*` methods consume and return a new value.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Hostname or IP address
    host: String,
    /// Time to live (hop limit)
    ttl: u8,
    /// Per-probe timeout in seconds
    timeout_secs: u64,
    /// Destination port, only used by TCP connect probes
    port: u16,
}

impl ProbeTarget {
    /// Create a target with the default TTL, timeout and port.
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            ttl: DEFAULT_TTL,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            port: DEFAULT_TCP_PORT,
        }
    }
    pub fn with_ttl(mut self, ttl: u8) -> Self {
        self.ttl = ttl;
        self
    }
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
    pub fn host(&self) -> &str {
        &self.host
    }
    pub fn ttl(&self) -> u8 {
        self.ttl
    }
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    /// Check that the target can be probed at all.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ProbeError::InvalidTarget {
                host: self.host.clone(),
                reason: "host name is empty",
            });
        }
        if self.timeout_secs == 0 {
            return Err(ProbeError::InvalidTarget {
                host: self.host.clone(),
                reason: "timeout must be greater than zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let target = ProbeTarget::new("ec0.kevacoin.org");
        assert_eq!(target.host(), "ec0.kevacoin.org");
        assert_eq!(target.ttl(), 255);
        assert_eq!(target.timeout_secs(), 10);
        assert_eq!(target.timeout(), Duration::from_secs(10));
        assert_eq!(target.port(), 80);
        assert!(target.validate().is_ok());
    }

    #[test]
    fn builder_overrides() {
        let target = ProbeTarget::new("127.0.0.1")
            .with_ttl(64)
            .with_timeout_secs(2)
            .with_port(8080);
        assert_eq!(target.ttl(), 64);
        assert_eq!(target.timeout_secs(), 2);
        assert_eq!(target.port(), 8080);
    }

    #[test]
    fn rejects_empty_host_and_zero_timeout() {
        assert!(matches!(
            ProbeTarget::new("  ").validate(),
            Err(ProbeError::InvalidTarget { .. })
        ));
        assert!(matches!(
            ProbeTarget::new("localhost").with_timeout_secs(0).validate(),
            Err(ProbeError::InvalidTarget { .. })
        ));
    }
}
