use std::net::Ipv4Addr;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;

/// Outcome of a single probe.
///
/// `latency_ms` is present if and only if the host is reachable; the
/// constructors are the only way to build a value.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProbeResult {
    reachable: bool,
    latency_ms: Option<f64>,
    /// Captured output of the ping command (exec probes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_output: Option<String>,
}

impl ProbeResult {
    /// Reachable host with the given latency, rounded to 4 decimal places.
    pub fn reachable(latency_ms: f64) -> ProbeResult {
        ProbeResult {
            reachable: true,
            latency_ms: Some(round_latency(latency_ms)),
            raw_output: None,
        }
    }
    /// Reachable host, latency taken from an elapsed wall-clock time.
    pub fn from_elapsed(elapsed: Duration) -> ProbeResult {
        ProbeResult::reachable(elapsed.as_secs_f64() * 1000.0)
    }
    pub fn unreachable() -> ProbeResult {
        ProbeResult {
            reachable: false,
            latency_ms: None,
            raw_output: None,
        }
    }
    pub fn with_raw_output(mut self, raw_output: String) -> ProbeResult {
        self.raw_output = Some(raw_output);
        self
    }
    pub fn is_reachable(&self) -> bool {
        self.reachable
    }
    pub fn latency_ms(&self) -> Option<f64> {
        self.latency_ms
    }
    pub fn raw_output(&self) -> Option<&str> {
        self.raw_output.as_deref()
    }
    /// Latency as whole milliseconds ("23 ms"), or "-" when unavailable.
    pub fn latency_label(&self) -> String {
        match self.latency_ms {
            Some(ms) => format!("{} ms", ms.trunc() as u64),
            None => String::from("-"),
        }
    }
    pub fn status_label(&self) -> &'static str {
        if self.reachable {
            "online"
        } else {
            "offline"
        }
    }
    /// First IPv4 address that appears in the captured command output.
    pub fn ip_address(&self) -> Option<Ipv4Addr> {
        let output = self.raw_output.as_deref()?;
        ipv4_regex()?
            .find_iter(output)
            .find_map(|m| m.as_str().parse::<Ipv4Addr>().ok())
    }
}

/// Round a latency in milliseconds to 4 decimal places.
pub fn round_latency(ms: f64) -> f64 {
    (ms * 10_000.0).round() / 10_000.0
}

fn ipv4_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").ok())
        .as_ref()
}
