use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// Probe strategy selector
#[derive(Deserialize, Serialize, Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ProbeMethod {
    /// Run the system `ping` command and parse its output
    #[default]
    #[serde(rename = "exec")]
    Exec,
    /// Send an ICMP echo request over a raw socket
    #[serde(rename = "socket")]
    RawSocket,
    /// Measure a TCP handshake to the target port
    #[serde(rename = "tcp")]
    TcpConnect,
}

impl ProbeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeMethod::Exec => "exec",
            ProbeMethod::RawSocket => "socket",
            ProbeMethod::TcpConnect => "tcp",
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProbeMethod {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exec" => Ok(ProbeMethod::Exec),
            "socket" | "raw" | "icmp" => Ok(ProbeMethod::RawSocket),
            "tcp" | "connect" | "fsockopen" => Ok(ProbeMethod::TcpConnect),
            _ => Err(ProbeError::UnsupportedMethod(s.to_string())),
        }
    }
}
