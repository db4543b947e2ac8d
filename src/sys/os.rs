use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// OS family that decides the flags of the system `ping` command.
#[derive(Deserialize, Serialize, Copy, Clone, Debug, Eq, PartialEq)]
pub enum OsFamily {
    Windows,
    Darwin,
    OtherUnix,
}

impl OsFamily {
    /// OS family of the running system, resolved once.
    pub fn current() -> OsFamily {
        static FAMILY: OnceLock<OsFamily> = OnceLock::new();
        *FAMILY.get_or_init(|| OsFamily::from_os_name(std::env::consts::OS))
    }

    /// Classify an OS name such as `std::env::consts::OS` or `uname -s` output.
    pub fn from_os_name(name: &str) -> OsFamily {
        let upper = name.trim().to_ascii_uppercase();
        if upper.starts_with("WIN") {
            OsFamily::Windows
        } else if upper == "DARWIN" || upper == "MACOS" {
            OsFamily::Darwin
        } else {
            OsFamily::OtherUnix
        }
    }

    /// Arguments for a single echo request with the given TTL and timeout.
    ///
    /// Windows takes the timeout in milliseconds, the others in seconds.
    pub fn ping_args(&self, host: &str, ttl: u8, timeout_secs: u64) -> Vec<String> {
        let ttl = ttl.to_string();
        let mut args: Vec<String> = match self {
            // -n count, -i ttl, -w timeout (ms)
            OsFamily::Windows => vec![
                "-n".into(),
                "1".into(),
                "-i".into(),
                ttl,
                "-w".into(),
                timeout_secs.saturating_mul(1000).to_string(),
            ],
            // -n numeric, -c count, -m ttl, -t timeout (s)
            OsFamily::Darwin => vec![
                "-n".into(),
                "-c".into(),
                "1".into(),
                "-m".into(),
                ttl,
                "-t".into(),
                timeout_secs.to_string(),
            ],
            // -n numeric, -c count, -t ttl, -W timeout (s)
            OsFamily::OtherUnix => vec![
                "-n".into(),
                "-c".into(),
                "1".into(),
                "-t".into(),
                ttl,
                "-W".into(),
                timeout_secs.to_string(),
            ],
        };
        args.push(host.to_string());
        args
    }

    /// Whether stderr is captured along with stdout.
    pub fn merges_stderr(&self) -> bool {
        matches!(self, OsFamily::OtherUnix)
    }
}
