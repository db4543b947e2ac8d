use std::fmt;
use std::process::Stdio;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::default::EXEC_KILL_GRACE_MILLIS;
use crate::ping::{method::ProbeMethod, result::ProbeResult, setting::ProbeTarget};
use crate::sys::os::OsFamily;

use super::ProbeStrategy;

/// Default name of the system ping executable
pub const PING_PROGRAM: &str = "ping";

/// A fully built ping invocation. Arguments are passed to the program
/// as-is, no shell is involved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PingCommand {
    pub program: String,
    pub args: Vec<String>,
    pub merge_stderr: bool,
}

impl fmt::Display for PingCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for display in a POSIX shell.
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._-:/@%+=,".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Hosts that could be mistaken for options or split into several words
/// are never handed to the ping command.
pub fn is_safe_host(host: &str) -> bool {
    !host.is_empty()
        && !host.starts_with('-')
        && !host.chars().any(|c| c.is_whitespace() || c.is_control())
}

/// Probe by running the system `ping` command.
#[derive(Clone, Debug)]
pub struct ExecProbe {
    os_family: OsFamily,
    program: String,
    kill_grace: Duration,
}

impl Default for ExecProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecProbe {
    /// Create an exec probe for the running OS.
    pub fn new() -> Self {
        Self::with_os_family(OsFamily::current())
    }
    pub fn with_os_family(os_family: OsFamily) -> Self {
        Self {
            os_family,
            program: PING_PROGRAM.to_string(),
            kill_grace: Duration::from_millis(EXEC_KILL_GRACE_MILLIS),
        }
    }
    /// Use a different ping executable (name or path).
    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }
    pub fn os_family(&self) -> OsFamily {
        self.os_family
    }
    /// Build the command line for a target.
    pub fn command(&self, target: &ProbeTarget) -> PingCommand {
        PingCommand {
            program: self.program.clone(),
            args: self
                .os_family
                .ping_args(target.host(), target.ttl(), target.timeout_secs()),
            merge_stderr: self.os_family.merges_stderr(),
        }
    }
}

impl ProbeStrategy for ExecProbe {
    fn method(&self) -> ProbeMethod {
        ProbeMethod::Exec
    }

    async fn run(&self, target: &ProbeTarget) -> ProbeResult {
        if !is_safe_host(target.host()) {
            tracing::warn!("Refusing to pass host {:?} to {}", target.host(), self.program);
            return ProbeResult::unreachable();
        }
        let command = self.command(target);
        tracing::debug!("Exec: {}", command);

        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();
        let child = match child {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!("Failed to spawn {}: {}", command.program, e);
                return ProbeResult::unreachable();
            }
        };

        // The child is killed when the wait future is dropped on timeout
        let limit = target.timeout() + self.kill_grace;
        let output = match timeout(limit, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                tracing::debug!("Failed to collect output of {}: {}", command.program, e);
                return ProbeResult::unreachable();
            }
            Err(_) => {
                tracing::debug!("{} did not exit within {:?}", command.program, limit);
                return ProbeResult::unreachable();
            }
        };

        let mut raw_output = String::from_utf8_lossy(&output.stdout).into_owned();
        if command.merge_stderr {
            raw_output.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        tracing::trace!("{} exited with {}: {:?}", command.program, output.status, raw_output);

        match parse_latency(&raw_output) {
            Some(ms) => ProbeResult::reachable(ms).with_raw_output(raw_output),
            None => ProbeResult::unreachable().with_raw_output(raw_output),
        }
    }
}

fn time_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"time[=<]([.0-9]+)\s?ms").ok())
        .as_ref()
}

/// Extract the round-trip time in milliseconds from ping output.
///
/// Accepts `time=23.4 ms` and `time<1ms`. Every non-empty line is
/// searched and the first parseable value wins.
pub fn parse_latency(output: &str) -> Option<f64> {
    let re = time_regex()?;
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| re.captures(line))
        .find_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .map(crate::ping::result::round_latency)
}
