use std::path::PathBuf;

use clap::{value_parser, ArgAction, Args, Parser, Subcommand, ValueEnum};

use pingboard::config::default::{
    DEFAULT_HOSTS_CONCURRENCY, DEFAULT_TCP_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_TTL,
};

/// pingboard - Host reachability and latency status board
#[derive(Parser, Debug)]
#[command(author, version, about = "pingboard - Host reachability and latency status board", long_about = None)]
pub struct Cli {
    /// Global log level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Log to file (in addition to stdout)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub log_file: bool,

    /// Log file path (default: ~/.pingboard/pingboard.log)
    #[arg(long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub log_file_path: Option<PathBuf>,

    /// Suppress non-error logs
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub quiet: bool,

    /// Save result to a JSON file
    #[arg(short, long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Print the result as JSON instead of a tree
    #[arg(short, long, action = ArgAction::SetTrue, default_value_t = false)]
    pub json: bool,

    /// Suppress stdout output (use with --output)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub no_stdout: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Command,
}

/// Log level
#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    pub fn to_level_filter(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Probe a single host once
    Probe(ProbeArgs),

    /// Probe every host of a host list and print the status board
    Status(StatusArgs),
}

/// Settings shared by every probe
#[derive(Args, Debug, Clone)]
pub struct ProbeOptions {
    /// Probe method: exec | socket | tcp (aliases: raw, icmp, connect, fsockopen)
    #[arg(short, long, default_value = "exec")]
    pub method: String,

    /// Time to live (hop limit)
    #[arg(long, default_value_t = DEFAULT_TTL)]
    pub ttl: u8,

    /// Timeout per probe in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = value_parser!(u64).range(1..=3600))]
    pub timeout: u64,

    /// Port for TCP connect probes
    #[arg(short, long, default_value_t = DEFAULT_TCP_PORT)]
    pub port: u16,
}

/// Single probe arguments
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Target IP or hostname
    #[arg(required = true)]
    pub host: String,

    #[command(flatten)]
    pub probe: ProbeOptions,
}

/// Status board arguments
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// JSON host list: {"hosts": [{"host": "...", "annotation": "...", "port": 80}]}.
    /// Defaults to the built-in list.
    #[arg(long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub hosts: Option<PathBuf>,

    #[command(flatten)]
    pub probe: ProbeOptions,

    /// Concurrency (hosts probed at once, 1 = one after another)
    #[arg(short, long, default_value_t = DEFAULT_HOSTS_CONCURRENCY)]
    pub concurrency: usize,
}
