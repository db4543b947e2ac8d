//! Host reachability and latency probing.
//!
//! A [`Pinger`] measures one host with one of three strategies:
//! the system `ping` command ([`ProbeMethod::Exec`]), a raw ICMP socket
//! ([`ProbeMethod::RawSocket`]) or a TCP handshake ([`ProbeMethod::TcpConnect`]).
//! A [`StatusReporter`] runs a pinger over an ordered host list and keeps the
//! input order in its [`StatusReport`].
//!
//! ```no_run
//! use pingboard::{Pinger, ProbeMethod, ProbeTarget};
//!
//! # async fn demo() -> pingboard::error::Result<()> {
//! let target = ProbeTarget::new("ec0.kevacoin.org").with_timeout_secs(5);
//! let result = Pinger::new().probe(&target, ProbeMethod::TcpConnect).await?;
//! println!("{} {}", result.status_label(), result.latency_label());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod packet;
pub mod ping;
pub mod status;
pub mod sys;
pub mod util;

pub use config::hosts::{HostEntry, HostList};
pub use error::ProbeError;
pub use ping::method::ProbeMethod;
pub use ping::pinger::Pinger;
pub use ping::probe::{exec::ExecProbe, icmp::IcmpProbe, tcp::TcpProbe, ProbeStrategy};
pub use ping::result::ProbeResult;
pub use ping::setting::ProbeTarget;
pub use status::{HostStatus, StatusReport, StatusReporter};
