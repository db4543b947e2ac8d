pub mod exec;
pub mod icmp;
pub mod tcp;

use std::future::Future;

use crate::ping::{method::ProbeMethod, result::ProbeResult, setting::ProbeTarget};

/// A way of measuring latency to a host.
///
/// Every failure (spawn, DNS, refused, timeout, privilege) is reported as
/// [`ProbeResult::unreachable`]; a strategy never fails the caller.
pub trait ProbeStrategy {
    /// The method this strategy implements
    fn method(&self) -> ProbeMethod;
    /// Probe the target once, bounded by its timeout.
    fn run(&self, target: &ProbeTarget) -> impl Future<Output = ProbeResult> + Send;
}
