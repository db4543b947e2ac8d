//! Status report over a list of hosts.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tokio::time::Instant;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::config::default::DEFAULT_HOSTS_CONCURRENCY;
use crate::config::hosts::HostList;
use crate::ping::{method::ProbeMethod, pinger::Pinger, result::ProbeResult, setting::ProbeTarget};

/// Probe outcome for one host of the report
#[derive(Serialize, Clone, Debug)]
pub struct HostStatus {
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    pub result: ProbeResult,
}

/// Ordered list of host statuses, one per input target
#[derive(Serialize, Clone, Debug)]
pub struct StatusReport {
    pub method: ProbeMethod,
    pub entries: Vec<HostStatus>,
    /// start-time in RFC 3339 format
    pub start_time: String,
    pub probe_time: Duration,
}

impl StatusReport {
    pub fn online_count(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_reachable()).count()
    }
    pub fn offline_count(&self) -> usize {
        self.entries.len() - self.online_count()
    }
    /// (host, result) pairs in input order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &ProbeResult)> {
        self.entries.iter().map(|e| (e.host.as_str(), &e.result))
    }
}

/// Builds status reports by probing each host independently.
#[derive(Clone, Debug)]
pub struct StatusReporter {
    pinger: Pinger,
    concurrency: usize,
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new(Pinger::new())
    }
}

impl StatusReporter {
    pub fn new(pinger: Pinger) -> Self {
        Self {
            pinger,
            concurrency: DEFAULT_HOSTS_CONCURRENCY,
        }
    }
    /// Number of hosts probed at once. 1 probes hosts one after another.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Probe every target and return the results in input order.
    ///
    /// A failing probe never stops the report; it shows up as unreachable.
    pub async fn build(&self, targets: &[ProbeTarget], method: ProbeMethod) -> StatusReport {
        let start_time = crate::sys::time::get_sysdate();
        let started = Instant::now();

        let header_span = tracing::info_span!("status");
        header_span.pb_set_style(&crate::output::progress::get_progress_style());
        header_span.pb_set_message(&format!("status ({})", method));
        header_span.pb_set_length(targets.len() as u64);
        header_span.pb_set_position(0);
        header_span.pb_start();

        let pinger = &self.pinger;
        let span = &header_span;
        // `buffered` yields in input order whatever the completion order
        let entries: Vec<HostStatus> = stream::iter(targets)
            .map(move |target| async move {
                let result = match pinger.probe(target, method).await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!("Skipping {}: {}", target.host(), e);
                        ProbeResult::unreachable()
                    }
                };
                span.pb_inc(1);
                HostStatus {
                    host: target.host().to_string(),
                    annotation: None,
                    result,
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        drop(header_span);
        StatusReport {
            method,
            entries,
            start_time,
            probe_time: started.elapsed(),
        }
    }

    /// Build a report for a configured host list, carrying its annotations.
    pub async fn build_for_hosts(
        &self,
        hosts: &HostList,
        ttl: u8,
        timeout_secs: u64,
        port: u16,
        method: ProbeMethod,
    ) -> StatusReport {
        let targets = hosts.targets(ttl, timeout_secs, port);
        let mut report = self.build(&targets, method).await;
        for (entry, annotation) in report.entries.iter_mut().zip(hosts.annotations()) {
            entry.annotation = annotation.map(str::to_string);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hosts::HostEntry;
    use tokio::net::TcpListener;

    async fn open_port() -> (TcpListener, u16) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        (listener, port)
    }

    #[tokio::test]
    async fn keeps_input_order_when_first_host_is_slowest() {
        let (_l1, p1) = open_port().await;
        let (_l2, p2) = open_port().await;
        // TEST-NET-1 never answers: times out or fails, but never first
        let targets = vec![
            ProbeTarget::new("192.0.2.1").with_port(80).with_timeout_secs(1),
            ProbeTarget::new("127.0.0.1").with_port(p1).with_timeout_secs(1),
            ProbeTarget::new("127.0.0.1").with_port(p2).with_timeout_secs(1),
        ];
        let report = StatusReporter::default()
            .with_concurrency(3)
            .build(&targets, ProbeMethod::TcpConnect)
            .await;
        let hosts: Vec<&str> = report.pairs().map(|(h, _)| h).collect();
        assert_eq!(hosts, ["192.0.2.1", "127.0.0.1", "127.0.0.1"]);
        assert!(!report.entries[0].result.is_reachable());
        assert!(report.entries[1].result.is_reachable());
        assert!(report.entries[2].result.is_reachable());
        assert_eq!(report.online_count(), 2);
        assert_eq!(report.offline_count(), 1);
    }

    #[tokio::test]
    async fn invalid_target_does_not_stop_the_report() {
        let (_l, port) = open_port().await;
        let targets = vec![
            ProbeTarget::new("").with_port(port),
            ProbeTarget::new("127.0.0.1").with_port(port).with_timeout_secs(1),
        ];
        let report = StatusReporter::default()
            .with_concurrency(1)
            .build(&targets, ProbeMethod::TcpConnect)
            .await;
        assert_eq!(report.entries.len(), 2);
        assert!(!report.entries[0].result.is_reachable());
        assert!(report.entries[1].result.is_reachable());
    }

    #[tokio::test]
    async fn one_up_one_down_scenario() {
        let (_l, port) = open_port().await;
        let hosts = HostList::new(vec![
            HostEntry {
                host: "127.0.0.1".to_string(),
                annotation: Some("5".to_string()),
                port: Some(port),
            },
            HostEntry::new("192.0.2.1").with_annotation("5"),
        ]);
        let report = StatusReporter::default()
            .build_for_hosts(&hosts, 255, 1, 80, ProbeMethod::TcpConnect)
            .await;
        assert_eq!(report.method, ProbeMethod::TcpConnect);
        assert_eq!(report.entries[0].host, "127.0.0.1");
        assert!(report.entries[0].result.latency_ms().is_some());
        assert_eq!(report.entries[1].host, "192.0.2.1");
        assert!(!report.entries[1].result.is_reachable());
        assert_eq!(report.entries[1].result.latency_ms(), None);
        assert_eq!(report.entries[1].annotation.as_deref(), Some("5"));
    }

    #[tokio::test]
    async fn empty_target_list_gives_empty_report() {
        let report = StatusReporter::default().build(&[], ProbeMethod::Exec).await;
        assert!(report.entries.is_empty());
        assert_eq!(report.online_count(), 0);
    }
}
