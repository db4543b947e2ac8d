use std::path::PathBuf;

use anyhow::{Context, Result};

use pingboard::{HostList, Pinger, ProbeMethod, StatusReporter};

use crate::cli::StatusArgs;

/// Run the status board over the configured host list
pub async fn run(args: StatusArgs, json: bool, no_stdout: bool, output: Option<PathBuf>) -> Result<()> {
    let method: ProbeMethod = args
        .probe
        .method
        .parse()
        .with_context(|| format!("invalid --method {:?}", args.probe.method))?;
    let hosts: HostList = match &args.hosts {
        Some(path) => HostList::load(path)
            .with_context(|| format!("failed to load host list {}", path.display()))?,
        None => HostList::builtin(),
    };
    if hosts.is_empty() {
        anyhow::bail!("no hosts to probe");
    }

    tracing::info!(
        "Starting {} status check. Target: {} host(s), concurrency {}",
        method.as_str().to_uppercase(),
        hosts.len(),
        args.concurrency
    );
    let reporter = StatusReporter::new(Pinger::new()).with_concurrency(args.concurrency);
    let report = reporter
        .build_for_hosts(&hosts, args.probe.ttl, args.probe.timeout, args.probe.port, method)
        .await;
    tracing::info!(
        "Status check completed in {:?}: {} online, {} offline",
        report.probe_time,
        report.online_count(),
        report.offline_count()
    );

    if !no_stdout && !json {
        pingboard::output::status::print_status_tree(&report);
    }
    super::emit_json(&report, json && !no_stdout, output.as_deref())
}
