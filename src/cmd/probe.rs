use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use pingboard::{Pinger, ProbeMethod, ProbeResult, ProbeTarget};

use crate::cli::ProbeArgs;

/// JSON record of a single probe
#[derive(Serialize, Debug)]
struct ProbeRecord<'a> {
    target: &'a ProbeTarget,
    method: ProbeMethod,
    result: &'a ProbeResult,
}

/// Run a single probe
pub async fn run(args: ProbeArgs, json: bool, no_stdout: bool, output: Option<PathBuf>) -> Result<()> {
    let method: ProbeMethod = args
        .probe
        .method
        .parse()
        .with_context(|| format!("invalid --method {:?}", args.probe.method))?;
    let target = ProbeTarget::new(args.host)
        .with_ttl(args.probe.ttl)
        .with_timeout_secs(args.probe.timeout)
        .with_port(args.probe.port);

    tracing::info!("Probing {} ({})", target.host(), method.as_str().to_uppercase());
    let result = Pinger::new().probe(&target, method).await?;

    if !no_stdout && !json {
        pingboard::output::probe::print_probe_tree(&target, method, &result);
    }
    let record = ProbeRecord {
        target: &target,
        method,
        result: &result,
    };
    super::emit_json(&record, json && !no_stdout, output.as_deref())
}
