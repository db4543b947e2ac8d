use termtree::Tree;

use crate::output::tree_label;
use crate::status::StatusReport;

/// Build the status board tree: one node per host, in report order.
pub fn status_tree(report: &StatusReport) -> Tree<String> {
    let mut root = Tree::new(tree_label(format!(
        "Host status ({}) {}/{} online",
        report.method.as_str().to_uppercase(),
        report.online_count(),
        report.entries.len()
    )));
    for entry in &report.entries {
        let mut node = Tree::new(tree_label(entry.host.clone()));
        node.push(Tree::new(tree_label(format!("status: {}", entry.result.status_label()))));
        node.push(Tree::new(tree_label(format!("latency: {}", entry.result.latency_label()))));
        node.push(Tree::new(tree_label(format!(
            "annotation: {}",
            entry.annotation.as_deref().unwrap_or("-")
        ))));
        root.push(node);
    }
    root
}

/// Print the status report in a tree structure.
pub fn print_status_tree(report: &StatusReport) {
    println!("{}", status_tree(report));
    println!("Elapsed: {:?}", report.probe_time);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ping::{method::ProbeMethod, result::ProbeResult};
    use crate::status::HostStatus;
    use std::time::Duration;

    #[test]
    fn rows_follow_report_order() {
        let report = StatusReport {
            method: ProbeMethod::TcpConnect,
            entries: vec![
                HostStatus {
                    host: "ec0.kevacoin.org".to_string(),
                    annotation: Some("5".to_string()),
                    result: ProbeResult::reachable(23.456),
                },
                HostStatus {
                    host: "ec1.kevacoin.org".to_string(),
                    annotation: None,
                    result: ProbeResult::unreachable(),
                },
            ],
            start_time: String::new(),
            probe_time: Duration::from_millis(5),
        };
        let text = status_tree(&report).to_string();
        assert!(text.starts_with("Host status (TCP) 1/2 online"));
        let ec0 = text.find("ec0.kevacoin.org").unwrap();
        let ec1 = text.find("ec1.kevacoin.org").unwrap();
        assert!(ec0 < ec1);
        assert!(text.contains("latency: 23 ms"));
        assert!(text.contains("status: offline"));
        assert!(text.contains("latency: -"));
        assert!(text.contains("annotation: 5"));
    }
}
