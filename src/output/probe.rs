use termtree::Tree;

use crate::output::tree_label;
use crate::ping::{method::ProbeMethod, result::ProbeResult, setting::ProbeTarget};

/// Build the tree for a single probe.
pub fn probe_tree(target: &ProbeTarget, method: ProbeMethod, result: &ProbeResult) -> Tree<String> {
    let mut root = Tree::new(tree_label(target.host()));
    root.push(Tree::new(tree_label(format!("Status: {}", result.status_label()))));
    root.push(Tree::new(tree_label(format!("Latency: {}", result.latency_label()))));
    if let Some(ms) = result.latency_ms() {
        root.push(Tree::new(tree_label(format!("RTT: {:.4} ms", ms))));
    }

    let mut setting = Tree::new(tree_label("Probe"));
    setting.push(Tree::new(tree_label(format!("Method: {}", method.as_str().to_uppercase()))));
    setting.push(Tree::new(tree_label(format!("TTL: {}", target.ttl()))));
    setting.push(Tree::new(tree_label(format!("Timeout: {}s", target.timeout_secs()))));
    if method == ProbeMethod::TcpConnect {
        setting.push(Tree::new(tree_label(format!("Port: {}", target.port()))));
    }
    root.push(setting);

    if let Some(ip) = result.ip_address() {
        root.push(Tree::new(tree_label(format!("IP: {}", ip))));
    }
    if let Some(raw) = result.raw_output() {
        let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if !lines.is_empty() {
            let mut output = Tree::new(tree_label("Output"));
            for line in lines {
                output.push(Tree::new(tree_label(line)));
            }
            root.push(output);
        }
    }
    root
}

/// Print the result of a single probe in a tree structure.
pub fn print_probe_tree(target: &ProbeTarget, method: ProbeMethod, result: &ProbeResult) {
    println!("{}", probe_tree(target, method, result));
}
