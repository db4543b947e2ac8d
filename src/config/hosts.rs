use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, Result};
use crate::ping::setting::ProbeTarget;

/// One row of the status board.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HostEntry {
    /// Hostname or IP address
    pub host: String,
    /// Free-form value shown next to the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// TCP port for this host, overriding the report-wide port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl HostEntry {
    pub fn new<S: Into<String>>(host: S) -> Self {
        Self {
            host: host.into(),
            annotation: None,
            port: None,
        }
    }
    pub fn with_annotation<S: Into<String>>(mut self, annotation: S) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

/// Ordered list of hosts to report on.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HostList {
    pub hosts: Vec<HostEntry>,
}

impl HostList {
    pub fn new(hosts: Vec<HostEntry>) -> Self {
        Self { hosts }
    }

    /// The ElectrumX servers of the kevacoin status page.
    pub fn builtin() -> Self {
        Self::new(vec![
            HostEntry::new("ec0.kevacoin.org").with_annotation("5"),
            HostEntry::new("ec1.kevacoin.org").with_annotation("5"),
            HostEntry::new("ec2.kevacoin.org").with_annotation("5"),
            HostEntry::new("9.keva.app").with_annotation("9"),
            HostEntry::new("8.keva.app").with_annotation("8"),
            HostEntry::new("7.keva.app"),
            HostEntry::new("6.keva.app"),
            HostEntry::new("5.keva.app").with_annotation("5"),
        ])
    }

    /// Parse and validate a JSON host list: `{"hosts": [{"host": "..."}]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let list: HostList = serde_json::from_str(json)?;
        list.validate()?;
        Ok(list)
    }

    /// Load a JSON host list from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.hosts.is_empty() {
            return Err(ProbeError::Config("no hosts configured".to_string()));
        }
        if let Some(pos) = self.hosts.iter().position(|e| e.host.trim().is_empty()) {
            return Err(ProbeError::Config(format!("host #{} has an empty name", pos + 1)));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Build one probe target per entry, in list order.
    pub fn targets(&self, ttl: u8, timeout_secs: u64, port: u16) -> Vec<ProbeTarget> {
        self.hosts
            .iter()
            .map(|entry| {
                ProbeTarget::new(entry.host.trim())
                    .with_ttl(ttl)
                    .with_timeout_secs(timeout_secs)
                    .with_port(entry.port.unwrap_or(port))
            })
            .collect()
    }

    pub fn annotations(&self) -> impl Iterator<Item = Option<&str>> {
        self.hosts.iter().map(|e| e.annotation.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_keeps_page_order() {
        let list = HostList::builtin();
        assert_eq!(list.len(), 8);
        assert_eq!(list.hosts[0].host, "ec0.kevacoin.org");
        assert_eq!(list.hosts[7].host, "5.keva.app");
        assert_eq!(list.hosts[5].annotation, None);
        assert!(list.validate().is_ok());
    }

    #[test]
    fn parses_json_with_optional_fields() {
        let json = r#"{"hosts": [
            {"host": "a.example", "annotation": "IPFS"},
            {"host": "b.example", "port": 50002},
            {"host": "c.example"}
        ]}"#;
        let list = HostList::from_json(json).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.hosts[0].annotation.as_deref(), Some("IPFS"));
        assert_eq!(list.hosts[1].port, Some(50002));

        let targets = list.targets(64, 3, 80);
        let hosts: Vec<&str> = targets.iter().map(|t| t.host()).collect();
        assert_eq!(hosts, ["a.example", "b.example", "c.example"]);
        assert_eq!(targets[0].port(), 80);
        assert_eq!(targets[1].port(), 50002);
        assert_eq!(targets[2].ttl(), 64);
        assert_eq!(targets[2].timeout_secs(), 3);
    }

    #[test]
    fn rejects_empty_lists_and_names() {
        assert!(matches!(HostList::from_json(r#"{"hosts": []}"#), Err(ProbeError::Config(_))));
        assert!(matches!(
            HostList::from_json(r#"{"hosts": [{"host": " "}]}"#),
            Err(ProbeError::Config(_))
        ));
        assert!(matches!(HostList::from_json("not json"), Err(ProbeError::Json(_))));
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("pingboard-hosts-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"hosts": [{"host": "127.0.0.1"}]}"#).unwrap();
        let list = HostList::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(list.hosts, vec![HostEntry::new("127.0.0.1")]);
        assert!(matches!(HostList::load(&path), Err(ProbeError::Io(_))));
    }
}
