use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub shard_size_limit: f64,
    pub whitelisted_indices: Vec<String>,
    pub baseline: Severity,
    pub baseline_policy: BaselinePolicy,
}

pub const DEFAULT_SHARD_SIZE_LIMIT_GB: f64 = 50.0;

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            shard_size_limit: DEFAULT_SHARD_SIZE_LIMIT_GB,
            whitelisted_indices: Vec::new(),
            baseline: Severity::Info,
            baseline_policy: BaselinePolicy::Parity,
        }
    }
}

/// Aggregate alert level, ordered `Info < Warning < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Fatal => "FATAL",
        }
    }

    /// Result of this check escalating on its own findings: at most `Warning`,
    /// but a `Fatal` baseline is kept.
    pub fn escalated_from(baseline: Severity) -> Severity {
        if baseline == Severity::Fatal {
            Severity::Fatal
        } else {
            Severity::Warning
        }
    }

    /// Never lower than `baseline`.
    pub fn floored_at(self, baseline: Severity) -> Severity {
        self.max(baseline)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "WARNING" => Ok(Severity::Warning),
            "FATAL" => Ok(Severity::Fatal),
            other => Err(format!("unknown severity `{}`", other)),
        }
    }
}

/// How the resolver treats the incoming baseline when none of its own
/// escalation rules fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaselinePolicy {
    /// No escalation rule fired means `Info` (oversize alone means `Warning`),
    /// whatever the baseline was.
    #[default]
    Parity,
    /// Never return less than the baseline.
    FloorAtBaseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardState {
    Started,
    Initializing,
    Relocating,
    Unassigned,
    Other,
}

impl ShardState {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "STARTED" => ShardState::Started,
            "INITIALIZING" => ShardState::Initializing,
            "RELOCATING" => ShardState::Relocating,
            "UNASSIGNED" => ShardState::Unassigned,
            _ => ShardState::Other,
        }
    }
}

/// One row of `_cat/shards`. Every value arrives as a string; the optional
/// columns are `null` or missing when the cluster has nothing to report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShardRecord {
    pub index: String,
    pub shard: String,
    pub prirep: String,
    pub state: String,
    #[serde(default, rename = "unassigned.reason", alias = "unassigned_reason")]
    pub unassigned_reason: Option<String>,
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(default)]
    pub store: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub node: Option<String>,
}

impl ShardRecord {
    pub fn shard_state(&self) -> ShardState {
        ShardState::parse(&self.state)
    }

    pub fn is_primary(&self) -> bool {
        self.prirep == "p"
    }
}

/// What one invocation hands back to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Fatal);
        assert_eq!(Severity::Info.max(Severity::Fatal), Severity::Fatal);
    }

    #[test]
    fn test_escalation_never_exceeds_warning_on_its_own() {
        assert_eq!(Severity::escalated_from(Severity::Info), Severity::Warning);
        assert_eq!(Severity::escalated_from(Severity::Warning), Severity::Warning);
        assert_eq!(Severity::escalated_from(Severity::Fatal), Severity::Fatal);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!(" Warning ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("FATAL".parse::<Severity>(), Ok(Severity::Fatal));
        assert!("CRITICAL".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"WARNING\"");
    }

    #[test]
    fn test_shard_record_decodes_cat_column_names() {
        let json = r#"{"index":"logs","shard":"0","prirep":"r","state":"UNASSIGNED",
            "unassigned.reason":"NODE_LEFT","docs":null,"store":null,"ip":null,"node":null}"#;
        let record: ShardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.unassigned_reason.as_deref(), Some("NODE_LEFT"));
        assert_eq!(record.store, None);
        assert_eq!(record.shard_state(), ShardState::Unassigned);
        assert!(!record.is_primary());

        let json = r#"{"index":"logs","shard":"0","prirep":"p","state":"STARTED","unassigned_reason":"x"}"#;
        let record: ShardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.unassigned_reason.as_deref(), Some("x"));
        assert_eq!(record.node, None);
    }

    #[test]
    fn test_unknown_state_is_other() {
        assert_eq!(ShardState::parse("CLOSED"), ShardState::Other);
        assert_eq!(ShardState::parse("started"), ShardState::Other);
    }
}
