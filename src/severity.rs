use crate::classifier::Partitions;
use crate::types::{BaselinePolicy, Severity, ShardRecord};
use crate::whitelist::IndexMatcher;

/// Which escalation rule decided the severity. Useful in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    Initializing,
    RelocatingPrimary,
    Unassigned,
    Oversized,
    Healthy,
}

/// Severity for a successful response.
///
/// Rules are tried in order and the first that fires decides:
/// non-whitelisted initializing shards, then relocating primaries of
/// non-whitelisted indices, then non-whitelisted unassigned shards (each of
/// these escalates to `Warning`, or stays `Fatal` if the baseline already is),
/// then any oversized shard (`Warning`), otherwise `Info`.
pub fn resolve<M: IndexMatcher + ?Sized>(
    partitions: &Partitions<'_>,
    whitelist: &M,
    baseline: Severity,
    policy: BaselinePolicy,
) -> Severity {
    resolve_with_finding(partitions, whitelist, baseline, policy).0
}

pub fn resolve_with_finding<M: IndexMatcher + ?Sized>(
    partitions: &Partitions<'_>,
    whitelist: &M,
    baseline: Severity,
    policy: BaselinePolicy,
) -> (Severity, Finding) {
    let finding = first_finding(partitions, whitelist);

    let severity = match finding {
        Finding::Initializing | Finding::RelocatingPrimary | Finding::Unassigned => {
            Severity::escalated_from(baseline)
        }
        Finding::Oversized => Severity::Warning,
        Finding::Healthy => Severity::Info,
    };

    let severity = match policy {
        BaselinePolicy::Parity => severity,
        BaselinePolicy::FloorAtBaseline => severity.floored_at(baseline),
    };

    (severity, finding)
}

fn first_finding<M: IndexMatcher + ?Sized>(partitions: &Partitions<'_>, whitelist: &M) -> Finding {
    if has_unlisted(&partitions.initializing, whitelist) {
        Finding::Initializing
    } else if partitions
        .relocating
        .iter()
        .any(|s| s.is_primary() && !whitelist.is_whitelisted(&s.index))
    {
        Finding::RelocatingPrimary
    } else if has_unlisted(&partitions.unassigned, whitelist) {
        Finding::Unassigned
    } else if !partitions.oversized.is_empty() {
        Finding::Oversized
    } else {
        Finding::Healthy
    }
}

fn has_unlisted<M: IndexMatcher + ?Sized>(group: &[&ShardRecord], whitelist: &M) -> bool {
    group.iter().any(|s| !whitelist.is_whitelisted(&s.index))
}

/// Severity when the cluster did not answer with a success status.
pub fn failure_severity(baseline: Severity) -> Severity {
    if baseline == Severity::Info {
        Severity::Fatal
    } else {
        baseline
    }
}
