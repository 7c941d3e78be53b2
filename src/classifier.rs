use crate::parsing::coerce_size_gb;
use crate::types::{ShardRecord, ShardState};

/// Shard records grouped by lifecycle state, plus the orthogonal oversize group.
/// A record shows up in its state group and, independently, in `oversized`.
#[derive(Debug, Default, Clone)]
pub struct Partitions<'a> {
    pub all: Vec<&'a ShardRecord>,
    pub started: Vec<&'a ShardRecord>,
    pub initializing: Vec<&'a ShardRecord>,
    pub relocating: Vec<&'a ShardRecord>,
    pub unassigned: Vec<&'a ShardRecord>,
    pub oversized: Vec<&'a ShardRecord>,
}

impl<'a> Partitions<'a> {
    pub fn summary(&self) -> PartitionSummary {
        PartitionSummary {
            total: self.all.len(),
            started: self.started.len(),
            initializing: self.initializing.len(),
            relocating: self.relocating.len(),
            unassigned: self.unassigned.len(),
            oversized: self.oversized.len(),
        }
    }
}

/// Group sizes, in the order they appear in the report's summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionSummary {
    pub total: usize,
    pub started: usize,
    pub initializing: usize,
    pub relocating: usize,
    pub unassigned: usize,
    pub oversized: usize,
}

impl PartitionSummary {
    /// Records in one of the four recognised states.
    pub fn classified(&self) -> usize {
        self.started + self.initializing + self.relocating + self.unassigned
    }
}

pub fn classify(records: &[ShardRecord], size_limit_gb: f64) -> Partitions<'_> {
    let mut partitions = Partitions::default();

    for record in records {
        partitions.all.push(record);

        match record.shard_state() {
            ShardState::Started => partitions.started.push(record),
            ShardState::Initializing => partitions.initializing.push(record),
            ShardState::Relocating => partitions.relocating.push(record),
            ShardState::Unassigned => partitions.unassigned.push(record),
            ShardState::Other => {}
        }

        if coerce_size_gb(record.store.as_deref()) as f64 > size_limit_gb {
            partitions.oversized.push(record);
        }
    }

    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shard(index: &str, state: &str, store: Option<&str>) -> ShardRecord {
        ShardRecord {
            index: index.to_string(),
            shard: "0".to_string(),
            prirep: "p".to_string(),
            state: state.to_string(),
            store: store.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_empty() {
        let partitions = classify(&[], 50.0);
        assert_eq!(partitions.summary(), PartitionSummary::default());
    }

    #[test]
    fn test_classify_by_state() {
        let records = vec![
            shard("a", "STARTED", Some("1")),
            shard("b", "INITIALIZING", None),
            shard("c", "RELOCATING", Some("2")),
            shard("d", "UNASSIGNED", None),
            shard("e", "UNASSIGNED", None),
            shard("f", "CLOSED", None),
        ];
        let summary = classify(&records, 50.0).summary();

        assert_eq!(summary.total, 6);
        assert_eq!(summary.started, 1);
        assert_eq!(summary.initializing, 1);
        assert_eq!(summary.relocating, 1);
        assert_eq!(summary.unassigned, 2);
        assert_eq!(summary.oversized, 0);
        // The CLOSED shard only counts toward the total
        assert_eq!(summary.classified(), 5);
    }

    #[test]
    fn test_oversize_is_independent_of_state() {
        let records = vec![
            shard("big", "STARTED", Some("51")),
            shard("moving", "RELOCATING", Some("80")),
            shard("edge", "STARTED", Some("50")),
        ];
        let partitions = classify(&records, 50.0);

        assert_eq!(partitions.started.len(), 2);
        assert_eq!(partitions.relocating.len(), 1);
        let oversized: Vec<&str> = partitions.oversized.iter().map(|r| r.index.as_str()).collect();
        // Strictly greater than the limit
        assert_eq!(oversized, vec!["big", "moving"]);
    }

    #[test]
    fn test_malformed_store_is_not_oversized() {
        let records = vec![
            shard("a", "STARTED", Some("huge")),
            shard("b", "STARTED", Some("")),
            shard("c", "STARTED", None),
        ];
        let partitions = classify(&records, 0.5);
        assert!(partitions.oversized.is_empty());
        assert_eq!(partitions.started.len(), 3);
    }

    #[test]
    fn test_fractional_limit() {
        let records = vec![shard("a", "STARTED", Some("1"))];
        assert_eq!(classify(&records, 0.5).oversized.len(), 1);
        assert_eq!(classify(&records, 1.0).oversized.len(), 0);
    }
}
