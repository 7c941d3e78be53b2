use crate::error::ShardCheckError;
use crate::types::ShardRecord;

/// Size column of `_cat/shards?bytes=g`. Missing, blank or garbage values count
/// as 0 GB so a single odd row never aborts the check.
pub fn coerce_size_gb(store: Option<&str>) -> u64 {
    store
        .map(str::trim)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Shard numbers are always well-formed in a healthy response, so a bad one is
/// surfaced as an error rather than papered over.
pub fn parse_shard_number(record: &ShardRecord) -> Result<u32, ShardCheckError> {
    record
        .shard
        .trim()
        .parse::<u32>()
        .map_err(|_| ShardCheckError::InvalidShardNumber {
            index: record.index.clone(),
            value: record.shard.clone(),
        })
}

/// Optional column value, or `fallback` when it is absent or blank.
pub fn display_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

pub fn decode_shard_records(body: &str) -> Result<Vec<ShardRecord>, ShardCheckError> {
    Ok(serde_json::from_str(body)?)
}
