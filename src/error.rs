use thiserror::Error;

/// Failures that abort a shard check instead of producing a report.
#[derive(Debug, Error)]
pub enum ShardCheckError {
    #[error("invalid whitelist pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("shard number `{value}` of index `{index}` is not a non-negative integer")]
    InvalidShardNumber { index: String, value: String },

    #[error("failed to decode _cat/shards response: {0}")]
    Decode(#[from] serde_json::Error),
}
