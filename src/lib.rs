// Public modules
pub mod types;
pub mod error;
pub mod config;
pub mod parsing;
pub mod whitelist;
pub mod classifier;
pub mod severity;
pub mod report;
pub mod transport;
pub mod check;

// Re-export commonly used items
pub use types::*;
pub use error::ShardCheckError;
pub use config::{load_config, load_config_with_env, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use parsing::{coerce_size_gb, parse_shard_number, decode_shard_records};
pub use whitelist::{IndexMatcher, RegexWhitelist};
pub use classifier::{classify, Partitions, PartitionSummary};
pub use severity::{resolve, failure_severity};
pub use report::{render_body, tabularize};
pub use transport::{Transport, HttpTransport, TransportResponse, SHARDS_PATH};
pub use check::ShardsCheck;
