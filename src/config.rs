//! Settings come from the environment: `ES_URL` (required), `SHARD_SIZE_LIMIT`,
//! `WHITELISTED_INDICES`, `BASELINE_SEVERITY` and `FLOOR_AT_BASELINE`.

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use crate::types::{BaselinePolicy, Config, Severity, DEFAULT_SHARD_SIZE_LIMIT_GB};

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config() -> Result<Config> {
    load_config_with_env(&SystemEnvironment)
}

pub fn load_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<Config> {
    let endpoint = env.get_var("ES_URL")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| anyhow!("ES_URL env var must be set (e.g. http://localhost:9200)"))?;

    let shard_size_limit = match env.get_var("SHARD_SIZE_LIMIT").filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.trim().parse::<f64>().context("Invalid SHARD_SIZE_LIMIT")?,
        None => DEFAULT_SHARD_SIZE_LIMIT_GB,
    };
    if !(shard_size_limit.is_finite() && shard_size_limit > 0.0) {
        return Err(anyhow!("SHARD_SIZE_LIMIT must be a positive number of GB, got {}", shard_size_limit));
    }

    let whitelisted_indices: Vec<String> = env.get_var("WHITELISTED_INDICES")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let baseline = match env.get_var("BASELINE_SEVERITY").filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw.parse::<Severity>()
            .map_err(|e| anyhow!(e))
            .context("Invalid BASELINE_SEVERITY")?,
        None => Severity::Info,
    };

    let floor_at_baseline = env.get_var("FLOOR_AT_BASELINE")
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
        .unwrap_or(false);
    let baseline_policy = if floor_at_baseline {
        BaselinePolicy::FloorAtBaseline
    } else {
        BaselinePolicy::Parity
    };

    Ok(Config {
        endpoint,
        shard_size_limit,
        whitelisted_indices,
        baseline,
        baseline_policy,
    })
}
