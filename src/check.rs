use anyhow::Result;
use tracing::{debug, info, warn};

use crate::classifier::classify;
use crate::error::ShardCheckError;
use crate::parsing::decode_shard_records;
use crate::report::{failure_title, render_body, tabularize, SUCCESS_TITLE};
use crate::severity::{failure_severity, resolve_with_finding};
use crate::transport::{Transport, TransportResponse, SHARDS_PATH};
use crate::types::{BaselinePolicy, CheckResult, Config, Severity};
use crate::whitelist::{IndexMatcher, RegexWhitelist};

/// One shard check: settings plus the whitelist compiled from them.
pub struct ShardsCheck<M: IndexMatcher = RegexWhitelist> {
    size_limit_gb: f64,
    whitelist: M,
    policy: BaselinePolicy,
}

impl ShardsCheck<RegexWhitelist> {
    pub fn from_config(cfg: &Config) -> Result<Self, ShardCheckError> {
        let whitelist = RegexWhitelist::compile(&cfg.whitelisted_indices)?;
        debug!("compiled {} whitelist pattern(s)", whitelist.len());
        Ok(Self::with_matcher(cfg.shard_size_limit, whitelist, cfg.baseline_policy))
    }
}

impl<M: IndexMatcher> ShardsCheck<M> {
    pub fn with_matcher(size_limit_gb: f64, whitelist: M, policy: BaselinePolicy) -> Self {
        Self {
            size_limit_gb,
            whitelist,
            policy,
        }
    }

    /// Fetch `_cat/shards` once and evaluate it.
    pub async fn run<T: Transport>(&self, transport: &T, baseline: Severity) -> Result<CheckResult> {
        let response = transport.request(SHARDS_PATH).await?;
        Ok(self.evaluate(&response, baseline)?)
    }

    /// Turn a cluster response into the check result. A non-success status is
    /// reported, not returned as an error.
    pub fn evaluate(
        &self,
        response: &TransportResponse,
        baseline: Severity,
    ) -> Result<CheckResult, ShardCheckError> {
        if !response.is_success() {
            warn!("Shards request failed with HTTP {}", response.status);
            return Ok(CheckResult {
                severity: failure_severity(baseline),
                title: failure_title(response.status),
                body: tabularize(&response.body),
            });
        }

        let records = decode_shard_records(&response.body)?;
        let partitions = classify(&records, self.size_limit_gb);
        let summary = partitions.summary();
        debug!(
            "shards: total={} (unclassified {}) started={} initializing={} relocating={} unassigned={} oversized={}",
            summary.total,
            summary.total - summary.classified(),
            summary.started,
            summary.initializing,
            summary.relocating,
            summary.unassigned,
            summary.oversized
        );

        let (severity, finding) = resolve_with_finding(&partitions, &self.whitelist, baseline, self.policy);
        info!("Shards severity {} (baseline {}, {:?})", severity, baseline, finding);

        Ok(CheckResult {
            severity,
            title: SUCCESS_TITLE.to_string(),
            body: render_body(&partitions)?,
        })
    }
}
