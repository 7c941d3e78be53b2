use anyhow::{Context, Result};
use tracing::info;

use shard_health_reporter::{load_config, HttpTransport, ShardsCheck};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cfg = load_config()?;
    info!(
        "endpoint = {}, shard_size_limit = {}GB, whitelist = {:?}",
        cfg.endpoint, cfg.shard_size_limit, cfg.whitelisted_indices
    );

    let check = ShardsCheck::from_config(&cfg)?;
    let transport = HttpTransport::new(&cfg.endpoint)?;

    let result = check.run(&transport, cfg.baseline).await?;
    info!("{}: {}", result.title, result.severity);

    // Scheduler reads the result from stdout
    let out = serde_json::to_string(&result).context("Failed to serialize check result")?;
    println!("{}", out);

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
