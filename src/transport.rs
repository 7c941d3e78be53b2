use anyhow::{anyhow, Context, Result};
use tracing::debug;

/// `_cat/shards` columns the check reads, with sizes in whole gigabytes.
pub const SHARDS_PATH: &str =
    "/_cat/shards?format=json&bytes=g&h=index,shard,prirep,state,unassigned.reason,docs,store,ip,node";

/// Status and raw body of one request to the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Only `200 OK` carries a shard listing; every other status is reported
    /// as a failed check.
    pub fn is_success(&self) -> bool {
        self.status == http::StatusCode::OK.as_u16()
    }
}

/// Issues a single GET against the cluster. Errors are reserved for requests
/// that never produced a status; an HTTP error status is a normal response.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn request(&self, path: &str) -> Result<TransportResponse>;
}

/// Plain HTTP transport against a cluster base URL such as `http://es:9200`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("cluster base URL is empty"));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn request(&self, path: &str) -> Result<TransportResponse> {
        let url = self.url_for(path);
        debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;
        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;
        debug!("{} answered {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse { status, body })
    }
}
