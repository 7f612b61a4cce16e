use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use stratagem_core::config::ClientConfig;
use stratagem_protocol::algo::Algorithm;
use stratagem_protocol::request::RequestPayload;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Thin reqwest wrapper over the simulation service. One POST endpoint
/// per algorithm plus the read-only metadata endpoints. Responses are
/// returned as raw JSON values; their shape is owned by the service and
/// consumed ad hoc by the renderers.
#[derive(Debug, Clone)]
pub struct SimulationClient {
    base_url: String,
    http: Client,
}

impl SimulationClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one algorithm remotely.
    pub async fn run(&self, algo: Algorithm, payload: &RequestPayload) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, algo.endpoint());
        debug!("POST {}", url);
        let resp = self.http.post(&url).json(payload).send().await?;
        Self::read_json(resp).await
    }

    pub async fn health(&self) -> ClientResult<Value> {
        self.get("/health").await
    }

    pub async fn algorithms(&self) -> ClientResult<Value> {
        self.get("/algorithms").await
    }

    pub async fn algorithm_info(&self, slug: &str) -> ClientResult<Value> {
        self.get(&format!("/algorithms/{}/info", slug)).await
    }

    async fn get(&self, path: &str) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        Self::read_json(resp).await
    }

    /// Success bodies pass through as JSON. Error bodies surface their
    /// `detail` field when present; a JSON body without one becomes a
    /// generic status line, a non-JSON body the generic network message.
    async fn read_json(resp: Response) -> ClientResult<Value> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }

        let body = resp.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<Value>(&body) {
            Ok(v) => match v.get("detail") {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Error")
                ),
            },
            Err(_) => "Network error".to_string(),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        })
    }
}
