use serde_json::{Map, Value};
use stockroom_core::Envelope;

use crate::error::AgentError;
use crate::resolver::ResolvedAction;

/// Thin HTTP client for the gateway's uniform `/actions` endpoint.
pub struct ErpClient {
    http: reqwest::Client,
    base_url: String,
}

impl ErpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("STOCKROOM_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self::new(base_url)
    }

    /// Post a resolved action and decode the envelope, whatever the status.
    /// Rejections come back as failure envelopes too, so only a reply that
    /// does not parse is unexpected.
    pub async fn dispatch(&self, resolved: &ResolvedAction) -> Result<Envelope, AgentError> {
        let mut body = Map::new();
        body.insert(
            "action".to_string(),
            Value::String(resolved.action.clone()),
        );
        for (key, value) in &resolved.parameters {
            body.insert(key.clone(), Value::String(value.clone()));
        }

        let response = self
            .http
            .post(format!("{}/actions", self.base_url))
            .json(&Value::Object(body))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|_| AgentError::BadReply(format!("{status}: {text}")))
    }

    pub async fn health(&self) -> bool {
        match self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
