use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AgentError;
use crate::resolver::{ActionResolver, ResolvedAction};

const SYSTEM_PROMPT: &str = r#"You translate warehouse requests into one JSON action for an ERP API.

Actions and their parameters:
- check_stock: sku
- get_all_stock: (none)
- update_stock: sku, available_qty?, reserved_qty?, location?
- check_order_status: order_id
- get_all_orders: (none)
- update_order: order_id, status?, eta?
- create_purchase_order: sku, quantity, supplier_id?, unit_price?
- check_purchase_order: po_id
- get_all_purchase_orders: (none)
- update_purchase_order: po_id, status?, quantity?

Reply with JSON only, no prose:
{"action": "<action>", "parameters": {...}}

Examples:
User: how many SKU123 do we have?
{"action": "check_stock", "parameters": {"sku": "SKU123"}}

User: order 50 more units of SKU456
{"action": "create_purchase_order", "parameters": {"sku": "SKU456", "quantity": 50}}"#;

/// Where to find the model. Defaults point at a local Ollama in its
/// OpenAI-compatible mode; any /chat/completions server works.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            model: "llama3.2".to_string(),
            api_key: None,
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("STOCKROOM_LLM_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var("STOCKROOM_LLM_MODEL") {
            config.model = model;
        }
        if let Ok(key) = std::env::var("STOCKROOM_LLM_API_KEY") {
            config.api_key = Some(key);
        }
        config
    }
}

/// Resolver backed by a chat-completion model.
pub struct LlmResolver {
    http: reqwest::Client,
    config: LlmConfig,
}

impl LlmResolver {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl ActionResolver for LlmResolver {
    async fn resolve(&self, text: &str) -> Result<ResolvedAction, AgentError> {
        let body = json!({
            "model": self.config.model,
            "temperature": 0,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": text},
            ],
        });

        let mut request = self
            .http
            .post(format!("{}/chat/completions", self.config.base_url))
            .json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let reply: ChatCompletion = request.send().await?.error_for_status()?.json().await?;
        let content = reply
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| AgentError::Resolve("model returned no choices".to_string()))?;

        let mut resolved = parse_resolved(content)?;
        fill_purchase_fallbacks(&mut resolved, text);
        Ok(resolved)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Pull a `ResolvedAction` out of a model reply.
///
/// Models wrap the JSON in prose or code fences often enough that we take
/// the outermost brace pair rather than insisting on a clean document. Some
/// also flatten the parameters into the top level; both shapes are accepted.
fn parse_resolved(content: &str) -> Result<ResolvedAction, AgentError> {
    let slice = match (content.find('{'), content.rfind('}')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => {
            return Err(AgentError::Resolve(format!(
                "model reply carried no JSON object: {content}"
            )));
        }
    };

    let value: Value = serde_json::from_str(slice)
        .map_err(|err| AgentError::Resolve(format!("model reply is not valid JSON: {err}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| AgentError::Resolve("model reply is not a JSON object".to_string()))?;

    let action = object
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| AgentError::Resolve("model reply named no action".to_string()))?
        .to_string();

    let mut parameters = BTreeMap::new();
    match object.get("parameters").and_then(Value::as_object) {
        Some(params) => {
            for (key, value) in params {
                if let Some(text) = stringify(value) {
                    parameters.insert(key.clone(), text);
                }
            }
        }
        None => {
            for (key, value) in object {
                if key == "action" || key == "parameters" {
                    continue;
                }
                if let Some(text) = stringify(value) {
                    parameters.insert(key.clone(), text);
                }
            }
        }
    }

    Ok(ResolvedAction { action, parameters })
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Models regularly forget the sku or quantity on purchase orders even when
/// the user named them. Recover both from the raw text when absent.
fn fill_purchase_fallbacks(resolved: &mut ResolvedAction, text: &str) {
    if resolved.action != "create_purchase_order" {
        return;
    }
    if !resolved.parameters.contains_key("sku") {
        if let Some(sku) = crate::extract::extract_sku(text) {
            resolved.parameters.insert("sku".to_string(), sku);
        }
    }
    if !resolved.parameters.contains_key("quantity") {
        if let Some(quantity) = crate::extract::extract_quantity(text) {
            resolved
                .parameters
                .insert("quantity".to_string(), quantity.to_string());
        }
    }
}
