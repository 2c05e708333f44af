use serde::Deserialize;
use serde_json::Value;

pub const PLUGIN_ID: &str = "rgb_status";

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("api request failed: {0}")]
    Request(String),
    #[error("api response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SwitchReply {
    #[serde(rename = "lightsOn", default)]
    pub lights_on: bool,
}

/// Capability for talking to the host's plugin command API. Controllers
/// receive an implementation by constructor injection and never reach for
/// a transport themselves.
pub trait CommandClient {
    fn build_url(&self, plugin_id: &str) -> String;

    fn send_command(
        &self,
        plugin_id: &str,
        command: &str,
        payload: Value,
    ) -> Result<Value, ApiError>;

    fn get_state(&self, url: &str) -> Result<SwitchReply, ApiError>;
}

impl<C: CommandClient + ?Sized> CommandClient for &C {
    fn build_url(&self, plugin_id: &str) -> String {
        (**self).build_url(plugin_id)
    }

    fn send_command(
        &self,
        plugin_id: &str,
        command: &str,
        payload: Value,
    ) -> Result<Value, ApiError> {
        (**self).send_command(plugin_id, command, payload)
    }

    fn get_state(&self, url: &str) -> Result<SwitchReply, ApiError> {
        (**self).get_state(url)
    }
}

#[derive(Debug, Clone)]
pub struct HttpCommandClient {
    api_base: String,
    api_key: String,
}

impl HttpCommandClient {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_env(api_key: impl Into<String>) -> Self {
        let api_base = std::env::var("RGB_STATUS_API_BASE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self::new(api_base, api_key)
    }
}

impl CommandClient for HttpCommandClient {
    fn build_url(&self, plugin_id: &str) -> String {
        format!(
            "{}/api/plugin/{}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(plugin_id)
        )
    }

    fn send_command(
        &self,
        plugin_id: &str,
        command: &str,
        payload: Value,
    ) -> Result<Value, ApiError> {
        let url = self.build_url(plugin_id);
        let mut body = match payload {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        body.insert("command".to_string(), Value::String(command.to_string()));

        tracing::debug!(plugin_id, command, "dispatching plugin command");
        let response = ureq::post(&url)
            .set("X-Api-Key", &self.api_key)
            .send_json(Value::Object(body))
            .map_err(|e| ApiError::Request(e.to_string()))?;

        response
            .into_json::<Value>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn get_state(&self, url: &str) -> Result<SwitchReply, ApiError> {
        let response = ureq::get(url)
            .set("X-Api-Key", &self.api_key)
            .call()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        response
            .into_json::<SwitchReply>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
