// Cross-window message protocol between the panel and its host

use serde::{Deserialize, Serialize};

use crate::models::FormState;

/// Payload of a save-config request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    pub endpoint_url: String,
    pub schedule_interval: String,
}

impl From<&FormState> for ConfigPayload {
    fn from(form: &FormState) -> Self {
        Self {
            endpoint_url: form.endpoint_url.clone(),
            schedule_interval: form.schedule_interval.clone(),
        }
    }
}

/// Panel → host
///
/// Serialized as `{"type": "save-config", "payload": {...}}` or `{"type": "run-now"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum OutboundMessage {
    SaveConfig(ConfigPayload),
    RunNow,
}

impl OutboundMessage {
    pub fn save_config(form: &FormState) -> Self {
        OutboundMessage::SaveConfig(ConfigPayload::from(form))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::SaveConfig(_) => "save-config",
            OutboundMessage::RunNow => "run-now",
        }
    }
}

/// Host → panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InboundMessage {
    /// Save acknowledgement; the payload is forwarded untouched
    ConfigSaved {
        #[serde(default)]
        payload: serde_json::Value,
    },
}

impl InboundMessage {
    /// Decode raw message data, checking the discriminant first
    pub fn from_value(data: &serde_json::Value) -> Result<Self, ProtocolError> {
        let kind = data
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ProtocolError::MissingKind)?;

        match kind {
            "config-saved" => Ok(serde_json::from_value(data.clone())?),
            other => Err(ProtocolError::UnknownKind(other.to_string())),
        }
    }
}

/// Inbound decoding failures (always treated as a no-op by receivers)
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("message has no string \"type\" field")]
    MissingKind,

    #[error("unrecognized message kind: {0}")]
    UnknownKind(String),

    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Which senders may deliver inbound messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Accept from any origin
    #[default]
    Any,
    /// Accept only from this exact origin (e.g. "https://host.example.com")
    Exact(String),
}

impl OriginPolicy {
    pub fn allows(&self, origin: &str) -> bool {
        match self {
            OriginPolicy::Any => true,
            OriginPolicy::Exact(allowed) => allowed == origin,
        }
    }
}
