// Panel settings supplied by the embedding page

use serde::{Deserialize, Serialize};

use crate::protocol::OriginPolicy;

/// Target origin used for outbound postMessage calls unless configured
pub const DEFAULT_TARGET_ORIGIN: &str = "*";

/// Default tracing filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for one panel instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelSettings {
    /// Initial endpoint URL text
    pub initial_endpoint_url: String,

    /// Initial schedule interval text
    pub initial_schedule_interval: String,

    /// Origin passed to postMessage for outbound messages
    pub target_origin: String,

    /// Only accept inbound messages from this origin (None = any sender)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origin: Option<String>,

    /// tracing-subscriber filter directive (e.g. "debug", "info,teametric_config_core=trace")
    pub log_level: String,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            initial_endpoint_url: String::new(),
            initial_schedule_interval: String::new(),
            target_origin: DEFAULT_TARGET_ORIGIN.to_string(),
            allowed_origin: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl PanelSettings {
    /// Read settings from a page query string (with or without the leading '?')
    ///
    /// Recognized keys: `endpointUrl`, `scheduleInterval`, `targetOrigin`,
    /// `allowedOrigin`, `logLevel`. Unknown keys are ignored; an empty
    /// `targetOrigin` or `logLevel` keeps the default, an empty
    /// `allowedOrigin` means any origin.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut settings = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "endpointUrl" => settings.initial_endpoint_url = value.into_owned(),
                "scheduleInterval" => settings.initial_schedule_interval = value.into_owned(),
                "targetOrigin" if !value.is_empty() => settings.target_origin = value.into_owned(),
                "allowedOrigin" => {
                    settings.allowed_origin = (!value.is_empty()).then(|| value.into_owned())
                }
                "logLevel" if !value.is_empty() => settings.log_level = value.into_owned(),
                _ => {}
            }
        }

        settings
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn origin_policy(&self) -> OriginPolicy {
        match &self.allowed_origin {
            Some(origin) => OriginPolicy::Exact(origin.clone()),
            None => OriginPolicy::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PanelSettings::default();
        assert_eq!(settings.target_origin, "*");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.origin_policy(), OriginPolicy::Any);
    }

    #[test]
    fn test_from_query() {
        let settings = PanelSettings::from_query(
            "?endpointUrl=https%3A%2F%2Fapi.example.com%2Fv1&scheduleInterval=15&allowedOrigin=https://host.example&extra=1",
        );
        assert_eq!(settings.initial_endpoint_url, "https://api.example.com/v1");
        assert_eq!(settings.initial_schedule_interval, "15");
        assert_eq!(settings.target_origin, "*");
        assert_eq!(
            settings.origin_policy(),
            OriginPolicy::Exact("https://host.example".to_string())
        );
    }

    #[test]
    fn test_from_query_empty_values_keep_defaults() {
        let settings = PanelSettings::from_query("targetOrigin=&allowedOrigin=&logLevel=");
        assert_eq!(settings, PanelSettings::default());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = PanelSettings::from_json(r#"{"initialScheduleInterval": "5"}"#).unwrap();
        assert_eq!(settings.initial_schedule_interval, "5");
        assert_eq!(settings.target_origin, "*");
    }
}
