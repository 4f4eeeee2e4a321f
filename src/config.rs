use dioxus::prelude::*;
use serde::Deserialize;

pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_RESUME_URL: &str =
    "https://drive.google.com/file/d/1zQ2X6ZG0s-6vIzh04wAjXYat_hsMLQhX/view?usp=sharing";
const DEFAULT_PROFILE_IMAGE_URL: &str =
    "https://i.ibb.co/N6Kg0tjv/480333197-645221228030124-8691638388967413239-n.jpg";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmailRelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for EmailRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_EMAIL_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

impl EmailRelayConfig {
    /// All three EmailJS identifiers are present.
    pub fn is_complete(&self) -> bool {
        ![&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .any(|value| value.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub email: EmailRelayConfig,
    pub resume_url: String,
    pub profile_image_url: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            email: EmailRelayConfig::default(),
            resume_url: DEFAULT_RESUME_URL.to_string(),
            profile_image_url: DEFAULT_PROFILE_IMAGE_URL.to_string(),
        }
    }
}

pub fn use_runtime_config() -> Resource<Result<RuntimeConfig, String>> {
    use_resource(|| async move { fetch_runtime_config().await })
}

/// Copied from `public/config.json` into the bundle root.
#[cfg(target_arch = "wasm32")]
const CONFIG_PATH: &str = "/config.json";

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    Ok(config_from_env(|key| std::env::var(key).ok()))
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    let read = |key: &str, fallback: String| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(fallback)
    };
    RuntimeConfig {
        email: EmailRelayConfig {
            endpoint: read("EMAILJS_ENDPOINT", defaults.email.endpoint),
            service_id: read("EMAILJS_SERVICE_ID", defaults.email.service_id),
            template_id: read("EMAILJS_TEMPLATE_ID", defaults.email.template_id),
            public_key: read("EMAILJS_PUBLIC_KEY", defaults.email.public_key),
        },
        resume_url: read("RESUME_URL", defaults.resume_url),
        profile_image_url: read("PROFILE_IMAGE_URL", defaults.profile_image_url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{ "email": { "service_id": "svc", "template_id": "tpl", "public_key": "key" } }"#,
        )
        .unwrap();
        assert_eq!(config.email.endpoint, DEFAULT_EMAIL_ENDPOINT);
        assert_eq!(config.email.service_id, "svc");
        assert_eq!(config.resume_url, DEFAULT_RESUME_URL);
        assert!(config.email.is_complete());
    }

    #[test]
    fn shipped_sample_parses_with_blank_relay_ids() {
        let config: RuntimeConfig =
            serde_json::from_str(include_str!("../public/config.json")).unwrap();
        assert_eq!(config.email.endpoint, DEFAULT_EMAIL_ENDPOINT);
        assert!(!config.email.is_complete());
        assert_eq!(config.resume_url, DEFAULT_RESUME_URL);
    }

    #[test]
    fn default_relay_is_incomplete() {
        assert!(!RuntimeConfig::default().email.is_complete());
    }

    #[test]
    fn env_overrides_and_blank_values_fall_back() {
        let config = config_from_env(|key| match key {
            "EMAILJS_SERVICE_ID" => Some(" service_x ".to_string()),
            "RESUME_URL" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.email.service_id, "service_x");
        assert_eq!(config.resume_url, DEFAULT_RESUME_URL);
        assert_eq!(config.email.template_id, "");
    }
}
