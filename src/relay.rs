use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailRelayConfig;
use crate::contact::ContactForm;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("email relay is not configured")]
    NotConfigured,
    #[error("email relay request failed: {0}")]
    Transport(String),
    #[error("email relay rejected message: status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a contact message somewhere a human will read it.
#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(&self, message: &ContactForm) -> Result<(), RelayError>;
}

#[derive(Debug, Serialize, PartialEq)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS REST relay; identifiers come from runtime config.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsRelay {
    config: EmailRelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: EmailRelayConfig) -> Self {
        Self { config }
    }

    fn request_body(&self, message: &ContactForm) -> Result<String, RelayError> {
        let request = SendRequest {
            service_id: self.config.service_id.trim(),
            template_id: self.config.template_id.trim(),
            user_id: self.config.public_key.trim(),
            template_params: TemplateParams {
                name: message.name.trim(),
                email: message.email.trim(),
                subject: message.subject.trim(),
                message: message.message.trim(),
            },
        };
        serde_json::to_string(&request).map_err(|err| RelayError::Transport(err.to_string()))
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, message: &ContactForm) -> Result<(), RelayError> {
        if !self.config.is_complete() {
            return Err(RelayError::NotConfigured);
        }
        let body = self.request_body(message)?;
        let response = Request::post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|err| RelayError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| RelayError::Transport(err.to_string()))?;
        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RelayError::Rejected { status, body });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn configured() -> EmailRelayConfig {
        EmailRelayConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk-123".to_string(),
            ..EmailRelayConfig::default()
        }
    }

    #[test]
    fn request_body_carries_ids_and_trimmed_fields() {
        let relay = EmailJsRelay::new(configured());
        let form = ContactForm {
            name: "  Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "hello\n".to_string(),
        };
        let body: serde_json::Value =
            serde_json::from_str(&relay.request_body(&form).unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk-123",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "",
                    "message": "hello"
                }
            })
        );
    }

    #[tokio::test]
    async fn unconfigured_relay_fails_without_network() {
        let relay = EmailJsRelay::new(EmailRelayConfig::default());
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: String::new(),
            message: "hi".to_string(),
        };
        assert_eq!(relay.send(&form).await, Err(RelayError::NotConfigured));
    }
}
