//! HTTP client for the classification endpoint.

use std::time::Duration;

use lineup_core::Detection;
use reqwest::multipart::Form;
use reqwest::Client;
use tracing::debug;

use crate::error::ClientError;

const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:5000/classify_image";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Form field carrying the data-URL-encoded image.
const IMAGE_FIELD: &str = "image_data";

/// Classifier client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the classification endpoint.
    pub endpoint_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `LINEUP_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self {
            endpoint_url: std::env::var("LINEUP_ENDPOINT_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string()),
            timeout: Duration::from_secs(env_u64("LINEUP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Client for the remote classification endpoint.
pub struct ClassifierClient {
    http: Client,
    config: ClientConfig,
}

impl ClassifierClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Submit a data-URL-encoded image for classification.
    ///
    /// Returns one [`Detection`] per face the upstream model found; an empty
    /// vector is a valid answer (no face with two eyes detected). Errors are
    /// never retried here — the user resubmits.
    pub async fn classify(&self, image_data: &str) -> Result<Vec<Detection>, ClientError> {
        debug!(url = %self.config.endpoint_url, "sending classification request");

        let form = Form::new().text(IMAGE_FIELD, image_data.to_string());
        let response = self
            .http
            .post(&self.config.endpoint_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let body = response.text().await?;
        let detections: Vec<Detection> = serde_json::from_str(&body)?;
        debug!(faces = detections.len(), "classification response decoded");
        Ok(detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ClassifierClient {
        ClassifierClient::new(ClientConfig {
            endpoint_url: format!("{}/classify_image", server.uri()),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_classify_decodes_detections() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "class": "roger_federer",
                "class_probability": [0.1, 0.9],
                "class_dictionary": {"roger_federer": 1, "serena_williams": 0}
            }])))
            .mount(&server)
            .await;

        let detections = client_for(&server)
            .await
            .classify("data:image/png;base64,AAAA")
            .await
            .unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].label, "roger_federer");
    }

    #[tokio::test]
    async fn test_empty_array_is_ok_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let detections = client_for(&server)
            .await
            .classify("data:image/png;base64,AAAA")
            .await
            .unwrap();
        assert!(detections.is_empty());
    }

    #[tokio::test]
    async fn test_server_fault_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_image"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .classify("data:image/png;base64,AAAA")
            .await
            .unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "model not loaded");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify_image"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .classify("data:image/png;base64,AAAA")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint_url, "http://127.0.0.1:5000/classify_image");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
