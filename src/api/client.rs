use crate::api::models::{GenerateContentRequest, GenerateContentResponse};
use crate::api::schema::strategy_schema;
use crate::core::services::traits::StrategistTransport;
use crate::error::AdviceError;
use crate::storage::credentials::ApiCredential;
use async_trait::async_trait;
use reqwest::Client;

const USER_AGENT: &str = concat!("strategist-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the Gemini generateContent endpoint. No timeout is
/// set here: a consultation waits on the underlying transport's own
/// defaults, and the session layer serializes submissions.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
}

impl GeminiClient {
    pub fn new(base_url: String, model: String, temperature: f32) -> Result<Self, AdviceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AdviceError::Transport {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(GeminiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature,
        })
    }

    fn endpoint_path(&self) -> String {
        format!("/v1beta/models/{}:generateContent", self.model)
    }
}

#[async_trait]
impl StrategistTransport for GeminiClient {
    async fn generate(
        &self,
        credential: &ApiCredential,
        system_instruction: &str,
        query: &str,
    ) -> Result<String, AdviceError> {
        let endpoint = self.endpoint_path();
        let url = format!("{}{}", self.base_url, endpoint);
        let body =
            GenerateContentRequest::new(query, system_instruction, self.temperature, strategy_schema());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| AdviceError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(AdviceError::Http {
                status: status.as_u16(),
                endpoint,
                message,
            });
        }

        let envelope: GenerateContentResponse =
            response.json().await.map_err(|e| AdviceError::MalformedResponse {
                message: format!("Failed to parse response envelope: {}", e),
            })?;

        Ok(envelope.text())
    }
}
