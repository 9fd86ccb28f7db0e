use crate::api::models::StrategyAdvice;
use crate::core::services::traits::{AdviceGenerator, StrategistTransport};
use crate::error::AdviceError;
use crate::storage::credentials::ApiCredential;
use async_trait::async_trait;

/// Fixed framing for the model. The user query is passed through to the
/// transport unmodified; no length limits, no sanitization.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a master strategist embodying the wisdom of Sun Tzu and the classic Chinese strategists. \
Users will come to you with modern problems (conflicts, business challenges, relationship issues, etc.). \
Your goal is to analyze their situation and provide wisdom based strictly on 'The Art of War' or 'The 36 Stratagems'.

1. Identify the core conflict or dynamic in the user's query.
2. Select the most appropriate stratagem or principle.
3. Provide the response in the specified JSON format.
4. Tone: Wise, authoritative, calm, yet practical and sharp.
5. Do not be vague. Give specific tactical advice derived from the strategy.";

/// The advice workflow: credential check, schema-constrained dispatch,
/// response validation. The credential is injected at construction and
/// never re-resolved.
pub struct AdviceService<T: StrategistTransport> {
    credential: Option<ApiCredential>,
    transport: T,
}

impl<T: StrategistTransport> AdviceService<T> {
    pub fn new(credential: Option<ApiCredential>, transport: T) -> Self {
        Self {
            credential,
            transport,
        }
    }

    /// Pure function of the credential resolved at startup.
    pub fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    /// Single terminal outcome per call: a fully-formed `StrategyAdvice`
    /// or one error from the taxonomy. No retries, no partial results.
    /// The advice is returned exactly as parsed; the prompt asks for 3
    /// action steps but the count is not enforced here.
    pub async fn request_advice(&self, query: &str) -> Result<StrategyAdvice, AdviceError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(AdviceError::MissingCredential)?;

        let text = self
            .transport
            .generate(credential, SYSTEM_INSTRUCTION, query)
            .await?;

        if text.is_empty() {
            return Err(AdviceError::EmptyResponse);
        }

        serde_json::from_str(&text).map_err(|e| AdviceError::MalformedResponse {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<T: StrategistTransport> AdviceGenerator for AdviceService<T> {
    async fn request_advice(&self, query: &str) -> Result<StrategyAdvice, AdviceError> {
        AdviceService::request_advice(self, query).await
    }
}
