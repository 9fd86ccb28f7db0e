use crate::api::models::StrategyAdvice;
use crate::error::AdviceError;
use crate::storage::credentials::ApiCredential;
use async_trait::async_trait;

/// Seam between the workflow and the HTTP boundary. Returns the raw
/// candidate text; emptiness and parsing are judged by the workflow.
#[async_trait]
pub trait StrategistTransport: Send + Sync {
    async fn generate(
        &self,
        credential: &ApiCredential,
        system_instruction: &str,
        query: &str,
    ) -> Result<String, AdviceError>;
}

/// Seam between the session and the workflow, so the caller-side latch
/// can be tested against a scripted generator.
#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    async fn request_advice(&self, query: &str) -> Result<StrategyAdvice, AdviceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedTransport;

    #[async_trait]
    impl StrategistTransport for CannedTransport {
        async fn generate(
            &self,
            _credential: &ApiCredential,
            _system_instruction: &str,
            query: &str,
        ) -> Result<String, AdviceError> {
            Ok(format!("echo: {}", query))
        }
    }

    #[tokio::test]
    async fn test_transport_trait_object() {
        let transport: Box<dyn StrategistTransport> = Box::new(CannedTransport);
        let credential = ApiCredential::from_flag("key").unwrap();
        let text = transport
            .generate(&credential, "instruction", "my question")
            .await
            .unwrap();
        assert_eq!(text, "echo: my question");
    }
}
