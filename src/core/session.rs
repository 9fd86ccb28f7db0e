use crate::api::models::StrategyAdvice;
use crate::core::classify::{ErrorCategory, classify};
use crate::core::services::traits::AdviceGenerator;
use crate::error::{AppError, CliError};

/// Caller-side state for a run of consultations. Holds the one-way
/// configuration-error latch: once a credential-shaped failure is seen,
/// every later submission is rejected without dispatch until the process
/// restarts. Taking `&mut self` serializes submissions by construction.
pub struct ConsultSession<G: AdviceGenerator> {
    generator: G,
    config_error: bool,
}

impl<G: AdviceGenerator> ConsultSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            config_error: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.config_error
    }

    pub async fn consult(&mut self, query: &str) -> Result<StrategyAdvice, AppError> {
        if self.config_error {
            return Err(CliError::ConsultationDisabled.into());
        }

        let query = query.trim();
        if query.is_empty() {
            return Err(CliError::InvalidArguments("query must not be empty".to_string()).into());
        }

        match self.generator.request_advice(query).await {
            Ok(advice) => Ok(advice),
            Err(err) => {
                if classify(&err) == ErrorCategory::Configuration {
                    self.config_error = true;
                }
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdviceError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedGenerator {
        calls: AtomicUsize,
        responses: Mutex<VecDeque<Result<StrategyAdvice, AdviceError>>>,
    }

    impl ScriptedGenerator {
        fn new(responses: Vec<Result<StrategyAdvice, AdviceError>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                responses: Mutex::new(responses.into()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AdviceGenerator for ScriptedGenerator {
        async fn request_advice(&self, _query: &str) -> Result<StrategyAdvice, AdviceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted generator exhausted")
        }
    }

    fn sample_advice() -> StrategyAdvice {
        StrategyAdvice {
            title: "Attack by Stratagem".to_string(),
            original_quote: "The supreme art of war is to subdue the enemy without fighting."
                .to_string(),
            interpretation: "Win the negotiation before it begins.".to_string(),
            actionable_advice: vec![
                "Gather evidence".to_string(),
                "Find allies".to_string(),
                "Set the terms".to_string(),
            ],
            chinese_character: Some("胜".to_string()),
        }
    }

    fn forbidden() -> AdviceError {
        AdviceError::Http {
            status: 403,
            endpoint: "/v1beta/models/gemini-2.5-flash:generateContent".to_string(),
            message: "PERMISSION_DENIED".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_consultation() {
        let mut session = ConsultSession::new(ScriptedGenerator::new(vec![Ok(sample_advice())]));
        let advice = session.consult("my rival undermines me").await.unwrap();
        assert_eq!(advice, sample_advice());
        assert!(!session.is_locked());
    }

    #[tokio::test]
    async fn test_credential_error_latches_and_blocks_dispatch() {
        let generator = ScriptedGenerator::new(vec![Err(forbidden()), Ok(sample_advice())]);
        let mut session = ConsultSession::new(generator);

        let result = session.consult("first attempt").await;
        assert!(matches!(result, Err(AppError::Advice(AdviceError::Http { status: 403, .. }))));
        assert!(session.is_locked());

        // A later call with a healthy generator response must still be
        // rejected without dispatching.
        let result = session.consult("second attempt").await;
        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::ConsultationDisabled))
        ));
        assert_eq!(session.generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_transient_error_does_not_latch() {
        let generator =
            ScriptedGenerator::new(vec![Err(AdviceError::EmptyResponse), Ok(sample_advice())]);
        let mut session = ConsultSession::new(generator);

        let result = session.consult("first attempt").await;
        assert!(matches!(
            result,
            Err(AppError::Advice(AdviceError::EmptyResponse))
        ));
        assert!(!session.is_locked());

        let advice = session.consult("second attempt").await.unwrap();
        assert_eq!(advice, sample_advice());
        assert_eq!(session.generator.call_count(), 2);
    }

    #[tokio::test]
    async fn test_missing_credential_latches() {
        let generator = ScriptedGenerator::new(vec![Err(AdviceError::MissingCredential)]);
        let mut session = ConsultSession::new(generator);

        let result = session.consult("query").await;
        assert!(matches!(
            result,
            Err(AppError::Advice(AdviceError::MissingCredential))
        ));
        assert!(session.is_locked());
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected_without_dispatch() {
        let generator = ScriptedGenerator::new(vec![Ok(sample_advice())]);
        let mut session = ConsultSession::new(generator);

        let result = session.consult("   ").await;
        assert!(matches!(
            result,
            Err(AppError::Cli(CliError::InvalidArguments(_)))
        ));
        assert_eq!(session.generator.call_count(), 0);
        assert!(!session.is_locked());
    }
}
