use crate::error::AdviceError;

/// The two user-facing failure categories. Configuration failures latch
/// the session; everything else is reported as transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transient,
}

impl ErrorCategory {
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => {
                "Configuration error: the strategist cannot be reached. \
                 Set STRATEGIST_API_KEY (or GEMINI_API_KEY / API_KEY) and run again."
            }
            ErrorCategory::Transient => {
                "The strategist is silent. Please check your connection and try again."
            }
        }
    }
}

/// Single home of the credential-error heuristic. HTTP 400/403 are checked
/// structurally; the keyword match on the rendered message is kept for
/// opaque transport errors, where the upstream boundary exposes no error
/// code we can rely on. A change in upstream error text can misclassify.
pub fn classify(error: &AdviceError) -> ErrorCategory {
    match error {
        AdviceError::MissingCredential => ErrorCategory::Configuration,
        AdviceError::Http {
            status: 400 | 403, ..
        } => ErrorCategory::Configuration,
        AdviceError::Http { message, .. } | AdviceError::Transport { message } => {
            if message.contains("API Key") || message.contains("400") || message.contains("403") {
                ErrorCategory::Configuration
            } else {
                ErrorCategory::Transient
            }
        }
        AdviceError::EmptyResponse | AdviceError::MalformedResponse { .. } => {
            ErrorCategory::Transient
        }
    }
}
