use crate::core::classify::{ErrorCategory, classify};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("AdviceError: {0}")]
    Advice(#[from] AdviceError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Consultation is disabled after a configuration error")]
    ConsultationDisabled,
    #[error("Input error: {0}")]
    InputError(String),
}

/// Failure taxonomy of the advice workflow. Every consultation ends in
/// exactly one of these or a parsed advice value; there is no partial
/// result and the workflow itself never retries.
#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("API credential is not configured")]
    MissingCredential,
    #[error("The strategist returned an empty response")]
    EmptyResponse,
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Transport error: {message}")]
    Transport { message: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration save failed")]
    ConfigSaveFailed,
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

impl AppError {
    /// User-facing message: every advice failure collapses into one of the
    /// two category messages, everything else renders as-is.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Advice(err) => classify(err).user_message().to_string(),
            AppError::Cli(CliError::ConsultationDisabled) => {
                ErrorCategory::Configuration.user_message().to_string()
            }
            other => format!("{}", other),
        }
    }
}
