pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → API)
pub mod cli; // Command-line interface
pub mod core; // Advice workflow and error classification
pub mod storage; // Configuration and credential resolution

/// Support modules (used across layers)
pub mod api; // Gemini API client
pub mod display; // Advice card rendering
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
