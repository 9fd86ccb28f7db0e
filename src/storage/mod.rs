//! Storage layer for strategist-cli
//!
//! Handles configuration files (TOML) and API credential resolution from
//! the environment. The credential is resolved once at startup and passed
//! explicitly into the workflow; no secret material is ever written to disk.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
