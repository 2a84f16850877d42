//! Error types for generator configuration

use thiserror::Error;

/// Errors raised while building a [`GeneratorConfig`](crate::GeneratorConfig).
///
/// Generating a numeronym never fails; only configuring the generator can.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid generator config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("minimum length must be at least 3, got {min_len}")]
    MinLenTooSmall { min_len: usize },

    #[error("unknown {kind} `{value}`")]
    UnknownOption { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
