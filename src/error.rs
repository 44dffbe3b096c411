use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

/// Failures while obtaining a [`crate::Configuration`]. Both are fatal at
/// startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode config: {source}")]
    Decode {
        /// Raw document, lossily converted to UTF-8, for diagnostics.
        content: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn decode(bytes: &[u8], source: serde_yaml::Error) -> Self {
        ConfigError::Decode {
            content: String::from_utf8_lossy(bytes).into_owned(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum PrerenderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML encoding error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PrerenderError {
    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            PrerenderError::Config(ConfigError::Read { .. }) => ErrorPayload::new(
                ErrorCategory::Config,
                self.to_string(),
                "Check --config or CONFIG_PATH; a directory must contain config.yaml or config.yml.",
            ),
            PrerenderError::Config(ConfigError::Decode { .. }) => ErrorPayload::new(
                ErrorCategory::Config,
                self.to_string(),
                "Fix the YAML syntax or the value type at the reported line (e.g., concurrent_limit must be an integer).",
            ),
            PrerenderError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Url,
                e.to_string(),
                "Pass an absolute URL (https://example.com/page) or set prerender.lookup.base_url.",
            ),
            PrerenderError::Io(e) => ErrorPayload::new(
                ErrorCategory::Io,
                e.to_string(),
                "Check output paths/permissions.",
            ),
            PrerenderError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Serialization,
                e.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
            PrerenderError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Serialization,
                e.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrerenderError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Url,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
