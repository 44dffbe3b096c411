//! Root configuration document.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::prerender::PrerenderConfig;
use crate::storage::StorageConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceInfo {
    pub name: String,
    pub about: String,
    pub version: String,
    pub docs: String,
    pub contacts: String,
    pub copyright: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapInfo {
    pub url: String,
}

/// The fully resolved configuration. Built once at startup and passed by
/// reference to whatever needs it.
///
/// Every key is optional; an absent key decodes to its zero value. No
/// business validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub service: ServiceInfo,
    pub sitemap: SitemapInfo,
    pub storage: StorageConfig,
    pub prerender: PrerenderConfig,
}

impl Configuration {
    /// Decodes a YAML document. Fails with [`ConfigError::Decode`] on syntax
    /// errors or type mismatches; never returns a partial configuration.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_yaml::from_slice(bytes).map_err(|e| ConfigError::decode(bytes, e))
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
