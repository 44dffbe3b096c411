//! Where prerendered pages are written.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StorageType {
    Local,
    S3,
    Other(String),
}

impl Default for StorageType {
    fn default() -> Self {
        StorageType::Other(String::new())
    }
}

impl From<String> for StorageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "local" => StorageType::Local,
            "s3" => StorageType::S3,
            _ => StorageType::Other(value),
        }
    }
}

impl From<StorageType> for String {
    fn from(value: StorageType) -> Self {
        match value {
            StorageType::Local => "local".to_string(),
            StorageType::S3 => "s3".to_string(),
            StorageType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageType::Local => f.write_str("local"),
            StorageType::S3 => f.write_str("s3"),
            StorageType::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalStorageConfig {
    pub storage_path: String,
}

impl LocalStorageConfig {
    pub fn file_path(&self, name: &str) -> PathBuf {
        PathBuf::from(&self.storage_path).join(name.trim_start_matches('/'))
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct S3Config {
    pub region: String,
    pub bucket: String,
    pub bucket_folder: String,
    pub access_key_id: String,
    pub secret_key: String,
    pub cdn_url: String,
}

impl S3Config {
    /// Object key for `name` inside the configured bucket folder.
    pub fn object_key(&self, name: &str) -> String {
        let folder = self.bucket_folder.trim_matches('/');
        let name = name.trim_start_matches('/');
        if folder.is_empty() {
            name.to_string()
        } else {
            format!("{folder}/{name}")
        }
    }

    /// CDN address of the object, if a CDN is configured.
    pub fn public_url(&self, name: &str) -> Option<String> {
        if self.cdn_url.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}",
            self.cdn_url.trim_end_matches('/'),
            self.object_key(name)
        ))
    }
}

impl fmt::Debug for S3Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Config")
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("bucket_folder", &self.bucket_folder)
            .field("access_key_id", &redacted(&self.access_key_id))
            .field("secret_key", &redacted(&self.secret_key))
            .field("cdn_url", &self.cdn_url)
            .finish()
    }
}

/// Placeholder shown instead of a credential; empty stays empty.
pub fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

/// Both branches are always decoded; only the one named by `type` is
/// meaningful. Read them through [`StorageConfig::backend`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub kind: StorageType,
    pub local: LocalStorageConfig,
    pub s3: S3Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend<'a> {
    Local(&'a LocalStorageConfig),
    S3(&'a S3Config),
    /// `type` was empty or unrecognised; carries the raw tag.
    Unconfigured(&'a str),
}

impl StorageConfig {
    pub fn backend(&self) -> StorageBackend<'_> {
        match &self.kind {
            StorageType::Local => StorageBackend::Local(&self.local),
            StorageType::S3 => StorageBackend::S3(&self.s3),
            StorageType::Other(raw) => StorageBackend::Unconfigured(raw),
        }
    }
}
