//! Locating and reading the configuration document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Configuration;
use crate::error::ConfigError;
use crate::storage::StorageBackend;

/// Environment variable naming a config file or directory.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_DIR: &str = "configuration";
const CONFIG_FILE_NAMES: &[&str] = &["config.yaml", "config.yml"];

/// Priority: explicit path > `CONFIG_PATH` > `./configuration`.
///
/// This is the only place `CONFIG_PATH` is read; the CLI passes `--config`
/// through as `explicit` and relies on this fallback, as do library callers.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_CONFIG_DIR),
    }
}

/// Turns a file-or-directory path into the file that should be read.
pub fn locate_config_file(path: &Path) -> Result<PathBuf, ConfigError> {
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| path.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            ConfigError::read(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no {} in directory", CONFIG_FILE_NAMES.join(" or ")),
                ),
            )
        })
}

pub fn read_config_bytes(path: &Path) -> Result<(PathBuf, Vec<u8>), ConfigError> {
    let file = locate_config_file(path)?;
    let bytes = fs::read(&file).map_err(|e| ConfigError::read(&file, e))?;
    Ok((file, bytes))
}

/// Reads and decodes the configuration at `path`, logging the outcome.
pub fn load_config(path: &Path) -> Result<Configuration, ConfigError> {
    let (file, bytes) = read_config_bytes(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "config read error");
        e
    })?;

    let config = Configuration::from_slice(&bytes).map_err(|e| {
        if let ConfigError::Decode { content, .. } = &e {
            tracing::error!(path = %file.display(), error = %e, %content, "config decode error");
        }
        e
    })?;

    log_loaded(&file, &config);
    Ok(config)
}

fn log_loaded(file: &Path, config: &Configuration) {
    let storage = match config.storage.backend() {
        StorageBackend::Local(local) => format!("local:{}", local.storage_path),
        StorageBackend::S3(s3) => format!("s3:{}/{}", s3.bucket, s3.bucket_folder),
        StorageBackend::Unconfigured(raw) => format!("unconfigured:{raw}"),
    };
    let prerender = &config.prerender;
    tracing::info!(
        path = %file.display(),
        service = %config.service.name,
        storage = %storage,
        lookup = %prerender.lookup.kind,
        sources = prerender.lookup.source_urls().len(),
        concurrent_limit = prerender.concurrent_limit,
        viewport = %prerender.viewport,
        "configuration loaded"
    );
    tracing::debug!(
        wait_selector = %prerender.element.base_selector(),
        wait_for = %prerender.wait_for,
        console_string = %prerender.console_string,
        sleep_time = %prerender.sleep_time,
        "wait conditions"
    );
}
