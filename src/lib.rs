//! Prerender configuration library
//!
//! Typed configuration for a headless-browser page prerendering service, plus
//! the values derived from it: the source URLs the crawler starts from and the
//! DOM selector a render waits for.
//!
//! # Module Overview
//!
//! - [`config`] - Root document and YAML decoding
//! - [`storage`] - Local / S3 storage sections
//! - [`prerender`] - Rendering behaviour and wait conditions
//! - [`lookup`] - Source URL resolution
//! - [`element`] - Wait-selector builder
//! - [`loader`] - Locating and reading the document
//! - [`duration`] - Signed durations (`sleep_time`)
//!
//! # Example
//!
//! ```
//! use prerender_config::Configuration;
//!
//! let doc = b"prerender:\n  lookup:\n    type: urls\n    urls: [https://a.test/, https://b.test/]\n  element:\n    id: app\n";
//! let cfg = Configuration::from_slice(doc)?;
//!
//! assert_eq!(cfg.prerender.lookup.resolve_source_urls(), "https://a.test/, https://b.test/");
//! assert_eq!(cfg.prerender.element.base_selector(), "#app");
//! # Ok::<(), prerender_config::ConfigError>(())
//! ```

pub mod config;
pub mod duration;
pub mod element;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod prerender;
pub mod storage;
pub mod viewport;

pub use config::{Configuration, ServiceInfo, SitemapInfo};
pub use duration::SignedDuration;
pub use element::{AttributeConfig, ElementConfig};
pub use error::{ConfigError, ErrorCategory, ErrorPayload, PrerenderError, Result};
pub use loader::{load_config, resolve_config_path, CONFIG_PATH_ENV};
pub use lookup::{resolve_source_urls, LookupConfig, LookupType};
pub use prerender::{PrerenderConfig, WaitCondition};
pub use storage::{LocalStorageConfig, S3Config, StorageBackend, StorageConfig, StorageType};
pub use viewport::ViewportConfig;
