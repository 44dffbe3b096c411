mod derive;
mod inspect;

use std::path::{Path, PathBuf};

use prerender_config::{load_config, resolve_config_path, Configuration, Result};

pub use derive::{run_cache_name, run_selector, run_sources};
pub use inspect::{run_check, run_show};

/// Resolves the config location and loads it once for a command.
pub(crate) fn load(config: Option<&Path>) -> Result<(PathBuf, Configuration)> {
    let path = resolve_config_path(config);
    let cfg = load_config(&path)?;
    Ok((path, cfg))
}
