use std::path::PathBuf;
use std::process::ExitCode;

use prerender_config::Result;

use crate::cli::OutputFormat;
use crate::formatting::render_error;

pub fn run_sources(config: Option<PathBuf>, lines: bool) -> ExitCode {
    let cfg = match super::load(config.as_deref()) {
        Ok((_, cfg)) => cfg,
        Err(err) => return render_error(err, OutputFormat::Pretty),
    };
    let lookup = &cfg.prerender.lookup;

    if lookup.source_urls().is_empty() {
        tracing::warn!(lookup = %lookup.kind, "no page sources configured");
    }

    if lines {
        for source in lookup.source_urls() {
            println!("{source}");
        }
    } else {
        println!("{}", lookup.resolve_source_urls());
    }
    ExitCode::SUCCESS
}

pub fn run_selector(config: Option<PathBuf>, attr_value: Option<String>) -> ExitCode {
    let cfg = match super::load(config.as_deref()) {
        Ok((_, cfg)) => cfg,
        Err(err) => return render_error(err, OutputFormat::Pretty),
    };
    let element = &cfg.prerender.element;

    let selector = match attr_value.as_deref() {
        Some(value) => element.selector_with_attribute(value),
        None => element.base_selector(),
    };
    tracing::debug!(
        selector = %selector,
        attribute_gate = element.has_attribute_gate(),
        "built wait selector"
    );
    println!("{selector}");
    ExitCode::SUCCESS
}

pub fn run_cache_name(config: Option<PathBuf>, url: String) -> ExitCode {
    let result = (|| -> Result<String> {
        let (_, cfg) = super::load(config.as_deref())?;
        Ok(cfg.prerender.page_file_name(&url)?)
    })();

    match result {
        Ok(name) => {
            println!("{name}");
            ExitCode::SUCCESS
        }
        Err(err) => render_error(err, OutputFormat::Pretty),
    }
}
