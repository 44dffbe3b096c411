use std::fmt::Write as FmtWrite;
use std::path::Path;
use std::process::ExitCode;

use prerender_config::storage::{redacted, StorageBackend};
use prerender_config::{Configuration, PrerenderError, Result};

use crate::cli::OutputFormat;

/// Write `content` to a file, or stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => println!("{}", content.trim_end_matches('\n')),
    }
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: PrerenderError, format: OutputFormat) -> ExitCode {
    let payload = err.to_payload();

    match format {
        OutputFormat::Json => {
            let content = serde_json::to_string(&payload)
                .unwrap_or_else(|_| "{\"category\":\"unknown\"}".into());
            println!("{content}");
        }
        OutputFormat::Yaml | OutputFormat::Pretty => {
            eprintln!("Error [{:?}]: {}", payload.category, payload.message);
            if let Some(hint) = payload.remediation {
                eprintln!("Hint: {hint}");
            }
        }
    }

    ExitCode::from(2)
}

/// Human-readable summary of the configuration with credentials hidden.
pub fn format_pretty(cfg: &Configuration) -> String {
    let mut out = String::new();
    let p = &cfg.prerender;

    let _ = writeln!(
        out,
        "Service: {} {}",
        or_dash(&cfg.service.name),
        cfg.service.version
    );
    if !cfg.service.about.is_empty() {
        let _ = writeln!(out, "  {}", cfg.service.about);
    }
    let _ = writeln!(out, "Sitemap: {}", or_dash(&cfg.sitemap.url));

    match cfg.storage.backend() {
        StorageBackend::Local(local) => {
            let _ = writeln!(out, "Storage: local ({})", or_dash(&local.storage_path));
        }
        StorageBackend::S3(s3) => {
            let _ = writeln!(
                out,
                "Storage: s3 (region {}, bucket {}, folder {}, key {}, cdn {})",
                or_dash(&s3.region),
                or_dash(&s3.bucket),
                or_dash(&s3.bucket_folder),
                or_dash(redacted(&s3.access_key_id)),
                or_dash(&s3.cdn_url)
            );
        }
        StorageBackend::Unconfigured(raw) => {
            let _ = writeln!(out, "Storage: unconfigured (type {:?})", raw);
        }
    }

    let _ = writeln!(
        out,
        "Prerender: user agent {}, postfix {}, concurrency {}, viewport {}",
        or_dash(&p.user_agent),
        or_dash(&p.file_postfix),
        p.concurrent_limit,
        p.viewport
    );
    let _ = writeln!(
        out,
        "Lookup: type {:?}, headless {}, base {}",
        p.lookup.kind.to_string(),
        p.lookup.headless,
        or_dash(&p.lookup.base_url)
    );
    for source in p.lookup.source_urls() {
        let _ = writeln!(out, "  - {source}");
    }
    if !p.lookup.get_params_to_save.is_empty() {
        let _ = writeln!(
            out,
            "  saved params: {}",
            p.lookup.get_params_to_save.join(", ")
        );
    }

    let conditions = p.wait_conditions();
    if conditions.is_empty() {
        let _ = writeln!(out, "Wait: none");
    } else {
        let _ = writeln!(out, "Wait:");
        for condition in conditions {
            let _ = writeln!(out, "  - {condition:?}");
        }
    }
    if p.element.has_attribute_gate() {
        let _ = writeln!(
            out,
            "  attribute gate: {}",
            p.element.selector_with_attribute("<value>")
        );
    }

    out
}

/// Format the loaded configuration as a single-line string.
pub fn format_effective_config(cfg: &Configuration, config_source: &Path) -> String {
    let p = &cfg.prerender;
    let storage = match cfg.storage.backend() {
        StorageBackend::Local(_) => "local".to_string(),
        StorageBackend::S3(_) => "s3".to_string(),
        StorageBackend::Unconfigured(raw) => format!("unconfigured({raw})"),
    };
    format!(
        "Effective config [{}]: service={}, storage={}, lookup={} ({} sources), concurrency={}, viewport={}, wait-selector={}",
        config_source.display(),
        or_dash(&cfg.service.name),
        storage,
        or_dash(&p.lookup.kind.to_string()),
        p.lookup.source_urls().len(),
        p.concurrent_limit,
        p.viewport,
        or_dash(&p.element.base_selector()),
    )
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
