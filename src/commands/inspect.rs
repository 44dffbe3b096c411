use std::path::PathBuf;
use std::process::ExitCode;

use prerender_config::Result;

use crate::cli::OutputFormat;
use crate::formatting::{format_effective_config, format_pretty, render_error, write_output};

pub fn run_show(
    config: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let result = (|| -> Result<()> {
        let (_, cfg) = super::load(config.as_deref())?;
        let content = match format {
            OutputFormat::Yaml => cfg.to_yaml()?,
            OutputFormat::Json => serde_json::to_string_pretty(&cfg)?,
            OutputFormat::Pretty => format_pretty(&cfg),
        };
        if let Some(path) = &output {
            tracing::info!(path = %path.display(), "writing configuration");
        }
        write_output(&content, output.as_deref())
    })();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => render_error(err, format),
    }
}

pub fn run_check(config: Option<PathBuf>) -> ExitCode {
    match super::load(config.as_deref()) {
        Ok((path, cfg)) => {
            println!("{}", format_effective_config(&cfg, &path));
            ExitCode::SUCCESS
        }
        Err(err) => render_error(err, OutputFormat::Pretty),
    }
}
