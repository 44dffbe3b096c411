use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prerender-config")]
#[command(
    version,
    about = "Inspect a prerender service configuration and the values derived from it",
    long_about = "prerender-config\n\nCommands:\n- show: print the decoded configuration (yaml, json or a redacted summary).\n- sources: print the crawl sources selected by prerender.lookup.type.\n- selector: print the element selector a render waits for.\n- cache-name: print the storage file name for a page URL.\n- check: load the configuration and print a one-line summary.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose (debug) logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Config file or directory (containing config.yaml / config.yml); falls back to $CONFIG_PATH, then ./configuration"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the decoded configuration
    Show {
        #[arg(long, value_enum, default_value = "yaml", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Print the crawl sources for the configured lookup type
    Sources {
        #[arg(long, help = "Print one source per line instead of the joined form")]
        lines: bool,
    },

    /// Print the element selector a render waits for
    Selector {
        #[arg(
            long,
            value_name = "VALUE",
            help = "Attribute value substituted into [name=VALUE] when attribute waiting is enabled"
        )]
        attr_value: Option<String>,
    },

    /// Print the storage file name for a page URL
    CacheName {
        #[arg(help = "Page URL (absolute, or relative to prerender.lookup.base_url)")]
        url: String,
    },

    /// Load the configuration and print a one-line summary
    Check,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, OutputFormat};
    use clap::Parser;

    #[test]
    fn show_command_uses_defaults() {
        let cli = Cli::try_parse_from(["prerender-config", "show"]).unwrap();

        assert!(!cli.verbose);

        match cli.command {
            Commands::Show { format, output } => {
                assert!(matches!(format, OutputFormat::Yaml));
                assert!(output.is_none());
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn show_command_respects_overrides() {
        let cli = Cli::try_parse_from([
            "prerender-config",
            "show",
            "--format",
            "json",
            "--output",
            "resolved.json",
            "--config",
            "prod.yaml",
        ])
        .unwrap();

        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("prod.yaml"))
        );
        match cli.command {
            Commands::Show { format, output } => {
                assert!(matches!(format, OutputFormat::Json));
                assert_eq!(
                    output.as_deref(),
                    Some(std::path::Path::new("resolved.json"))
                );
            }
            _ => panic!("expected show command with overrides"),
        }
    }

    #[test]
    fn selector_command_takes_attr_value() {
        let cli = Cli::try_parse_from([
            "prerender-config",
            "--verbose",
            "selector",
            "--attr-value",
            "loaded",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Selector { attr_value } => {
                assert_eq!(attr_value.as_deref(), Some("loaded"));
            }
            _ => panic!("expected selector command"),
        }
    }

    #[test]
    fn cache_name_requires_url() {
        assert!(Cli::try_parse_from(["prerender-config", "cache-name"]).is_err());

        let cli =
            Cli::try_parse_from(["prerender-config", "cache-name", "/blog?page=2"]).unwrap();
        match cli.command {
            Commands::CacheName { url } => assert_eq!(url, "/blog?page=2"),
            _ => panic!("expected cache-name command"),
        }
    }

    #[test]
    fn sources_lines_flag() {
        let cli = Cli::try_parse_from(["prerender-config", "sources", "--lines"]).unwrap();
        assert!(matches!(cli.command, Commands::Sources { lines: true }));
    }
}
