mod cli;
mod commands;
mod formatting;
mod logging;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_cache_name, run_check, run_selector, run_show, run_sources};

fn main() -> ExitCode {
    let args = cli::parse();
    logging::init(args.verbose);

    match args.command {
        Commands::Show { format, output } => run_show(args.config, format, output),
        Commands::Sources { lines } => run_sources(args.config, lines),
        Commands::Selector { attr_value } => run_selector(args.config, attr_value),
        Commands::CacheName { url } => run_cache_name(args.config, url),
        Commands::Check => run_check(args.config),
    }
}
