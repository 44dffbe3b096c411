use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// machine-readable; `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "prerender_config=debug"
    } else {
        "prerender_config=info"
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
