use tracing_subscriber::EnvFilter;

/// Map a `-v` count onto a filter; `RUST_LOG` wins when set.
pub fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug,rayon=warn"),
        _ => EnvFilter::new("trace"),
    })
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the demonstration output on stdout. Calling twice is harmless.
pub fn init(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
