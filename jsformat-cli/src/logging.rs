use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
#[must_use]
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber.
///
/// An explicit `-v` wins; otherwise `RUST_LOG` is honoured, falling back to
/// `warn`. A second call is a no-op.
pub fn init(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new(level_for(verbose))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
