use tracing_subscriber::EnvFilter;

/// Setup the logger.
///
/// `RUST_LOG` takes precedence; otherwise the vibrator crates log at `info`,
/// or at `trace` when `verbose` is set.
pub(crate) fn setup(verbose: bool) {
    let level = if verbose { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,vibrator={level},vibrator_hal={level},vibrator_hardware={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
