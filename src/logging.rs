use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. Level comes from `RUST_LOG`, falling back
/// to `info`; `verbose` lowers the fallback to `debug`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
