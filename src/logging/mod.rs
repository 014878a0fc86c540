use tracing_subscriber::EnvFilter;

/// Log directive used when `RUST_LOG` is unset.
///
/// `-v` flags take precedence over the configured level.
pub fn default_directive(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(level)) if !level.trim().is_empty() => level.trim().to_string(),
        (0, _) => "warn".to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the stderr subscriber. Safe to call once per process.
pub fn init(verbose: u8, configured: Option<&str>, ansi: bool) -> Result<(), String> {
    let directive = default_directive(verbose, configured);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .map_err(|e| format!("invalid log level '{directive}': {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .try_init()
        .map_err(|e| format!("failed to install logger: {e}"))
}
