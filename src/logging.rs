use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` wins when set.
pub fn init_tracing(debug: bool) {
    let fallback = if debug {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=debug"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}
