use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. Standard output carries the playlist.
///
/// `RUST_LOG` overrides the default filter unless `quiet` is set, in which
/// case only errors are shown.
pub fn init(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("playlist=info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
