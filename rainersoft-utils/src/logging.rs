use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the level is `DEBUG`
/// with `verbose` and `INFO` without. Calling this twice is harmless: the
/// second subscriber is discarded.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let installed = match EnvFilter::try_from_default_env() {
        Ok(filter) => builder.with_env_filter(filter).try_init(),
        Err(_) => builder.with_max_level(level).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
