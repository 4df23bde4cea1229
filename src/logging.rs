//! Tracing subscriber setup for the binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `filter` (an `EnvFilter` directive).
///
/// An invalid directive falls back to `warn`. Calling this twice is harmless;
/// the second call is ignored.
pub fn init_logging(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("Invalid log filter {:?} ({}), using \"warn\"", filter, err);
        EnvFilter::new("warn")
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
