use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor `-v` is given.
const DEFAULT_FILTER: &str = "mapgen=warn";

/// Install the global subscriber.
///
/// `-v` raises every mapgen crate to `debug`, `-vv` to `trace`. Without it,
/// `RUST_LOG` is honoured. Logs go to stderr so `--dry-run` output stays clean.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        1 => "mapgen=debug".into(),
        _ => "mapgen=trace".into(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
