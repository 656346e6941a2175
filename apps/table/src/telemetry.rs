use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber for the binaries.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `warn`.
/// Logs go to stderr so stdout stays clean for the rendered deal.
pub fn init_tracing(verbose: bool, json: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let json_layer = json.then(|| {
        fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .json()
    });
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
