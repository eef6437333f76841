use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Route diagnostic events to stderr so stdout carries only the report.
///
/// The filter is fixed: warnings from this crate, nothing from dependencies.
pub fn init_tracing() {
    let filter = EnvFilter::new(format!("{}=warn", env!("CARGO_CRATE_NAME")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}
