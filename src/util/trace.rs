//! Installs a `tracing_subscriber` formatter for the instrumented entry
//! points, filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=routers_frechet=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
///
/// Records emitted through `log` are forwarded to the same subscriber.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
