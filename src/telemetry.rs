use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Logs go to stderr; stdout only carries the transaction response.
pub fn setup_telemetry() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let stderr_layer = fmt::Layer::new().with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    });
}
