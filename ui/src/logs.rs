//! Browser console logging.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Filter used when `UI_LOG` was not set at build time.
const DEFAULT_FILTER: &str = "error,ui=debug";

/// Route `tracing` events to the browser console. The filter can be
/// overridden at build time with `UI_LOG`, e.g. `UI_LOG=ui=trace trunk serve`.
pub fn init_logging() {
    let filter = option_env!("UI_LOG").unwrap_or(DEFAULT_FILTER);
    let env_filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false)
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        tracing::info!(filter, "Console logging ready");
    }
}
