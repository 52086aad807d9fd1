/*!
 * Structured Tracing
 * Subscriber setup for the allocator's tracing events
 *
 * Allocation events use these fields:
 * - `size`, `count`, `element_size`: requested sizes
 * - `address`, `from`, `to`: block addresses
 * - `accounting`: active accounting mode
 */

use crate::core::limits::ENV_TRACE_JSON;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global subscriber for the crate's events
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - DS_TRACE_JSON: Enable JSON output (default: false)
///
/// Returns `false` if a global subscriber was already installed; calling it
/// more than once is harmless.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| json_requested(&v))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        // JSON output for production/parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_file(true),
            )
            .try_init()
            .is_ok()
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        info!(json = use_json, "structured tracing initialized");
    }
    installed
}

fn json_requested(value: &str) -> bool {
    matches!(value.trim(), "1" | "true")
}
