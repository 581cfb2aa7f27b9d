//! Tracing subscriber setup shared by the server and client binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Pick the first filter string that parses, in priority order.
///
/// Falls back to [`DEFAULT_LOG_FILTER`] when none of the candidates is usable,
/// so a typo in `LOG_LEVEL` never prevents startup.
pub fn select_filter<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|filter| EnvFilter::try_new(filter).is_ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global tracing subscriber.
pub fn init_tracing(filter: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
