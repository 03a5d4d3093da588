use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_DIRECTIVE: &str = "squeezebox_bridge=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_directive`. A subscriber that is already
/// installed is left in place.
pub fn init(default_directive: Option<&str>) {
    let fallback = default_directive.unwrap_or(DEFAULT_DIRECTIVE).to_string();
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
