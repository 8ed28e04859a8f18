//! Tracing subscriber setup.

use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal},
};

/// Filter comes from `RUST_LOG`, falling back to `info`.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let initialized = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true)
        .try_init()
        .is_ok();

    if initialized {
        tracing::info!("logger initialized");
    }
}
