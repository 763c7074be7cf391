//! Logging setup

/// Log tag used on Android
pub const LOG_TAG: &str = "Swipeback";

/// Initialize Android logging
///
/// Routes the `log` crate to logcat and installs a tracing layer that
/// writes there too. Safe to call more than once.
#[cfg(target_os = "android")]
pub fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(LOG_TAG),
    );

    use tracing_subscriber::layer::SubscriberExt;
    let layer = match tracing_android::layer(LOG_TAG) {
        Ok(layer) => layer,
        Err(err) => {
            log::warn!("tracing layer unavailable: {err}");
            return;
        }
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        log::debug!("global subscriber already installed");
    }
}

/// Initialize logging for host-side runs and tests
///
/// Honors `RUST_LOG`, defaulting to info. Safe to call more than once.
#[cfg(not(target_os = "android"))]
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        log::debug!("global subscriber already installed");
    }
}
