use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize basic console logging when full observability is off.
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info")
/// - **Filtering**: `RUST_LOG` wins when set; noisy dependencies are held at warn
/// - **Format**: Compact, with file and line
///
/// Safe to call more than once; later calls are ignored.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "edugate={level},edugate_core={level},edugate_auth={level},tower_http=warn,hyper=warn",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    tracing::info!("Console logging initialized (observability disabled)");
}
