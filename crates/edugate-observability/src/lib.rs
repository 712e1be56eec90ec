//! Edugate Observability
//!
//! Provides configurable observability features including:
//! - Structured logging to console and rolling files
//! - HTTP request/response logging
//! - Prometheus metrics, including access-decision counters
//!
//! This crate can be enabled or disabled at compile time via the `observability` feature flag.
//! At runtime, observability can be further controlled via the `OBSERVABILITY_ENABLED` environment variable.
//!
//! # Examples
//!
//! ```no_run
//! use edugate_observability::{init_tracing, shutdown_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... application code ...
//!     shutdown_tracing().await;
//! }
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use basic_logging::init_basic_console_logging;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware, shutdown_tracing};
#[cfg(feature = "observability")]
pub use metrics::{
    MetricsHandle, init_metrics, metrics_app, metrics_middleware, track_access_decision,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle when metrics are not compiled in.
    #[derive(Debug, Clone)]
    pub struct MetricsHandle;

    impl MetricsHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub fn is_observability_enabled() -> bool {
        false
    }

    /// Falls back to plain console logging.
    pub fn init_tracing() {
        super::basic_logging::init_basic_console_logging();
    }

    pub async fn shutdown_tracing() {}

    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_metrics() -> Option<MetricsHandle> {
        None
    }

    pub fn metrics_app(_handle: MetricsHandle) -> Router {
        Router::new()
    }

    pub fn track_access_decision(_check: &str, _granted: bool) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
