//! Structured logging for Explorer
//!
//! This module sets up tracing-based logging and provides the severity-tagged
//! status sink the launcher reports through.

use std::error::Error;

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the logging system
///
/// This sets up tracing with:
/// - Environment-based filtering via RUST_LOG env var
/// - Default level of INFO in release builds, DEBUG in debug builds
/// - Compact stderr output with target information
pub fn init() {
    let default_level = if cfg!(debug_assertions) {
        "explorer=debug,explorer_lib=debug,info"
    } else {
        "explorer=info,explorer_lib=info,warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init so a host that already installed a subscriber keeps it
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();
}

/// Initialize logging for tests
///
/// Uses try_init() to avoid panicking if called multiple times.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

/// Severity of a status entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

/// Sink for status messages with an optional cause
pub trait StatusLog: Send + Sync {
    fn log(&self, severity: Severity, message: &str, cause: Option<&dyn Error>);

    /// Log a normal message
    fn v(&self, message: &str) {
        self.log(Severity::Ok, message, None);
    }

    /// Log a warning
    fn w(&self, message: &str, cause: Option<&dyn Error>) {
        self.log(Severity::Warning, message, cause);
    }

    /// Log an error
    fn e(&self, message: &str, cause: Option<&dyn Error>) {
        self.log(Severity::Error, message, cause);
    }
}

/// Status sink that forwards to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl StatusLog for TracingLog {
    fn log(&self, severity: Severity, message: &str, cause: Option<&dyn Error>) {
        let cause = cause.map(|c| c.to_string());
        match (severity, cause) {
            (Severity::Ok, None) => tracing::info!("{}", message),
            (Severity::Ok, Some(cause)) => tracing::info!(%cause, "{}", message),
            (Severity::Warning, None) => tracing::warn!("{}", message),
            (Severity::Warning, Some(cause)) => tracing::warn!(%cause, "{}", message),
            (Severity::Error, None) => tracing::error!("{}", message),
            (Severity::Error, Some(cause)) => tracing::error!(%cause, "{}", message),
        }
    }
}

impl<T: StatusLog + ?Sized> StatusLog for std::sync::Arc<T> {
    fn log(&self, severity: Severity, message: &str, cause: Option<&dyn Error>) {
        (**self).log(severity, message, cause);
    }
}
