//! Logging setup.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for replacing the log filter once settings are known.
pub struct LogFilterHandle(reload::Handle<EnvFilter, Registry>);

/// ## Summary
/// Installs the global subscriber: a reloadable filter starting at `debug`
/// and a formatter on stderr, keeping stdout for command output.
#[must_use]
pub fn init() -> LogFilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    LogFilterHandle(filter_handle)
}

impl LogFilterHandle {
    /// Applies a `tracing_subscriber::EnvFilter` directive; an invalid one
    /// keeps the current filter and logs a warning.
    pub fn apply(&self, directive: &str) {
        match EnvFilter::try_new(directive) {
            Ok(filter) => {
                if let Err(e) = self.0.modify(|current| *current = filter) {
                    tracing::warn!(error = %e, "Failed to update log filter from config");
                }
            }
            Err(e) => {
                tracing::warn!(
                    level = %directive,
                    error = %e,
                    "Invalid log level in config, keeping debug"
                );
            }
        }
    }
}
