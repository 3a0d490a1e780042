//! Tracing setup for assist binaries.
//!
//! Library crates only emit events through the `tracing` macros. A binary builds an
//! [AssistTracer], adds the layers it wants and calls [Tracer::init] once at startup:
//!
//! ```no_run
//! use assist_tracing::{AssistTracer, LayerInfo, LogFormat, Tracer};
//!
//! let _guard = AssistTracer::new()
//!     .with_stdout(LayerInfo::new(
//!         LogFormat::Terminal,
//!         "info".to_string(),
//!         String::new(),
//!         Some("always".to_string()),
//!     ))
//!     .init()
//!     .expect("failed to initialize tracing");
//! ```

mod formatter;
mod layers;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard};

// re-export so binaries can name directives and filters without a direct dependency
pub use tracing_subscriber;

/// Settings for a single log layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Creates layer settings.
    ///
    /// * `default_directive` - the level applied when `RUST_LOG` does not say otherwise
    /// * `filters` - comma separated extra directives such as `assist_common=trace`
    /// * `color` - the color mode, or `None` to never emit ANSI codes
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "info".to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// Installs a global tracing subscriber.
pub trait Tracer {
    /// Installs the subscriber, returning the guard of the file layer if one was configured.
    ///
    /// Installing a second subscriber is silently ignored.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

/// The tracer used by assist binaries: a stdout layer plus optional journald and file layers.
#[derive(Debug, Clone, Default)]
pub struct AssistTracer {
    stdout: LayerInfo,
    journald: Option<String>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl AssistTracer {
    /// Creates a tracer that logs `info` and above to stdout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stdout layer settings.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Also logs to journald, filtered by `filter`.
    pub fn with_journald(mut self, filter: String) -> Self {
        self.journald = Some(filter);
        self
    }

    /// Also logs to a rolling file.
    pub fn with_file(mut self, config: LayerInfo, info: FileInfo) -> Self {
        self.file = Some((config, info));
        self
    }
}

impl Tracer for AssistTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = layers::Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        if let Some(filter) = self.journald {
            layers.journald(&filter)?;
        }

        let file_guard = match self.file {
            Some((config, info)) => Some(layers.file(config.format, &config.filters, info)?),
            None => None,
        };

        // a subscriber may already be installed, e.g. by a test harness
        let _ = tracing_subscriber::registry().with(layers.into_inner()).try_init();
        Ok(file_guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_is_idempotent() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let file = FileInfo::new(dir.path().to_path_buf(), 1024 * 1024, 1);
        let file_layer =
            LayerInfo::new(LogFormat::Json, "debug".to_string(), String::new(), None);

        let guard = AssistTracer::new()
            .with_file(file_layer, file)
            .init()
            .expect("failed to initialize tracing");
        assert!(guard.is_some());

        let guard = AssistTracer::new().init().expect("failed to initialize tracing");
        assert!(guard.is_none());
    }

    #[test]
    fn test_invalid_default_directive() {
        let stdout =
            LayerInfo::new(LogFormat::Terminal, "assist=notalevel".to_string(), String::new(), None);
        assert!(AssistTracer::new().with_stdout(stdout).init().is_err());
    }
}
