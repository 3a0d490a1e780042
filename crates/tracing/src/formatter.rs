use std::fmt::{self, Display};

use clap::ValueEnum;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::layers::BoxedLayer;

/// The output format of a log layer.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum LogFormat {
    /// One JSON object per event
    #[value(name = "json")]
    Json,

    /// `key=value` pairs, one event per line
    #[value(name = "log-fmt")]
    LogFmt,

    /// Human readable output
    #[value(name = "terminal")]
    Terminal,
}

impl LogFormat {
    /// Builds a layer writing in this format, either to stdout or to `file_writer`.
    ///
    /// `color` is the cli color mode. ANSI codes are only emitted for stdout layers, and
    /// `RUST_LOG_STYLE=never` turns them off regardless of the mode. `logfmt` output always goes
    /// to stdout, so file layers fall back to the terminal format.
    pub(crate) fn apply(
        &self,
        filter: EnvFilter,
        color: Option<String>,
        file_writer: Option<NonBlocking>,
    ) -> BoxedLayer<Registry> {
        let ansi = match color {
            Some(color) => std::env::var("RUST_LOG_STYLE")
                .map(|style| style != "never")
                .unwrap_or(color != "never"),
            None => false,
        };
        let target = std::env::var("RUST_LOG_TARGET").map(|value| value != "0").unwrap_or(true);

        match (self, file_writer) {
            (LogFormat::Json, Some(writer)) => tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(target)
                .with_writer(writer)
                .with_filter(filter)
                .boxed(),
            (LogFormat::Json, None) => tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(ansi)
                .with_target(target)
                .with_filter(filter)
                .boxed(),
            (LogFormat::LogFmt, None) => tracing_logfmt::layer().with_filter(filter).boxed(),
            (LogFormat::Terminal | LogFormat::LogFmt, Some(writer)) => {
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(target)
                    .with_writer(writer)
                    .with_filter(filter)
                    .boxed()
            }
            (LogFormat::Terminal, None) => tracing_subscriber::fmt::layer()
                .with_ansi(ansi)
                .with_target(target)
                .with_filter(filter)
                .boxed(),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::LogFmt => write!(f, "log-fmt"),
            LogFormat::Terminal => write!(f, "terminal"),
        }
    }
}
