//! clap [Args](clap::Args) for logging configuration.

use assist_tracing::{
    tracing_subscriber::filter::Directive, AssistTracer, FileInfo, FileWorkerGuard, LayerInfo,
    LogFormat, Tracer,
};
use clap::{ArgAction, Args, ValueEnum};
use std::{
    fmt::{self, Display},
    path::PathBuf,
    str::FromStr,
};
use tracing::{level_filters::LevelFilter, Level};

/// The log configuration.
#[derive(Debug, Args)]
#[clap(next_help_heading = "LOGGING")]
pub(crate) struct LogArgs {
    /// The format to use for logs written to stdout.
    #[clap(long = "log.stdout.format", value_name = "FORMAT", global = true, default_value_t = LogFormat::Terminal)]
    pub(crate) log_stdout_format: LogFormat,

    /// The filter to use for logs written to stdout.
    #[clap(long = "log.stdout.filter", value_name = "FILTER", global = true, default_value = "")]
    pub(crate) log_stdout_filter: String,

    /// Write logs to journald.
    #[clap(long = "log.journald", global = true)]
    pub(crate) journald: bool,

    /// The filter to use for logs written to journald.
    #[clap(
        long = "log.journald.filter",
        value_name = "FILTER",
        global = true,
        default_value = "error"
    )]
    pub(crate) journald_filter: String,

    /// The directory to write rolling log files to. Nothing is written to disk unless set.
    #[clap(long = "log.file.directory", value_name = "PATH", global = true)]
    pub(crate) log_file_directory: Option<PathBuf>,

    /// The format to use for logs written to file.
    #[clap(long = "log.file.format", value_name = "FORMAT", global = true, default_value_t = LogFormat::Terminal)]
    pub(crate) log_file_format: LogFormat,

    /// The filter to use for logs written to file.
    #[clap(long = "log.file.filter", value_name = "FILTER", global = true, default_value = "debug")]
    pub(crate) log_file_filter: String,

    /// The maximum size of a log file, in megabytes, before it is rolled.
    #[clap(long = "log.file.max-size", value_name = "SIZE", global = true, default_value_t = 200)]
    pub(crate) log_file_max_size: u64,

    /// The maximum number of log files to keep.
    #[clap(long = "log.file.max-files", value_name = "COUNT", global = true, default_value_t = 5)]
    pub(crate) log_file_max_files: usize,

    /// Sets whether or not the formatter emits ANSI terminal escape codes for colors and other
    /// text formatting.
    #[clap(
        long,
        value_name = "COLOR",
        global = true,
        default_value_t = ColorMode::Always
    )]
    pub(crate) color: ColorMode,

    /// The verbosity settings for the tracer.
    #[clap(flatten)]
    pub(crate) verbosity: Verbosity,
}

impl LogArgs {
    /// The rolling size limit in bytes, saturating for absurdly large megabyte values.
    fn log_file_max_size_bytes(&self) -> u64 {
        self.log_file_max_size.saturating_mul(1024 * 1024)
    }

    /// Creates a [LayerInfo] instance.
    fn layer(&self, format: LogFormat, filter: String, use_color: bool) -> LayerInfo {
        LayerInfo::new(
            format,
            self.verbosity.directive().to_string(),
            filter,
            if use_color { Some(self.color.to_string()) } else { None },
        )
    }

    /// Initializes tracing with the configured options from cli args.
    pub(crate) fn init_tracing(&self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut tracer = AssistTracer::new();

        let stdout = self.layer(self.log_stdout_format, self.log_stdout_filter.clone(), true);
        tracer = tracer.with_stdout(stdout);

        if self.journald {
            tracer = tracer.with_journald(self.journald_filter.clone());
        }

        if let Some(directory) = &self.log_file_directory {
            let file = self.layer(self.log_file_format, self.log_file_filter.clone(), false);
            let info = FileInfo::new(
                directory.clone(),
                self.log_file_max_size_bytes(),
                self.log_file_max_files,
            );
            tracer = tracer.with_file(file, info);
        }

        let guard = tracer.init()?;
        Ok(guard)
    }
}

/// The color mode for the cli.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub(crate) enum ColorMode {
    /// Colors on
    Always,
    /// Colors on when the output supports them
    Auto,
    /// Colors off
    Never,
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Always => write!(f, "always"),
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ColorMode::Always),
            "auto" => Ok(ColorMode::Auto),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!("Invalid color mode: {}", s)),
        }
    }
}

/// The verbosity settings for the cli.
#[derive(Debug, Copy, Clone, Args)]
#[clap(next_help_heading = "DISPLAY")]
pub(crate) struct Verbosity {
    /// Set the minimum log level.
    ///
    /// -v     Warnings & Errors
    /// -vv    Info
    /// -vvv   Debug
    /// -vvvv  Traces (warning: very verbose!)
    #[clap(short, long, action = ArgAction::Count, global = true, default_value_t = 1, verbatim_doc_comment, help_heading = "DISPLAY")]
    verbosity: u8,

    /// Silence all log output.
    #[clap(long, alias = "silent", short = 'q', global = true, help_heading = "DISPLAY")]
    quiet: bool,
}

impl Verbosity {
    /// Get the corresponding [Directive] for the given verbosity, or none if the verbosity
    /// corresponds to silent.
    pub(crate) fn directive(&self) -> Directive {
        if self.quiet {
            LevelFilter::OFF.into()
        } else {
            let level = match self.verbosity.saturating_sub(1) {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            };

            level.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        let cases = [
            (0, false, Directive::from(Level::WARN)),
            (1, false, Directive::from(Level::WARN)),
            (2, false, Directive::from(Level::INFO)),
            (3, false, Directive::from(Level::DEBUG)),
            (9, false, Directive::from(Level::TRACE)),
            (3, true, Directive::from(LevelFilter::OFF)),
        ];
        for (verbosity, quiet, expected) in cases {
            assert_eq!(Verbosity { verbosity, quiet }.directive(), expected);
        }
    }

    #[derive(Debug, clap::Parser)]
    struct LogOnly {
        #[clap(flatten)]
        log: LogArgs,
    }

    #[test]
    fn test_log_file_max_size_bytes() {
        use clap::Parser;

        let args = LogOnly::parse_from(["assist", "--log.file.max-size", "3"]);
        assert_eq!(args.log.log_file_max_size_bytes(), 3 * 1024 * 1024);

        let args = LogOnly::parse_from(["assist", "--log.file.max-size", "18446744073709551615"]);
        assert_eq!(args.log.log_file_max_size_bytes(), u64::MAX);
    }

    #[test]
    fn test_color_mode_round_trip() {
        for mode in [ColorMode::Always, ColorMode::Auto, ColorMode::Never] {
            assert_eq!(mode.to_string().parse::<ColorMode>(), Ok(mode));
        }
        assert!("sometimes".parse::<ColorMode>().is_err());
    }
}
