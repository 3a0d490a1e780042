use clap::{Args, Parser, Subcommand};

use assist_config::ConfigArgs;
use assist_properties::PropertiesArgs;

use crate::log_args::LogArgs;

#[derive(Debug, Parser)]
#[clap(name = "assist", author = "The assist contributors", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    pub(crate) logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "assist is a toolbox of path, environment, random and properties file utilities.",
    after_help = "For more information, read the wiki: https://github.com/assist-rs/assist/wiki"
)]
pub(crate) enum Subcommands {
    #[clap(name = "props", about = "Read and edit properties files")]
    Props(PropertiesArgs),

    #[clap(name = "path", about = "Resolve, relate and split filesystem paths")]
    Path(PathArgs),

    #[clap(name = "env", about = "Query and expand environment variables")]
    Env(EnvArgs),

    #[clap(name = "random", about = "Generate random integers and strings")]
    Random(RandomArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

/// Arguments for the path command
#[derive(Debug, Clone, Args)]
#[clap(override_usage = "assist path <COMMAND>")]
pub(crate) struct PathArgs {
    #[clap(subcommand)]
    pub(crate) action: PathAction,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum PathAction {
    /// Collapse `.`, `..` and repeated separators
    Resolve {
        /// The path to resolve.
        path: String,
    },

    /// Express an absolute path relative to an absolute base directory
    Relative {
        /// The directory the result is relative to.
        base: String,
        /// The path to express.
        target: String,
    },

    /// Print the folder and the last element of a path on separate lines
    Split {
        /// The path to split.
        path: String,
    },

    /// Print every element of a path, one per line
    Elements {
        /// The path to split.
        path: String,

        /// Print cumulative prefixes (`/usr`, `/usr/bin`, ...) instead of single elements.
        #[clap(long)]
        cumulative: bool,
    },
}

/// Arguments for the env command
#[derive(Debug, Clone, Args)]
#[clap(override_usage = "assist env <COMMAND>")]
pub(crate) struct EnvArgs {
    #[clap(subcommand)]
    pub(crate) action: EnvAction,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum EnvAction {
    /// Print the value of a variable
    Get {
        /// The variable name.
        name: String,
    },

    /// Replace variable references in a text with their values
    Expand {
        /// The text to expand, e.g. `$HOME/bin`.
        text: String,
    },

    /// Print every variable, sorted by name
    List {
        /// Print the variables as a JSON object.
        #[clap(long)]
        json: bool,
    },
}

/// Arguments for the random command
#[derive(Debug, Clone, Args)]
#[clap(override_usage = "assist random [OPTIONS] <COMMAND>")]
pub(crate) struct RandomArgs {
    /// Seed the generator for reproducible output. Falls back to the configured `random_seed`,
    /// and `0` seeds from system entropy.
    #[clap(long, default_value = "0", hide_default_value = true)]
    pub(crate) seed: u64,

    #[clap(subcommand)]
    pub(crate) action: RandomAction,
}

#[derive(Debug, Clone, Subcommand)]
pub(crate) enum RandomAction {
    /// Print a random integer between two inclusive bounds
    Int {
        /// The lower bound.
        #[clap(allow_hyphen_values = true)]
        min: i64,
        /// The upper bound.
        #[clap(allow_hyphen_values = true)]
        max: i64,
    },

    /// Print a random string
    String {
        /// The number of characters.
        length: usize,

        /// The symbols to pick from. Falls back to the configured `random_symbols`.
        #[clap(long, default_value = "", hide_default_value = true)]
        symbols: String,
    },
}
