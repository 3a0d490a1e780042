use clap::{Parser, Subcommand};
use derive_builder::Builder;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Read and edit properties files",
    after_help = "For more information, read the wiki: https://github.com/assist-rs/assist/wiki",
    override_usage = "assist props [OPTIONS] <COMMAND>"
)]
/// Arguments for the props operation
///
/// Selects the properties file to work on and the action to apply to it.
pub struct PropertiesArgs {
    /// The properties file to operate on. Falls back to the configured `properties_path`.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub file: String,

    /// The action to perform on the file.
    #[clap(subcommand)]
    pub action: PropertiesAction,
}

/// Actions available on a properties file
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum PropertiesAction {
    /// Print the value of a key
    #[clap(name = "get")]
    Get {
        /// The key to look up.
        key: String,
    },

    /// Set a key to a value, creating the file if it does not exist
    #[clap(name = "set")]
    Set {
        /// The key to set.
        key: String,
        /// The new value.
        value: String,
    },

    /// Remove a key
    #[clap(name = "remove", alias = "rm")]
    Remove {
        /// The key to remove.
        key: String,
    },

    /// List every key and value
    #[clap(name = "list", alias = "ls")]
    List {
        /// Print the properties as a JSON object.
        #[clap(long)]
        json: bool,
    },
}

impl PropertiesArgsBuilder {
    /// Creates a new PropertiesArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            file: Some(String::new()),
            action: Some(PropertiesAction::List { json: false }),
        }
    }
}
