//! The properties module reads, edits and writes flat `key = value` configuration files in the
//! style of Java `.properties` files.
//!
//! ```
//! use assist_properties::PropertiesFile;
//!
//! let properties: PropertiesFile = "name = assist\nversion: 1\n".parse().expect("valid properties");
//! assert_eq!(properties.get_value("name"), Some("assist"));
//! assert_eq!(properties.get_value("version"), Some("1"));
//! ```

/// Error types for the properties module
pub mod error;

mod core;
mod file;
mod interfaces;
mod parser;

// re-export the public interface
pub use crate::core::{props, PropertiesResult};
pub use error::Error;
pub use file::PropertiesFile;
pub use interfaces::{PropertiesAction, PropertiesArgs, PropertiesArgsBuilder};
