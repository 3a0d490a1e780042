use std::path::Path;

use assist_common::utils::io::file::{file_exists, short_path};
use tracing::{debug, info, warn};

use crate::{
    error::Error,
    file::PropertiesFile,
    interfaces::{PropertiesAction, PropertiesArgs},
};

/// The outcome of a props operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertiesResult {
    /// The value found for a key
    Value(String),
    /// A key was set, along with the value it replaced
    Updated {
        /// The key that was set
        key: String,
        /// The previous value, if the key existed
        previous: Option<String>,
    },
    /// A key was removed, along with the value it held
    Removed {
        /// The key that was removed
        key: String,
        /// The removed value, if the key existed
        value: Option<String>,
    },
    /// Every property in the file
    Listing {
        /// The properties that were read
        properties: PropertiesFile,
        /// Whether to render as JSON
        json: bool,
    },
}

impl PropertiesResult {
    /// Renders the result the way the CLI prints it.
    pub fn render(&self) -> Result<String, Error> {
        Ok(match self {
            PropertiesResult::Value(value) => value.clone(),
            PropertiesResult::Updated { key, previous: Some(previous) } => {
                format!("updated '{key}' (was '{previous}')")
            }
            PropertiesResult::Updated { key, previous: None } => format!("added '{key}'"),
            PropertiesResult::Removed { key, .. } => format!("removed '{key}'"),
            PropertiesResult::Listing { properties, json: true } => {
                let object: serde_json::Map<String, serde_json::Value> = properties
                    .iter()
                    .map(|(key, value)| (key.to_string(), serde_json::Value::from(value)))
                    .collect();
                serde_json::to_string_pretty(&object)
                    .map_err(|e| Error::Generic(format!("failed to serialize properties: {}", e)))?
            }
            PropertiesResult::Listing { properties, json: false } => {
                properties.to_string().trim_end().to_string()
            }
        })
    }

    /// Prints the rendered result to stdout.
    pub fn display(&self) -> Result<(), Error> {
        let rendered = self.render()?;
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
        Ok(())
    }
}

/// Runs a props operation against a properties file
///
/// `get`, `remove` and `list` require the file to exist. `set` creates it when missing.
///
/// # Arguments
///
/// * `args` - The file to operate on and the action to apply
///
/// # Returns
///
/// The outcome of the action, ready to be displayed
pub fn props(args: PropertiesArgs) -> Result<PropertiesResult, Error> {
    if args.file.is_empty() {
        return Err(Error::Generic(
            "no properties file given. pass `--file` or set `properties_path` in the config"
                .to_string(),
        ));
    }
    let path = Path::new(&args.file);
    debug!("running {:?} on '{}'", args.action, short_path(&args.file));

    match args.action {
        PropertiesAction::Get { key } => {
            let properties = PropertiesFile::from_file(path)?;
            match properties.get_value(&key) {
                Some(value) => Ok(PropertiesResult::Value(value.to_string())),
                None => Err(Error::Generic(format!(
                    "key '{}' not found in '{}'",
                    key,
                    short_path(&args.file)
                ))),
            }
        }
        PropertiesAction::Set { key, value } => {
            let mut properties = match file_exists(path) {
                true => PropertiesFile::from_file(path)?,
                false => {
                    info!("creating new properties file '{}'", short_path(&args.file));
                    PropertiesFile::new()
                }
            };
            let previous = properties.set_value(key.clone(), value);
            properties.save(path)?;
            Ok(PropertiesResult::Updated { key, previous })
        }
        PropertiesAction::Remove { key } => {
            let mut properties = PropertiesFile::from_file(path)?;
            let value = properties.delete_key(&key);
            match value {
                Some(_) => properties.save(path)?,
                None => warn!("key '{}' not found in '{}'", key, short_path(&args.file)),
            }
            Ok(PropertiesResult::Removed { key, value })
        }
        PropertiesAction::List { json } => {
            let properties = PropertiesFile::from_file(path)?;
            Ok(PropertiesResult::Listing { properties, json })
        }
    }
}
