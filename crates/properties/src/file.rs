use std::{collections::BTreeMap, fmt, path::Path, str::FromStr};

use assist_common::utils::{
    env::line_separator,
    io::file::{read_file, short_path, write_file},
};
use tracing::debug;

use crate::{
    error::Error,
    parser::{escape_key, escape_value, parse},
};

/// An in-memory set of properties, as read from or written to a properties file.
///
/// Keys are unique and kept in sorted order, so saving the same properties always produces the
/// same file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesFile {
    properties: BTreeMap<String, String>,
}

impl PropertiesFile {
    /// Creates an empty set of properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses the properties file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut properties = Self::new();
        properties.load(path)?;
        Ok(properties)
    }

    /// Replaces the current properties with the ones read from `path`.
    ///
    /// On failure the current properties are left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let text = read_file(path)?;
        self.load_str(&text)?;
        debug!(
            "loaded {} properties from '{}'",
            self.properties.len(),
            short_path(&path.to_string_lossy())
        );
        Ok(())
    }

    /// Replaces the current properties with the ones parsed from `text`.
    pub fn load_str(&mut self, text: &str) -> Result<(), Error> {
        self.properties = parse(text)?;
        Ok(())
    }

    /// Writes the properties to `path`, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        write_file(path, &self.to_string())?;
        debug!(
            "saved {} properties to '{}'",
            self.properties.len(),
            short_path(&path.to_string_lossy())
        );
        Ok(())
    }

    /// Returns the value of `key`, if present.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn set_value<K: Into<String>, V: Into<String>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    /// Returns true if `key` is defined.
    pub fn has_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Removes `key`, returning its value.
    pub fn delete_key(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Removes every property.
    pub fn clear(&mut self) {
        self.properties.clear();
    }

    /// Iterates over the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Iterates over the `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if there are no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromStr for PropertiesFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { properties: parse(s)? })
    }
}

impl fmt::Display for PropertiesFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.properties {
            write!(f, "{} = {}{}", escape_key(key), escape_value(value), line_separator())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_delete() {
        let mut properties = PropertiesFile::new();
        assert!(properties.is_empty());

        assert_eq!(properties.set_value("name", "assist"), None);
        assert_eq!(properties.set_value("name", "other"), Some("assist".to_string()));
        assert_eq!(properties.get_value("name"), Some("other"));
        assert!(properties.has_key("name"));
        assert_eq!(properties.len(), 1);

        assert_eq!(properties.delete_key("name"), Some("other".to_string()));
        assert_eq!(properties.delete_key("name"), None);
        assert!(!properties.has_key("name"));
        assert_eq!(properties.get_value("name"), None);
    }

    #[test]
    fn test_keys_are_sorted() {
        let properties: PropertiesFile =
            "zeta=1\nalpha=2\nmid=3".parse().expect("failed to parse properties");
        assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["alpha", "mid", "zeta"]);
        assert_eq!(
            properties.iter().collect::<Vec<_>>(),
            vec![("alpha", "2"), ("mid", "3"), ("zeta", "1")]
        );
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("settings.properties");

        let mut properties = PropertiesFile::new();
        properties.set_value("simple", "value");
        properties.set_value("key with spaces", "  leading spaces");
        properties.set_value("#not-a-comment", "x");
        properties.set_value("a=b:c", "1=2:3");
        properties.set_value("path", "C:\\Program Files\\");
        properties.set_value("multi", "line one\nline two\r\n\ttabbed");
        properties.set_value("unicode", "caf\u{e9} \u{4e16}\u{754c}");
        properties.set_value("empty", "");
        properties.save(&path).expect("failed to save properties");

        let loaded = PropertiesFile::from_file(&path).expect("failed to load properties");
        assert_eq!(loaded, properties);
    }

    #[test]
    fn test_display_format() {
        let mut properties = PropertiesFile::new();
        properties.set_value("b", "2");
        properties.set_value("a", "1");
        let separator = line_separator();
        assert_eq!(properties.to_string(), format!("a = 1{separator}b = 2{separator}"));
    }

    #[test]
    fn test_load_replaces_contents() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("settings.properties");
        std::fs::write(&path, "fresh = yes\n").expect("unable to write");

        let mut properties = PropertiesFile::new();
        properties.set_value("stale", "1");
        properties.load(&path).expect("failed to load properties");
        assert!(!properties.has_key("stale"));
        assert_eq!(properties.get_value("fresh"), Some("yes"));
    }

    #[test]
    fn test_failed_load_keeps_contents() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut properties = PropertiesFile::new();
        properties.set_value("kept", "1");

        assert!(properties.load(dir.path().join("missing.properties")).is_err());

        let broken = dir.path().join("broken.properties");
        std::fs::write(&broken, "bad = \\xZZ\n").expect("unable to write");
        assert!(matches!(properties.load(&broken), Err(Error::ParseError { line: 1, .. })));
        assert_eq!(properties.get_value("kept"), Some("1"));
    }

    #[test]
    fn test_clear() {
        let mut properties: PropertiesFile = "a=1\nb=2".parse().expect("failed to parse properties");
        properties.clear();
        assert!(properties.is_empty());
        assert_eq!(properties.to_string(), "");
    }
}
