//! Helpers for tests that need fixture files or behave differently on CI servers.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use eyre::Result;

use crate::{
    constants::FILE_BUFFER_SIZE,
    utils::{
        env::get_env,
        io::file::{create_folder, read_text_file, write_text_file},
    },
};

fn env_is_true(name: &str) -> bool {
    get_env(name).is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

/// Returns true when running inside GitHub Actions.
pub fn is_github_actions() -> bool {
    env_is_true("GITHUB_ACTIONS")
}

/// Returns true when running inside AppVeyor.
pub fn is_appveyor() -> bool {
    env_is_true("APPVEYOR")
}

/// Returns true when running inside Travis CI.
pub fn is_travis() -> bool {
    env_is_true("TRAVIS")
}

/// Returns true when running inside a Jenkins job.
pub fn is_jenkins() -> bool {
    get_env("JENKINS_URL").is_some_and(|url| !url.is_empty())
}

/// Returns true when running on any continuous integration server.
pub fn is_ci() -> bool {
    env_is_true("CI") || is_github_actions() || is_appveyor() || is_travis() || is_jenkins()
}

/// Creates a file of exactly `size` bytes filled with a repeating `0..=255` byte pattern.
pub fn create_file<P: AsRef<Path>>(path: P, size: u64) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        create_folder(parent)?;
    }

    let pattern: Vec<u8> = (0..FILE_BUFFER_SIZE).map(|i| (i % 256) as u8).collect();
    let mut writer = BufWriter::new(File::create(path)?);
    let mut remaining = size;
    while remaining > 0 {
        let chunk = remaining.min(pattern.len() as u64) as usize;
        writer.write_all(&pattern[..chunk])?;
        remaining -= chunk as u64;
    }
    writer.flush()?;

    Ok(())
}

/// Creates a text file containing `lines`.
pub fn create_text_file<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<()> {
    write_text_file(path, lines)
}

/// Finds the first occurrence of `needle` in a text file.
///
/// Returns the 0-based line index and the byte offset of the match within that line.
pub fn find_in_file<P: AsRef<Path>>(path: P, needle: &str) -> Result<Option<(usize, usize)>> {
    let lines = read_text_file(path, true)?;
    Ok(lines
        .iter()
        .enumerate()
        .find_map(|(index, line)| line.find(needle).map(|column| (index, column))))
}

/// A byte that differs between two files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileDifference {
    /// Offset of the byte from the start of the files.
    pub offset: u64,
    /// The byte in the first file, or `None` past its end.
    pub left: Option<u8>,
    /// The byte in the second file, or `None` past its end.
    pub right: Option<u8>,
}

/// Checks whether two files have identical contents.
pub fn is_file_equals<P: AsRef<Path>, Q: AsRef<Path>>(left: P, right: Q) -> Result<bool> {
    let (left, right) = (left.as_ref(), right.as_ref());
    if std::fs::metadata(left)?.len() != std::fs::metadata(right)?.len() {
        return Ok(false);
    }
    Ok(std::fs::read(left)? == std::fs::read(right)?)
}

/// Lists up to `max` differing bytes between two files.
///
/// Bytes past the end of the shorter file are reported with `None` on that side.
pub fn file_differences<P: AsRef<Path>, Q: AsRef<Path>>(
    left: P,
    right: Q,
    max: usize,
) -> Result<Vec<FileDifference>> {
    let left = std::fs::read(left)?;
    let right = std::fs::read(right)?;

    Ok((0..left.len().max(right.len()))
        .filter_map(|offset| {
            let (l, r) = (left.get(offset).copied(), right.get(offset).copied());
            (l != r).then_some(FileDifference { offset: offset as u64, left: l, right: r })
        })
        .take(max)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{env::set_env, io::file::file_size};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_ci_detection() {
        let saved: Vec<(&str, Option<String>)> =
            ["CI", "GITHUB_ACTIONS", "APPVEYOR", "TRAVIS", "JENKINS_URL"]
                .into_iter()
                .map(|name| (name, get_env(name)))
                .collect();
        for (name, _) in &saved {
            set_env(name, "");
        }

        assert!(!is_ci());

        set_env("APPVEYOR", "True");
        assert!(is_appveyor());
        assert!(is_ci());
        set_env("APPVEYOR", "");

        set_env("JENKINS_URL", "http://jenkins.local/");
        assert!(is_jenkins());
        set_env("JENKINS_URL", "");

        set_env("GITHUB_ACTIONS", "false");
        assert!(!is_github_actions());

        for (name, value) in saved {
            set_env(name, value.as_deref().unwrap_or_default());
        }
    }

    #[test]
    fn test_create_file_size_and_pattern() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("data").join("file.bin");
        let size = FILE_BUFFER_SIZE as u64 + 300;
        create_file(&path, size).expect("unable to create file");

        assert_eq!(file_size(&path), Some(size));
        let contents = std::fs::read(&path).expect("unable to read file");
        assert_eq!(contents[0], 0);
        assert_eq!(contents[255], 255);
        assert_eq!(contents[256], 0);

        let empty = dir.path().join("empty.bin");
        create_file(&empty, 0).expect("unable to create file");
        assert_eq!(file_size(&empty), Some(0));
    }

    #[test]
    fn test_find_in_file() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("haystack.txt");
        create_text_file(&path, &["first line", "the needle is here", "needle again"])
            .expect("unable to create file");

        assert_eq!(find_in_file(&path, "needle").expect("unable to search"), Some((1, 4)));
        assert_eq!(find_in_file(&path, "absent").expect("unable to search"), None);
    }

    #[test]
    fn test_file_comparison() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        let c = dir.path().join("c.bin");
        std::fs::write(&a, b"abcdef").expect("unable to write");
        std::fs::write(&b, b"abcdef").expect("unable to write");
        std::fs::write(&c, b"abXdefgh").expect("unable to write");

        assert!(is_file_equals(&a, &b).expect("unable to compare"));
        assert!(!is_file_equals(&a, &c).expect("unable to compare"));

        let differences = file_differences(&a, &c, 10).expect("unable to compare");
        assert_eq!(
            differences,
            vec![
                FileDifference { offset: 2, left: Some(b'c'), right: Some(b'X') },
                FileDifference { offset: 6, left: None, right: Some(b'g') },
                FileDifference { offset: 7, left: None, right: Some(b'h') },
            ]
        );
        assert_eq!(file_differences(&a, &c, 1).expect("unable to compare").len(), 1);
        assert!(file_differences(&a, &b, 10).expect("unable to compare").is_empty());
    }
}
