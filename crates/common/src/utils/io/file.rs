use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use eyre::{eyre, Result};
use tracing::{debug, trace};

use crate::{
    constants::{FILE_BUFFER_SIZE, TEMPORARY_FILE_PREFIX},
    utils::{env::line_separator, random::random_string, strings::replace},
};

/// Convert a long path to a short path.
///
/// ```no_run
/// use assist_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/something.json";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./something.json");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => shorten_from(path, &dir),
        Err(_) => path.to_owned(),
    }
}

/// Replaces a leading `base` directory in `path` with `.`. Paths outside `base` are returned
/// unchanged.
fn shorten_from(path: &str, base: &Path) -> String {
    match Path::new(path).strip_prefix(base) {
        Ok(rest) if rest.as_os_str().is_empty() => ".".to_owned(),
        Ok(rest) => format!(".{}{}", std::path::MAIN_SEPARATOR, rest.display()),
        Err(_) => path.to_owned(),
    }
}

/// Checks whether `path` is an existing file.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Checks whether `path` is an existing directory.
pub fn folder_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Returns the size of a file in bytes, or `None` if it is not a readable file.
pub fn file_size<P: AsRef<Path>>(path: P) -> Option<u64> {
    fs::metadata(path).ok().filter(|metadata| metadata.is_file()).map(|metadata| metadata.len())
}

/// Returns the last modification date of a file or directory.
pub fn file_modified_date<P: AsRef<Path>>(path: P) -> Option<DateTime<Local>> {
    fs::metadata(path).and_then(|metadata| metadata.modified()).ok().map(DateTime::<Local>::from)
}

/// Creates a directory and all of its missing parents.
pub fn create_folder<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path.as_ref())?;
    trace!("created folder '{}'", path.as_ref().display());
    Ok(())
}

/// Deletes a single file.
pub fn delete_file<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::remove_file(path)?;
    Ok(())
}

/// Deletes a directory and everything it contains.
pub fn delete_folder<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::remove_dir_all(path)?;
    Ok(())
}

/// Delete a file or directory from the disc
///
/// Returns true if nothing exists at `path` afterwards.
///
/// ```no_run
/// use assist_common::utils::io::file::delete_path;
///
/// let path = "/tmp/test.txt";
/// let result = delete_path(path);
/// ```
pub fn delete_path<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let _ = if path.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };
    !path.exists()
}

/// Lists the files and directories below `dir`, sorted.
///
/// `depth` limits how many levels of subdirectories are descended into: `Some(0)` lists the
/// direct children only and `None` walks the whole tree.
pub fn find_files<P: AsRef<Path>>(dir: P, depth: Option<usize>) -> Result<Vec<PathBuf>> {
    fn walk(dir: &Path, depth: Option<usize>, found: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                match depth {
                    Some(0) => {}
                    Some(remaining) => walk(&path, Some(remaining - 1), found)?,
                    None => walk(&path, None, found)?,
                }
            }
            found.push(path);
        }
        Ok(())
    }

    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(eyre!("'{}' is not a directory", dir.display()));
    }

    let mut found = Vec::new();
    walk(dir, depth, &mut found)?;
    found.sort();
    debug!("found {} entries below '{}'", found.len(), dir.display());
    Ok(found)
}

/// Checks whether a directory has no entries.
pub fn is_directory_empty<P: AsRef<Path>>(dir: P) -> Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}

/// Write contents to a file on the disc
///
/// The parent directory is created if it doesn't exist.
///
/// ```no_run
/// use assist_common::utils::io::file::write_file;
///
/// let path = "/tmp/test.txt";
/// let contents = "Hello, World!";
/// let result = write_file(path, contents);
/// ```
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();

    // Create the directory if it doesn't exist
    std::fs::create_dir_all(
        path.parent().ok_or_else(|| eyre!("unable to create directory"))?,
    )?;

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use assist_common::utils::io::file::read_file;
///
/// let path = "/tmp/test.txt";
/// let contents = read_file(path);
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Reads a text file line by line.
///
/// When `trim_newlines` is set the line terminators (`\n` or `\r\n`) are removed, otherwise
/// every line keeps its terminator.
pub fn read_text_file<P: AsRef<Path>>(path: P, trim_newlines: bool) -> Result<Vec<String>> {
    let contents = read_file(path)?;
    let lines = if trim_newlines {
        contents.lines().map(String::from).collect()
    } else {
        contents.split_inclusive('\n').map(String::from).collect()
    };
    Ok(lines)
}

/// Writes `lines` to a text file, terminating each one with the platform line separator.
pub fn write_text_file<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<()> {
    let separator = line_separator();
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line.as_ref());
        contents.push_str(separator);
    }
    write_file(path, &contents)
}

/// Reads at most `size` bytes from the start of a file.
pub fn peek_file<P: AsRef<Path>>(path: P, size: usize) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(size);
    file.take(size as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Copies `source` to `destination`, creating the destination's parent directory.
///
/// `progress` is called after every chunk with the completed percentage in `[0, 100]`. The last
/// call always reports `100.0`. Returns the number of bytes copied.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    mut progress: Option<&mut dyn FnMut(f64)>,
) -> Result<u64> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    let total = fs::metadata(source)?.len();

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut reader = BufReader::new(File::open(source)?);
    let mut writer = BufWriter::new(File::create(destination)?);
    let mut buffer = vec![0u8; FILE_BUFFER_SIZE];
    let mut copied: u64 = 0;

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buffer[..read])?;
        copied += read as u64;

        if let Some(callback) = progress.as_mut() {
            callback((copied as f64 * 100.0 / total.max(copied) as f64).min(100.0));
        }
    }
    writer.flush()?;

    if copied == 0 {
        if let Some(callback) = progress.as_mut() {
            callback(100.0);
        }
    }

    debug!("copied {} bytes from '{}' to '{}'", copied, source.display(), destination.display());
    Ok(copied)
}

/// Replaces every occurrence of `old` with `new` inside a text file.
///
/// The file is only rewritten when something was replaced. Returns the number of replacements.
pub fn file_replace<P: AsRef<Path>>(path: P, old: &str, new: &str) -> Result<usize> {
    let path = path.as_ref();
    let mut contents = read_file(path)?;
    let count = replace(&mut contents, old, new);
    if count > 0 {
        write_file(path, &contents)?;
    }
    Ok(count)
}

/// Checks whether a file can be opened, or a directory listed, by the current user.
pub fn has_read_access<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        File::open(path).is_ok()
    }
}

/// Checks whether a file can be written, or a directory written into, by the current user.
///
/// For directories a probe file is created and removed again.
pub fn has_write_access<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.is_dir() {
        let probe = path.join(format!("{TEMPORARY_FILE_PREFIX}{}.probe", random_string(12)));
        let writable = File::create(&probe).is_ok();
        let _ = fs::remove_file(&probe);
        writable
    } else {
        OpenOptions::new().append(true).open(path).is_ok()
    }
}

/// Returns the current working directory.
pub fn current_directory() -> Result<PathBuf> {
    Ok(env::current_dir()?)
}

/// Returns the home directory of the current user.
pub fn user_home_directory() -> Option<PathBuf> {
    let variable = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    env::var_os(variable).filter(|home| !home.is_empty()).map(PathBuf::from)
}

/// Returns the directory for temporary files.
pub fn temporary_directory() -> PathBuf {
    env::temp_dir()
}

/// Returns a unique, not yet existing, file path inside the temporary directory.
pub fn temporary_file_path() -> PathBuf {
    let directory = temporary_directory();
    loop {
        let candidate =
            directory.join(format!("{TEMPORARY_FILE_PREFIX}{}.tmp", random_string(16)));
        if !candidate.exists() {
            return candidate;
        }
    }
}

/// Searches the directories of the `PATH` environment variable for `filename`.
///
/// On Windows a missing `.exe` extension is also tried.
pub fn find_file_from_paths(filename: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    let mut candidates = vec![filename.to_string()];
    if cfg!(windows) && Path::new(filename).extension().is_none() {
        candidates.push(format!("{filename}.exe"));
    }

    env::split_paths(&paths)
        .flat_map(|dir| candidates.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}
