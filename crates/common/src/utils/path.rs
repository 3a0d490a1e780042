//! Textual path manipulation.
//!
//! Every function in this module works on the path string alone and never touches the
//! filesystem. On Windows both `\` and `/` are accepted as separators and results use `\`.

const CURRENT_DIRECTORY: &str = ".";
const PARENT_DIRECTORY: &str = "..";

/// Returns the native path separator.
pub fn path_separator() -> char {
    if cfg!(windows) {
        '\\'
    } else {
        '/'
    }
}

/// Returns the native path separator as a string slice.
pub fn path_separator_str() -> &'static str {
    if cfg!(windows) {
        "\\"
    } else {
        "/"
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

fn same_segment(a: &str, b: &str) -> bool {
    if cfg!(windows) {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

/// Converts foreign separators into the native separator.
///
/// ```
/// use assist_common::utils::path::normalize_path;
///
/// #[cfg(unix)]
/// {
///     assert_eq!(normalize_path("C:\\foo\\bar"), "C:/foo/bar");
/// }
/// ```
pub fn normalize_path(path: &str) -> String {
    if cfg!(windows) {
        path.replace('/', "\\")
    } else {
        path.replace('\\', "/")
    }
}

/// Returns the root element of a path, if any.
///
/// The root is `/` on POSIX systems. On Windows it is a drive root (`C:\`), the `\\` prefix of
/// a UNC path, or a single leading separator.
pub fn root_of(path: &str) -> Option<&str> {
    if cfg!(windows) {
        let bytes = path.as_bytes();
        if bytes.len() >= 3 &&
            bytes[0].is_ascii_alphabetic() &&
            bytes[1] == b':' &&
            is_separator(bytes[2] as char)
        {
            return Some(&path[..3]);
        }
        if bytes.len() >= 2 && is_separator(bytes[0] as char) && is_separator(bytes[1] as char) {
            return Some(&path[..2]);
        }
    }

    path.starts_with(is_separator).then(|| &path[..1])
}

/// Splits a path into its root and its non-empty segments.
fn segments(path: &str) -> (Option<&str>, Vec<&str>) {
    let root = root_of(path);
    let rest = &path[root.map_or(0, str::len)..];
    (root, rest.split(is_separator).filter(|segment| !segment.is_empty()).collect())
}

/// Joins a root and segments with the native separator. A relative empty path yields `""`.
fn join_segments(root: Option<&str>, segments: &[&str]) -> String {
    let joined = segments.join(path_separator_str());
    match root {
        Some(root) => format!("{}{}", normalize_path(root), joined),
        None => joined,
    }
}

/// Checks whether the path starts with a root element.
///
/// On Windows a lone leading separator is drive relative and therefore not absolute.
pub fn is_absolute_path(path: &str) -> bool {
    root_of(path).is_some_and(|root| !cfg!(windows) || root.len() > 1)
}

/// Checks whether the path designates a root directory, such as `/` or `C:\`.
pub fn is_root_directory(path: &str) -> bool {
    let (root, segments) = segments(path);
    root.is_some() && segments.is_empty()
}

/// Removes `.` and `..` segments from a path without accessing the filesystem.
///
/// A `..` segment never climbs above the root of an absolute path. Leading `..` segments of a
/// relative path are preserved. Repeated and trailing separators are dropped.
///
/// ```
/// use assist_common::utils::path::resolve_path;
///
/// #[cfg(unix)]
/// {
///     assert_eq!(resolve_path("/foo/bar/../baz/myapp"), "/foo/baz/myapp");
///     assert_eq!(resolve_path("/foo/bar/.."), "/foo");
///     assert_eq!(resolve_path("/.."), "/");
///     assert_eq!(resolve_path("../foo/./bar"), "../foo/bar");
/// }
/// ```
pub fn resolve_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let (root, segments) = segments(path);
    let mut resolved: Vec<&str> = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            CURRENT_DIRECTORY => {}
            PARENT_DIRECTORY => match resolved.last() {
                Some(&last) if last != PARENT_DIRECTORY => {
                    resolved.pop();
                }
                // cannot walk above the root
                _ if root.is_some() => {}
                _ => resolved.push(PARENT_DIRECTORY),
            },
            _ => resolved.push(segment),
        }
    }

    if root.is_none() && resolved.is_empty() {
        return CURRENT_DIRECTORY.to_string();
    }
    join_segments(root, &resolved)
}

/// Computes the path of `target` relative to the directory `base`.
///
/// Both paths must be absolute and share the same root, otherwise `None` is returned. Segment
/// comparison is case insensitive on Windows.
///
/// ```
/// use assist_common::utils::path::make_relative_path;
///
/// #[cfg(unix)]
/// {
///     assert_eq!(make_relative_path("/usr/bin", "/usr/sbin"), Some("../sbin".to_string()));
///     assert_eq!(make_relative_path("/usr/bin", "usr/sbin"), None);
/// }
/// ```
pub fn make_relative_path(base: &str, target: &str) -> Option<String> {
    if !is_absolute_path(base) || !is_absolute_path(target) {
        return None;
    }

    let base = resolve_path(base);
    let target = resolve_path(target);
    let (base_root, base_segments) = segments(&base);
    let (target_root, target_segments) = segments(&target);

    if !same_segment(&normalize_path(base_root?), &normalize_path(target_root?)) {
        return None;
    }

    let common = base_segments
        .iter()
        .zip(&target_segments)
        .take_while(|(a, b)| same_segment(a, b))
        .count();

    let mut relative = vec![PARENT_DIRECTORY; base_segments.len() - common];
    relative.extend_from_slice(&target_segments[common..]);

    if relative.is_empty() {
        return Some(CURRENT_DIRECTORY.to_string());
    }
    Some(relative.join(path_separator_str()))
}

/// Splits a path into its folder and its last element.
///
/// The folder has no trailing separator unless it is a root.
///
/// ```
/// use assist_common::utils::path::split_path;
///
/// #[cfg(unix)]
/// {
///     assert_eq!(split_path("/foo/bar.txt"), ("/foo".to_string(), "bar.txt".to_string()));
///     assert_eq!(split_path("bar.txt"), ("".to_string(), "bar.txt".to_string()));
/// }
/// ```
pub fn split_path(path: &str) -> (String, String) {
    let (root, segments) = segments(path);
    match segments.split_last() {
        Some((last, folder)) => (join_segments(root, folder), last.to_string()),
        None => (root.map(normalize_path).unwrap_or_default(), String::new()),
    }
}

/// Splits a path into its elements, with the root as the first element when present.
///
/// ```
/// use assist_common::utils::path::split_path_elements;
///
/// #[cfg(unix)]
/// {
///     assert_eq!(split_path_elements("/usr//bin/"), vec!["/", "usr", "bin"]);
/// }
/// ```
pub fn split_path_elements(path: &str) -> Vec<String> {
    let (root, segments) = segments(path);
    root.map(normalize_path).into_iter().chain(segments.into_iter().map(String::from)).collect()
}

/// Returns every cumulative prefix of a path.
///
/// ```
/// use assist_common::utils::path::path_elements;
///
/// #[cfg(unix)]
/// {
///     assert_eq!(path_elements("/usr/bin/env"), vec!["/usr", "/usr/bin", "/usr/bin/env"]);
/// }
/// ```
pub fn path_elements(path: &str) -> Vec<String> {
    let (root, segments) = segments(path);
    if segments.is_empty() {
        return root.map(normalize_path).into_iter().collect();
    }

    (1..=segments.len()).map(|i| join_segments(root, &segments[..i])).collect()
}

/// Returns the folder part of a path.
pub fn parent_path(path: &str) -> String {
    split_path(path).0
}

/// Returns the last element of a path.
pub fn filename(path: &str) -> String {
    split_path(path).1
}

/// Position of the extension dot in a file name. Leading dots (hidden files) do not count.
fn extension_dot(name: &str) -> Option<usize> {
    name.rfind('.').filter(|&index| index > 0)
}

/// Returns the last element of a path without its extension.
pub fn filename_without_extension(path: &str) -> String {
    let name = filename(path);
    match extension_dot(&name) {
        Some(index) => name[..index].to_string(),
        None => name,
    }
}

/// Returns the extension of the last element of a path, without the dot.
pub fn file_extension(path: &str) -> String {
    let name = filename(path);
    extension_dot(&name).map(|index| name[index + 1..].to_string()).unwrap_or_default()
}
