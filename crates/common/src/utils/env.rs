use fancy_regex::Regex;

use crate::constants::{POSIX_ENV_VAR_REGEX, WINDOWS_ENV_VAR_REGEX};

/// Gets the value of an environment variable.
///
/// # Arguments
///
/// * `key` - The environment variable name to retrieve
///
/// # Returns
///
/// * `Option<String>` - The environment variable value if it exists
pub fn get_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Sets an environment variable. An empty value removes the variable.
///
/// # Arguments
///
/// * `key` - The environment variable name
/// * `value` - The value to set, or `""` to unset
pub fn set_env(key: &str, value: &str) {
    if value.is_empty() {
        std::env::remove_var(key);
    } else {
        std::env::set_var(key, value);
    }
}

/// Sets an environment variable if it's not already set.
///
/// # Arguments
///
/// * `key` - The environment variable name
/// * `value` - The value to set
pub fn set_env_if_unset(key: &str, value: &str) {
    if std::env::var(key).is_err() {
        set_env(key, value);
    }
}

/// Returns every environment variable of the current process, sorted by name.
///
/// Variables whose name or value is not valid unicode are skipped.
pub fn env_vars() -> Vec<(String, String)> {
    let mut vars: Vec<(String, String)> = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect();
    vars.sort();
    vars
}

/// Returns true when compiled for a 64-bit target.
pub fn is_64bit() -> bool {
    cfg!(target_pointer_width = "64")
}

/// Returns true when compiled for a 32-bit target.
pub fn is_32bit() -> bool {
    cfg!(target_pointer_width = "32")
}

/// Returns true for builds with debug assertions enabled.
pub fn is_debug() -> bool {
    cfg!(debug_assertions)
}

/// Returns true for builds without debug assertions.
pub fn is_release() -> bool {
    !is_debug()
}

/// Returns the platform's line separator.
pub fn line_separator() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

/// Expands environment variable references in `text`.
///
/// References use `$NAME` or `${NAME}` on POSIX systems and `%NAME%` on Windows. References
/// to unset variables are left untouched.
///
/// ```
/// use assist_common::utils::env::{expand, set_env};
///
/// set_env("ASSIST_DOC_EXPAND", "world");
/// #[cfg(unix)]
/// {
///     assert_eq!(expand("hello $ASSIST_DOC_EXPAND!"), "hello world!");
///     assert_eq!(expand("${ASSIST_DOC_EXPAND}s"), "worlds");
/// }
/// ```
pub fn expand(text: &str) -> String {
    let pattern: &Regex =
        if cfg!(windows) { &*WINDOWS_ENV_VAR_REGEX } else { &*POSIX_ENV_VAR_REGEX };

    let mut expanded = String::with_capacity(text.len());
    let mut last_end = 0;
    while let Ok(Some(captures)) = pattern.captures_from_pos(text, last_end) {
        let Some(reference) = captures.get(0) else { break };
        let name = captures.get(1).or_else(|| captures.get(2)).map(|m| m.as_str());

        expanded.push_str(&text[last_end..reference.start()]);
        match name.and_then(get_env) {
            Some(value) => expanded.push_str(&value),
            None => expanded.push_str(reference.as_str()),
        }
        last_end = reference.end();
    }
    expanded.push_str(&text[last_end..]);

    expanded
}
