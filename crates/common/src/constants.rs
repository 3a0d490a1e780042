use fancy_regex::Regex;
use lazy_static::lazy_static;

/// Symbols used when generating random alphanumeric strings
pub const ALPHANUMERIC_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Size of the buffer used when copying or comparing files
pub const FILE_BUFFER_SIZE: usize = 64 * 1024;

/// Prefix used for temporary file names
pub const TEMPORARY_FILE_PREFIX: &str = "assist-";

lazy_static! {
    /// The following regex is used to find `$NAME` and `${NAME}` environment variable references
    pub static ref POSIX_ENV_VAR_REGEX: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("failed to compile regex");

    /// The following regex is used to find `%NAME%` environment variable references
    pub static ref WINDOWS_ENV_VAR_REGEX: Regex =
        Regex::new(r"%([A-Za-z_][A-Za-z0-9_()]*)%").expect("failed to compile regex");
}
