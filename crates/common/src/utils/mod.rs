/// Environment variable utilities.
pub mod env;

/// Generic helpers over slices.
pub mod generics;

/// Input/output utilities for file manipulation.
pub mod io;

/// Textual path manipulation and resolution.
pub mod path;

/// Information about the current and other processes.
pub mod process;

/// Random numbers, strings and bytes.
pub mod random;

/// String manipulation and formatting utilities.
pub mod strings;
