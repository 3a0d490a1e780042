//! Common utilities, constants, and helpers used across the assist codebase.
//!
//! This crate provides the general purpose building blocks of the toolkit: string
//! manipulation, textual path resolution, file io, environment variables, process
//! information, random generation and a few helpers for writing tests.

/// Constants used throughout the assist codebase.
pub mod constants;

/// Error types for the common utilities.
pub mod error;

/// Helpers for tests that work with files and CI environments.
pub mod testing;

/// General utility functions and types for common tasks.
pub mod utils;

pub use error::Error;
