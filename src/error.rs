//! Error types for the severity-logger crate.
//!
//! Emitting a line never fails from the caller's point of view. The errors
//! here cover the surrounding plumbing: parsing an option list, installing
//! the global `log` backend, and the CLI reading its input.

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically
    /// converted via the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An option name in a textual option list was not recognised.
    #[error("Unknown logger option: {0:?} (expected debug, quiet or empty)")]
    UnknownOption(String),

    /// A global `log` backend was already installed.
    #[error("Logger already initialized: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}
