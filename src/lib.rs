//! Severity logger library.
//!
//! A small logging facade with four fixed channels (info, warning, error and
//! debug) whose output is selected once from an [`Options`] bitmask, plus a
//! [`RecordingLogger`] that stores calls for assertions in tests.
//!
//! ```
//! use severity_logger::{Logger, Options, SeverityLogger, error_value};
//!
//! let logger = SeverityLogger::with_writer(Options::QUIET, std::io::sink());
//! logger.info("dropped");
//! logger.error(error_value("written"));
//! ```

pub mod commands;
pub mod error;
mod facade;
pub mod logger;
pub mod options;
pub mod recording;
pub mod sink;

pub use facade::SharedLogger;
pub use logger::{Channel, ErrorValue, Logger, Route, SeverityLogger, error_value, init, install};
pub use options::Options;
pub use recording::RecordingLogger;
