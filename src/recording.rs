//! In-memory [`Logger`] for tests.
//!
//! [`RecordingLogger`] writes nothing. Every call is appended to one of four
//! sequences which tests can then query with the `in_*` helpers.

use std::error::Error as StdError;
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::logger::{ErrorValue, Logger};

#[derive(Debug, Default)]
struct Records {
    infos: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<ErrorValue>,
    debugs: Vec<ErrorValue>,
}

/// Logger that stores messages and errors instead of writing them.
///
/// Calls are recorded regardless of channel; there are no options. The
/// sequences only grow until [`clear`](Self::clear) is called.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Records>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn infos(&self) -> Vec<String> {
        self.records().infos.clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.records().warnings.clone()
    }

    pub fn errors(&self) -> Vec<ErrorValue> {
        self.records().errors.clone()
    }

    pub fn debugs(&self) -> Vec<ErrorValue> {
        self.records().debugs.clone()
    }

    /// True when nothing has been recorded on any channel.
    pub fn is_empty(&self) -> bool {
        let records = self.records();
        records.infos.is_empty()
            && records.warnings.is_empty()
            && records.errors.is_empty()
            && records.debugs.is_empty()
    }

    /// Drops everything recorded so far.
    pub fn clear(&self) {
        *self.records() = Records::default();
    }

    pub fn in_infos(&self, msg: &str) -> bool {
        contains_str(&self.records().infos, msg)
    }

    pub fn in_warnings(&self, msg: &str) -> bool {
        contains_str(&self.records().warnings, msg)
    }

    /// True if `err` was recorded, either directly or as the source of a
    /// recorded error.
    pub fn in_errors(&self, err: &ErrorValue) -> bool {
        contains_err(&self.records().errors, err)
    }

    /// Like [`in_errors`](Self::in_errors), for the debug channel.
    pub fn in_debugs(&self, err: &ErrorValue) -> bool {
        contains_err(&self.records().debugs, err)
    }

    /// True if a recorded error displays exactly as `msg`.
    pub fn str_in_errors(&self, msg: &str) -> bool {
        contains_err_text(&self.records().errors, msg)
    }

    pub fn str_in_debugs(&self, msg: &str) -> bool {
        contains_err_text(&self.records().debugs, msg)
    }

    pub fn not_in_infos(&self, msg: &str) -> bool {
        !self.in_infos(msg)
    }

    pub fn not_in_warnings(&self, msg: &str) -> bool {
        !self.in_warnings(msg)
    }

    pub fn not_in_errors(&self, err: &ErrorValue) -> bool {
        !self.in_errors(err)
    }

    pub fn not_in_debugs(&self, err: &ErrorValue) -> bool {
        !self.in_debugs(err)
    }

    pub fn not_str_in_errors(&self, msg: &str) -> bool {
        !self.str_in_errors(msg)
    }

    pub fn not_str_in_debugs(&self, msg: &str) -> bool {
        !self.str_in_debugs(msg)
    }
}

impl Logger for RecordingLogger {
    fn info(&self, msg: &str) {
        self.records().infos.push(msg.to_string());
    }

    fn warning(&self, msg: &str) {
        self.records().warnings.push(msg.to_string());
    }

    fn error(&self, err: ErrorValue) {
        self.records().errors.push(err);
    }

    #[track_caller]
    fn debug(&self, err: ErrorValue) {
        self.records().debugs.push(err);
    }
}

fn contains_str(recorded: &[String], msg: &str) -> bool {
    recorded.iter().any(|s| s == msg)
}

fn contains_err_text(recorded: &[ErrorValue], msg: &str) -> bool {
    recorded.iter().any(|e| e.to_string() == msg)
}

fn contains_err(recorded: &[ErrorValue], target: &ErrorValue) -> bool {
    let target: &(dyn StdError + 'static) = &**target;
    recorded.iter().any(|e| {
        let head: &(dyn StdError + 'static) = &**e;
        let mut current = Some(head);
        while let Some(err) = current {
            if ptr::addr_eq(err, target) {
                return true;
            }
            current = err.source();
        }
        false
    })
}
