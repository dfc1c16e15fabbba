// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide logger.
//!
//! This module provides a single shared [`Logger`] per process, bound to
//! standard output with verbosity off. It exists so a host program can log
//! from anywhere without threading a logger handle through every call chain.
//!
//! # Contract
//!
//! - The first call to [`global_logger`] constructs the instance.
//! - Every call, sequential or concurrent, returns the identical instance.
//! - Construction happens at most once; callers that arrive during
//!   initialization block until it completes and then observe the same
//!   instance ([`OnceLock::get_or_init`] guarantees this).
//! - There is no way to reset or replace the instance within a process
//!   lifetime. Tests that need their own output should construct a
//!   [`Logger`] over an [`InMemorySink`](crate::InMemorySink) instead.
//!
//! # Example
//!
//! ```rust
//! use linelog::global_logger;
//!
//! let log = global_logger();
//! log.txt("ready");
//!
//! // Same instance everywhere.
//! assert!(std::ptr::eq(log, global_logger()));
//! ```

use crate::logger::Logger;
use crate::stdout_sink::StdoutSink;
use std::sync::{Arc, OnceLock};

/// Static storage for the shared logger instance.
///
/// `OnceLock` is the one-time initialization barrier: exactly one caller runs
/// the initializer, everyone else waits for it and sees the result.
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, constructing it on first access.
///
/// The instance writes to standard output and starts with verbosity off.
/// Verbosity can still be toggled through the shared reference
/// ([`Logger::set_verbose`] takes `&self`), which affects every user of the
/// instance.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| Logger::new(Arc::new(StdoutSink::new())))
}
