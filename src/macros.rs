// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatted-text logging macros.
//!
//! `TXT` records with substitutions go through these macros so the template
//! and arguments are checked at compile time by [`std::fmt`]. A template with
//! no captures writes literally, same as [`Logger::txt`](crate::Logger::txt).

/// Writes a formatted `TXT` record to the given logger.
///
/// ```rust
/// use linelog::{InMemorySink, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let log = Logger::new(sink.clone());
///
/// linelog::txt!(log, "hi bye, {}", "later");
/// assert_eq!(sink.drain(), "TXT hi bye, later\n");
/// ```
#[macro_export]
macro_rules! txt {
    ($logger:expr, $($arg:tt)+) => {
        $logger.txt_args(::core::format_args!($($arg)+))
    };
}

/// Like [`txt!`], but a no-op unless the logger is verbose.
///
/// ```rust
/// use linelog::{InMemorySink, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let log = Logger::new(sink.clone());
///
/// linelog::txt_if_verbose!(log, "attempt {}", 1);
/// assert_eq!(sink.drain(), "");
///
/// log.enable_verbose();
/// linelog::txt_if_verbose!(log, "attempt {}", 2);
/// assert_eq!(sink.drain(), "TXT attempt 2\n");
/// ```
#[macro_export]
macro_rules! txt_if_verbose {
    ($logger:expr, $($arg:tt)+) => {
        $logger.txt_args_if_verbose(::core::format_args!($($arg)+))
    };
}
