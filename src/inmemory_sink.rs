// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink implementation for testing and
//! debugging purposes. The `InMemorySink` captures log lines in memory rather
//! than writing them to stdout or other outputs, making it ideal for:
//!
//! - Unit testing code that logs through a [`Logger`](crate::Logger)
//! - Capturing output in environments where stdout is redirected or unavailable
//! - Programmatically examining emitted lines
//!
//! ## Architecture
//!
//! The sink uses a `Mutex<String>` internally so multiple threads can log
//! concurrently while maintaining a consistent view of the captured text.
//! Lines arrive whole (the [`Sink`] contract), so the buffer always holds a
//! sequence of complete, newline-terminated records.

use crate::sink::Sink;
use std::io;
use std::sync::Mutex;

/// An in-memory sink that accumulates log lines in a `String`.
///
/// This sink captures every line a logger emits, allowing you to retrieve and
/// examine the output programmatically. It's particularly useful in tests that
/// need to verify the exact bytes a logging call produced.
///
/// # Thread Safety
///
/// The `InMemorySink` is thread-safe and can be shared across threads using
/// `Arc`. All operations on the internal buffer are protected by a mutex.
///
/// # Example
///
/// ```rust
/// use linelog::{InMemorySink, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let log = Logger::new(sink.clone());
///
/// log.txt("starting up");
/// log.kvp("attempts", &3);
///
/// assert_eq!(sink.contents(), "TXT starting up\nKVP attempts=3\n");
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    captured: Mutex<String>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for InMemorySink trait implementations:
//
// - Debug: Derived for diagnostic purposes and required by the Sink trait
// - Default: Implemented with the obvious zero-value (empty buffer)
// - Clone: NOT implemented - a capture buffer is a unique resource; cloning
//   would silently fork the captured history
// - PartialEq/Eq: NOT implemented - equality semantics unclear for sinks,
//   and mutex state comparison is problematic
// - Hash: NOT implemented - requires Eq, and sinks shouldn't be hash keys
// - Display: NOT implemented - no meaningful display representation
// - Send/Sync: Automatically implemented due to Mutex usage (required for Sink)

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// Creates a new `InMemorySink` with an empty capture buffer.
    pub fn new() -> Self {
        Self {
            captured: Mutex::new(String::new()),
        }
    }

    /// Returns a copy of everything captured so far, leaving the buffer intact.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linelog::{InMemorySink, Logger};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(InMemorySink::new());
    /// let log = Logger::new(sink.clone());
    ///
    /// log.txt("first");
    /// assert_eq!(sink.contents(), "TXT first\n");
    ///
    /// // The buffer is untouched; a second read sees the same text.
    /// assert_eq!(sink.contents(), "TXT first\n");
    /// ```
    pub fn contents(&self) -> String {
        self.captured.lock().unwrap().clone()
    }

    /// Drains all captured text, clearing the internal buffer.
    ///
    /// Subsequent calls return an empty string unless new lines have been
    /// written in the meantime.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linelog::{InMemorySink, Logger};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(InMemorySink::new());
    /// let log = Logger::new(sink.clone());
    ///
    /// log.txt("first");
    /// assert_eq!(sink.drain(), "TXT first\n");
    ///
    /// // Buffer is now empty
    /// assert_eq!(sink.drain(), "");
    /// ```
    pub fn drain(&self) -> String {
        std::mem::take(&mut *self.captured.lock().unwrap())
    }
}

impl Sink for InMemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.captured.lock().unwrap().push_str(line);
        Ok(())
    }
}
