// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::sink::Sink;
use std::io::{self, Write};

/**
The production sink: writes each line to standard output.
 */
#[derive(Debug, Clone)]
pub struct StdoutSink {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for StdoutSink trait implementations:
//
// - Debug/Clone: Already derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: Implemented - all instances are equivalent (zero-sized)
// - Hash: Implemented - consistent with Eq, enables use as hash map keys
// - Default: Implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation for a stdout sink
// - From/Into: NOT implemented - no obvious conversions
// - Send/Sync: Automatically implemented - zero-sized struct is always thread-safe

impl Copy for StdoutSink {}

impl PartialEq for StdoutSink {
    fn eq(&self, _other: &Self) -> bool {
        // All instances of a zero-sized struct are equal
        true
    }
}

impl Eq for StdoutSink {}

impl std::hash::Hash for StdoutSink {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        // Zero-sized struct has no data to hash - this is consistent with Eq
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        // Hold the stream lock for the whole line so it lands contiguously.
        let mut lock = io::stdout().lock();
        lock.write_all(line.as_bytes())
    }
}
