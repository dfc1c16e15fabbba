// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for the fallible logging operations.

use thiserror::Error;

/// What can go wrong while emitting a log line.
///
/// Only the `try_*` methods on [`Logger`](crate::Logger) return this type.
/// The fatal variants render it into their panic message instead.
#[derive(Debug, Error)]
pub enum LogError {
    /// The value could not be rendered as JSON text.
    #[error("can't serialize value to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The sink rejected or failed the write.
    #[error("can't write to sink: {0}")]
    Write(#[from] std::io::Error),
}
