// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;
use std::io;

pub trait Sink: Debug + Send + Sync {
    /**
        Writes one newline-terminated log line to the destination.

        Implementations must issue `line` in a single write call: a record
        handed to the sink is already complete, and splitting it would let
        concurrent writers interleave inside a line.
    */
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/*
Boilerplate notes.

# Sink

Clone on Sink doesn't make sense; sinks are shared via Arc instead.
PartialEq and Eq are possible but it's unclear whether we'd mean data equality or provenance, so skip.
Ord and Hash make no sense for an output destination.
Default is not sensible since who knows how a sink is constructed (does it need a filename, a handle, etc.)
Display is not very sensible; Debug is required so loggers holding a sink stay debuggable.
Send/Sync are required: the process-wide logger hands out shared references from any thread.
*/
