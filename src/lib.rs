//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# linelog

linelog is a minimal semi-structured line logging library for Rust.

# The problem

Sometimes the output you want from a program is not leveled, timestamped,
filtered telemetry. It's a stream of single-line records you can grep, cut on
`=`, or pipe into `jq`, written with as little ceremony as possible at the
call site. General-purpose facades such as [log](https://crates.io/crates/log)
are built around levels, targets and pluggable backends, and all of that
machinery gets in the way when what you mean is "print this value, tagged,
on one line".

linelog does exactly that and nothing else.

# The format

Three record shapes, one line each, tagged by how the body was encoded:

| Prefix  | Body                             | Usecase                    |
|---------|----------------------------------|----------------------------|
| `JSON ` | `name=` + compact JSON           | machine-consumable values  |
| `KVP `  | `name=` + debug representation   | quick human inspection     |
| `TXT `  | free text                        | everything else            |

# The API

```rust
use linelog::{InMemorySink, Logger};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let log = Logger::new(sink.clone());

log.kvp("attempts", &3);
linelog::txt!(log, "retrying in {} ms", 250);

assert_eq!(sink.drain(), "KVP attempts=3\nTXT retrying in 250 ms\n");
```

Production code usually goes through the process-wide instance instead,
which writes to stdout and is constructed on first use:

```rust
linelog::global_logger().txt("ready");
```

# Verbosity

Every record operation has an `*_if_verbose` variant gated on a single
per-logger flag, off by default:

```rust
use linelog::{InMemorySink, Logger};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let log = Logger::new(sink.clone());

log.txt_if_verbose("noisy detail");
assert_eq!(sink.contents(), "");

log.enable_verbose();
log.txt_if_verbose("noisy detail");
assert_eq!(sink.contents(), "TXT noisy detail\n");
```

# Errors

The short-named operations are fatal: they panic if the value can't be
serialized or the sink can't be written, trading recoverability for call-site
brevity. Every one has a `try_`-prefixed twin that returns
[`Result<(), LogError>`](LogError) for consumers who want the other half of
that trade.

# Multithreading

A [`Logger`] is `Send + Sync`; the verbosity flag is atomic and sinks take
`&self`. Each record reaches the sink as one complete line, and the bundled
sinks write it in a single call, so concurrent callers' lines do not
interleave mid-line. Ordering between concurrent callers is whatever the
sink observes.
*/

mod error;
mod global_logger;
mod inmemory_sink;
mod logger;
mod macros;
mod sink;
mod stdout_sink;

pub use error::LogError;
pub use global_logger::global_logger;
pub use inmemory_sink::InMemorySink;
pub use logger::Logger;
pub use sink::Sink;
pub use stdout_sink::StdoutSink;
