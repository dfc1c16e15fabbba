// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Logger`] type: semi-structured, single-line record emission.
//!
//! Every operation formats one complete record, prefixed with the shape tag
//! (`JSON `, `KVP ` or `TXT `), and hands it to the sink as a single
//! [`write_line`](crate::Sink::write_line) call. Nothing is buffered or
//! retained between calls.
//!
//! # Error policy
//!
//! The short-named operations (`json`, `kvp`, `txt`, ...) are fatal: a
//! serialization or write failure panics, on the theory that a diagnostic
//! helper which makes every call site handle a `Result` has defeated its own
//! purpose. Each has a `try_`-prefixed twin returning
//! [`Result`](crate::LogError) for consumers that need to degrade gracefully.
//! Nothing is ever silently swallowed.

use crate::error::LogError;
use crate::sink::Sink;
use serde::Serialize;
use std::fmt::{self, Debug};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/**
A logger that writes tagged single-line records to a [`Sink`].

Holds the sink handle and a verbosity flag (off by default). The flag only
affects the `*_if_verbose` operations; everything else writes unconditionally.

```rust
use linelog::{InMemorySink, Logger};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let log = Logger::new(sink.clone());

log.kvp("hi", "bye");
assert_eq!(sink.drain(), "KVP hi=\"bye\"\n");
```
*/
#[derive(Debug)]
pub struct Logger {
    sink: Arc<dyn Sink>,
    verbose: AtomicBool,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for Logger trait implementations:
//
// - Debug: Derived - both fields are Debug and loggers show up inside other
//   structs' Debug output
// - Clone: NOT implemented - two handles to the same sink with independent
//   verbosity flags is a trap; share a Logger behind Arc or a reference
// - Default: NOT implemented - there is no obviously-right default sink for
//   an explicitly-constructed logger (the process-wide one picks stdout)
// - PartialEq/Eq/Hash: NOT implemented - equality of loggers is provenance,
//   not data
// - Send/Sync: Automatic - Sink requires Send + Sync and the flag is atomic

impl Logger {
    /// Creates a logger over the given sink, verbosity off.
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            verbose: AtomicBool::new(false),
        }
    }

    /// Turns the verbosity gate on.
    pub fn enable_verbose(&self) {
        self.verbose.store(true, Ordering::Relaxed);
    }

    /// Sets the verbosity gate to the given value.
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    /// Reads the verbosity gate.
    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /**
    Writes `JSON <name>=<compact-json>`, marshaling `value` with [`serde_json`].

    Struct fields appear in declared order; map keys are ordered
    deterministically by the map's own iteration order.

    ```rust
    use linelog::{InMemorySink, Logger};
    use serde::Serialize;
    use std::sync::Arc;

    #[derive(Serialize)]
    struct Attempt {
        id: u32,
        ok: bool,
    }

    let sink = Arc::new(InMemorySink::new());
    let log = Logger::new(sink.clone());
    log.json("attempt", &Attempt { id: 7, ok: true });
    assert_eq!(sink.drain(), "JSON attempt={\"id\":7,\"ok\":true}\n");
    ```

    # Panics

    On serialization failure (a value JSON cannot represent) or write failure.
    Use [`try_json`](Self::try_json) to get a `Result` instead.
    */
    pub fn json<T>(&self, name: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        enforce(self.try_json(name, value));
    }

    /// Fallible form of [`json`](Self::json).
    pub fn try_json<T>(&self, name: &str, value: &T) -> Result<(), LogError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(value)?;
        self.write_record(&format!("JSON {name}={body}\n"))
    }

    /// Calls [`json`](Self::json), iff the logger is verbose.
    pub fn json_if_verbose<T>(&self, name: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        if self.is_verbose() {
            self.json(name, value);
        }
    }

    /**
    Writes a `JSON` record from already-serialized JSON text.

    The text is re-marshaled to canonical compact form: insignificant
    whitespace is removed and object keys come out alphabetically ordered.

    # Panics

    If `raw` is not syntactically valid JSON, or on write failure.
    */
    pub fn json_str(&self, name: &str, raw: &str) {
        enforce(self.try_json_str(name, raw));
    }

    /// Fallible form of [`json_str`](Self::json_str).
    pub fn try_json_str(&self, name: &str, raw: &str) -> Result<(), LogError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        self.try_json(name, &value)
    }

    /// Calls [`json_str`](Self::json_str), iff the logger is verbose.
    pub fn json_str_if_verbose(&self, name: &str, raw: &str) {
        if self.is_verbose() {
            self.json_str(name, raw);
        }
    }

    /**
    Writes `KVP <name>=<debug-repr>`, rendering `value` with [`Debug`].

    The debug representation is for human inspection, not machine parsing:
    strings come out quoted and escaped, composites as nested literals.

    # Panics

    On write failure only; debug formatting itself does not fail.
    */
    pub fn kvp<T>(&self, name: &str, value: &T)
    where
        T: Debug + ?Sized,
    {
        enforce(self.try_kvp(name, value));
    }

    /// Fallible form of [`kvp`](Self::kvp).
    pub fn try_kvp<T>(&self, name: &str, value: &T) -> Result<(), LogError>
    where
        T: Debug + ?Sized,
    {
        self.write_record(&format!("KVP {name}={value:?}\n"))
    }

    /// Calls [`kvp`](Self::kvp), iff the logger is verbose.
    pub fn kvp_if_verbose<T>(&self, name: &str, value: &T)
    where
        T: Debug + ?Sized,
    {
        if self.is_verbose() {
            self.kvp(name, value);
        }
    }

    /**
    Writes `TXT <text>`, treating `text` literally.

    A trailing newline is added only if `text` does not already end with one.
    For substitution, use the [`txt!`](crate::txt) macro.

    # Panics

    On write failure.
    */
    pub fn txt(&self, text: &str) {
        enforce(self.try_txt(text));
    }

    /// Fallible form of [`txt`](Self::txt).
    pub fn try_txt(&self, text: &str) -> Result<(), LogError> {
        if text.ends_with('\n') {
            self.write_record(&format!("TXT {text}"))
        } else {
            self.write_record(&format!("TXT {text}\n"))
        }
    }

    /// Calls [`txt`](Self::txt), iff the logger is verbose.
    pub fn txt_if_verbose(&self, text: &str) {
        if self.is_verbose() {
            self.txt(text);
        }
    }

    /// Writes a formatted `TXT` record. Macro entry point; call through
    /// [`txt!`](crate::txt) rather than building [`fmt::Arguments`] by hand.
    pub fn txt_args(&self, args: fmt::Arguments<'_>) {
        enforce(self.try_txt_args(args));
    }

    /// Fallible form of [`txt_args`](Self::txt_args).
    pub fn try_txt_args(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.try_txt(&args.to_string())
    }

    /// Calls [`txt_args`](Self::txt_args), iff the logger is verbose.
    pub fn txt_args_if_verbose(&self, args: fmt::Arguments<'_>) {
        if self.is_verbose() {
            self.txt_args(args);
        }
    }

    // One record, one sink call. The line is complete before the sink sees it.
    fn write_record(&self, line: &str) -> Result<(), LogError> {
        self.sink.write_line(line)?;
        Ok(())
    }
}

/// Panics on error: the fatal half of the error policy.
fn enforce(result: Result<(), LogError>) {
    if let Err(e) = result {
        panic!("{e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use std::collections::BTreeMap;
    use std::io;

    #[derive(Serialize)]
    struct Greeting {
        #[serde(rename = "Hi")]
        hi: String,
        #[serde(rename = "Bye")]
        bye: String,
    }

    fn greeting() -> Greeting {
        Greeting {
            hi: "hello".to_string(),
            bye: "goodbye".to_string(),
        }
    }

    const GREETING_LINE: &str = "JSON hibye={\"Hi\":\"hello\",\"Bye\":\"goodbye\"}\n";

    fn captured_logger() -> (Logger, Arc<InMemorySink>) {
        let sink = Arc::new(InMemorySink::new());
        (Logger::new(sink.clone()), sink)
    }

    /// Runs `call` against a fresh logger three ways (verbosity untouched,
    /// explicitly off, explicitly on) and checks that output only appears in
    /// the verbose case.
    fn assert_gated(call: impl Fn(&Logger), expected: &str) {
        for (configure, expect_output) in [(None, false), (Some(false), false), (Some(true), true)]
        {
            let (log, sink) = captured_logger();
            if let Some(v) = configure {
                log.set_verbose(v);
            }
            call(&log);
            let want = if expect_output { expected } else { "" };
            assert_eq!(sink.contents(), want);
        }
    }

    #[test]
    fn json() {
        let (log, sink) = captured_logger();
        log.json("hibye", &greeting());
        assert_eq!(sink.contents(), GREETING_LINE);
    }

    #[test]
    fn json_if_verbose() {
        assert_gated(|log| log.json_if_verbose("hibye", &greeting()), GREETING_LINE);
    }

    #[test]
    fn json_str() {
        let (log, sink) = captured_logger();
        log.json_str("hibye", r#"{"hello": "world"}"#);
        assert_eq!(sink.contents(), "JSON hibye={\"hello\":\"world\"}\n");
    }

    #[test]
    fn json_str_compacts_whitespace() {
        let raw = "{\n\t\t\"hello\": \"world\",\n\t\t\"hey\": \"galaxy\"\n}";
        let (log, sink) = captured_logger();
        log.json_str("hibye", raw);
        assert_eq!(
            sink.contents(),
            "JSON hibye={\"hello\":\"world\",\"hey\":\"galaxy\"}\n"
        );
    }

    #[test]
    fn json_str_if_verbose() {
        assert_gated(
            |log| log.json_str_if_verbose("hibye", r#"{"hello":"world"}"#),
            "JSON hibye={\"hello\":\"world\"}\n",
        );
    }

    #[test]
    fn kvp() {
        let (log, sink) = captured_logger();
        log.kvp("hi", "bye");
        assert_eq!(sink.contents(), "KVP hi=\"bye\"\n");
    }

    #[test]
    fn kvp_renders_composites() {
        let (log, sink) = captured_logger();
        log.kvp("pair", &("a", 1));
        assert_eq!(sink.contents(), "KVP pair=(\"a\", 1)\n");
    }

    #[test]
    fn kvp_if_verbose() {
        assert_gated(|log| log.kvp_if_verbose("hi", "bye"), "KVP hi=\"bye\"\n");
    }

    #[test]
    fn txt() {
        let (log, sink) = captured_logger();
        log.txt("hi bye");
        assert_eq!(sink.contents(), "TXT hi bye\n");
    }

    #[test]
    fn txt_keeps_existing_newline() {
        let (log, sink) = captured_logger();
        log.txt("hi bye\n");
        assert_eq!(sink.contents(), "TXT hi bye\n");
    }

    #[test]
    fn txt_if_verbose() {
        assert_gated(|log| log.txt_if_verbose("hi bye"), "TXT hi bye\n");
    }

    #[test]
    fn txt_args() {
        let (log, sink) = captured_logger();
        log.txt_args(format_args!("hi bye, {}", "later"));
        assert_eq!(sink.contents(), "TXT hi bye, later\n");
    }

    #[test]
    fn txt_args_if_verbose() {
        assert_gated(
            |log| log.txt_args_if_verbose(format_args!("hi bye, {}", "later")),
            "TXT hi bye, later\n",
        );
    }

    #[test]
    fn verbosity_flag() {
        let (log, _sink) = captured_logger();
        assert!(!log.is_verbose());

        log.enable_verbose();
        assert!(log.is_verbose());

        log.set_verbose(false);
        assert!(!log.is_verbose());

        log.set_verbose(true);
        assert!(log.is_verbose());
    }

    #[derive(Debug)]
    struct BrokenSink;

    impl Sink for BrokenSink {
        fn write_line(&self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn try_json_reports_unserializable_value() {
        // serde_json refuses maps whose keys aren't strings.
        let map = BTreeMap::from([((1u8, 2u8), 3u8)]);
        let (log, sink) = captured_logger();
        let err = log.try_json("map", &map).unwrap_err();
        assert!(matches!(err, LogError::Serialize(_)));
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn try_json_str_rejects_invalid_json() {
        let (log, sink) = captured_logger();
        let err = log.try_json_str("bad", "{not json").unwrap_err();
        assert!(matches!(err, LogError::Serialize(_)));
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn try_txt_reports_write_failure() {
        let log = Logger::new(Arc::new(BrokenSink));
        let err = log.try_txt("hi").unwrap_err();
        assert!(matches!(err, LogError::Write(_)));
    }

    #[test]
    #[should_panic(expected = "can't write to sink")]
    fn txt_panics_on_write_failure() {
        let log = Logger::new(Arc::new(BrokenSink));
        log.txt("hi");
    }

    #[test]
    #[should_panic(expected = "can't serialize value to JSON")]
    fn json_str_panics_on_invalid_json() {
        let (log, _sink) = captured_logger();
        log.json_str("bad", "{not json");
    }

    #[test]
    fn enforce_passes_ok() {
        enforce(Ok(()));
    }

    #[test]
    #[should_panic]
    fn enforce_panics_on_error() {
        enforce(Err(LogError::Write(io::Error::other("something bad"))));
    }
}
