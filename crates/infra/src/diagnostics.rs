// crates/infra/src/diagnostics.rs
use std::{
    io::{self, Stderr, Write},
    sync::Mutex,
};

use build_version_ports::diagnostics::DiagnosticSink;

/// Writes each diagnostic as one line to a stream.
pub struct StreamSink<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StreamSink<Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> DiagnosticSink for StreamSink<W> {
    fn report(&self, message: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Nothing sensible is left to do if stderr itself is gone.
        let _ = writeln!(out, "{message}").and_then(|()| out.flush());
    }
}
