// crates/ports/src/diagnostics.rs

/// Sink for human-readable, non-fatal diagnostics.
pub trait DiagnosticSink {
    /// Emit one diagnostic line. `message` carries no line terminator.
    fn report(&self, message: &str);
}
