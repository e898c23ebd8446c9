//! Thread-safe diagnostic accumulator and leveled tracing sink.

use crate::code::{Category, DiagnosticCode};
use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A thread-safe accumulator for diagnostics.
///
/// Multiple threads can emit diagnostics concurrently via [`emit`](Self::emit).
/// The error count is tracked atomically for fast `has_errors` checks without
/// locking the diagnostic vector.
///
/// The sink also serves as the engine's tracing collaborator:
/// [`trace`](Self::trace) records a leveled message only when the level is
/// within the sink's verbosity, so tracing costs nothing when disabled.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    error_count: AtomicUsize,
    verbosity: u8,
}

impl DiagnosticSink {
    /// Creates a new empty diagnostic sink with tracing disabled.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            error_count: AtomicUsize::new(0),
            verbosity: 0,
        }
    }

    /// Creates a sink that records trace messages up to the given level.
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self {
            verbosity,
            ..Self::new()
        }
    }

    /// Emits a diagnostic into the sink.
    ///
    /// If the diagnostic has [`Severity::Error`], the error count is
    /// incremented atomically.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.severity == Severity::Error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        let mut diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.push(diag);
    }

    /// Records a leveled trace message if `level` is within this sink's
    /// verbosity. Level 1 is coarse (operation summaries), higher levels are
    /// progressively chattier (per-net driver resolution, path dumps).
    pub fn trace(&self, level: u8, message: impl Into<String>) {
        if level > self.verbosity {
            return;
        }
        self.emit(Diagnostic::new(
            Severity::Trace,
            DiagnosticCode::new(Category::Trace, level as u16),
            message,
        ));
    }

    /// Returns `true` if any error-severity diagnostics have been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error-severity diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        std::mem::take(&mut *diagnostics)
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
