//! Diagnostic creation, severity management, and rendering for ramsmith.
//!
//! This crate provides structured [`Diagnostic`] messages with severity
//! levels and category-prefixed codes. The thread-safe [`DiagnosticSink`]
//! accumulates diagnostics during analysis and doubles as the leveled
//! tracing sink used by the path-construction engine. A
//! [`DiagnosticRenderer`] formats accumulated diagnostics for the terminal.
//!
//! Netlists are in-memory structures, so diagnostics carry the offending
//! net/module/instance names in their message rather than source spans.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
