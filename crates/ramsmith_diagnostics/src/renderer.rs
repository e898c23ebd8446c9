//! Rendering of accumulated diagnostics for human consumption.

use crate::diagnostic::Diagnostic;

/// Formats diagnostics for a particular output target.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic to a string (without trailing newline).
    fn render(&self, diag: &Diagnostic) -> String;

    /// Renders a batch of diagnostics, one per line block.
    fn render_all(&self, diags: &[Diagnostic]) -> String {
        diags
            .iter()
            .map(|d| self.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders diagnostics in a compact `severity[CODE]: message` form with
/// indented `note:` continuation lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalRenderer;

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = format!("{}[{}]: {}", diag.severity, diag.code, diag.message);
        for note in &diag.notes {
            out.push_str("\n  note: ");
            out.push_str(note);
        }
        out
    }
}
