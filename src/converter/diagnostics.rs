use log::warn;
use std::fmt;

/// Non-fatal findings produced while converting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Output is fine as a string but starts with a digit
    LeadingDigit { output: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LeadingDigit { .. } => write!(
                f,
                "Warning: This string is not suitable as a variable name in languages like Python or JavaScript."
            ),
        }
    }
}

/// Receives diagnostics from a converter. Callers choose where warnings go.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::LeadingDigit { output } => warn!("{} ({:?})", diagnostic, output),
        }
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}
