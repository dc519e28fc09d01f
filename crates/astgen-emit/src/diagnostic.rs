//! Diagnostics for descriptor lines the emitter had to skip.

use astgen_dsl::DescriptorError;
use std::fmt;
use thiserror::Error;

/// Which descriptor list a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Literals,
    Variants,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Literals => write!(f, "literals"),
            Section::Variants => write!(f, "variants"),
        }
    }
}

/// A malformed descriptor line that was left out of the output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{section}[{index}]: {error}")]
pub struct Diagnostic {
    pub section: Section,
    /// Position of the line within its list
    pub index: usize,
    #[source]
    pub error: DescriptorError,
}

/// Receives diagnostics during emission.
///
/// Reporting must not fail or stop generation.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Logs every diagnostic as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            section = %diagnostic.section,
            index = diagnostic.index,
            "{}",
            diagnostic.error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_position() {
        let diagnostic = Diagnostic {
            section: Section::Variants,
            index: 3,
            error: DescriptorError::Empty { line: "".into() },
        };
        assert_eq!(
            diagnostic.to_string(),
            "variants[3]: invalid arrow expression: empty line"
        );
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        for index in 0..2 {
            sink.report(Diagnostic {
                section: Section::Literals,
                index,
                error: DescriptorError::Empty { line: "".into() },
            });
        }
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].index, 1);
    }
}
