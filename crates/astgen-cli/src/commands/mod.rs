//! CLI commands.

pub mod check;
pub mod families;
pub mod generate;
pub mod parse;
pub mod print;
pub mod render;

use astgen_emit::Diagnostic;

/// Print skipped descriptor lines to stderr.
pub(crate) fn report_diagnostics(origin: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("  warning: {}: {}", origin, diagnostic);
    }
}
