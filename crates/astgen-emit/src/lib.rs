//! # astgen Emitter
//!
//! Turns an [`EmissionRequest`] into the source of one Rust module: an
//! optional literal enum, a `<Name>Value` struct per variant with fields, and
//! the base enum tying them together.
//!
//! ## Example
//!
//! ```
//! use astgen_emit::{emit, EmissionRequest};
//!
//! let request = EmissionRequest::new("Stmt")
//!     .import("crate::token::Token")
//!     .variants(["Break -> keyword: Token", "Continue -> keyword: Token"]);
//!
//! let result = emit(&request);
//! assert!(result.diagnostics.is_empty());
//! assert!(result.text.contains("\tBreak(BreakValue),\n\tContinue(ContinueValue),\n"));
//! ```

mod diagnostic;
mod emitter;
mod request;

pub use diagnostic::{Diagnostic, DiagnosticSink, Section, TracingSink};
pub use emitter::{Emitter, VALUE_SUFFIX};
pub use request::{EmissionRequest, DEFAULT_LITERAL_DERIVES};

/// Result of emitting a request.
pub struct EmitResult {
    /// The generated module
    pub text: String,
    /// Descriptor lines that were skipped
    pub diagnostics: Vec<Diagnostic>,
}

/// Emit a request with the default emitter, collecting diagnostics.
pub fn emit(request: &EmissionRequest) -> EmitResult {
    let mut diagnostics = Vec::new();
    let text = Emitter::new().emit(request, &mut diagnostics);
    EmitResult { text, diagnostics }
}
