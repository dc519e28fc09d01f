//! Driver for the astgen generator.
//!
//! This crate supplies requests to the emitter and persists its output:
//! 1. Built-in families (`Expr`, `Stmt`) or JSON request files
//! 2. Emission with the configured indentation
//! 3. Writing modules under the project root

mod config;
mod error;
mod families;

pub use config::{parse_indent, GeneratorConfig, GeneratorConfigBuilder};
pub use error::{DriverError, DriverResult};
pub use families::Family;

use astgen_emit::{Diagnostic, EmissionRequest, Emitter};
use std::fs;
use std::path::{Path, PathBuf};

/// Generated module text plus the lines it had to skip.
#[derive(Debug)]
pub struct Generated {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// A family written to disk.
#[derive(Debug)]
pub struct Written {
    pub family: Family,
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

/// Emit a request using the configured indentation.
pub fn generate(request: &EmissionRequest, config: &GeneratorConfig) -> Generated {
    let mut diagnostics = Vec::new();
    let text = Emitter::with_indent(config.indent.as_str()).emit(request, &mut diagnostics);

    for diagnostic in &diagnostics {
        tracing::debug!(base = %request.base_name, "{}", diagnostic);
    }

    Generated { text, diagnostics }
}

/// Find the descriptor lines a request would skip, without keeping the text.
///
/// Lines are judged exactly as emission judges them: literal lines only
/// count when the request names a literal enum.
pub fn check_request(request: &EmissionRequest) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    Emitter::new().emit(request, &mut diagnostics);
    diagnostics
}

/// Emit one built-in family.
pub fn generate_family(family: Family, config: &GeneratorConfig) -> Generated {
    tracing::debug!(%family, "generating family");
    generate(&family.request(), config)
}

/// Generate every built-in family and write it under `config.root`.
pub fn generate_all(config: &GeneratorConfig) -> DriverResult<Vec<Written>> {
    let mut written = Vec::new();

    for family in Family::ALL {
        let generated = generate_family(family, config);
        let path = config.root.join(family.default_path());
        write_output(&path, &generated.text)?;

        written.push(Written {
            family,
            path,
            diagnostics: generated.diagnostics,
        });
    }

    Ok(written)
}

/// Read an emission request from a JSON file.
pub fn load_request(path: &Path) -> DriverResult<EmissionRequest> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&source).map_err(|source| DriverError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write generated text, creating parent directories as needed.
pub fn write_output(path: &Path, text: &str) -> DriverResult<()> {
    let io_error = |source: std::io::Error| DriverError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, text).map_err(io_error)?;

    tracing::info!(path = %path.display(), bytes = text.len(), "wrote generated module");
    Ok(())
}
