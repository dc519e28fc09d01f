//! Descriptor error definitions.

use smol_str::SmolStr;
use thiserror::Error;

/// An arrow expression that could not be turned into a descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("invalid arrow expression: \"{line}\" has {arrows} `->` delimiters, expected at most one")]
    AmbiguousArrow { line: SmolStr, arrows: usize },

    #[error("invalid arrow expression: empty line")]
    Empty { line: SmolStr },

    #[error("invalid arrow expression: \"{line}\" has no name before `->`")]
    MissingName { line: SmolStr },
}

impl DescriptorError {
    /// Get the offending line, exactly as it was given.
    pub fn line(&self) -> &str {
        match self {
            DescriptorError::AmbiguousArrow { line, .. } => line,
            DescriptorError::Empty { line } => line,
            DescriptorError::MissingName { line } => line,
        }
    }
}
