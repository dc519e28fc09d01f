//! Generator configuration.

use std::path::PathBuf;

/// Configuration shared by every generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Indentation for enum members and struct fields
    pub indent: String,
    /// Project root that family output paths are relative to
    pub root: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            root: PathBuf::from("."),
        }
    }
}

impl GeneratorConfig {
    /// Create config from environment variables.
    ///
    /// `ASTGEN_INDENT` accepts `tab`, a number of spaces, or literal text.
    /// `ASTGEN_ROOT` sets the output root.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let indent = std::env::var("ASTGEN_INDENT")
            .map(|v| parse_indent(&v))
            .unwrap_or(defaults.indent);

        let root = std::env::var("ASTGEN_ROOT")
            .map(PathBuf::from)
            .unwrap_or(defaults.root);

        Self { indent, root }
    }

    /// Create a builder for configuration.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

/// Interpret an indentation setting.
pub fn parse_indent(value: &str) -> String {
    if value.eq_ignore_ascii_case("tab") {
        return "\t".to_string();
    }

    match value.trim().parse::<usize>() {
        Ok(width) => " ".repeat(width),
        Err(_) => value.to_string(),
    }
}

/// Builder for generator configuration.
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }

    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}
