//! Emission requests: everything needed to generate one AST family.

/// Derives put on the literal enum unless a request says otherwise.
pub const DEFAULT_LITERAL_DERIVES: &[&str] = &["Clone"];

/// The complete input for one generated module.
///
/// Descriptor lines are kept as raw text; the emitter parses them itself so
/// that malformed lines can be reported with their position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionRequest {
    /// Name of the base enum, e.g. `Expr`
    pub base_name: String,
    /// Arrow expressions for the base enum's variants
    #[cfg_attr(feature = "serde", serde(default))]
    pub variants: Vec<String>,
    /// Module paths to import, emitted as `use <path>;`
    #[cfg_attr(feature = "serde", serde(default))]
    pub imports: Vec<String>,
    /// Name of the literal enum; no literal enum is emitted without one
    #[cfg_attr(feature = "serde", serde(default))]
    pub literal_type_name: Option<String>,
    /// Arrow expressions for the literal enum's members
    #[cfg_attr(feature = "serde", serde(default))]
    pub literals: Vec<String>,
    /// Raw code appended after the base enum
    #[cfg_attr(feature = "serde", serde(default))]
    pub trailing_code: Option<String>,
    /// Derives for the data holders and the base enum
    #[cfg_attr(feature = "serde", serde(default))]
    pub derives: Vec<String>,
    /// Derives for the literal enum
    #[cfg_attr(feature = "serde", serde(default = "default_literal_derives"))]
    pub literal_derives: Vec<String>,
}

fn default_literal_derives() -> Vec<String> {
    DEFAULT_LITERAL_DERIVES.iter().map(|d| d.to_string()).collect()
}

impl EmissionRequest {
    /// Create a request for the given base enum with no variants.
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            variants: Vec::new(),
            imports: Vec::new(),
            literal_type_name: None,
            literals: Vec::new(),
            trailing_code: None,
            derives: Vec::new(),
            literal_derives: default_literal_derives(),
        }
    }

    /// Add a variant line.
    pub fn variant(mut self, line: impl Into<String>) -> Self {
        self.variants.push(line.into());
        self
    }

    /// Add several variant lines.
    pub fn variants<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variants.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Add an import path.
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(path.into());
        self
    }

    /// Add several import paths.
    pub fn imports<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Emit a literal enum with the given name and member lines.
    pub fn literals<I, S>(mut self, name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literal_type_name = Some(name.into());
        self.literals.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append raw code after the base enum.
    pub fn trailing_code(mut self, code: impl Into<String>) -> Self {
        self.trailing_code = Some(code.into());
        self
    }

    /// Replace the derives on data holders and the base enum.
    pub fn derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the derives on the literal enum.
    pub fn literal_derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.literal_derives = derives.into_iter().map(Into::into).collect();
        self
    }
}
