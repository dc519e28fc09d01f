//! Arrow expressions and the descriptors they parse into.
//!
//! An arrow expression is either `<name>` or `<name> -> <fields>`, where
//! `<fields>` is a comma-separated list of `name: Type` pairs (or bare types,
//! for literal payloads). Names and types are opaque text.

use crate::error::DescriptorError;
use smol_str::SmolStr;
use std::fmt;

/// The delimiter between a descriptor's name and its field list.
pub const ARROW: &str = "->";

/// The parsed form of one arrow expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    /// Variant name, trimmed
    pub name: SmolStr,
    /// Fields in the order they were written
    pub fields: Vec<Field>,
    /// Whether the expression had an arrow at all
    pub has_fields: bool,
}

/// One entry of a descriptor's field list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Field name, absent for bare types such as `f64`
    pub name: Option<SmolStr>,
    /// Field type, verbatim
    pub ty: SmolStr,
}

impl Descriptor {
    /// Create a descriptor with no field list.
    pub fn unit(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            has_fields: false,
        }
    }

    /// Create a descriptor with the given fields.
    pub fn with_fields(name: impl Into<SmolStr>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            has_fields: true,
        }
    }

    /// The field types in order, ignoring names.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.ty.as_str())
    }
}

impl Field {
    /// A named field: `name: ty`.
    pub fn named(name: impl Into<SmolStr>, ty: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
        }
    }

    /// A bare type with no field name.
    pub fn bare(ty: impl Into<SmolStr>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}: {}", name, self.ty),
            None => write!(f, "{}", self.ty),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.has_fields {
            return Ok(());
        }

        write!(f, " {}", ARROW)?;
        for (i, field) in self.fields.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, field)?;
        }
        Ok(())
    }
}

/// Parse one arrow expression.
///
/// The line is split on `->`. One segment is a unit descriptor, two segments
/// are a name and a field list, anything more is ambiguous and rejected.
/// Whitespace around every segment, field name and type is trimmed, so a
/// field list may be written across several lines.
pub fn parse_arrow(line: &str) -> Result<Descriptor, DescriptorError> {
    let segments: Vec<&str> = line.split(ARROW).collect();

    match segments.as_slice() {
        [name] => {
            let name = name.trim();
            if name.is_empty() {
                return Err(DescriptorError::Empty { line: line.into() });
            }
            Ok(Descriptor::unit(name))
        }
        [name, fields] => {
            let name = name.trim();
            if name.is_empty() {
                return Err(DescriptorError::MissingName { line: line.into() });
            }
            Ok(Descriptor::with_fields(name, parse_fields(fields.trim())))
        }
        _ => Err(DescriptorError::AmbiguousArrow {
            line: line.into(),
            arrows: segments.len().saturating_sub(1),
        }),
    }
}

/// Parse a comma-separated field list. Empty pieces are skipped.
fn parse_fields(list: &str) -> Vec<Field> {
    split_top_level(list)
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| match name_separator(piece) {
            Some(at) => Field::named(piece[..at].trim(), piece[at + 1..].trim()),
            None => Field::bare(piece),
        })
        .collect()
}

/// Find the `:` between a field name and its type.
///
/// Only a single colon outside `<>`, `()` and `[]` counts; `::` path
/// separators belong to the type.
fn name_separator(piece: &str) -> Option<usize> {
    let bytes = piece.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if bytes.get(i + 1) == Some(&b':') => {
                i += 2;
                continue;
            }
            b':' if depth == 0 => return Some(i),
            _ => {}
        }
        i += 1;
    }

    None
}

/// Split on commas that are not nested inside `<>`, `()` or `[]`.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&list[start..]);

    pieces
}
