//! Emitter - assembles generated Rust source from an emission request.

use crate::diagnostic::{Diagnostic, DiagnosticSink, Section};
use crate::request::EmissionRequest;
use astgen_dsl::{parse_arrow, Descriptor};
use std::fmt::Write;

/// Suffix appended to a variant name to form its data-holder struct.
pub const VALUE_SUFFIX: &str = "Value";

/// Writes emission requests out as Rust source.
pub struct Emitter {
    /// Indentation for enum members and struct fields (default: one tab).
    indent: String,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// Create a new emitter.
    pub fn new() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }

    /// Create an emitter with custom indentation.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Generate the complete module for a request.
    ///
    /// Sections are written in a fixed order: imports, the literal enum,
    /// data holders, the base enum, then trailing code. Lines that fail to
    /// parse are reported to `sink` and left out.
    pub fn emit(&self, request: &EmissionRequest, sink: &mut dyn DiagnosticSink) -> String {
        let mut output = String::new();

        self.write_imports(&mut output, &request.imports);

        if let Some(name) = &request.literal_type_name {
            let literals = parse_section(&request.literals, Section::Literals, sink);
            self.write_literal_enum(&mut output, name, &literals, &request.literal_derives);
        }

        let variants = parse_section(&request.variants, Section::Variants, sink);

        for variant in variants.iter().filter(|v| v.has_fields) {
            self.write_value_struct(&mut output, variant, &request.derives);
        }

        self.write_base_enum(&mut output, &request.base_name, &variants, &request.derives);

        if let Some(code) = &request.trailing_code {
            output.push_str(code);
        }

        tracing::debug!(
            base = %request.base_name,
            variants = variants.len(),
            bytes = output.len(),
            "emitted AST module"
        );

        output
    }

    /// Write one `use` per import, then the blank line closing the section.
    fn write_imports(&self, output: &mut String, imports: &[String]) {
        for path in imports {
            writeln!(output, "use {};", path).unwrap();
        }
        writeln!(output).unwrap();
    }

    /// Write the literal enum. Members carry their field types verbatim.
    fn write_literal_enum(
        &self,
        output: &mut String,
        name: &str,
        literals: &[Descriptor],
        derives: &[String],
    ) {
        write_derives(output, derives);
        writeln!(output, "pub enum {} {{", name).unwrap();

        for literal in literals {
            write!(output, "{}{}", self.indent, literal.name).unwrap();
            if literal.has_fields {
                let types: Vec<&str> = literal.types().collect();
                write!(output, "({})", types.join(", ")).unwrap();
            }
            writeln!(output, ",").unwrap();
        }

        writeln!(output, "}}").unwrap();
        writeln!(output).unwrap();
    }

    /// Write `<Name>Value` with every field public.
    fn write_value_struct(&self, output: &mut String, variant: &Descriptor, derives: &[String]) {
        write_derives(output, derives);
        writeln!(output, "pub struct {}{} {{", variant.name, VALUE_SUFFIX).unwrap();

        for field in &variant.fields {
            writeln!(output, "{}pub {},", self.indent, field).unwrap();
        }

        writeln!(output, "}}").unwrap();
        writeln!(output).unwrap();
    }

    /// Write the base enum, pointing variants with fields at their data holders.
    fn write_base_enum(
        &self,
        output: &mut String,
        name: &str,
        variants: &[Descriptor],
        derives: &[String],
    ) {
        write_derives(output, derives);
        writeln!(output, "pub enum {} {{", name).unwrap();

        for variant in variants {
            write!(output, "{}{}", self.indent, variant.name).unwrap();
            if variant.has_fields {
                write!(output, "({}{})", variant.name, VALUE_SUFFIX).unwrap();
            }
            writeln!(output, ",").unwrap();
        }

        writeln!(output, "}}").unwrap();
    }
}

fn write_derives(output: &mut String, derives: &[String]) {
    if !derives.is_empty() {
        writeln!(output, "#[derive({})]", derives.join(", ")).unwrap();
    }
}

/// Parse every line of one list, reporting and dropping the malformed ones.
fn parse_section(
    lines: &[String],
    section: Section,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Descriptor> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| match parse_arrow(line) {
            Ok(descriptor) => Some(descriptor),
            Err(error) => {
                sink.report(Diagnostic {
                    section,
                    index,
                    error,
                });
                None
            }
        })
        .collect()
}
