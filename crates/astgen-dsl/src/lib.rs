//! # astgen DSL
//!
//! Parses arrow expressions, the one-line descriptions of AST node variants
//! that the emitter turns into Rust type definitions.
//!
//! ## Example
//!
//! ```
//! use astgen_dsl::{parse_arrow, Field};
//!
//! let desc = parse_arrow("Unary -> operator: Token, right: Box<Expr>").unwrap();
//! assert_eq!(desc.name, "Unary");
//! assert_eq!(desc.fields[1], Field::named("right", "Box<Expr>"));
//!
//! let unit = parse_arrow("Nil").unwrap();
//! assert!(!unit.has_fields);
//! ```

mod descriptor;
mod error;

pub use descriptor::{parse_arrow, Descriptor, Field, ARROW};
pub use error::DescriptorError;
