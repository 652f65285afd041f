//! # Data Models
//!
//! Intermediate Representation (IR) of the Go declarations the extractor
//! reports. Everything is owned text copied out of the source.

/// A field line of a struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    /// Field identifiers in order (`A, B int` has two). Empty for embedded fields.
    pub names: Vec<String>,
    /// The declared type exactly as written in the source.
    pub ty: String,
    /// The tag literal including its quotes (backquotes or double quotes).
    pub tag: Option<String>,
    /// Text of the attached doc comment group, if any.
    pub doc: Option<String>,
    /// 1-based line of the field.
    pub line: usize,
}

impl ParsedField {
    /// The identifier used for labels and diagnostics.
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// Whether this is an embedded (anonymous) field.
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// A top-level `type X struct { ... }` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStruct {
    /// The struct name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<ParsedField>,
    /// 1-based line of the type spec.
    pub line: usize,
}
