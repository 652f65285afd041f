#![deny(missing_docs)]

//! # Parser Module
//!
//! Handles parsing of Go source code using tree-sitter and the Go grammar.
//! Extracts top-level struct declarations, their fields, struct tags and
//! doc comment groups.

pub mod comments;
pub mod extractors;
pub mod models;

pub use extractors::{extract_structs, parse_go_source};
pub use models::{ParsedField, ParsedStruct};
