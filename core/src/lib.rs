#![deny(missing_docs)]

//! # Structdoc Core
//!
//! Core library for turning tagged Go struct declarations into YAML data
//! files for a documentation website.

/// Input resolution and generator settings.
pub mod config;

/// Field classification into documentation records.
pub mod docs;

/// YAML output.
pub mod emitter;

/// Shared error types.
pub mod error;

/// End-to-end pipeline for one file.
pub mod generator;

/// Project-root detection and output placement.
pub mod location;

/// Identifier word splitting.
pub mod naming;

/// Go source parsing.
pub mod parser;

/// Struct tag parsing.
pub mod tags;

pub use config::{resolve_input, GeneratorConfig, InputOrigin, ResolvedInput, TagKeys};
pub use docs::{classify_field, document_struct, FieldClass, FieldDoc, StructDoc};
pub use error::{AppError, AppResult};
pub use generator::generate;
pub use location::SourceLocation;
pub use parser::{extract_structs, ParsedField, ParsedStruct};
pub use tags::{StructTags, Tag, TagSyntaxError};
