//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Every stage of the pipeline reports through this type and nothing recovers
/// locally: the CLI prints the error and exits non-zero.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors (reading the source, writing data files).
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The source file could not be resolved or placed inside the project.
    #[from(ignore)]
    #[display("Input Error: {_0}")]
    Input(String),

    /// The Go source does not parse.
    #[from(ignore)]
    #[display("Syntax Error: {file}:{line}:{column}: {message}")]
    Syntax {
        /// File label as given on the command line.
        file: String,
        /// 1-based line of the first diagnostic.
        line: usize,
        /// 1-based column of the first diagnostic.
        column: usize,
        /// Parser diagnostic.
        message: String,
    },

    /// A struct tag does not follow the `key:"value"` mini-language.
    #[from(ignore)]
    #[display("Tag Error: line {line}: {struct_name}.{field}: {reason} in {tag}")]
    Tag {
        /// Struct declaring the field.
        struct_name: String,
        /// Offending field identifier.
        field: String,
        /// 1-based line of the field.
        line: usize,
        /// The tag literal as written in the source.
        tag: String,
        /// Why the tag was rejected.
        reason: String,
    },

    /// Wrapper for YAML serialization errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
