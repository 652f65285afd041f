#![deny(missing_docs)]

//! # Configuration
//!
//! Resolution of the input file and the knobs of the generator.
//!
//! The source file comes from, in order of precedence:
//! 1. the explicit command-line argument,
//! 2. the `GOFILE` environment variable, which `go generate` sets to the
//!    file carrying the directive.

use crate::error::{AppError, AppResult};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable consulted when no source argument is given.
pub const SOURCE_ENV_VAR: &str = "GOFILE";

/// Directory name marking the project root inside absolute paths.
pub const DEFAULT_ROOT_MARKER: &str = "packer";

/// Data directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "website/data";

/// Tag key holding the serialization name.
pub const DEFAULT_NAME_KEY: &str = "mapstructure";

/// Tag key flagging required fields.
pub const DEFAULT_REQUIRED_KEY: &str = "required";

/// Where the source path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    /// Passed on the command line.
    Argument,
    /// Read from [`SOURCE_ENV_VAR`].
    Environment,
}

/// The source file to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Path as given (possibly relative).
    pub path: PathBuf,
    /// Which source supplied it.
    pub origin: InputOrigin,
}

/// Picks the source file: explicit argument first, then the environment value.
///
/// Empty values count as absent.
pub fn resolve_input(
    argument: Option<PathBuf>,
    env_value: Option<OsString>,
) -> AppResult<ResolvedInput> {
    if let Some(path) = argument.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(ResolvedInput {
            path,
            origin: InputOrigin::Argument,
        });
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok(ResolvedInput {
            path: PathBuf::from(value),
            origin: InputOrigin::Environment,
        });
    }
    Err(AppError::Input(format!(
        "no source file given and {} is not set",
        SOURCE_ENV_VAR
    )))
}

/// Tag keys consulted when classifying fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagKeys {
    /// Key whose name is the documented field name.
    pub name_key: String,
    /// Key whose value `true` marks a required field.
    pub required_key: String,
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            name_key: DEFAULT_NAME_KEY.to_string(),
            required_key: DEFAULT_REQUIRED_KEY.to_string(),
        }
    }
}

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Path component naming the project root.
    pub root_marker: String,
    /// Output directory relative to the project root.
    pub output_dir: PathBuf,
    /// Tag keys for classification.
    pub tag_keys: TagKeys,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_marker: DEFAULT_ROOT_MARKER.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            tag_keys: TagKeys::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins_over_environment() {
        let input = resolve_input(
            Some(PathBuf::from("arg.go")),
            Some(OsString::from("env.go")),
        )
        .unwrap();
        assert_eq!(input.path, PathBuf::from("arg.go"));
        assert_eq!(input.origin, InputOrigin::Argument);
    }

    #[test]
    fn test_environment_fallback() {
        let input = resolve_input(None, Some(OsString::from("env.go"))).unwrap();
        assert_eq!(input.path, PathBuf::from("env.go"));
        assert_eq!(input.origin, InputOrigin::Environment);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let input = resolve_input(Some(PathBuf::new()), Some(OsString::from("env.go"))).unwrap();
        assert_eq!(input.origin, InputOrigin::Environment);

        let err = resolve_input(None, Some(OsString::new())).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn test_nothing_given() {
        let err = resolve_input(None, None).unwrap_err();
        assert!(err.to_string().contains("GOFILE"));
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.root_marker, "packer");
        assert_eq!(config.output_dir, PathBuf::from("website/data"));
        assert_eq!(config.tag_keys.name_key, "mapstructure");
        assert_eq!(config.tag_keys.required_key, "required");
    }
}
