//! # Source Location
//!
//! Places a source file inside the project tree, which decides both the
//! recorded `source_path` and where the data files go.

use crate::error::{AppError, AppResult};
use std::path::{Component, Path, PathBuf};

/// A source file split around the project-root marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Everything up to and including the marker component.
    pub project_root: PathBuf,
    /// Path below the root, `/`-separated (e.g. `builder/amazon/ebs/config.go`).
    pub source_path: String,
    /// Directories between the root and the file joined by `-` (e.g. `builder-amazon-ebs`).
    pub builder_name: String,
}

impl SourceLocation {
    /// Splits an absolute path at the first component equal to `marker`.
    pub fn resolve(abs_path: &Path, marker: &str) -> AppResult<Self> {
        let mut project_root = PathBuf::new();
        let mut below: Vec<String> = Vec::new();
        let mut found = false;

        for component in abs_path.components() {
            if found {
                below.push(component.as_os_str().to_string_lossy().into_owned());
                continue;
            }
            project_root.push(component.as_os_str());
            if matches!(component, Component::Normal(name) if name == marker) {
                found = true;
            }
        }

        if !found {
            return Err(AppError::Input(format!(
                "project root marker '{}' not found in {}",
                marker,
                abs_path.display()
            )));
        }
        let Some((_file, dirs)) = below.split_last() else {
            return Err(AppError::Input(format!(
                "{} names the project root, not a file inside it",
                abs_path.display()
            )));
        };

        Ok(Self {
            project_root,
            source_path: below.join("/"),
            builder_name: dirs.join("-"),
        })
    }

    /// Absolute path of the data file for `struct_name` under `output_dir`.
    ///
    /// The name is always `<builder>-<Struct>.yml`, so a file directly in
    /// the root yields `-<Struct>.yml`.
    pub fn output_path(&self, output_dir: &Path, struct_name: &str) -> PathBuf {
        let file_name = format!("{}-{}.yml", self.builder_name, struct_name);
        self.project_root.join(output_dir).join(file_name)
    }
}

/// Makes `path` absolute against the current directory and removes `.` and
/// `..` components lexically, without touching the filesystem.
pub fn absolutize(path: &Path) -> AppResult<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
