#![deny(missing_docs)]

//! # Generator
//!
//! The full pipeline for one Go file:
//!
//! 1. **Locate**: make the path absolute and split it at the project root.
//! 2. **Parse**: read the file and extract struct declarations.
//! 3. **Classify**: turn tagged fields into required/optional records.
//! 4. **Emit**: write one YAML file per documented struct.
//!
//! Any error aborts the run. Files written for earlier structs stay on disk.

use crate::config::GeneratorConfig;
use crate::docs::document_struct;
use crate::emitter::write_struct_doc;
use crate::error::AppResult;
use crate::location::{absolutize, SourceLocation};
use crate::parser::extract_structs;
use std::fs;
use std::path::{Path, PathBuf};

/// Generates the data files for `source` and returns their paths in
/// declaration order.
pub fn generate(source: &Path, config: &GeneratorConfig) -> AppResult<Vec<PathBuf>> {
    let abs_path = absolutize(source)?;
    let location = SourceLocation::resolve(&abs_path, &config.root_marker)?;

    let code = fs::read_to_string(source)?;
    let label = source.display().to_string();
    let structs = extract_structs(&code, &label)?;
    log::debug!("{}: {} struct declaration(s)", label, structs.len());

    let mut written = Vec::new();
    for parsed in &structs {
        let Some(doc) = document_struct(parsed, &location.source_path, &config.tag_keys)? else {
            log::debug!(
                "{}:{}: {} has no documented fields, skipping",
                label,
                parsed.line,
                parsed.name
            );
            continue;
        };
        let path = location.output_path(&config.output_dir, &doc.name);
        write_struct_doc(&path, &doc)?;
        written.push(path);
    }

    Ok(written)
}
