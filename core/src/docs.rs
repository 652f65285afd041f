#![deny(missing_docs)]

//! # Field Documentation
//!
//! Classifies parsed fields into required and optional documentation
//! records.
//!
//! A field is documented only when it has identifiers, a tag, and a
//! serialization-name entry in that tag. It is required exactly when the
//! required entry's value is the literal `true`.

use crate::config::TagKeys;
use crate::error::{AppError, AppResult};
use crate::naming::humanize;
use crate::parser::{ParsedField, ParsedStruct};
use crate::tags::StructTags;
use serde::{Deserialize, Serialize};

/// One documented field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDoc {
    /// Serialization name from the tag.
    pub name: String,
    /// Declared type as written in the source.
    #[serde(rename = "type")]
    pub ty: String,
    /// Doc comment text, or the field identifier split into words.
    pub docs: String,
}

/// The data file contents for one struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDoc {
    /// Declaring file, relative to the project root.
    pub source_path: String,
    /// Struct name.
    pub name: String,
    /// Required fields in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<FieldDoc>,
    /// Optional fields in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_required: Vec<FieldDoc>,
}

impl StructDoc {
    /// True when no field was documented.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.not_required.is_empty()
    }
}

/// Outcome of classifying one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldClass {
    /// Goes into `required`.
    Required(FieldDoc),
    /// Goes into `not_required`.
    NotRequired(FieldDoc),
}

/// Classifies one field of `struct_name`.
///
/// Returns `Ok(None)` for fields that are not documented (embedded, untagged,
/// or without the name key). Malformed tags are errors.
pub fn classify_field(
    struct_name: &str,
    field: &ParsedField,
    keys: &TagKeys,
) -> AppResult<Option<FieldClass>> {
    let (Some(ident), Some(literal)) = (field.primary_name(), field.tag.as_deref()) else {
        return Ok(None);
    };

    let tags = StructTags::from_literal(literal).map_err(|e| AppError::Tag {
        struct_name: struct_name.to_string(),
        field: ident.to_string(),
        line: field.line,
        tag: literal.to_string(),
        reason: e.to_string(),
    })?;

    let Some(name_tag) = tags.get(&keys.name_key) else {
        if tags.is_empty() {
            log::debug!("{}.{}: empty tag, skipping", struct_name, ident);
        } else {
            log::debug!(
                "{}.{}: no `{}` tag, skipping",
                struct_name,
                ident,
                keys.name_key
            );
        }
        return Ok(None);
    };

    let required = tags
        .get(&keys.required_key)
        .is_some_and(|t| t.value() == "true");

    let docs = match field.doc.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => humanize(ident),
    };

    let doc = FieldDoc {
        name: name_tag.name.clone(),
        ty: field.ty.clone(),
        docs,
    };

    Ok(Some(if required {
        FieldClass::Required(doc)
    } else {
        FieldClass::NotRequired(doc)
    }))
}

/// Builds the documentation record of a struct.
///
/// Returns `Ok(None)` when no field qualifies, so nothing gets written.
pub fn document_struct(
    parsed: &ParsedStruct,
    source_path: &str,
    keys: &TagKeys,
) -> AppResult<Option<StructDoc>> {
    let mut doc = StructDoc {
        source_path: source_path.to_string(),
        name: parsed.name.clone(),
        required: Vec::new(),
        not_required: Vec::new(),
    };

    for field in &parsed.fields {
        match classify_field(&parsed.name, field, keys)? {
            Some(FieldClass::Required(f)) => doc.required.push(f),
            Some(FieldClass::NotRequired(f)) => doc.not_required.push(f),
            None => {}
        }
    }

    Ok(if doc.is_empty() { None } else { Some(doc) })
}
