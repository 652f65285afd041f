//! # Emitter
//!
//! Serializes [`StructDoc`] records to YAML data files.

use crate::docs::StructDoc;
use crate::error::AppResult;
use std::fs;
use std::path::Path;

/// Renders a record as YAML.
pub fn render_yaml(doc: &StructDoc) -> AppResult<String> {
    Ok(serde_yaml::to_string(doc)?)
}

/// Writes `doc` to `path`, replacing any previous file.
///
/// The parent directory must already exist.
pub fn write_struct_doc(path: &Path, doc: &StructDoc) -> AppResult<()> {
    let yaml = render_yaml(doc)?;
    fs::write(path, yaml)?;
    log::info!("wrote {} ({})", path.display(), doc.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::FieldDoc;
    use crate::error::AppError;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample() -> StructDoc {
        StructDoc {
            source_path: "builder/amazon/ebs/config.go".into(),
            name: "Config".into(),
            required: vec![FieldDoc {
                name: "ami_name".into(),
                ty: "string".into(),
                docs: "The name of the resulting AMI.\n".into(),
            }],
            not_required: vec![FieldDoc {
                name: "block_devices".into(),
                ty: "[]*BlockDevice".into(),
                docs: "Block Devices".into(),
            }],
        }
    }

    #[test]
    fn test_yaml_layout() {
        let yaml = render_yaml(&sample()).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(value["source_path"], "builder/amazon/ebs/config.go");
        assert_eq!(value["name"], "Config");
        assert_eq!(value["required"][0]["name"], "ami_name");
        assert_eq!(value["required"][0]["type"], "string");
        assert_eq!(value["required"][0]["docs"], "The name of the resulting AMI.\n");
        assert_eq!(value["not_required"][0]["type"], "[]*BlockDevice");

        let keys: Vec<&str> = value
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["source_path", "name", "required", "not_required"]);
    }

    #[test]
    fn test_empty_sequences_are_omitted() {
        let mut doc = sample();
        doc.required.clear();
        let yaml = render_yaml(&doc).unwrap();
        assert!(!yaml.starts_with("required:") && !yaml.contains("\nrequired:"));
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert!(value.get("required").is_none());
        assert!(value.get("not_required").is_some());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("builder-Config.yml");
        fs::write(&path, "stale: true\n").unwrap();

        write_struct_doc(&path, &sample()).unwrap();

        let back: StructDoc = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("website/data/Config.yml");
        let err = write_struct_doc(&path, &sample()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
