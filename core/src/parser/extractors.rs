//! # Extraction Logic
//!
//! High-level functions to parse Go code into IR models.

use crate::error::{AppError, AppResult};
use crate::parser::comments::comment_group_text;
use crate::parser::models::{ParsedField, ParsedStruct};
use tree_sitter::{Language, Node, Parser, Tree};

/// Parses Go source into a syntax tree, failing on the first syntax error.
///
/// `file` only labels diagnostics.
pub fn parse_go_source(code: &str, file: &str) -> AppResult<Tree> {
    let language: Language = tree_sitter_go::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| AppError::General(format!("Failed to load Go grammar: {}", e)))?;

    let tree = parser
        .parse(code, None)
        .ok_or_else(|| AppError::General("tree-sitter parse returned None".to_string()))?;

    let root = tree.root_node();
    if let Some(bad) = first_error(root) {
        let position = bad.start_position();
        let message = if bad.is_missing() {
            format!("missing `{}`", bad.kind())
        } else {
            let snippet = node_text(bad, code).lines().next().unwrap_or_default();
            format!("unexpected `{}`", snippet.trim())
        };
        return Err(syntax_error(file, position.row, position.column, message));
    }

    check_package_clause(root, file)?;
    Ok(tree)
}

/// A Go file must open with its `package` clause (comments aside).
fn check_package_clause(root: Node<'_>, file: &str) -> AppResult<()> {
    let mut cursor = root.walk();
    let first_item = root
        .named_children(&mut cursor)
        .find(|node| node.kind() != "comment");
    match first_item {
        Some(node) if node.kind() == "package_clause" => Ok(()),
        Some(node) => {
            let position = node.start_position();
            Err(syntax_error(
                file,
                position.row,
                position.column,
                "expected 'package' clause".to_string(),
            ))
        }
        None => Err(syntax_error(file, 0, 0, "expected 'package' clause".to_string())),
    }
}

/// Extracts every top-level struct declaration that has at least one field.
pub fn extract_structs(code: &str, file: &str) -> AppResult<Vec<ParsedStruct>> {
    let tree = parse_go_source(code, file)?;
    let root = tree.root_node();
    let mut structs = Vec::new();

    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        if decl.kind() != "type_declaration" {
            continue;
        }
        let mut spec_cursor = decl.walk();
        for spec in decl.named_children(&mut spec_cursor) {
            if let Some(parsed) = parse_type_spec(spec, code) {
                structs.push(parsed);
            }
        }
    }

    Ok(structs)
}

fn parse_type_spec(spec: Node<'_>, code: &str) -> Option<ParsedStruct> {
    if spec.kind() != "type_spec" {
        return None;
    }
    let name = spec.child_by_field_name("name")?;
    let ty = spec.child_by_field_name("type")?;
    if ty.kind() != "struct_type" {
        return None;
    }

    let mut cursor = ty.walk();
    let field_list = ty
        .named_children(&mut cursor)
        .find(|n| n.kind() == "field_declaration_list")?;

    let fields = parse_field_list(field_list, code);
    if fields.is_empty() {
        return None;
    }

    Some(ParsedStruct {
        name: node_text(name, code).to_string(),
        fields,
        line: spec.start_position().row + 1,
    })
}

/// Walks a `{ ... }` field list, pairing each field with the comment group
/// that ends on the line right above it.
fn parse_field_list(list: Node<'_>, code: &str) -> Vec<ParsedField> {
    let mut fields = Vec::new();
    let mut group: Vec<Node<'_>> = Vec::new();
    // Row of the last token before the pending comments: `{` or a field.
    let mut previous_row = list.start_position().row;

    let mut cursor = list.walk();
    for child in list.named_children(&mut cursor) {
        match child.kind() {
            "comment" => {
                if child.start_position().row == previous_row {
                    // Trailing comment of the previous line.
                    group.clear();
                    continue;
                }
                let adjacent = group
                    .last()
                    .map_or(true, |last| child.start_position().row <= last.end_position().row + 1);
                if !adjacent {
                    group.clear();
                }
                group.push(child);
            }
            "field_declaration" => {
                let row = child.start_position().row;
                let doc = match group.last() {
                    Some(last) if last.end_position().row + 1 == row => {
                        let texts: Vec<&str> = group.iter().map(|c| node_text(*c, code)).collect();
                        Some(comment_group_text(&texts))
                    }
                    _ => None,
                };
                group.clear();
                previous_row = child.end_position().row;
                fields.push(parse_field(child, code, doc));
            }
            _ => {}
        }
    }

    fields
}

fn parse_field(field: Node<'_>, code: &str, doc: Option<String>) -> ParsedField {
    let mut cursor = field.walk();
    let names = field
        .children_by_field_name("name", &mut cursor)
        .map(|n| node_text(n, code).to_string())
        .collect();

    ParsedField {
        names,
        ty: field
            .child_by_field_name("type")
            .map(|t| node_text(t, code).to_string())
            .unwrap_or_default(),
        tag: field
            .child_by_field_name("tag")
            .map(|t| node_text(t, code).to_string()),
        doc,
        line: field.start_position().row + 1,
    }
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn node_text<'a>(node: Node<'_>, code: &'a str) -> &'a str {
    code.get(node.byte_range()).unwrap_or_default()
}

fn syntax_error(file: &str, row: usize, column: usize, message: String) -> AppError {
    AppError::Syntax {
        file: file.to_string(),
        line: row + 1,
        column: column + 1,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONFIG_GO: &str = r#"package ebs

import "time"

//go:generate struct-markdown

// Config is the builder configuration.
type Config struct {
	// The name of the resulting AMI.
	AMIName string `mapstructure:"ami_name" required:"true"`
	Tags    map[string]string `mapstructure:"tags"`
	Timeout time.Duration // trailing comment

	BlockDevices []*BlockDevice `mapstructure:"block_devices"`
	ctx          interpolateContext
}

type Alias = Config

type Runner interface {
	Run() error
}

func (c *Config) Prepare() error {
	return nil
}
"#;

    #[test]
    fn test_extract_struct_fields() {
        let structs = extract_structs(CONFIG_GO, "config.go").unwrap();
        assert_eq!(structs.len(), 1);

        let config = &structs[0];
        assert_eq!(config.name, "Config");
        assert_eq!(config.line, 8);
        assert_eq!(config.fields.len(), 5);

        let ami = &config.fields[0];
        assert_eq!(ami.names, vec!["AMIName".to_string()]);
        assert_eq!(ami.ty, "string");
        assert_eq!(
            ami.tag.as_deref(),
            Some(r#"`mapstructure:"ami_name" required:"true"`"#)
        );
        assert_eq!(ami.doc.as_deref(), Some("The name of the resulting AMI.\n"));
        assert_eq!(ami.line, 10);

        assert_eq!(config.fields[1].ty, "map[string]string");
        assert_eq!(config.fields[1].doc, None);

        let timeout = &config.fields[2];
        assert_eq!(timeout.ty, "time.Duration");
        assert_eq!(timeout.tag, None);

        // The trailing comment on `Timeout` does not document the next field.
        let devices = &config.fields[3];
        assert_eq!(devices.ty, "[]*BlockDevice");
        assert_eq!(devices.doc, None);

        assert_eq!(config.fields[4].primary_name(), Some("ctx"));
    }

    #[test]
    fn test_grouped_type_declarations() {
        let code = r#"package p

type (
	First struct {
		A int `mapstructure:"a"`
	}
	NotAStruct int
	Second struct {
		B string
	}
)
"#;
        let names: Vec<String> = extract_structs(code, "p.go")
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_empty_structs_are_skipped() {
        let code = "package p\n\ntype Empty struct{}\n\ntype Marker struct {\n}\n";
        assert!(extract_structs(code, "p.go").unwrap().is_empty());
    }

    #[test]
    fn test_embedded_and_multi_name_fields() {
        let code = r#"package p

type Outer struct {
	Inner
	*Other `mapstructure:",squash"`
	X, Y int `mapstructure:"xy"`
}
"#;
        let structs = extract_structs(code, "p.go").unwrap();
        let fields = &structs[0].fields;
        assert_eq!(fields.len(), 3);
        assert!(fields[0].is_embedded());
        assert!(fields[1].is_embedded());
        assert_eq!(fields[1].tag.as_deref(), Some(r#"`mapstructure:",squash"`"#));
        assert_eq!(fields[2].names, vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(fields[2].ty, "int");
    }

    #[test]
    fn test_comment_separated_by_blank_line_is_not_doc() {
        let code = r#"package p

type S struct {
	// Detached note.

	A int `mapstructure:"a"`
	/* Block doc. */
	B int `mapstructure:"b"`
}
"#;
        let structs = extract_structs(code, "p.go").unwrap();
        assert_eq!(structs[0].fields[0].doc, None);
        assert_eq!(structs[0].fields[1].doc.as_deref(), Some(" Block doc.\n"));
    }

    #[test]
    fn test_comment_on_opening_brace_line_is_not_doc() {
        let code = "package p\n\ntype S struct { // header\n\tA int `mapstructure:\"a\"`\n}\n";
        let structs = extract_structs(code, "p.go").unwrap();
        assert_eq!(structs[0].fields[0].doc, None);
    }

    #[test]
    fn test_interpreted_tag_literal_kept_verbatim() {
        let code = "package p\n\ntype S struct {\n\tA int \"mapstructure:\\\"a\\\"\"\n}\n";
        let structs = extract_structs(code, "p.go").unwrap();
        assert_eq!(
            structs[0].fields[0].tag.as_deref(),
            Some(r#""mapstructure:\"a\"""#)
        );
    }

    #[test]
    fn test_nested_struct_type_is_rendered_verbatim() {
        let code = "package p\n\ntype S struct {\n\tInner struct {\n\t\tX int\n\t} `mapstructure:\"inner\"`\n}\n";
        let structs = extract_structs(code, "p.go").unwrap();
        assert_eq!(structs.len(), 1);
        assert_eq!(structs[0].fields[0].ty, "struct {\n\t\tX int\n\t}");
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let code = "package p\n\ntype S struct {\n\tA int `mapstructure:\"a\"`\n";
        let err = extract_structs(code, "broken.go").unwrap_err();
        match err {
            AppError::Syntax { file, line, .. } => {
                assert_eq!(file, "broken.go");
                assert!(line >= 1);
            }
            other => panic!("expected syntax error, got {}", other),
        }
    }

    #[test]
    fn test_missing_package_clause_is_fatal() {
        let err = extract_structs("type S struct { A int }\n", "nopkg.go").unwrap_err();
        assert!(err.to_string().contains("expected 'package' clause"));
        assert!(matches!(err, AppError::Syntax { line: 1, column: 1, .. }));
    }
}
