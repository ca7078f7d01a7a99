//! Tests for YAML loader module

use super::*;
use crate::schema::AttributeType;
use crate::validator::VariantDefinition;
use std::fs;
use tempfile::TempDir;
use test_case::test_case;

// ============================================================================
// Basic Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_schema() {
    let yaml = r#"
name: minimal
attributes:
  id: { type: string }
"#;

    let schema = load_schema_from_str(yaml).unwrap();
    assert_eq!(schema.name, "minimal");
    assert_eq!(schema.description, None);
    assert_eq!(schema.root.attributes["id"], AttributeType::String);
    assert!(schema.root.discriminator.is_none());
}

#[test]
fn test_load_schema_with_discriminator() {
    let yaml = r#"
name: provider
description: Cloud provider settings
attributes:
  type: { type: string }
  aws_specific: { type: string }
  azure_specific: { type: string }
discriminator:
  property_name: type
  mapping:
    AWS:
      allowed: [aws_specific]
      required: [aws_specific]
    AZURE:
      allowed: [azure_specific]
"#;

    let schema = load_schema_from_str(yaml).unwrap();
    assert_eq!(schema.description.as_deref(), Some("Cloud provider settings"));

    let discriminator = schema.root.discriminator.unwrap();
    assert_eq!(discriminator.property_name, "type");
    assert!(!discriminator.skip_validation);
    assert_eq!(
        discriminator.mapping["AWS"],
        VariantDefinition::new(["aws_specific"], ["aws_specific"])
    );
    assert_eq!(
        discriminator.mapping["AZURE"],
        VariantDefinition::new(["azure_specific"], Vec::<String>::new())
    );
}

#[test]
fn test_load_variant_defaults_to_empty_lists() {
    let yaml = r#"
name: sample
attributes:
  type: { type: string }
discriminator:
  property_name: type
  mapping:
    Sample: {}
"#;

    let schema = load_schema_from_str(yaml).unwrap();
    let variant = &schema.root.discriminator.unwrap().mapping["Sample"];
    assert!(variant.allowed.is_empty());
    assert!(variant.required.is_empty());
}

#[test]
fn test_load_nested_collection_types() {
    let yaml = r#"
name: nested
attributes:
  tags:
    type: map
    element: { type: string }
  rules:
    type: list
    element:
      type: object
      attributes:
        kind: { type: string }
        ports:
          type: set
          element: { type: number }
"#;

    let schema = load_schema_from_str(yaml).unwrap();
    assert_eq!(
        schema.root.attributes["tags"],
        AttributeType::map(AttributeType::String)
    );
    let AttributeType::List { element } = &schema.root.attributes["rules"] else {
        panic!("rules should be a list");
    };
    let AttributeType::Object(rule) = element.as_ref() else {
        panic!("rules element should be an object");
    };
    assert_eq!(
        rule.attributes["ports"],
        AttributeType::set(AttributeType::Number)
    );
}

#[test]
fn test_load_skip_validation() {
    let yaml = r#"
name: relaxed
attributes:
  type: { type: string }
discriminator:
  property_name: type
  skip_validation: true
  mapping: {}
"#;

    let schema = load_schema_from_str(yaml).unwrap();
    assert!(schema.root.discriminator.unwrap().skip_validation);
}

// ============================================================================
// Validation Tests
// ============================================================================

fn load_err(yaml: &str) -> String {
    load_schema_from_str(yaml).unwrap_err().to_string()
}

#[test]
fn test_validation_empty_name() {
    let yaml = r#"
name: ""
attributes:
  id: { type: string }
"#;

    assert!(load_err(yaml).contains("name cannot be empty"));
}

#[test]
fn test_validation_malformed_yaml() {
    assert!(load_err("name: [unclosed").contains("Failed to parse schema YAML"));
}

#[test]
fn test_validation_unknown_attribute_type() {
    let yaml = r#"
name: bad
attributes:
  id: { type: uuid }
"#;

    assert!(load_err(yaml).contains("Failed to parse schema YAML"));
}

#[test_case("alowed: [a]" ; "misspelled allowed")]
#[test_case("requried: [a]" ; "misspelled required")]
fn test_validation_unknown_variant_key(variant: &str) {
    let yaml = format!(
        r#"
name: typo
attributes:
  type: {{ type: string }}
  a: {{ type: string }}
discriminator:
  property_name: type
  mapping:
    X:
      {variant}
"#
    );

    let err = load_err(&yaml);
    assert!(err.contains("Failed to parse schema YAML"), "{err}");
    assert!(err.contains("unknown field"), "{err}");
}

#[test]
fn test_validation_unknown_discriminator_key() {
    let yaml = r#"
name: typo
attributes:
  type: { type: string }
discriminator:
  property_name: type
  skip_validaton: true
  mapping: {}
"#;

    let err = load_err(yaml);
    assert!(err.contains("unknown field `skip_validaton`"), "{err}");
}

#[test]
fn test_validation_undeclared_discriminator() {
    let yaml = r#"
name: bad
attributes:
  kind: { type: string }
discriminator:
  property_name: type
  mapping: {}
"#;

    let err = load_err(yaml);
    assert!(err.contains("Invalid schema 'bad'"));
    assert!(err.contains("discriminator 'type' at root is not a declared attribute"));
}

#[test]
fn test_validation_non_string_discriminator() {
    let yaml = r#"
name: bad
attributes:
  type: { type: number }
discriminator:
  property_name: type
  mapping: {}
"#;

    assert!(load_err(yaml).contains("must be a string attribute, found number"));
}

#[test]
fn test_validation_undeclared_sibling() {
    let yaml = r#"
name: bad
attributes:
  type: { type: string }
discriminator:
  property_name: type
  mapping:
    AWS:
      allowed: [aws_specific]
"#;

    assert!(load_err(yaml).contains("variant 'AWS' at root references undeclared attribute 'aws_specific'"));
}

#[test]
fn test_validation_required_not_allowed() {
    let yaml = r#"
name: bad
attributes:
  type: { type: string }
  a: { type: string }
  b: { type: string }
discriminator:
  property_name: type
  mapping:
    X:
      allowed: [a]
      required: [a, b]
"#;

    assert!(load_err(yaml).contains("variant 'X' at root requires 'b' but does not allow it"));
}

#[test]
fn test_validation_self_reference() {
    let yaml = r#"
name: bad
attributes:
  type: { type: string }
discriminator:
  property_name: type
  mapping:
    X:
      allowed: [type]
"#;

    assert!(load_err(yaml).contains("cannot reference the discriminator itself"));
}

#[test]
fn test_validation_empty_mapping_value() {
    let yaml = r#"
name: bad
attributes:
  type: { type: string }
discriminator:
  property_name: type
  mapping:
    "": {}
"#;

    assert!(load_err(yaml).contains("has an empty mapping value"));
}

#[test]
fn test_validation_reports_nested_location() {
    let yaml = r#"
name: bad
attributes:
  rules:
    type: list
    element:
      type: object
      attributes:
        kind: { type: string }
      discriminator:
        property_name: kind
        mapping:
          A:
            allowed: [missing]
"#;

    assert!(load_err(yaml).contains("variant 'A' at 'rules[*]' references undeclared attribute 'missing'"));
}

// ============================================================================
// File and Built-in Loading Tests
// ============================================================================

#[test]
fn test_load_builtin_by_name() {
    let schema = load_schema("stream_connection").unwrap();
    assert_eq!(schema.name, "stream_connection");
    assert!(schema.root.discriminator.is_some());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");
    fs::write(
        &path,
        "name: custom\nattributes:\n  id: { type: string }\n",
    )
    .unwrap();

    let schema = load_schema(&path).unwrap();
    assert_eq!(schema.name, "custom");
}

#[test]
fn test_load_missing_lists_builtins() {
    let err = load_schema("no_such_schema").unwrap_err().to_string();
    assert!(err.contains("Schema 'no_such_schema' not found"));
    assert!(err.contains("alert_configuration, stream_connection, third_party_integration"));
}

#[test]
fn test_load_schemas_from_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("one.yaml"),
        "name: one\nattributes:\n  id: { type: string }\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("two.yml"),
        "name: two\nattributes:\n  id: { type: string }\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();

    let schemas = load_schemas_from_dir(dir.path()).unwrap();
    assert_eq!(schemas.keys().collect::<Vec<_>>(), ["one", "two"]);
}

#[test]
fn test_load_schemas_from_dir_duplicate_name() {
    let dir = TempDir::new().unwrap();
    for file in ["a.yaml", "b.yaml"] {
        fs::write(
            dir.path().join(file),
            "name: same\nattributes:\n  id: { type: string }\n",
        )
        .unwrap();
    }

    let err = load_schemas_from_dir(dir.path()).unwrap_err().to_string();
    assert!(err.contains("Duplicate schema name 'same'"));
}
