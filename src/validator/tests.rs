//! Tests for the discriminator validator

use super::*;
use crate::diag::{Diagnostics, Severity};
use crate::path::AttributePath;
use crate::value::Value;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn cloud_definition() -> DiscriminatorDefinition {
    DiscriminatorDefinition::new()
        .with_variant(
            "AWS",
            VariantDefinition::new(["aws_specific"], ["aws_specific"]),
        )
        .with_variant(
            "AZURE",
            VariantDefinition::new(["azure_specific"], ["azure_specific"]),
        )
}

fn inner(kind: Value, aws: Value, azure: Value) -> Value {
    Value::object([
        ("type", kind),
        ("aws_specific", aws),
        ("azure_specific", azure),
    ])
}

fn run(config: &Value, path: &AttributePath, value: &Value) -> Diagnostics {
    validate_discriminator(cloud_definition()).validate(config, path, value)
}

fn details(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics.iter().map(|d| d.detail.clone()).collect()
}

// ============================================================================
// Root-level Discriminator
// ============================================================================

#[test_case(
    Value::string("AWS"), Value::Null, Value::Null,
    &[r#""aws_specific" must be set when type is "AWS""#]
    ; "required attribute missing"
)]
#[test_case(
    Value::string("AWS"), Value::string("some-arn"), Value::string("some-url"),
    &[r#""azure_specific" is not allowed when type is "AWS""#]
    ; "disallowed attribute present"
)]
#[test_case(
    Value::string("GCP"), Value::string("some-arn"), Value::string("some-url"),
    &[]
    ; "unmapped discriminator value"
)]
#[test_case(
    Value::Null, Value::Null, Value::Null,
    &[]
    ; "null discriminator"
)]
#[test_case(
    Value::Unknown, Value::string("some-arn"), Value::string("some-url"),
    &[]
    ; "unknown discriminator"
)]
#[test_case(
    Value::string("AWS"), Value::string("arn:aws:iam::role"), Value::Null,
    &[]
    ; "valid configuration"
)]
#[test_case(
    Value::string("AWS"), Value::string("arn:aws:iam::role"), Value::Unknown,
    &[r#""azure_specific" is not allowed when type is "AWS""#]
    ; "unknown disallowed sibling"
)]
#[test_case(
    Value::string("AWS"), Value::Unknown, Value::Null,
    &[]
    ; "unknown required sibling is accepted as set"
)]
#[test_case(
    Value::string("AZURE"), Value::string("some-arn"), Value::Null,
    &[
        r#""aws_specific" is not allowed when type is "AZURE""#,
        r#""azure_specific" must be set when type is "AZURE""#,
    ]
    ; "required missing and disallowed present"
)]
#[test_case(
    Value::string(""), Value::string("some-arn"), Value::string("some-url"),
    &[]
    ; "empty discriminator value"
)]
#[test_case(
    Value::string("aws"), Value::Null, Value::Null,
    &[]
    ; "mapping is case sensitive"
)]
fn test_root_discriminator(kind: Value, aws: Value, azure: Value, expected: &[&str]) {
    let config = inner(kind.clone(), aws, azure);
    let diagnostics = run(&config, &AttributePath::root("type"), &kind);

    assert_eq!(details(&diagnostics), expected);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));
    assert!(diagnostics.iter().all(|d| d.summary == SUMMARY));
}

#[test]
fn test_diagnostics_anchor_at_sibling() {
    let config = inner(
        Value::string("AZURE"),
        Value::string("some-arn"),
        Value::Null,
    );
    let diagnostics = run(&config, &AttributePath::root("type"), &Value::string("AZURE"));

    let paths: Vec<String> = diagnostics
        .iter()
        .map(|d| d.path.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect();
    assert_eq!(paths, ["aws_specific", "azure_specific"]);
}

#[test]
fn test_unrelated_sibling_is_never_checked() {
    let config = Value::object([
        ("type", Value::string("AWS")),
        ("aws_specific", Value::string("arn:aws:iam::role")),
        ("azure_specific", Value::Null),
        ("name", Value::Unknown),
    ]);
    let diagnostics = run(&config, &AttributePath::root("type"), &Value::string("AWS"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_discriminator_value_not_taken_from_config() {
    // The request value wins over whatever sits at the path in the tree.
    let config = inner(Value::string("AZURE"), Value::Null, Value::Null);
    let diagnostics = run(&config, &AttributePath::root("type"), &Value::string("AWS"));
    assert_eq!(
        details(&diagnostics),
        [r#""aws_specific" must be set when type is "AWS""#]
    );
}

#[test]
fn test_non_string_discriminator_is_skipped() {
    let config = inner(Value::number(1), Value::Null, Value::string("x"));
    let diagnostics = run(&config, &AttributePath::root("type"), &Value::number(1));
    assert!(diagnostics.is_empty());
}

// ============================================================================
// Nested Discriminators
// ============================================================================

fn nested_cases() -> Vec<(Value, AttributePath, &'static str)> {
    let element = inner(Value::string("AWS"), Value::Null, Value::Null);
    vec![
        (
            Value::object([("nested", element.clone())]),
            AttributePath::root("nested").at_name("type"),
            "nested.aws_specific",
        ),
        (
            Value::object([("items", Value::list([element.clone()]))]),
            AttributePath::root("items").at_list_index(0).at_name("type"),
            "items[0].aws_specific",
        ),
        (
            Value::object([("items", Value::map([("conn1", element.clone())]))]),
            AttributePath::root("items").at_map_key("conn1").at_name("type"),
            r#"items["conn1"].aws_specific"#,
        ),
        (
            Value::object([("items", Value::set([element.clone()]))]),
            AttributePath::root("items")
                .at_set_value(element.clone())
                .at_name("type"),
            "", // set element paths render the full element value
        ),
    ]
}

#[test]
fn test_nested_discriminator_in_every_container() {
    for (config, path, expected_path) in nested_cases() {
        let diagnostics = run(&config, &path, &Value::string("AWS"));

        assert_eq!(
            details(&diagnostics),
            [r#""aws_specific" must be set when type is "AWS""#],
            "{path}"
        );

        let anchored = diagnostics.iter().next().and_then(|d| d.path.clone());
        let expected = path.parent().at_name("aws_specific");
        assert_eq!(anchored, Some(expected.clone()), "{path}");
        if !expected_path.is_empty() {
            assert_eq!(expected.to_string(), expected_path);
        }
    }
}

#[test]
fn test_list_discriminator_checks_only_its_element() {
    let config = Value::object([(
        "items",
        Value::list([
            inner(Value::string("AWS"), Value::string("arn"), Value::Null),
            inner(Value::string("AWS"), Value::Null, Value::string("url")),
        ]),
    )]);

    let first = AttributePath::root("items").at_list_index(0).at_name("type");
    assert!(run(&config, &first, &Value::string("AWS")).is_empty());

    let second = AttributePath::root("items").at_list_index(1).at_name("type");
    let diagnostics = run(&config, &second, &Value::string("AWS"));
    assert_eq!(
        details(&diagnostics),
        [
            r#""aws_specific" must be set when type is "AWS""#,
            r#""azure_specific" is not allowed when type is "AWS""#,
        ]
    );
    assert_eq!(
        diagnostics.iter().next().and_then(|d| d.path.clone()),
        Some(AttributePath::root("items").at_list_index(1).at_name("aws_specific"))
    );
}

// ============================================================================
// Resolution Gaps
// ============================================================================

#[test]
fn test_missing_sibling_counts_as_null() {
    let config = Value::object([("type", Value::string("AWS"))]);
    let diagnostics = run(&config, &AttributePath::root("type"), &Value::string("AWS"));
    assert_eq!(
        details(&diagnostics),
        [r#""aws_specific" must be set when type is "AWS""#]
    );
}

#[test]
fn test_unresolvable_parent_skips_checks() {
    // `nested` is a string, so no sibling below it can be resolved.
    let config = Value::object([("nested", Value::string("oops"))]);
    let path = AttributePath::root("nested").at_name("type");
    assert!(run(&config, &path, &Value::string("AWS")).is_empty());
}

#[test]
fn test_unknown_parent_counts_siblings_as_set() {
    let config = Value::object([("nested", Value::Unknown)]);
    let path = AttributePath::root("nested").at_name("type");
    let diagnostics = run(&config, &path, &Value::string("AWS"));
    assert_eq!(
        details(&diagnostics),
        [r#""azure_specific" is not allowed when type is "AWS""#]
    );
}

// ============================================================================
// Definitions and the StringValidator Seam
// ============================================================================

#[test]
fn test_checked_attributes_is_union_of_variants() {
    let definition = DiscriminatorDefinition::new()
        .with_variant(
            "Cluster",
            VariantDefinition::new(["cluster_name", "db_role"], ["cluster_name"]),
        )
        .with_variant("Https", VariantDefinition::new(["url", "headers"], [] as [&str; 0]))
        .with_variant("Sample", VariantDefinition::default());

    let checked: Vec<String> = definition.checked_attributes().into_iter().collect();
    assert_eq!(checked, ["cluster_name", "db_role", "headers", "url"]);
}

#[test]
fn test_variant_with_no_allowed_forbids_all_checked() {
    let definition = DiscriminatorDefinition::new()
        .with_variant("Https", VariantDefinition::new(["url"], ["url"]))
        .with_variant("Sample", VariantDefinition::default());
    let config = Value::object([
        ("type", Value::string("Sample")),
        ("url", Value::string("https://example.com")),
    ]);

    let diagnostics = validate_discriminator(definition).validate(
        &config,
        &AttributePath::root("type"),
        &Value::string("Sample"),
    );
    assert_eq!(
        details(&diagnostics),
        [r#""url" is not allowed when type is "Sample""#]
    );
}

#[test]
fn test_validate_string_appends_to_response() {
    let validator = validate_discriminator(cloud_definition());
    let config = inner(Value::string("AWS"), Value::Null, Value::string("url"));
    let path = AttributePath::root("type");
    let value = Value::string("AWS");

    let mut response = StringResponse::default();
    response
        .diagnostics
        .push(crate::diag::Diagnostic::warning("earlier", "kept"));

    validator.validate_string(
        &StringRequest {
            config_value: &value,
            path: &path,
            config: &config,
        },
        &mut response,
    );

    assert_eq!(response.diagnostics.len(), 3);
    assert_eq!(response.diagnostics.error_count(), 2);
}

#[test]
fn test_descriptions() {
    let validator = validate_discriminator(cloud_definition());
    assert_eq!(
        validator.description(),
        "Restricts which sibling attributes may or must be set for each value of: AWS, AZURE"
    );

    let markdown = validator.markdown_description();
    assert!(markdown.contains("- `AWS`: allowed `aws_specific`; required `aws_specific`"));
    assert!(markdown.contains("- `AZURE`: allowed `azure_specific`"));
}

#[test]
fn test_definition_from_yaml() {
    let yaml = r"
mapping:
  AWS:
    allowed: [aws_specific]
    required: [aws_specific]
  AZURE:
    allowed: [azure_specific]
";
    let definition: DiscriminatorDefinition = serde_yaml::from_str(yaml).unwrap();
    assert!(definition.variant("AZURE").unwrap().required.is_empty());
    assert!(definition.variant("AWS").unwrap().requires("aws_specific"));
}

#[test]
fn test_validator_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DiscriminatorValidator>();

    let validator = std::sync::Arc::new(validate_discriminator(cloud_definition()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || {
                let config = inner(Value::string("AWS"), Value::Null, Value::Null);
                validator
                    .validate(&config, &AttributePath::root("type"), &Value::string("AWS"))
                    .len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
