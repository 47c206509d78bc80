use crate::config::{ModuleSchema, read};
use crate::test_utils::init_test_logging;
use crate::values::Value;
use crate::variables::{MetaSlot, Metadata, VariableTable};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn table(source: &str) -> VariableTable {
    VariableTable::build_from_sources(&[("main.tf", source)], Metadata::default()).unwrap()
}

#[test]
fn test_defaults_are_decoded() {
    init_test_logging();
    let table = table(indoc! {r#"
        variable "name" {
            default = "test"
        }
        variable "count" {
            default = 1
        }
        variable "names" {
            default = ["a", "b"]
        }
        variable "tags" {
            default = {
                key = "test1"
                value = "test2"
            }
        }
    "#});

    assert_eq!(table.len(), 4);
    assert_eq!(table.lookup("name"), Value::from("test"));
    assert_eq!(table.lookup("count"), Value::Num(1.0));
    assert_eq!(
        table.lookup("names"),
        Value::list([Value::from("a"), Value::from("b")])
    );
    assert_eq!(
        table.lookup("tags"),
        Value::map([("key", Value::from("test1")), ("value", Value::from("test2"))])
    );
}

#[test]
fn test_missing_default_is_absent() {
    let table = table(r#"variable "name" {}"#);
    assert!(table.is_declared("name"));
    assert_eq!(table.lookup("name"), Value::Absent);
    assert_eq!(table.lookup("undeclared"), Value::Absent);
    assert!(!table.is_declared("undeclared"));
}

#[test]
fn test_declared_type_does_not_gate_decoding() {
    let table = table(indoc! {r#"
        variable "name" {
            type = "list"
            default = "not a list"
        }
    "#});
    assert_eq!(table.lookup("name"), Value::from("not a list"));
}

#[test]
fn test_default_block_form() {
    let table = table(indoc! {r#"
        variable "amis" {
            default {
                us-east-1 = "ami-123"
                eu-west-1 = "ami-456"
            }
        }
    "#});
    assert_eq!(
        table.lookup("amis"),
        Value::map([
            ("eu-west-1", Value::from("ami-456")),
            ("us-east-1", Value::from("ami-123")),
        ])
    );
}

#[test]
fn test_last_declaration_wins_across_files() {
    let table = VariableTable::build_from_sources(
        &[
            ("b.tf", r#"variable "name" { default = "from b" }"#),
            ("a.tf", r#"variable "name" { default = "from a" }"#),
        ],
        Metadata::default(),
    )
    .unwrap();
    assert_eq!(table.lookup("name"), Value::from("from b"));
    assert_eq!(table.names(), vec!["name"]);
}

#[test]
fn test_metadata_is_copied_verbatim() {
    let table = VariableTable::build_from_sources(
        &[],
        Metadata::default().with_environment("dev"),
    )
    .unwrap();
    assert!(table.is_empty());
    assert_eq!(table.meta(MetaSlot::Environment), Value::from("dev"));
    assert_eq!(table.meta(MetaSlot::Workspace), Value::from(""));
    assert_eq!(table.metadata().environment, "dev");
}

#[test]
fn test_bool_default_is_malformed() {
    let err = VariableTable::build_from_sources(
        &[("main.tf", r#"variable "enabled" { default = true }"#)],
        Metadata::default(),
    )
    .unwrap_err();
    assert_eq!(err.file, "main.tf");
    assert_eq!(err.message, "variable \"enabled\": unsupported bool literal");
}

#[test]
fn test_label_count_is_checked() {
    let err = VariableTable::build_from_sources(
        &[("main.tf", r#"variable "a" "b" {}"#)],
        Metadata::default(),
    )
    .unwrap_err();
    assert!(err.message.contains("exactly one label"), "{}", err);
}

#[test]
fn test_read_failure_is_malformed() {
    let err = VariableTable::build_from_sources(
        &[("broken.tf", r#"variable "name" {"#)],
        Metadata::default(),
    )
    .unwrap_err();
    assert_eq!(err.file, "broken.tf");
    assert!(err.span.is_some());
}

#[test]
fn test_overrides_replace_declared_values() {
    init_test_logging();
    let mut files = BTreeMap::new();
    files.insert(
        "main.tf".to_string(),
        read(indoc! {r#"
            variable "region" { default = "us-east-1" }
            variable "size" {}
        "#})
        .unwrap(),
    );
    let overrides = vec![
        read(r#"region = "eu-west-1""#).unwrap(),
        read(indoc! {r#"
            size = 3
            undeclared = "ignored"
        "#})
        .unwrap(),
    ];

    let table = VariableTable::build(&files, &[], &overrides, Metadata::default()).unwrap();
    assert_eq!(table.lookup("region"), Value::from("eu-west-1"));
    assert_eq!(table.lookup("size"), Value::Num(3.0));
    assert!(!table.is_declared("undeclared"));
}

#[test]
fn test_override_with_bool_is_malformed() {
    let mut files = BTreeMap::new();
    files.insert(
        "main.tf".to_string(),
        read(r#"variable "enabled" {}"#).unwrap(),
    );
    let overrides = vec![read("enabled = false").unwrap()];
    let err = VariableTable::build(&files, &[], &overrides, Metadata::default()).unwrap_err();
    assert_eq!(err.file, "override #0");
}

#[test]
fn test_schemas_are_ignored() {
    let mut module_files = BTreeMap::new();
    module_files.insert(
        "vars.tf".to_string(),
        read(r#"variable "inner" { default = "x" }"#).unwrap(),
    );
    let schemas = vec![ModuleSchema {
        name: "vpc".to_string(),
        source: "./vpc".to_string(),
        files: module_files,
    }];

    let table = VariableTable::build(&BTreeMap::new(), &schemas, &[], Metadata::default()).unwrap();
    assert!(!table.is_declared("inner"));
}

#[test]
fn test_meta_slot_names() {
    for slot in [MetaSlot::Environment, MetaSlot::Workspace] {
        assert_eq!(MetaSlot::from_name(slot.name()), Some(slot));
    }
    assert_eq!(MetaSlot::Environment.name(), "env");
    assert_eq!(MetaSlot::from_name("region"), None);
}
