#[macro_use]
mod cases;

use tfeval::{Error, Value};

test_case!(
    conditional_true_branch,
    input: r#"${var.env == "prod" ? "production" : "development"}"#,
    value: Value::from("production"),
);

test_case!(
    conditional_false_branch,
    input: r#"${var.stage == "prod" ? "production" : "development"}"#,
    value: Value::from("development"),
);

test_case!(
    conditional_compares_stringified_values,
    input: r#"${var.count == "1" ? "one" : "many"}"#,
    value: Value::from("one"),
);

test_case!(
    conditional_with_metadata,
    input: r#"${terraform.workspace == "dev" ? var.names[0] : var.names[1]}"#,
    value: Value::from("test1"),
);

test_case!(
    conditional_keeps_branch_type,
    input: r#"${var.env == "prod" ? var.names : var.tags}"#,
    value: Value::list([Value::from("test1"), Value::from("test2")]),
);

test_case!(
    conditional_inside_text,
    input: r#"app-${var.env == "prod" ? "p" : "d"}-01"#,
    value: Value::from("app-p-01"),
);

test_case!(
    nested_conditional,
    input: r#"${var.stage == "prod" ? "p" : var.stage == "qa" ? "q" : "d"}"#,
    value: Value::from("q"),
);

test_case!(
    untaken_branch_is_not_evaluated,
    input: r#"${var.env == "prod" ? "ok" : var.names[99]}"#,
    value: Value::from("ok"),
);

test_case!(
    taken_branch_errors_surface,
    input: r#"${var.env == "prod" ? var.names[99] : "ok"}"#,
    error: Error::Index { index: 99, .. },
);

test_case!(
    inequality_is_unsupported,
    input: r#"${var.env != "prod" ? "a" : "b"}"#,
    error: Error::UnsupportedSyntax { .. },
);
