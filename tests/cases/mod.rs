#![allow(dead_code)]

use indoc::indoc;
use once_cell::sync::Lazy;
use tfeval::{Engine, Metadata, VariableTable};

/// Declarations shared by the topic tests.
pub const DECLARATIONS: &str = indoc! {r#"
    variable "text" {
        default = "test"
    }

    variable "count" {
        type = "string"
        default = 1
    }

    variable "names" {
        type = "list"
        default = ["test1", "test2"]
    }

    variable "tags" {
        type = "map"
        default = {
            key = "test1"
            value = "test2"
        }
    }

    variable "untyped_list" {
        default = ["test1", "test2"]
    }

    variable "env" {
        default = "prod"
    }

    variable "stage" {
        default = "qa"
    }

    variable "no_default" {}
"#};

pub static TABLE: Lazy<VariableTable> = Lazy::new(|| {
    VariableTable::build_from_sources(
        &[("variables.tf", DECLARATIONS)],
        Metadata::new("dev", "dev"),
    )
    .expect("shared declarations should build")
});

pub static ENGINE: Lazy<Engine> = Lazy::new(|| Engine::new(TABLE.clone()));

/// Evaluate `input` against the shared engine and check the outcome.
///
/// `value:` expects a successful evaluation (and therefore an evaluable
/// input); `error:` expects evaluation to fail with a matching error.
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let engine = &*crate::cases::ENGINE;
            let input = $input;
            assert!(
                engine.is_evaluable(input),
                "expected {:?} to be evaluable",
                input
            );
            pretty_assertions::assert_eq!(engine.eval(input), Ok($value));
        }
    };
    ($name:ident, input: $input:expr, error: $error:pat $(,)?) => {
        #[test]
        fn $name() {
            let engine = &*crate::cases::ENGINE;
            let input = $input;
            let result = engine.eval(input);
            assert!(
                matches!(result, Err($error)),
                "unexpected result for {:?}: {:?}",
                input,
                result
            );
        }
    };
}
