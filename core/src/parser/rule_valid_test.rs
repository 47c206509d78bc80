// Tests with valid expressions for each rule in the parser.

use crate::parser::{ExpressionParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

fn contains_rule(pair: Pair<Rule>, target: Rule) -> bool {
    if pair.as_rule() == target {
        return true;
    }
    for inner in pair.into_inner() {
        if contains_rule(inner, target) {
            return true;
        }
    }
    false
}

macro_rules! rule_examples {
    ( $($rule:ident => [$($expr:expr),* $(,)?]),* $(,)? ) => {
        $(
            #[test]
            fn $rule() {
                let inputs = vec![$($expr),*];
                for input in inputs {
                    let result = ExpressionParser::parse(Rule::main, input)
                        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
                    let root = result.into_iter().next().unwrap();
                    assert!(
                        contains_rule(root.clone(), Rule::$rule),
                        "Expected to find rule {:?} in parse tree for input '{}'",
                        Rule::$rule,
                        input
                    );
                }
            }
        )*
    };
}

rule_examples! {
    number => ["1", "42", "3.14", "1e3", "2.5E-2", "0x1F"],
    string => ["\"hello\"", "\"\"", "\"say \\\"hi\\\"\"", "\"unicode: \\u0041\"", "\"a}b\""],
    boolean => ["true", "false"],
    path => ["var.name", "terraform.env", "aws_subnet.app.*.id", "module.vpc.id", "count.index", "my-var"],
    ident => ["foo", "_bar123", "with-dash"],
    attr => ["var.name", "a.*", "a.0"],
    call => ["foo()", "lookup(var.m, \"k\")", "join(\",\", var.list,)"],
    grouped => ["(1)", "(var.a)"],
    list => ["[]", "[1]", "[1, \"a\", var.b]", "[a, b,]"],
    map => ["{}", "{a = 1}", "{\"k\" = \"v\", b: 2,}", "{a = 1 b = 2}"],
    map_entry => ["{a = 1}", "{\"quoted\": 1}"],
    cond_op => ["a ? b : c", "var.env == \"prod\" ? 5 : 1", "a ? b : c ? d : e"],
    or => ["a || b"],
    and => ["a && b"],
    eq => ["a == b"],
    neq => ["a != b"],
    lt => ["a < b"],
    gt => ["a > b"],
    le => ["a <= b"],
    ge => ["a >= b"],
    add => ["1 + 2", "a + (b + c)"],
    sub => ["1 - 2", "a - b"],
    mul => ["1 * 2", "a * (b + c)"],
    div => ["1 / 2"],
    rem => ["5 % 2"],
    index_op => ["var.list[0]", "var.m[\"key\"]", "var.m[\"a\"][1]", "[1, 2][0]"],
    neg => ["- 1", "-a"],
    not => ["!true", "!!x"],
}

#[test]
fn rejects_nested_interpolation_in_strings() {
    assert!(ExpressionParser::parse(Rule::main, "\"${var.a}\"").is_err());
}

#[test]
fn rejects_trailing_tokens() {
    assert!(ExpressionParser::parse(Rule::main, "var.a var.b").is_err());
    assert!(ExpressionParser::parse(Rule::main, "").is_err());
}
