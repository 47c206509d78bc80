//! Literal decoding: configuration literal nodes to [`Value`]s.

use crate::config::Literal;
use crate::values::Value;
use thiserror::Error;

/// A literal form the decoder does not accept.
///
/// Only strings, numbers, sequences and key/value blocks can be decoded;
/// callers reject everything else before treating the literal as a default.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unsupported {kind} literal")]
pub struct UnsupportedLiteral {
    pub kind: &'static str,
}

/// Decode a literal node.
///
/// Sequence order is preserved and duplicate block keys resolve to the last
/// value written. Numbers stay numbers; they are only turned into text when a
/// value is stringified.
pub fn decode(literal: &Literal) -> Result<Value, UnsupportedLiteral> {
    match literal {
        Literal::Str(s) => Ok(Value::Str(s.clone())),
        Literal::Number(n) => Ok(Value::Num(*n)),
        Literal::List(items) => items
            .iter()
            .map(decode)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        Literal::Object(entries) => {
            let mut map = std::collections::BTreeMap::new();
            for (key, value) in entries {
                map.insert(key.clone(), decode(value)?);
            }
            Ok(Value::Map(map))
        }
        Literal::Bool(_) => Err(UnsupportedLiteral { kind: "bool" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_scalars() {
        assert_eq!(decode(&Literal::Str("test".into())), Ok(Value::from("test")));
        assert_eq!(decode(&Literal::Number(1.0)), Ok(Value::Num(1.0)));
    }

    #[test]
    fn test_decode_list_preserves_order() {
        let literal = Literal::List(vec![
            Literal::Str("test2".into()),
            Literal::Str("test1".into()),
        ]);
        assert_eq!(
            decode(&literal),
            Ok(Value::list([Value::from("test2"), Value::from("test1")]))
        );
    }

    #[test]
    fn test_decode_object_last_key_wins() {
        let literal = Literal::Object(vec![
            ("key".into(), Literal::Str("first".into())),
            ("value".into(), Literal::Number(2.0)),
            ("key".into(), Literal::Str("second".into())),
        ]);
        assert_eq!(
            decode(&literal),
            Ok(Value::map([
                ("key", Value::from("second")),
                ("value", Value::Num(2.0)),
            ]))
        );
    }

    #[test]
    fn test_decode_rejects_nested_bool() {
        let literal = Literal::List(vec![Literal::Str("a".into()), Literal::Bool(true)]);
        assert_eq!(decode(&literal), Err(UnsupportedLiteral { kind: "bool" }));
    }
}
