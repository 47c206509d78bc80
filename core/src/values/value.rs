use crate::syntax::escape_string;
use std::collections::BTreeMap;
use std::fmt;

/// A statically known interpolation result.
///
/// `Absent` is "no data": an undeclared variable, a variable without a
/// default, or an index whose target is missing. It is distinct from the
/// empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Str(String),
    Num(f64),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    #[default]
    Absent,
}

impl Value {
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Name of the variant, for log and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Num(_) => "number",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Absent => "absent",
        }
    }

    /// Collapse to an `Option`, mapping `Absent` to `None`.
    pub fn into_option(self) -> Option<Value> {
        match self {
            Value::Absent => None,
            value => Some(value),
        }
    }

    // Nested elements are written in literal form so that `["a"]` and `[a]`
    // remain distinguishable once stringified.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "\"{}\"", escape_string(s)),
            other => write!(f, "{}", other),
        }
    }
}

/// Stringification used for concatenation and conditional comparison.
///
/// `Str` is written verbatim, `Num` in canonical decimal form, `List` and
/// `Map` in HCL-like literal form and `Absent` as the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Num(n) => format_number(f, *n),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} = ", key)?;
                    value.fmt_nested(f)?;
                }
                write!(f, "}}")
            }
            Value::Absent => Ok(()),
        }
    }
}

// Integral numbers print without a fractional part; everything else uses the
// shortest representation that round-trips.
fn format_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 {
        // Avoid "-0".
        write!(f, "0")
    } else {
        write!(f, "{}", value)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Num(n as f64)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}
