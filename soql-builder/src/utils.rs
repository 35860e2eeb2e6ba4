use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::query::ConditionValue;

/// Turns a Rust value into a SOQL literal.
///
/// Strings are single-quoted and escaped, numbers and booleans stay bare, and
/// arrays become a list value so the builder can switch the operator to `IN`.
/// An array of strings only is a [`ConditionValue::List`], quoted by the
/// builder; any other array is a [`ConditionValue::Literals`] whose items keep
/// their own literal form, e.g. `(1,2)` or `('a',null)`.
pub fn to_value(value: impl Into<Value>) -> ConditionValue {
    match value.into() {
        Value::Array(values) if values.iter().all(Value::is_string) => ConditionValue::List(
            values
                .iter()
                .filter_map(Value::as_str)
                .map(escape)
                .collect(),
        ),
        Value::Array(values) => ConditionValue::Literals(values.iter().map(literal).collect()),
        value => ConditionValue::Single(literal(&value)),
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", escape(s)),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(_) | Value::Array(_) => format!("'{}'", escape(&value.to_string())),
    }
}

/// Backslash-escapes the characters SOQL does not allow raw inside a quoted string.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Maps Rust-flavoured operator tokens onto their SOQL spelling.
pub fn operator(op: &str) -> &str {
    match op {
        "==" => "=",
        "in" => "IN",
        "like" => "LIKE",
        "includes" => "INCLUDES",
        "excludes" => "EXCLUDES",
        op => op,
    }
}

pub fn date_literal(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn datetime_literal(datetime: DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
