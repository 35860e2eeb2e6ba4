use serde::{Deserialize, Serialize};

/// A single `field operator value` triple of a WHERE clause.
///
/// Nothing here is validated or quoted: the value is rendered exactly as it was
/// stored, so literals must already carry whatever quoting SOQL expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}

/// Right-hand side of a condition before it is stored.
///
/// `Single` is kept verbatim. `List` is collapsed into `('a','b',...)` when the
/// condition is added, see [`SelectQuery::add_condition_with`]. `Literals`
/// holds items that already are SOQL literals and is collapsed into `(1,null)`.
/// Both list forms switch a `=` operator to `IN`.
///
/// [`SelectQuery::add_condition_with`]: super::builder::SelectQuery::add_condition_with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    Single(String),
    List(Vec<String>),
    Literals(Vec<String>),
}

impl ConditionValue {
    /// Collapses the value into the literal stored on the condition.
    pub fn into_literal(self) -> String {
        match self {
            ConditionValue::Single(value) => value,
            ConditionValue::List(values) => format!("('{}')", values.join("','")),
            ConditionValue::Literals(values) => format!("({})", values.join(",")),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ConditionValue::List(_) | ConditionValue::Literals(_))
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        ConditionValue::Single(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        ConditionValue::Single(value)
    }
}

impl From<&String> for ConditionValue {
    fn from(value: &String) -> Self {
        ConditionValue::Single(value.clone())
    }
}

impl From<Vec<String>> for ConditionValue {
    fn from(values: Vec<String>) -> Self {
        ConditionValue::List(values)
    }
}

impl From<Vec<&str>> for ConditionValue {
    fn from(values: Vec<&str>) -> Self {
        ConditionValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ConditionValue {
    fn from(values: &[&str]) -> Self {
        ConditionValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ConditionValue {
    fn from(values: [&str; N]) -> Self {
        ConditionValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}
