use indexmap::IndexMap;
use serde::Serialize;

use super::condition::{Condition, ConditionValue};
use crate::sobject::SObject;

/// A SOQL `SELECT` query under construction.
///
/// `fields`, `order`, `limit` and `offset` are plain data the caller is free to
/// mutate. Conditions only grow through [`SelectQuery::add_condition`] and
/// [`SelectQuery::add_condition_with`]. Nothing is validated: the rendered
/// string is only as correct as what was put in. The query serializes for
/// logging but does not deserialize, which would bypass `add_condition`.
///
/// # Example
///
/// ```
/// use soql_builder::prelude::*;
///
/// let mut query = SelectQuery::new("Contact");
/// query.fields = vec!["Id".into(), "Name".into()];
/// query.add_condition("Name", "'Smith'");
/// query.order.insert("Name".into(), "ASC".into());
/// query.limit = Some(10);
/// query.offset = Some(5);
///
/// assert_eq!(
///     query.render(),
///     "SELECT Id, Name FROM Contact WHERE Name = 'Smith' ORDER BY Name ASC LIMIT 10 OFFSET 5"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectQuery {
    object_type: String,
    pub fields: Vec<String>,
    conditions: Vec<Condition>,
    pub order: IndexMap<String, String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl SelectQuery {
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            ..Default::default()
        }
    }

    /// Starts a query over `T`, selecting every field the type declares.
    pub fn of<T: SObject>() -> Self {
        Self::new(T::NAME).select(T::FIELDS.iter().copied())
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Adds a condition using the default `=` operator.
    pub fn add_condition(&mut self, field: impl Into<String>, value: impl Into<ConditionValue>) {
        self.add_condition_with(field, value, "=");
    }

    /// Adds a condition.
    ///
    /// A list value becomes `('v1','v2',...)`; its elements are quoted but not
    /// escaped. When a list comes with the `=` operator, the operator is
    /// replaced by `IN`. Any other operator is kept as given.
    pub fn add_condition_with(
        &mut self,
        field: impl Into<String>,
        value: impl Into<ConditionValue>,
        operator: impl Into<String>,
    ) {
        let value = value.into();
        let mut operator = operator.into();

        if value.is_list() && operator == "=" {
            operator = "IN".to_string();
        }

        self.conditions
            .push(Condition::new(field, operator, value.into_literal()));
    }

    pub fn select<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<ConditionValue>) -> Self {
        self.add_condition(field, value);
        self
    }

    pub fn filter_with(
        mut self,
        field: impl Into<String>,
        value: impl Into<ConditionValue>,
        operator: impl Into<String>,
    ) -> Self {
        self.add_condition_with(field, value, operator);
        self
    }

    /// Sets the direction for `field`. A field already present keeps its place.
    pub fn order_by(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.order.insert(field.into(), direction.into());
        self
    }

    pub fn take(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Renders the query string sent to the API.
    pub fn render(&self) -> String {
        let query = self.to_string();
        log::debug!(target: "soql_builder::query", "{query}");
        query
    }

    /// Renders the query laid out over several lines, for logs and debugging.
    pub fn pretty(&self) -> String {
        sqlformat::format(
            &self.to_string(),
            &sqlformat::QueryParams::None,
            &sqlformat::FormatOptions::default(),
        )
    }
}

impl std::fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::write!(
            f,
            "SELECT {fields} FROM {object_type}",
            fields = self.fields.join(", "),
            object_type = self.object_type,
        )?;

        if !self.conditions.is_empty() {
            let conditions = self
                .conditions
                .iter()
                .map(|condition| condition.to_string())
                .collect::<Vec<_>>();
            std::write!(f, " WHERE {}", conditions.join(" AND "))?;
        }

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(field, direction)| format!("{field} {direction}"))
                .collect::<Vec<_>>();
            std::write!(f, " ORDER BY {}", order.join(", "))?;
        }

        // zero counts as unset
        if let Some(limit) = self.limit.filter(|limit| *limit != 0) {
            std::write!(f, " LIMIT {limit}")?;
        }

        if let Some(offset) = self.offset.filter(|offset| *offset != 0) {
            std::write!(f, " OFFSET {offset}")?;
        }

        Ok(())
    }
}
