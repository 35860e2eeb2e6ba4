pub use super::config::Config;
pub use super::query::{Condition, ConditionValue, Direction, SelectQuery};
pub use super::sobject::SObject;
pub use super::utils::{date_literal, datetime_literal, escape, to_value};
pub use super::{filter, select, Error};

#[cfg(feature = "derive")]
pub use soql_builder_derive::SObject;
