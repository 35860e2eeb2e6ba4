pub mod builder;
pub mod condition;
pub mod order;

pub use builder::SelectQuery;
pub use condition::{Condition, ConditionValue};
pub use order::Direction;
