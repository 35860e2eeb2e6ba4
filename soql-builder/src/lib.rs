/// This module contains the macros used in the crate.
#[macro_use]
mod macros;

/// This module contains the query builder and its parts.
pub mod query;

/// This module contains the REST endpoint configuration.
pub mod config;

/// This module contains the prelude for the crate.
pub mod prelude;

/// This module contains the trait describing Salesforce objects.
pub mod sobject;

/// This module contains the helpers turning Rust values into SOQL literals.
pub mod utils;

pub use config::Config;
pub use query::SelectQuery;
pub use sobject::SObject;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
