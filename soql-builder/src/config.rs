//! REST endpoint configuration.
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::query::SelectQuery;
use crate::Error;

pub const DEFAULT_API_VERSION: &str = "v59.0";

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Where rendered queries are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub instance_url: String,
    pub api_version: String,
}

impl Config {
    pub fn new(instance_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
            api_version: api_version.into(),
        }
    }

    /// Reads `SALESFORCE_INSTANCE_URL` and `SALESFORCE_API_VERSION`, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let instance_url = std::env::var("SALESFORCE_INSTANCE_URL")
            .map_err(|_| "SALESFORCE_INSTANCE_URL is not set")?;
        let api_version = std::env::var("SALESFORCE_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());

        Ok(Self::new(instance_url, api_version))
    }

    /// Builds the `query` resource URL carrying `query` as its `q` parameter.
    pub fn query_url(&self, query: &SelectQuery) -> String {
        let rendered = query.render();
        format!(
            "{instance}/services/data/{version}/query?q={q}",
            instance = self.instance_url.trim_end_matches('/'),
            version = self.api_version,
            q = utf8_percent_encode(&rendered, QUERY_ENCODE_SET),
        )
    }
}
