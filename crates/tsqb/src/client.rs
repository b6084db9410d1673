//! Execution collaborator interface.
//!
//! The builder never talks to a database itself. It hands compiled SQL to an [`Executor`],
//! which owns transport, authentication, rate limiting and response decoding.

use crate::error::{QbError, QbResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Response encoding requested from the read endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    #[default]
    Json,
    Csv,
}

/// Runs compiled SELECT statements and decodes the rows.
///
/// Cancellation is dropping the returned future.
pub trait Executor: Send + Sync {
    /// Execute against the primary read endpoint.
    fn execute<T>(&self, sql: &str, format: FormatType) -> impl Future<Output = QbResult<Vec<T>>> + Send
    where
        T: DeserializeOwned + Send;

    /// Execute against the secondary backend, with an optional timezone parameter.
    fn execute_tz<T>(
        &self,
        sql: &str,
        timezone: Option<&str>,
    ) -> impl Future<Output = QbResult<Vec<T>>> + Send
    where
        T: DeserializeOwned + Send;

    /// Execute and return the first row.
    ///
    /// Returns [`QbError::NoData`] when no rows come back.
    fn execute_one<T>(&self, sql: &str, format: FormatType) -> impl Future<Output = QbResult<T>> + Send
    where
        T: DeserializeOwned + Send,
    {
        async move {
            self.execute::<T>(sql, format)
                .await?
                .into_iter()
                .next()
                .ok_or(QbError::NoData)
        }
    }
}

fn default_port() -> u16 {
    6041
}

fn default_query_timeout_secs() -> u64 {
    5
}

fn default_rate_limit() -> u32 {
    150
}

fn default_rate_burst() -> u32 {
    1
}

/// Connection description for an [`Executor`] implementation.
///
/// Deserializable from any serde format:
///
/// ```ignore
/// let cfg: ConnConfig = serde_json::from_str(r#"{"host": "http://tsdb", "database": "metrics"}"#)?;
/// assert_eq!(cfg.read_endpoint(), "http://tsdb:6041/rest/sql/metrics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnConfig {
    /// Base URL including scheme, e.g. `http://localhost`.
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub database: String,
    /// Per-query deadline, in seconds.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
    /// Requests per second allowed by the client-side limiter.
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,
    #[serde(default = "default_rate_burst")]
    pub rate_burst: u32,
}

impl Default for ConnConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost".to_string(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
            database: String::new(),
            query_timeout_secs: default_query_timeout_secs(),
            rate_limit: default_rate_limit(),
            rate_burst: default_rate_burst(),
        }
    }
}

impl ConnConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout_secs = timeout.as_secs();
        self
    }

    pub fn with_rate_limit(mut self, per_second: u32, burst: u32) -> Self {
        self.rate_limit = per_second;
        self.rate_burst = burst;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Whether requests should carry basic auth.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }

    /// SQL endpoint: `<host>:<port>/rest/sql/<database>`.
    pub fn read_endpoint(&self) -> String {
        format!("{}:{}/rest/sql/{}", self.host, self.port, self.database)
    }

    /// Line-protocol write endpoint for the configured database.
    pub fn write_endpoint(&self) -> QbResult<url::Url> {
        let base = format!("{}:{}/influxdb/v1/write", self.host, self.port);
        let mut url = url::Url::parse(&base)
            .map_err(|e| QbError::InvalidConfig(format!("write endpoint {base}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("consistency", "")
            .append_pair("db", &self.database)
            .append_pair("precision", "s")
            .append_pair("rp", "");
        Ok(url)
    }
}
