//! Fluent SELECT builder.
//!
//! # Example
//!
//! ```ignore
//! use tsqb::prelude::*;
//!
//! let compiled = tsqb::from("cpu")
//!     .select(cols![ident("host"), last("usage").as_("usage")])
//!     .where_(ident("time").gte(now_with("-1d")))
//!     .group_by(["host"])
//!     .interval("1d")
//!     .timezone("UTC")
//!     .to_sql()?;
//!
//! assert_eq!(compiled.timezone.as_deref(), Some("UTC"));
//! ```
//!
//! Builders are consumed by [`QueryBuilder::to_sql`]: the clause state is cleared and the
//! instance goes back to the [`BuilderPool`].

mod union;

pub use union::{UnionBuilder, union_all};

use crate::clauses::{Fill, SelectClauses};
use crate::client::{Executor, FormatType};
use crate::error::QbResult;
use crate::exp::{ColumnList, Expression, OrderedExpression};
use crate::pool::BuilderPool;
use crate::sql::{self, DialectOptions};
use crate::tz;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Output of a compilation: the SQL text and the timezone to forward to the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub timezone: Option<String>,
}

impl CompiledQuery {
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.sql, self.timezone)
    }
}

/// Start a query against `table`, drawing a builder from the global pool.
pub fn from(table: impl Into<Expression>) -> QueryBuilder {
    BuilderPool::global().acquire().from(table)
}

/// Mutable description of one SELECT statement.
///
/// Every mutator takes `self` and returns it, so calls chain. `Clone` is a deep copy.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    dialect: Arc<DialectOptions>,
    clauses: SelectClauses,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Fresh builder with the default dialect. Prefer [`from`] to reuse pooled instances.
    pub fn new() -> Self {
        Self {
            dialect: DialectOptions::shared_default(),
            clauses: SelectClauses::new(),
        }
    }

    pub fn with_dialect(mut self, dialect: Arc<DialectOptions>) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn dialect(&self) -> &DialectOptions {
        &self.dialect
    }

    pub fn clauses(&self) -> &SelectClauses {
        &self.clauses
    }

    pub fn from(mut self, table: impl Into<Expression>) -> Self {
        self.clauses.set_from(ColumnList::new([table.into()]));
        self
    }

    /// Replace the select list. An empty list restores `*`.
    pub fn select<E: Into<Expression>>(mut self, cols: impl IntoIterator<Item = E>) -> Self {
        let cols = ColumnList::new(cols);
        if cols.is_empty() {
            return self.clear_select();
        }
        self.clauses.set_select(cols);
        self
    }

    /// Restore the default `*` select and drop distinct columns.
    pub fn clear_select(mut self) -> Self {
        self.clauses.set_select(SelectClauses::default().select().clone());
        self.clauses.set_distinct(ColumnList::default());
        self
    }

    /// AND a condition onto the WHERE clause.
    pub fn where_(self, expr: impl Into<Expression>) -> Self {
        self.where_all([expr])
    }

    /// AND several conditions onto the WHERE clause.
    pub fn where_all<E: Into<Expression>>(mut self, exprs: impl IntoIterator<Item = E>) -> Self {
        self.clauses
            .where_append(exprs.into_iter().map(Into::into).collect());
        self
    }

    pub fn order(mut self, order: impl IntoIterator<Item = OrderedExpression>) -> Self {
        self.clauses.set_order(order.into_iter().collect());
        self
    }

    pub fn partition_by<E: Into<Expression>>(mut self, cols: impl IntoIterator<Item = E>) -> Self {
        self.clauses.set_partition_by(ColumnList::new(cols));
        self
    }

    pub fn group_by<E: Into<Expression>>(mut self, cols: impl IntoIterator<Item = E>) -> Self {
        self.clauses.set_group_by(ColumnList::new(cols));
        self
    }

    pub fn group_by_append<E: Into<Expression>>(mut self, cols: impl IntoIterator<Item = E>) -> Self {
        self.clauses.group_by_append(ColumnList::new(cols));
        self
    }

    /// Bucket width, e.g. `10m` or `1d`.
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.clauses.set_interval(interval);
        self
    }

    pub fn fill(mut self, fill: impl Into<Fill>) -> Self {
        self.clauses.set_fill(Some(fill.into()));
        self
    }

    /// IANA zone name, e.g. `Asia/Shanghai`.
    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.clauses.set_timezone(tz);
        self
    }

    /// Set the row limit. Zero or negative clears it.
    pub fn limit(mut self, limit: i64) -> Self {
        self.clauses.set_limit(u64::try_from(limit).ok().filter(|&n| n > 0));
        self
    }

    /// Set the row offset. Zero or negative clears it.
    pub fn offset(mut self, offset: i64) -> Self {
        self.clauses.set_offset(u64::try_from(offset).unwrap_or(0));
        self
    }

    /// Compile, then clear this builder and return it to the pool.
    pub fn to_sql(self) -> QbResult<CompiledQuery> {
        self.to_sql_at(Utc::now())
    }

    /// [`to_sql`](Self::to_sql) with the timezone offset taken at `now`.
    pub fn to_sql_at(mut self, now: DateTime<Utc>) -> QbResult<CompiledQuery> {
        if let Some(interval) = tz::adjust_interval(self.clauses.interval(), self.clauses.timezone(), now) {
            self.clauses.set_interval(interval);
        }

        let result = sql::to_select_sql(&self.dialect, &self.clauses);
        let timezone = Some(self.clauses.timezone())
            .filter(|tz| !tz.is_empty())
            .map(str::to_string);

        #[cfg(feature = "tracing")]
        log_compiled(&self.dialect, &result, timezone.as_deref());

        BuilderPool::global().release(self);
        result.map(|sql| CompiledQuery { sql, timezone })
    }

    /// Compile and run on the executor's primary endpoint.
    pub async fn query<T, E>(self, conn: &E, format: FormatType) -> QbResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
        E: Executor,
    {
        let compiled = self.to_sql()?;
        conn.execute(&compiled.sql, format).await
    }

    /// Compile and run on the executor's secondary backend, forwarding the timezone.
    pub async fn query_taos<T, E>(self, conn: &E) -> QbResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
        E: Executor,
    {
        let compiled = self.to_sql()?;
        conn.execute_tz(&compiled.sql, compiled.timezone.as_deref()).await
    }

    /// Back to the initial state, default dialect included.
    pub(crate) fn reset(&mut self) {
        self.clauses.clear();
        self.dialect = DialectOptions::shared_default();
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn log_compiled(dialect: &DialectOptions, result: &QbResult<String>, timezone: Option<&str>) {
    match result {
        Ok(sql) => {
            let max = dialect.log_sql_max_len;
            let shown = if sql.len() > max {
                format!("{}...", sql::truncate_sql_bytes(sql, max))
            } else {
                sql.clone()
            };
            tracing::debug!(
                target: "tsqb.sql",
                sql = %shown,
                timezone = timezone.unwrap_or("-"),
                "compiled select"
            );
        }
        Err(err) => {
            tracing::debug!(target: "tsqb.sql", error = %err, "select compilation failed");
        }
    }
}
