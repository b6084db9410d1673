//! SQL generation: output buffer, dialect table and the generators.
//!
//! ```ignore
//! use tsqb::clauses::SelectClauses;
//! use tsqb::sql::{DialectOptions, to_select_sql};
//!
//! let sql = to_select_sql(&DialectOptions::default(), &SelectClauses::new())?;
//! assert_eq!(sql, "SELECT *");
//! ```

mod buffer;
mod exp_gen;
mod options;
mod select_gen;

pub use buffer::SqlBuffer;
pub use exp_gen::ExpressionSqlGenerator;
pub use options::{DialectOptions, SqlFragment};
pub use select_gen::SelectSqlGenerator;

use crate::clauses::SelectClauses;
use crate::error::QbResult;
use crate::exp::Expression;

/// Compile a full SELECT statement.
pub fn to_select_sql(dialect: &DialectOptions, clauses: &SelectClauses) -> QbResult<String> {
    let mut sb = SqlBuffer::with_capacity(128);
    SelectSqlGenerator::new(dialect).generate(&mut sb, clauses);
    sb.into_sql()
}

/// Render a single expression, e.g. a condition for ad-hoc SQL.
pub fn expression_sql(dialect: &DialectOptions, expr: impl Into<Expression>) -> QbResult<String> {
    let mut sb = SqlBuffer::new();
    ExpressionSqlGenerator::new(dialect).generate(&mut sb, &expr.into());
    sb.into_sql()
}

/// Longest prefix of `sql` within `max_bytes`, cut on a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(test)]
mod tests;
