//! # tsqb
//!
//! An expression-based SELECT builder for time-series SQL dialects.
//!
//! ## Features
//!
//! - **Expression tree**: identifiers, literals, comparisons, arithmetic, ranges, ordering,
//!   aliases, function calls and AND/OR lists, all as one closed [`Expression`] enum
//! - **Dialect driven**: keywords, operators, escaping and fragment order come from
//!   [`DialectOptions`]
//! - **First error wins**: generation errors halt compilation; no partial SQL is returned
//! - **Timezone-aware buckets**: calendar intervals are aligned to the query's timezone
//! - **Pooled builders**: [`from`] draws from a shared pool and [`QueryBuilder::to_sql`]
//!   returns the instance to it
//!
//! ## Example
//!
//! ```ignore
//! use tsqb::prelude::*;
//!
//! let compiled = tsqb::from("cpu")
//!     .where_(ident("host").eq("server01"))
//!     .limit(5)
//!     .offset(10)
//!     .to_sql()?;
//! assert_eq!(
//!     compiled.sql,
//!     "SELECT * FROM cpu WHERE (host = 'server01') LIMIT 5 OFFSET 10"
//! );
//!
//! // Or run it directly on an executor:
//! let rows: Vec<CpuRow> = tsqb::from("cpu").query(&conn, FormatType::Json).await?;
//! ```

pub mod builder;
pub mod clauses;
pub mod client;
pub mod error;
pub mod exp;
pub mod pool;
pub mod prelude;
pub mod sql;
pub mod tz;

pub use builder::{CompiledQuery, QueryBuilder, UnionBuilder, from, union_all};
pub use clauses::{Fill, SelectClauses};
pub use client::{ConnConfig, Executor, FormatType};
pub use error::{QbError, QbResult};
pub use exp::{Ex, ExOr, Expression, Identifier, Op, Value};
pub use pool::BuilderPool;
pub use sql::{DialectOptions, SqlFragment};
