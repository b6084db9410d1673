//! Convenient imports for typical `tsqb` usage.
//!
//! ```ignore
//! use tsqb::prelude::*;
//! ```

pub use crate::cols;
pub use crate::exp::{
    abs, and, col, count, derivative, difference, first, func, ident, last, literal, now, now_with,
    or, range, star, sum, time,
};
pub use crate::{
    CompiledQuery, DialectOptions, Ex, ExOr, Executor, Expression, Fill, FormatType, Op, QbError,
    QbResult, QueryBuilder, Value, from, union_all,
};
