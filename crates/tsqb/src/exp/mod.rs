//! Expression layer for SELECT statements.
//!
//! Every node of a query is an [`Expression`]. The set of variants is closed: the SQL
//! generator matches on it exhaustively, so a new node kind is a compile error until every
//! generator handles it.
//!
//! Leaf constructors live in this module:
//!
//! ```ignore
//! use tsqb::exp::{count, ident, range, star};
//!
//! let cond = ident("cpu.host").eq("server01");
//! let window = ident("time").between(range("2024-01-01", "2024-01-02"));
//! let total = count("value").as_("total");
//! ```
//!
//! Right-hand sides, literal arguments and function arguments are [`Value`]s, so plain Rust
//! values (`1`, `"a"`, `vec![1, 2]`, `None::<i64>`) can be passed wherever an operand is
//! expected. A string becomes an identifier when converted to an [`Expression`] and a quoted
//! string literal when converted to a [`Value`].

#[macro_use]
mod macros;

mod alias;
mod boolean;
mod col;
mod compute;
mod func;
mod ident;
mod list;
mod literal;
mod map;
mod order;
mod range;
mod value;

pub use alias::AliasedExpression;
pub use boolean::{BooleanExpression, BooleanOperation};
pub use col::ColumnList;
pub use compute::{ComputerExpression, Operator};
pub use func::FunctionExpression;
pub use ident::{IdentColumn, Identifier};
pub use list::{ExpressionList, ExpressionListType};
pub use literal::Literal;
pub use map::{Ex, ExOr, ExValue, Op};
pub use order::{OrderedExpression, SortDirection};
pub use range::{RangeExpression, RangeOperation, RangeVal};
pub use value::Value;

/// A node of the query expression tree.
///
/// `Clone` is a deep copy: no variant shares mutable state with its clone.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    Boolean(BooleanExpression),
    Computer(ComputerExpression),
    Range(RangeExpression),
    Ordered(OrderedExpression),
    Aliased(AliasedExpression),
    Function(FunctionExpression),
    List(ExpressionList),
    Columns(ColumnList),
    Ex(Ex),
    ExOr(ExOr),
}

impl Expression {
    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "IdentifierExpression",
            Expression::Literal(_) => "LiteralExpression",
            Expression::Boolean(_) => "BooleanExpression",
            Expression::Computer(_) => "ComputerExpression",
            Expression::Range(_) => "RangeExpression",
            Expression::Ordered(_) => "OrderedExpression",
            Expression::Aliased(_) => "AliasedExpression",
            Expression::Function(_) => "SqlFunctionExpression",
            Expression::List(_) => "ExpressionList",
            Expression::Columns(_) => "ColumnListExpression",
            Expression::Ex(_) => "Ex",
            Expression::ExOr(_) => "ExOr",
        }
    }

    /// True for condition containers that would render nothing. Maps count as empty when
    /// every entry expands to nothing; a map that fails to expand is kept so the error surfaces.
    pub fn is_empty_list(&self) -> bool {
        match self {
            Expression::List(list) => list.is_empty(),
            Expression::Ex(ex) => ex.to_expressions().is_ok_and(|l| l.is_empty()),
            Expression::ExOr(ex) => ex.to_expressions().is_ok_and(|l| l.is_empty()),
            _ => false,
        }
    }
}

/// Strings convert to identifiers (`"tbl.col"` → `tbl.col`).
impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::Identifier(Identifier::parse(value))
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Expression::Identifier(Identifier::parse(&value))
    }
}

impl From<&String> for Expression {
    fn from(value: &String) -> Self {
        Expression::Identifier(Identifier::parse(value))
    }
}

impl_into_expression!(Identifier => Identifier);
impl_into_expression!(Literal => Literal);
impl_into_expression!(BooleanExpression => Boolean);
impl_into_expression!(ComputerExpression => Computer);
impl_into_expression!(RangeExpression => Range);
impl_into_expression!(OrderedExpression => Ordered);
impl_into_expression!(AliasedExpression => Aliased);
impl_into_expression!(FunctionExpression => Function);
impl_into_expression!(ExpressionList => List);
impl_into_expression!(ColumnList => Columns);
impl_into_expression!(Ex => Ex);
impl_into_expression!(ExOr => ExOr);

// ==================== Constructors ====================

/// Parse a dotted identifier: `col`, `tbl.col` or `schema.tbl.col`.
pub fn ident(name: &str) -> Identifier {
    Identifier::parse(name)
}

/// Column-only identifier; dots are kept as part of the column name.
pub fn col(name: &str) -> Identifier {
    Identifier::new("", "", name)
}

/// The `*` wildcard.
pub fn star() -> Literal {
    Literal::raw("*")
}

/// The `NOW` time function.
pub fn now() -> Literal {
    Literal::raw("NOW")
}

/// `NOW` followed by raw text, e.g. `now_with("() - 1h")`.
pub fn now_with(suffix: &str) -> Literal {
    Literal::raw(format!("NOW{suffix}"))
}

/// Raw SQL text with `?` markers replaced by `args` in order.
pub fn literal<V: Into<Value>>(sql: impl Into<String>, args: impl IntoIterator<Item = V>) -> Literal {
    Literal::new(sql, args)
}

/// Generic function call; arguments are rendered as values.
pub fn func<V: Into<Value>>(name: impl Into<String>, args: impl IntoIterator<Item = V>) -> FunctionExpression {
    FunctionExpression::new(name, args)
}

fn column_func(name: &str, col: impl Into<Expression>) -> FunctionExpression {
    FunctionExpression::new(name, [Value::from(col.into())])
}

/// `COUNT(col)`
pub fn count(col: impl Into<Expression>) -> FunctionExpression {
    column_func("COUNT", col)
}

/// `SUM(col)`
pub fn sum(col: impl Into<Expression>) -> FunctionExpression {
    column_func("SUM", col)
}

/// `FIRST(col)`
pub fn first(col: impl Into<Expression>) -> FunctionExpression {
    column_func("FIRST", col)
}

/// `LAST(col)`
pub fn last(col: impl Into<Expression>) -> FunctionExpression {
    column_func("LAST", col)
}

/// `ABS(col)`
pub fn abs(col: impl Into<Expression>) -> FunctionExpression {
    column_func("ABS", col)
}

/// `DERIVATIVE(col)`
pub fn derivative(col: impl Into<Expression>) -> FunctionExpression {
    column_func("DERIVATIVE", col)
}

/// `DIFFERENCE(col)`
pub fn difference(col: impl Into<Expression>) -> FunctionExpression {
    column_func("DIFFERENCE", col)
}

/// `time(<interval>)` bucket function.
pub fn time(interval: &str) -> FunctionExpression {
    column_func("time", interval)
}

/// A `(start, end)` pair for `between` / `not_between`.
pub fn range(start: impl Into<Value>, end: impl Into<Value>) -> RangeVal {
    RangeVal::new(start, end)
}

/// Conjunction of expressions.
pub fn and<E: Into<Expression>>(exprs: impl IntoIterator<Item = E>) -> ExpressionList {
    ExpressionList::new(ExpressionListType::And, exprs)
}

/// Disjunction of expressions.
pub fn or<E: Into<Expression>>(exprs: impl IntoIterator<Item = E>) -> ExpressionList {
    ExpressionList::new(ExpressionListType::Or, exprs)
}

/// Build a `Vec<Expression>` from heterogeneous column inputs.
///
/// ```ignore
/// let cols = tsqb::cols!["host", count("value").as_("n")];
/// ```
#[macro_export]
macro_rules! cols {
    ($($col:expr),* $(,)?) => {
        ::std::vec![$($crate::exp::Expression::from($col)),*]
    };
}
