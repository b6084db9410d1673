//! Mutable state of one SELECT statement.

use crate::exp::{ColumnList, Expression, ExpressionList, ExpressionListType, OrderedExpression, Value, star};

/// Argument of the `FILL(...)` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Written verbatim, e.g. `NULL`, `PREV`, `LINEAR`.
    Raw(String),
    /// `VALUE, <n>`
    Int(i64),
    /// `VALUE, <n>`
    Float(f64),
    /// Rendered through the value generator.
    Value(Value),
}

impl From<&str> for Fill {
    fn from(value: &str) -> Self {
        Fill::Raw(value.to_string())
    }
}

impl From<String> for Fill {
    fn from(value: String) -> Self {
        Fill::Raw(value)
    }
}

impl From<i32> for Fill {
    fn from(value: i32) -> Self {
        Fill::Int(i64::from(value))
    }
}

impl From<i64> for Fill {
    fn from(value: i64) -> Self {
        Fill::Int(value)
    }
}

impl From<f64> for Fill {
    fn from(value: f64) -> Self {
        Fill::Float(value)
    }
}

impl From<Value> for Fill {
    fn from(value: Value) -> Self {
        Fill::Value(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectClauses {
    select: ColumnList,
    distinct: ColumnList,
    from: ColumnList,
    where_: ExpressionList,
    order: ColumnList,
    partition_by: ColumnList,
    group_by: ColumnList,
    fill: Option<Fill>,
    limit: Option<u64>,
    interval: String,
    timezone: String,
    offset: u64,
}

impl Default for SelectClauses {
    fn default() -> Self {
        Self {
            select: ColumnList::new([star()]),
            distinct: ColumnList::default(),
            from: ColumnList::default(),
            where_: ExpressionList::new(ExpressionListType::And, Vec::<Expression>::new()),
            order: ColumnList::default(),
            partition_by: ColumnList::default(),
            group_by: ColumnList::default(),
            fill: None,
            limit: None,
            interval: String::new(),
            timezone: String::new(),
            offset: 0,
        }
    }
}

impl SelectClauses {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the select list is exactly the `*` literal.
    pub fn is_default_select(&self) -> bool {
        matches!(self.select.columns(), [Expression::Literal(lit)] if lit.is_star())
    }

    pub fn select(&self) -> &ColumnList {
        &self.select
    }

    pub fn set_select(&mut self, cols: ColumnList) {
        self.select = cols;
    }

    pub fn distinct(&self) -> &ColumnList {
        &self.distinct
    }

    pub fn set_distinct(&mut self, cols: ColumnList) {
        self.distinct = cols;
    }

    pub fn from(&self) -> &ColumnList {
        &self.from
    }

    pub fn set_from(&mut self, cols: ColumnList) {
        self.from = cols;
    }

    pub fn where_(&self) -> &ExpressionList {
        &self.where_
    }

    /// AND `exprs` onto the existing conditions.
    pub fn where_append(&mut self, exprs: Vec<Expression>) {
        let current = std::mem::replace(
            &mut self.where_,
            ExpressionList::new(ExpressionListType::And, Vec::<Expression>::new()),
        );
        self.where_ = current.append(exprs);
    }

    pub fn order(&self) -> &ColumnList {
        &self.order
    }

    pub fn set_order(&mut self, order: Vec<OrderedExpression>) {
        self.order = ColumnList::from_ordered(order);
    }

    pub fn partition_by(&self) -> &ColumnList {
        &self.partition_by
    }

    pub fn set_partition_by(&mut self, cols: ColumnList) {
        self.partition_by = cols;
    }

    pub fn group_by(&self) -> &ColumnList {
        &self.group_by
    }

    pub fn set_group_by(&mut self, cols: ColumnList) {
        self.group_by = cols;
    }

    pub fn group_by_append(&mut self, cols: ColumnList) {
        let current = std::mem::take(&mut self.group_by);
        self.group_by = current.append([cols]);
    }

    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    pub fn set_fill(&mut self, fill: Option<Fill>) {
        self.fill = fill;
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<u64>) {
        self.limit = limit;
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: u64) {
        self.offset = offset;
    }

    pub fn interval(&self) -> &str {
        &self.interval
    }

    pub fn set_interval(&mut self, interval: impl Into<String>) {
        self.interval = interval.into();
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn set_timezone(&mut self, tz: impl Into<String>) {
        self.timezone = tz.into();
    }

    /// Reset every clause and restore the default select.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
