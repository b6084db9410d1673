use super::{Expression, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperation {
    /// `(lhs >= start AND lhs <= end)`
    Between,
    /// `(lhs < start AND lhs > end)`
    NotBetween,
}

impl fmt::Display for RangeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOperation::Between => f.write_str("between"),
            RangeOperation::NotBetween => f.write_str("notbetween"),
        }
    }
}

/// Bounds of a range, see [`range`](super::range).
#[derive(Debug, Clone, PartialEq)]
pub struct RangeVal {
    start: Value,
    end: Value,
}

impl RangeVal {
    pub fn new(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn start(&self) -> &Value {
        &self.start
    }

    pub fn end(&self) -> &Value {
        &self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeExpression {
    op: RangeOperation,
    lhs: Box<Expression>,
    rhs: RangeVal,
}

impl RangeExpression {
    pub fn new(op: RangeOperation, lhs: impl Into<Expression>, rhs: RangeVal) -> Self {
        Self {
            op,
            lhs: Box::new(lhs.into()),
            rhs,
        }
    }

    pub fn op(&self) -> RangeOperation {
        self.op
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &RangeVal {
        &self.rhs
    }
}
