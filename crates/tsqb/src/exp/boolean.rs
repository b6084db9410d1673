//! Comparison expressions.

use super::{Expression, Value};
use std::fmt;

/// Comparison operator of a [`BooleanExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperation {
    /// `=`
    Eq,
    /// `!=`
    Neq,
    /// `IS`
    Is,
    /// `IS NOT`
    IsNot,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `~`
    RegexpLike,
    /// `!~`
    RegexpNotLike,
    /// `~*`
    RegexpILike,
    /// `!~*`
    RegexpNotILike,
}

impl BooleanOperation {
    /// The logical negation of this operator. Applying it twice is the identity.
    pub fn inverse(self) -> Self {
        use BooleanOperation::*;
        match self {
            Eq => Neq,
            Neq => Eq,
            Is => IsNot,
            IsNot => Is,
            Gt => Lte,
            Lte => Gt,
            Gte => Lt,
            Lt => Gte,
            In => NotIn,
            NotIn => In,
            Like => NotLike,
            NotLike => Like,
            RegexpLike => RegexpNotLike,
            RegexpNotLike => RegexpLike,
            RegexpILike => RegexpNotILike,
            RegexpNotILike => RegexpILike,
        }
    }

    /// Lower-case name, as used by [`Op`](super::Op) keys.
    pub fn name(self) -> &'static str {
        use BooleanOperation::*;
        match self {
            Eq => "eq",
            Neq => "neq",
            Is => "is",
            IsNot => "isnot",
            Gt => "gt",
            Gte => "gte",
            Lt => "lt",
            Lte => "lte",
            In => "in",
            NotIn => "notin",
            Like => "like",
            NotLike => "notlike",
            RegexpLike => "regexplike",
            RegexpNotLike => "regexpnotlike",
            RegexpILike => "regexpilike",
            RegexpNotILike => "regexpnotilike",
        }
    }

    pub const ALL: [BooleanOperation; 16] = [
        BooleanOperation::Eq,
        BooleanOperation::Neq,
        BooleanOperation::Is,
        BooleanOperation::IsNot,
        BooleanOperation::Gt,
        BooleanOperation::Gte,
        BooleanOperation::Lt,
        BooleanOperation::Lte,
        BooleanOperation::In,
        BooleanOperation::NotIn,
        BooleanOperation::Like,
        BooleanOperation::NotLike,
        BooleanOperation::RegexpLike,
        BooleanOperation::RegexpNotLike,
        BooleanOperation::RegexpILike,
        BooleanOperation::RegexpNotILike,
    ];
}

impl fmt::Display for BooleanOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `lhs <op> rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpression {
    op: BooleanOperation,
    lhs: Box<Expression>,
    rhs: Value,
}

impl BooleanExpression {
    pub fn new(op: BooleanOperation, lhs: impl Into<Expression>, rhs: impl Into<Value>) -> Self {
        Self {
            op,
            lhs: Box::new(lhs.into()),
            rhs: rhs.into(),
        }
    }

    /// Equality whose operator follows the comparand: `IS` for null and booleans, `IN` for
    /// lists, `=` otherwise. `invert` selects the negated operator.
    pub(crate) fn equality(lhs: impl Into<Expression>, rhs: Value, invert: bool) -> Self {
        let op = match &rhs {
            Value::Null | Value::Bool(_) => BooleanOperation::Is,
            Value::List(_) => BooleanOperation::In,
            _ => BooleanOperation::Eq,
        };
        let op = if invert { op.inverse() } else { op };
        Self::new(op, lhs, rhs)
    }

    pub fn op(&self) -> BooleanOperation {
        self.op
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Value {
        &self.rhs
    }

    /// The same comparison with the inverted operator.
    pub fn negate(mut self) -> Self {
        self.op = self.op.inverse();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exp::ident;

    #[test]
    fn inverse_is_an_involution() {
        for op in BooleanOperation::ALL {
            assert_eq!(op.inverse().inverse(), op, "{op}");
            assert_ne!(op.inverse(), op, "{op}");
        }
        assert_eq!(BooleanOperation::Eq.inverse(), BooleanOperation::Neq);
        assert_eq!(BooleanOperation::In.inverse(), BooleanOperation::NotIn);
        assert_eq!(BooleanOperation::Gt.inverse(), BooleanOperation::Lte);
        assert_eq!(BooleanOperation::IsNot.inverse(), BooleanOperation::Is);
    }

    #[test]
    fn equality_picks_operator_from_comparand() {
        let host = ident("host");
        assert_eq!(host.eq("a").op(), BooleanOperation::Eq);
        assert_eq!(host.eq(None::<i64>).op(), BooleanOperation::Is);
        assert_eq!(host.eq(true).op(), BooleanOperation::Is);
        assert_eq!(host.eq(vec!["a", "b"]).op(), BooleanOperation::In);
        assert_eq!(host.eq(Value::bytes("ab")).op(), BooleanOperation::Eq);

        assert_eq!(host.neq("a").op(), BooleanOperation::Neq);
        assert_eq!(host.neq(None::<i64>).op(), BooleanOperation::IsNot);
        assert_eq!(host.neq(vec![1, 2]).op(), BooleanOperation::NotIn);
    }

    #[test]
    fn negate_flips_operator() {
        let cond = ident("value").gt(1).negate();
        assert_eq!(cond.op(), BooleanOperation::Lte);
    }
}
