use super::{Expression, Value};
use std::fmt;

/// Arithmetic operator of a [`ComputerExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Multiply,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

/// `lhs<op>rhs`, chainable: `ident("a").add(1).mul(2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputerExpression {
    op: Operator,
    lhs: Box<Expression>,
    rhs: Value,
}

impl ComputerExpression {
    pub fn new(op: Operator, lhs: impl Into<Expression>, rhs: impl Into<Value>) -> Self {
        Self {
            op,
            lhs: Box::new(lhs.into()),
            rhs: rhs.into(),
        }
    }

    pub fn op(&self) -> Operator {
        self.op
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Value {
        &self.rhs
    }
}

impl_computable!(ComputerExpression);
impl_aliaseable!(ComputerExpression);
