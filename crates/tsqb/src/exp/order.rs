use super::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// An expression with a sort direction, used by `ORDER BY`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedExpression {
    expr: Box<Expression>,
    direction: SortDirection,
}

impl OrderedExpression {
    pub fn new(expr: impl Into<Expression>, direction: SortDirection) -> Self {
        Self {
            expr: Box::new(expr.into()),
            direction,
        }
    }

    pub fn sort_expression(&self) -> &Expression {
        &self.expr
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_asc(&self) -> bool {
        self.direction == SortDirection::Asc
    }
}
