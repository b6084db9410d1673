use super::Expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionListType {
    And,
    Or,
}

/// Conjunction or disjunction of child expressions.
///
/// Children that are themselves empty lists are dropped on construction and on append, so
/// an `ExpressionList` never renders `()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionList {
    list_type: ExpressionListType,
    expressions: Vec<Expression>,
}

impl ExpressionList {
    pub fn new<E: Into<Expression>>(list_type: ExpressionListType, exprs: impl IntoIterator<Item = E>) -> Self {
        Self {
            list_type,
            expressions: Vec::new(),
        }
        .append(exprs)
    }

    pub fn append<E: Into<Expression>>(mut self, exprs: impl IntoIterator<Item = E>) -> Self {
        self.expressions.extend(
            exprs
                .into_iter()
                .map(Into::into)
                .filter(|e: &Expression| !e.is_empty_list()),
        );
        self
    }

    pub fn list_type(&self) -> ExpressionListType {
        self.list_type
    }

    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}
