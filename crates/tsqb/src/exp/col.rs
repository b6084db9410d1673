use super::{Expression, OrderedExpression};

/// Comma-separated expressions (`a, b, c`).
///
/// Nested column lists are flattened into their parent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnList {
    columns: Vec<Expression>,
}

impl ColumnList {
    pub fn new<E: Into<Expression>>(cols: impl IntoIterator<Item = E>) -> Self {
        Self::default().append(cols)
    }

    pub fn from_ordered(cols: impl IntoIterator<Item = OrderedExpression>) -> Self {
        Self {
            columns: cols.into_iter().map(Expression::Ordered).collect(),
        }
    }

    pub fn append<E: Into<Expression>>(mut self, cols: impl IntoIterator<Item = E>) -> Self {
        for col in cols {
            match col.into() {
                Expression::Columns(nested) => self.columns.extend(nested.columns),
                other => self.columns.push(other),
            }
        }
        self
    }

    pub fn columns(&self) -> &[Expression] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
