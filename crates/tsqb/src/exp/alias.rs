use super::{Expression, Identifier};

/// `expr AS alias`
///
/// The alias is always an [`Identifier`]; strings are parsed on the way in.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasedExpression {
    aliased: Box<Expression>,
    alias: Identifier,
}

impl AliasedExpression {
    pub fn new(aliased: impl Into<Expression>, alias: impl Into<Identifier>) -> Self {
        Self {
            aliased: Box::new(aliased.into()),
            alias: alias.into(),
        }
    }

    pub fn aliased(&self) -> &Expression {
        &self.aliased
    }

    pub fn alias(&self) -> &Identifier {
        &self.alias
    }
}
