use super::Value;

/// `NAME(arg, arg, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    name: String,
    args: Vec<Value>,
}

impl FunctionExpression {
    pub fn new<V: Into<Value>>(name: impl Into<String>, args: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl_computable!(FunctionExpression);
impl_aliaseable!(FunctionExpression);
