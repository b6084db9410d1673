use super::Value;

/// Raw SQL text. Each `?` is replaced, in order, by the next argument when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    sql: String,
    args: Vec<Value>,
}

impl Literal {
    pub fn new<V: Into<Value>>(sql: impl Into<String>, args: impl IntoIterator<Item = V>) -> Self {
        Self {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Literal without arguments, written verbatim.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn is_star(&self) -> bool {
        self.sql == "*" && self.args.is_empty()
    }
}
