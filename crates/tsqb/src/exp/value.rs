use super::{
    AliasedExpression, BooleanExpression, ColumnList, ComputerExpression, Ex, ExOr, Expression,
    ExpressionList, FunctionExpression, Identifier, Literal, OrderedExpression, RangeExpression,
};

/// An operand: comparison right-hand side, literal argument or function argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `NULL`
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Rendered as an escaped, quoted string literal.
    String(String),
    /// Rendered like [`Value::String`] after UTF-8 decoding.
    Bytes(Vec<u8>),
    /// Rendered as `(a, b, c)`.
    List(Vec<Value>),
    Expr(Box<Expression>),
}

impl Value {
    /// Wrap raw bytes. `Vec<u8>` converts to a list of integers through `From`, so byte
    /// strings need this constructor.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Int(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::UInt(value as u64)
            }
        })*
    };
}

macro_rules! impl_from_expression {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Expr(Box::new(Expression::from(value)))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_expression!(
    Identifier,
    Literal,
    BooleanExpression,
    ComputerExpression,
    RangeExpression,
    OrderedExpression,
    AliasedExpression,
    FunctionExpression,
    ExpressionList,
    ColumnList,
    Ex,
    ExOr
);

impl From<Expression> for Value {
    fn from(value: Expression) -> Self {
        Value::Expr(Box::new(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
