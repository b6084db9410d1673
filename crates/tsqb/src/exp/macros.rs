//! Capability macros shared by expression nodes.
//!
//! Each macro adds inherent builder methods to a node type. The node must be `Clone` and
//! convertible into [`Expression`](crate::exp::Expression).

macro_rules! impl_into_expression {
    ($ty:ident => $variant:ident) => {
        impl From<$ty> for $crate::exp::Expression {
            fn from(value: $ty) -> Self {
                $crate::exp::Expression::$variant(value)
            }
        }
    };
}

/// Comparison operators producing [`BooleanExpression`](crate::exp::BooleanExpression)s.
macro_rules! impl_comparable {
    ($ty:ty) => {
        #[allow(clippy::should_implement_trait)]
        impl $ty {
            /// `self = val`; null and booleans use `IS`, lists use `IN`.
            pub fn eq(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                $crate::exp::BooleanExpression::equality(self.clone(), val.into(), false)
            }

            /// Logical negation of [`eq`](Self::eq): `!=`, `IS NOT` or `NOT IN`.
            pub fn neq(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                $crate::exp::BooleanExpression::equality(self.clone(), val.into(), true)
            }

            /// `self > val`
            pub fn gt(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::Gt, val)
            }

            /// `self >= val`
            pub fn gte(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::Gte, val)
            }

            /// `self < val`
            pub fn lt(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::Lt, val)
            }

            /// `self <= val`
            pub fn lte(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::Lte, val)
            }

            /// `self IN val`
            pub fn in_(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::In, val)
            }

            /// `self NOT IN val`
            pub fn not_in(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::NotIn, val)
            }

            /// `self IS val`
            pub fn is_(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::Is, val)
            }

            /// `self IS NOT val`
            pub fn is_not(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::IsNot, val)
            }

            /// `self LIKE val`
            pub fn like(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::Like, val)
            }

            /// `self NOT LIKE val`
            pub fn not_like(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::NotLike, val)
            }

            /// `self ~ val`
            pub fn regexp_like(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::RegexpLike, val)
            }

            /// `self !~ val`
            pub fn regexp_not_like(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::RegexpNotLike, val)
            }

            /// `self ~* val`
            pub fn regexp_i_like(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::RegexpILike, val)
            }

            /// `self !~* val`
            pub fn regexp_not_i_like(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::BooleanExpression {
                self.compare($crate::exp::BooleanOperation::RegexpNotILike, val)
            }

            fn compare(
                &self,
                op: $crate::exp::BooleanOperation,
                val: impl Into<$crate::exp::Value>,
            ) -> $crate::exp::BooleanExpression {
                $crate::exp::BooleanExpression::new(op, self.clone(), val)
            }
        }
    };
}

/// `asc` / `desc`
macro_rules! impl_orderable {
    ($ty:ty) => {
        impl $ty {
            /// Sort ascending.
            pub fn asc(&self) -> $crate::exp::OrderedExpression {
                $crate::exp::OrderedExpression::new(self.clone(), $crate::exp::SortDirection::Asc)
            }

            /// Sort descending.
            pub fn desc(&self) -> $crate::exp::OrderedExpression {
                $crate::exp::OrderedExpression::new(self.clone(), $crate::exp::SortDirection::Desc)
            }
        }
    };
}

/// `between` / `not_between`
macro_rules! impl_rangeable {
    ($ty:ty) => {
        impl $ty {
            /// `start <= self <= end`
            pub fn between(&self, val: $crate::exp::RangeVal) -> $crate::exp::RangeExpression {
                $crate::exp::RangeExpression::new($crate::exp::RangeOperation::Between, self.clone(), val)
            }

            /// Negated range, see [`RangeOperation::NotBetween`](crate::exp::RangeOperation::NotBetween).
            pub fn not_between(&self, val: $crate::exp::RangeVal) -> $crate::exp::RangeExpression {
                $crate::exp::RangeExpression::new($crate::exp::RangeOperation::NotBetween, self.clone(), val)
            }
        }
    };
}

/// `add` / `sub` / `mul`
macro_rules! impl_computable {
    ($ty:ty) => {
        #[allow(clippy::should_implement_trait)]
        impl $ty {
            /// `self + val`
            pub fn add(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::ComputerExpression {
                $crate::exp::ComputerExpression::new($crate::exp::Operator::Add, self.clone(), val)
            }

            /// `self - val`
            pub fn sub(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::ComputerExpression {
                $crate::exp::ComputerExpression::new($crate::exp::Operator::Sub, self.clone(), val)
            }

            /// `self * val`
            pub fn mul(&self, val: impl Into<$crate::exp::Value>) -> $crate::exp::ComputerExpression {
                $crate::exp::ComputerExpression::new($crate::exp::Operator::Multiply, self.clone(), val)
            }
        }
    };
}

/// `as_`
macro_rules! impl_aliaseable {
    ($ty:ty) => {
        impl $ty {
            /// `self AS alias`; a string alias is parsed as an identifier.
            pub fn as_(&self, alias: impl Into<$crate::exp::Identifier>) -> $crate::exp::AliasedExpression {
                $crate::exp::AliasedExpression::new(self.clone(), alias)
            }
        }
    };
}
