//! Map shorthand for conditions.
//!
//! ```ignore
//! let cond = Ex::new()
//!     .set("host", "server01")
//!     .set_op("value", Op::new().set("gt", 1).set("lt", 10));
//! // ((host = 'server01') AND ((value > 1) OR (value < 10)))
//! ```
//!
//! Entries are held in `BTreeMap`s, so expansion always visits keys in sorted order.

use super::{BooleanExpression, Expression, ExpressionList, ExpressionListType, Identifier, Value};
use crate::error::{QbError, QbResult};
use std::collections::BTreeMap;

/// Operator map: lower-cased operator names (`eq`, `neq`, `gt`, `gte`, `lt`, `lte`) to
/// comparands. Expands to a disjunction of comparisons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Op(BTreeMap<String, Value>);

impl Op {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, op: impl Into<String>, val: impl Into<Value>) -> Self {
        self.0.insert(op.into(), val.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_expressions(&self, lhs: &Identifier) -> QbResult<ExpressionList> {
        let mut ors = Vec::with_capacity(self.0.len());
        for (key, val) in &self.0 {
            let cond: BooleanExpression = match key.to_lowercase().as_str() {
                "eq" => lhs.eq(val.clone()),
                "neq" => lhs.neq(val.clone()),
                "gt" => lhs.gt(val.clone()),
                "gte" => lhs.gte(val.clone()),
                "lt" => lhs.lt(val.clone()),
                "lte" => lhs.lte(val.clone()),
                _ => return Err(QbError::UnsupportedExpressionType(key.clone())),
            };
            ors.push(cond);
        }
        Ok(ExpressionList::new(ExpressionListType::Or, ors))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Op {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Right-hand side of an [`Ex`] / [`ExOr`] entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ExValue {
    /// Rendered as an equality (`IS` / `IN` where the value calls for it).
    Value(Value),
    Op(Op),
}

type Entries = BTreeMap<String, ExValue>;

fn entries_to_list(entries: &Entries, list_type: ExpressionListType) -> QbResult<ExpressionList> {
    let mut exprs: Vec<Expression> = Vec::with_capacity(entries.len());
    for (key, val) in entries {
        let lhs = Identifier::parse(key);
        let expr = match val {
            ExValue::Value(v) => lhs.eq(v.clone()).into(),
            ExValue::Op(op) => op.to_expressions(&lhs)?.into(),
        };
        exprs.push(expr);
    }
    Ok(ExpressionList::new(list_type, exprs))
}

macro_rules! ex_map {
    ($(#[$meta:meta])* $name:ident => $list_type:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name(Entries);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Compare `key` for equality with `val`.
            pub fn set(mut self, key: impl Into<String>, val: impl Into<Value>) -> Self {
                self.0.insert(key.into(), ExValue::Value(val.into()));
                self
            }

            /// Compare `key` through an operator map.
            pub fn set_op(mut self, key: impl Into<String>, op: Op) -> Self {
                self.0.insert(key.into(), ExValue::Op(op));
                self
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Expand into an expression list, keys in sorted order.
            pub fn to_expressions(&self) -> QbResult<ExpressionList> {
                entries_to_list(&self.0, ExpressionListType::$list_type)
            }
        }

        impl<K: Into<String>> FromIterator<(K, ExValue)> for $name {
            fn from_iter<I: IntoIterator<Item = (K, ExValue)>>(iter: I) -> Self {
                Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
            }
        }
    };
}

ex_map!(
    /// Entries joined with `AND`.
    Ex => And
);
ex_map!(
    /// Entries joined with `OR`.
    ExOr => Or
);
