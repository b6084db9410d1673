use super::{DialectOptions, SqlBuffer};
use crate::error::QbError;
use crate::exp::{
    AliasedExpression, BooleanExpression, BooleanOperation, ColumnList, ComputerExpression,
    Expression, ExpressionList, ExpressionListType, FunctionExpression, IdentColumn, Identifier,
    Literal, OrderedExpression, RangeExpression, RangeOperation, Value,
};

/// Renders values and expression trees into a [`SqlBuffer`].
///
/// Every entry point returns early once the buffer holds an error.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionSqlGenerator<'a> {
    dialect: &'a DialectOptions,
}

impl<'a> ExpressionSqlGenerator<'a> {
    pub fn new(dialect: &'a DialectOptions) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &'a DialectOptions {
        self.dialect
    }

    pub fn generate_value(&self, sb: &mut SqlBuffer, val: &Value) {
        if sb.has_error() {
            return;
        }
        match val {
            Value::Null => {
                sb.write_str(&self.dialect.null);
            }
            Value::Bool(b) => {
                sb.set_error(QbError::encode(b));
            }
            Value::Int(i) => {
                sb.write_str(&i.to_string());
            }
            Value::UInt(u) => {
                sb.write_str(&u.to_string());
            }
            Value::Float(f) => self.float(sb, *f),
            Value::String(s) => self.literal_string(sb, s),
            Value::Bytes(bytes) => self.literal_string(sb, &String::from_utf8_lossy(bytes)),
            Value::List(values) => self.value_list(sb, values),
            Value::Expr(expr) => self.generate(sb, expr),
        }
    }

    /// Finite floats in plain decimal form. NaN and infinities have no SQL literal.
    pub(crate) fn float(&self, sb: &mut SqlBuffer, f: f64) {
        if f.is_finite() {
            sb.write_str(&f.to_string());
        } else {
            sb.set_error(QbError::encode(f));
        }
    }

    pub fn generate(&self, sb: &mut SqlBuffer, expr: &Expression) {
        if sb.has_error() {
            return;
        }
        match expr {
            Expression::Columns(cols) => self.column_list(sb, cols),
            Expression::List(list) => self.expression_list(sb, list),
            Expression::Literal(lit) => self.literal(sb, lit),
            Expression::Identifier(ident) => self.identifier(sb, ident),
            Expression::Function(func) => self.function(sb, func),
            Expression::Aliased(aliased) => self.aliased(sb, aliased),
            Expression::Boolean(cond) => self.boolean(sb, cond),
            Expression::Computer(comp) => self.computer(sb, comp),
            Expression::Range(range) => self.range(sb, range),
            Expression::Ordered(ordered) => self.ordered(sb, ordered),
            Expression::Ex(ex) => match ex.to_expressions() {
                Ok(list) => self.expression_list(sb, &list),
                Err(err) => {
                    sb.set_error(err);
                }
            },
            Expression::ExOr(ex) => match ex.to_expressions() {
                Ok(list) => self.expression_list(sb, &list),
                Err(err) => {
                    sb.set_error(err);
                }
            },
        }
    }

    pub fn column_list(&self, sb: &mut SqlBuffer, cols: &ColumnList) {
        for (i, col) in cols.columns().iter().enumerate() {
            if i > 0 {
                sb.write_char(self.dialect.comma).write_char(self.dialect.space);
            }
            self.generate(sb, col);
        }
    }

    pub fn expression_list(&self, sb: &mut SqlBuffer, list: &ExpressionList) {
        let exprs = list.expressions();
        match exprs {
            [] => {}
            [single] => self.generate(sb, single),
            _ => {
                let op = match list.list_type() {
                    ExpressionListType::And => &self.dialect.and_fragment,
                    ExpressionListType::Or => &self.dialect.or_fragment,
                };
                sb.write_char(self.dialect.left_paren);
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        sb.write_str(op);
                    }
                    self.generate(sb, expr);
                }
                sb.write_char(self.dialect.right_paren);
            }
        }
    }

    fn literal(&self, sb: &mut SqlBuffer, lit: &Literal) {
        let args = lit.args();
        if args.is_empty() {
            sb.write_str(lit.sql());
            return;
        }
        let mut args = args.iter();
        for c in lit.sql().chars() {
            if c == '?' {
                if let Some(arg) = args.next() {
                    self.generate_value(sb, arg);
                    continue;
                }
            }
            sb.write_char(c);
        }
    }

    fn identifier(&self, sb: &mut SqlBuffer, ident: &Identifier) {
        if ident.is_empty() {
            sb.set_error(QbError::EmptyIdentifier);
            return;
        }
        let (schema, table) = (ident.schema(), ident.table());
        let qualified = !schema.is_empty() || !table.is_empty();

        sb.write_str(schema);
        if !table.is_empty() {
            if !schema.is_empty() {
                sb.write_char(self.dialect.period);
            }
            sb.write_str(table);
        }

        match ident.column() {
            IdentColumn::None => {}
            IdentColumn::Name(name) => {
                if !name.is_empty() {
                    if qualified {
                        sb.write_char(self.dialect.period);
                    }
                    sb.write_str(name);
                }
            }
            IdentColumn::Literal(lit) => {
                if qualified {
                    sb.write_char(self.dialect.period);
                }
                self.literal(sb, lit);
            }
            IdentColumn::Other(expr) => {
                sb.set_error(QbError::UnsupportedIdentifierColumn(expr.kind_name()));
            }
        }
    }

    fn function(&self, sb: &mut SqlBuffer, func: &FunctionExpression) {
        sb.write_str(func.name());
        self.value_list(sb, func.args());
    }

    fn aliased(&self, sb: &mut SqlBuffer, aliased: &AliasedExpression) {
        self.generate(sb, aliased.aliased());
        sb.write_str(&self.dialect.as_fragment);
        self.identifier(sb, aliased.alias());
    }

    fn boolean(&self, sb: &mut SqlBuffer, cond: &BooleanExpression) {
        let Some(op) = self.dialect.boolean_operator_lookup.get(&cond.op()) else {
            sb.set_error(QbError::UnsupportedBooleanOperator(cond.op()));
            return;
        };
        sb.write_char(self.dialect.left_paren);
        self.generate(sb, cond.lhs());
        sb.write_char(self.dialect.space).write_str(op).write_char(self.dialect.space);
        self.generate_value(sb, cond.rhs());
        sb.write_char(self.dialect.right_paren);
    }

    fn computer(&self, sb: &mut SqlBuffer, comp: &ComputerExpression) {
        let Some(op) = self.dialect.compute_operator_lookup.get(&comp.op()) else {
            sb.set_error(QbError::UnsupportedComputeOperator(comp.op()));
            return;
        };
        self.generate(sb, comp.lhs());
        sb.write_str(op);
        self.generate_value(sb, comp.rhs());
    }

    fn range(&self, sb: &mut SqlBuffer, range: &RangeExpression) {
        let (lower, upper) = match range.op() {
            RangeOperation::Between => (BooleanOperation::Gte, BooleanOperation::Lte),
            RangeOperation::NotBetween => (BooleanOperation::Lt, BooleanOperation::Gt),
        };
        let lookup = &self.dialect.boolean_operator_lookup;
        let (Some(lower), Some(upper)) = (lookup.get(&lower), lookup.get(&upper)) else {
            sb.set_error(QbError::UnsupportedRangeOperator(range.op()));
            return;
        };
        let space = self.dialect.space;

        sb.write_char(self.dialect.left_paren);
        self.generate(sb, range.lhs());
        sb.write_char(space).write_str(lower).write_char(space);
        self.generate_value(sb, range.rhs().start());
        sb.write_str(&self.dialect.and_fragment);
        self.generate(sb, range.lhs());
        sb.write_char(space).write_str(upper).write_char(space);
        self.generate_value(sb, range.rhs().end());
        sb.write_char(self.dialect.right_paren);
    }

    fn ordered(&self, sb: &mut SqlBuffer, ordered: &OrderedExpression) {
        self.generate(sb, ordered.sort_expression());
        if ordered.is_asc() {
            sb.write_str(&self.dialect.asc_fragment);
        } else {
            sb.write_str(&self.dialect.desc_fragment);
        }
    }

    fn value_list(&self, sb: &mut SqlBuffer, values: &[Value]) {
        sb.write_char(self.dialect.left_paren);
        for (i, val) in values.iter().enumerate() {
            if i > 0 {
                sb.write_char(self.dialect.comma).write_char(self.dialect.space);
            }
            self.generate_value(sb, val);
        }
        sb.write_char(self.dialect.right_paren);
    }

    /// Quote `s`, substituting escaped runes.
    pub fn literal_string(&self, sb: &mut SqlBuffer, s: &str) {
        sb.write_char(self.dialect.string_quote);
        for c in s.chars() {
            match self.dialect.escaped_runes.get(&c) {
                Some(escaped) => sb.write_str(escaped),
                None => sb.write_char(c),
            };
        }
        sb.write_char(self.dialect.string_quote);
    }
}
