use super::{DialectOptions, ExpressionSqlGenerator, SqlBuffer, SqlFragment};
use crate::clauses::{Fill, SelectClauses};
use crate::error::QbError;
use crate::exp::{ColumnList, ExpressionList, Value};

/// Renders [`SelectClauses`] fragment by fragment, in the dialect's declared order.
#[derive(Debug, Clone, Copy)]
pub struct SelectSqlGenerator<'a> {
    dialect: &'a DialectOptions,
    esg: ExpressionSqlGenerator<'a>,
}

impl<'a> SelectSqlGenerator<'a> {
    pub fn new(dialect: &'a DialectOptions) -> Self {
        Self {
            dialect,
            esg: ExpressionSqlGenerator::new(dialect),
        }
    }

    pub fn expression_generator(&self) -> ExpressionSqlGenerator<'a> {
        self.esg
    }

    /// Stops at the first fragment that records an error.
    pub fn generate(&self, sb: &mut SqlBuffer, clauses: &SelectClauses) {
        for fragment in &self.dialect.select_sql_order {
            if sb.has_error() {
                return;
            }
            match fragment {
                SqlFragment::Select => self.select_sql(sb, clauses),
                SqlFragment::From => self.from_sql(sb, clauses.from()),
                SqlFragment::Where => self.where_sql(sb, clauses.where_()),
                SqlFragment::PartitionBy => self.column_clause(
                    sb,
                    &self.dialect.partition_by_fragment,
                    clauses.partition_by(),
                ),
                SqlFragment::GroupBy => {
                    self.column_clause(sb, &self.dialect.group_by_fragment, clauses.group_by())
                }
                SqlFragment::Interval => self.interval_sql(sb, clauses.interval()),
                SqlFragment::Fill => self.fill_sql(sb, clauses.fill()),
                SqlFragment::Order => {
                    self.column_clause(sb, &self.dialect.order_by_fragment, clauses.order())
                }
                SqlFragment::Limit => self.limit_sql(sb, clauses.limit()),
                SqlFragment::Offset => self.offset_sql(sb, clauses.offset()),
                SqlFragment::Timezone => self.timezone_sql(sb, clauses.timezone()),
                SqlFragment::CommonTable
                | SqlFragment::Join
                | SqlFragment::Having
                | SqlFragment::Compounds
                | SqlFragment::For => {
                    sb.set_error(QbError::UnsupportedFragment {
                        statement: "SELECT",
                        fragment: *fragment,
                    });
                }
            }
        }
    }

    fn select_sql(&self, sb: &mut SqlBuffer, clauses: &SelectClauses) {
        sb.write_str(&self.dialect.select_clause).write_char(self.dialect.space);
        let cols = clauses.select();
        if clauses.is_default_select() || cols.is_empty() {
            sb.write_char(self.dialect.star);
        } else {
            self.esg.column_list(sb, cols);
        }
    }

    fn from_sql(&self, sb: &mut SqlBuffer, from: &ColumnList) {
        if from.is_empty() {
            return;
        }
        sb.write_str(&self.dialect.from_fragment).write_char(self.dialect.space);
        self.esg.column_list(sb, from);
    }

    fn where_sql(&self, sb: &mut SqlBuffer, conds: &ExpressionList) {
        if conds.is_empty() {
            return;
        }
        sb.write_str(&self.dialect.where_fragment);
        self.esg.expression_list(sb, conds);
    }

    fn column_clause(&self, sb: &mut SqlBuffer, keyword: &str, cols: &ColumnList) {
        if cols.is_empty() {
            return;
        }
        sb.write_str(keyword);
        self.esg.column_list(sb, cols);
    }

    fn interval_sql(&self, sb: &mut SqlBuffer, interval: &str) {
        if interval.is_empty() {
            return;
        }
        sb.write_str(&self.dialect.interval_fragment)
            .write_char(self.dialect.left_paren)
            .write_str(interval)
            .write_char(self.dialect.right_paren);
    }

    fn fill_sql(&self, sb: &mut SqlBuffer, fill: Option<&Fill>) {
        let Some(fill) = fill else {
            return;
        };
        sb.write_str(&self.dialect.fill_fragment).write_char(self.dialect.left_paren);
        match fill {
            Fill::Raw(raw) => {
                sb.write_str(raw);
            }
            Fill::Int(n) => {
                sb.write_str("VALUE, ").write_str(&n.to_string());
            }
            Fill::Float(f) => {
                sb.write_str("VALUE, ");
                self.esg.float(sb, *f);
            }
            Fill::Value(val) => self.esg.generate_value(sb, val),
        }
        sb.write_char(self.dialect.right_paren);
    }

    fn limit_sql(&self, sb: &mut SqlBuffer, limit: Option<u64>) {
        if let Some(limit) = limit {
            sb.write_str(&self.dialect.limit_fragment);
            self.esg.generate_value(sb, &Value::UInt(limit));
        }
    }

    fn offset_sql(&self, sb: &mut SqlBuffer, offset: u64) {
        if offset > 0 {
            sb.write_str(&self.dialect.offset_fragment);
            self.esg.generate_value(sb, &Value::UInt(offset));
        }
    }

    fn timezone_sql(&self, sb: &mut SqlBuffer, tz: &str) {
        let Some(keyword) = &self.dialect.timezone_fragment else {
            return;
        };
        if tz.is_empty() {
            return;
        }
        sb.write_str(keyword).write_char(self.dialect.left_paren);
        self.esg.literal_string(sb, tz);
        sb.write_char(self.dialect.right_paren);
    }
}
