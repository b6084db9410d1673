use crate::exp::{BooleanOperation, Operator};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// One orderable piece of a compiled statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlFragment {
    Select,
    From,
    Where,
    PartitionBy,
    GroupBy,
    Interval,
    Fill,
    Order,
    Limit,
    Offset,
    Timezone,
    // Known fragment kinds without a SELECT renderer.
    CommonTable,
    Join,
    Having,
    Compounds,
    For,
}

/// Keywords, punctuation and operator text used to render a dialect.
///
/// Pure data. [`DialectOptions::default`] is the time-series dialect; the `with_*` methods
/// derive variants from it. Options are shared between builders behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectOptions {
    /// `SELECT`
    pub select_clause: String,
    /// ` FROM`, followed by a space and the sources.
    pub from_fragment: String,
    /// ` WHERE `
    pub where_fragment: String,
    /// ` PARTITION BY `
    pub partition_by_fragment: String,
    /// ` GROUP BY `
    pub group_by_fragment: String,
    /// ` INTERVAL`, followed by the parenthesized interval.
    pub interval_fragment: String,
    /// ` FILL`, followed by the parenthesized fill value.
    pub fill_fragment: String,
    /// ` ORDER BY `
    pub order_by_fragment: String,
    /// ` LIMIT `
    pub limit_fragment: String,
    /// ` OFFSET `
    pub offset_fragment: String,
    /// Timezone keyword (e.g. ` TZ`). `None` keeps the timezone out of the SQL text; it is
    /// still returned alongside the compiled statement.
    pub timezone_fragment: Option<String>,
    /// ` AS `
    pub as_fragment: String,
    /// ` ASC`
    pub asc_fragment: String,
    /// ` DESC`
    pub desc_fragment: String,
    /// ` AND `
    pub and_fragment: String,
    /// ` OR `
    pub or_fragment: String,
    /// `NULL`
    pub null: String,
    /// ` UNION ALL `
    pub union_all_fragment: String,

    pub left_paren: char,
    pub right_paren: char,
    pub star: char,
    pub period: char,
    pub space: char,
    pub comma: char,
    pub string_quote: char,

    /// Runes substituted inside string literals.
    pub escaped_runes: HashMap<char, String>,
    pub boolean_operator_lookup: HashMap<BooleanOperation, String>,
    pub compute_operator_lookup: HashMap<Operator, String>,

    /// Order in which SELECT fragments are rendered.
    pub select_sql_order: Vec<SqlFragment>,

    /// Longest SQL text (in bytes) emitted in log events.
    pub log_sql_max_len: usize,
}

impl Default for DialectOptions {
    fn default() -> Self {
        use BooleanOperation::*;

        let boolean_operator_lookup = [
            (Eq, "="),
            (Neq, "!="),
            (Gt, ">"),
            (Gte, ">="),
            (Lt, "<"),
            (Lte, "<="),
            (RegexpLike, "~"),
            (RegexpNotLike, "!~"),
            (RegexpILike, "~*"),
            (RegexpNotILike, "!~*"),
            (In, "IN"),
        ]
        .into_iter()
        .map(|(op, text)| (op, text.to_string()))
        .collect();

        let compute_operator_lookup = [
            (Operator::Add, "+"),
            (Operator::Sub, "-"),
            (Operator::Multiply, "*"),
        ]
        .into_iter()
        .map(|(op, text)| (op, text.to_string()))
        .collect();

        Self {
            select_clause: "SELECT".to_string(),
            from_fragment: " FROM".to_string(),
            where_fragment: " WHERE ".to_string(),
            partition_by_fragment: " PARTITION BY ".to_string(),
            group_by_fragment: " GROUP BY ".to_string(),
            interval_fragment: " INTERVAL".to_string(),
            fill_fragment: " FILL".to_string(),
            order_by_fragment: " ORDER BY ".to_string(),
            limit_fragment: " LIMIT ".to_string(),
            offset_fragment: " OFFSET ".to_string(),
            timezone_fragment: None,
            as_fragment: " AS ".to_string(),
            asc_fragment: " ASC".to_string(),
            desc_fragment: " DESC".to_string(),
            and_fragment: " AND ".to_string(),
            or_fragment: " OR ".to_string(),
            null: "NULL".to_string(),
            union_all_fragment: " UNION ALL ".to_string(),
            left_paren: '(',
            right_paren: ')',
            star: '*',
            period: '.',
            space: ' ',
            comma: ',',
            string_quote: '\'',
            escaped_runes: HashMap::from([('\'', "''".to_string())]),
            boolean_operator_lookup,
            compute_operator_lookup,
            select_sql_order: vec![
                SqlFragment::Select,
                SqlFragment::From,
                SqlFragment::Where,
                SqlFragment::PartitionBy,
                SqlFragment::GroupBy,
                SqlFragment::Interval,
                SqlFragment::Fill,
                SqlFragment::Order,
                SqlFragment::Limit,
                SqlFragment::Offset,
                SqlFragment::Timezone,
            ],
            log_sql_max_len: 200,
        }
    }
}

impl DialectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide default dialect.
    pub fn shared_default() -> Arc<DialectOptions> {
        static DEFAULT: OnceLock<Arc<DialectOptions>> = OnceLock::new();
        Arc::clone(DEFAULT.get_or_init(|| Arc::new(DialectOptions::default())))
    }

    /// Render the timezone inline as `<fragment>('<zone>')`.
    pub fn with_timezone_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.timezone_fragment = Some(fragment.into());
        self
    }

    pub fn with_select_order(mut self, order: impl IntoIterator<Item = SqlFragment>) -> Self {
        self.select_sql_order = order.into_iter().collect();
        self
    }

    /// Add or replace the text of a comparison operator.
    pub fn with_boolean_operator(mut self, op: BooleanOperation, text: impl Into<String>) -> Self {
        self.boolean_operator_lookup.insert(op, text.into());
        self
    }

    /// Remove a comparison operator; rendering it becomes an error.
    pub fn without_boolean_operator(mut self, op: BooleanOperation) -> Self {
        self.boolean_operator_lookup.remove(&op);
        self
    }

    pub fn with_compute_operator(mut self, op: Operator, text: impl Into<String>) -> Self {
        self.compute_operator_lookup.insert(op, text.into());
        self
    }

    /// Escape `rune` as `sequence` inside string literals.
    pub fn with_escape(mut self, rune: char, sequence: impl Into<String>) -> Self {
        self.escaped_runes.insert(rune, sequence.into());
        self
    }

    pub fn with_log_sql_max_len(mut self, len: usize) -> Self {
        self.log_sql_max_len = len;
        self
    }
}
