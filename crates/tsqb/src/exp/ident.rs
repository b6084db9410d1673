//! Schema/table/column references.

use super::{Expression, Literal, star};

/// Column part of an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IdentColumn {
    #[default]
    None,
    Name(String),
    /// Rendered through the literal generator (e.g. `tbl.*`).
    Literal(Literal),
    /// Any other expression. Representable, but rejected by the generator.
    Other(Box<Expression>),
}

impl IdentColumn {
    fn is_empty(&self) -> bool {
        match self {
            IdentColumn::None => true,
            IdentColumn::Name(name) => name.is_empty(),
            IdentColumn::Literal(_) | IdentColumn::Other(_) => false,
        }
    }
}

/// `"*"` becomes the star literal.
impl From<&str> for IdentColumn {
    fn from(value: &str) -> Self {
        if value == "*" {
            IdentColumn::Literal(star())
        } else {
            IdentColumn::Name(value.to_string())
        }
    }
}

impl From<String> for IdentColumn {
    fn from(value: String) -> Self {
        IdentColumn::from(value.as_str())
    }
}

impl From<Literal> for IdentColumn {
    fn from(value: Literal) -> Self {
        IdentColumn::Literal(value)
    }
}

impl From<Expression> for IdentColumn {
    fn from(value: Expression) -> Self {
        match value {
            Expression::Literal(lit) => IdentColumn::Literal(lit),
            other => IdentColumn::Other(Box::new(other)),
        }
    }
}

/// A `schema.table.column` reference; any part may be empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Identifier {
    schema: String,
    table: String,
    col: IdentColumn,
}

impl Identifier {
    pub fn new(schema: impl Into<String>, table: impl Into<String>, col: impl Into<IdentColumn>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            col: col.into(),
        }
    }

    /// Split on `.`: two parts are `table.col`, three are `schema.table.col`. Anything else
    /// is taken whole as the column name.
    pub fn parse(name: &str) -> Self {
        let parts: Vec<&str> = name.split('.').collect();
        match parts.as_slice() {
            [table, col] => Self::new("", *table, *col),
            [schema, table, col] => Self::new(*schema, *table, *col),
            _ => Self::new("", "", name),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_col(mut self, col: impl Into<IdentColumn>) -> Self {
        self.col = col.into();
        self
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column(&self) -> &IdentColumn {
        &self.col
    }

    /// True when schema, table and column are all absent.
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty() && self.table.is_empty() && self.col.is_empty()
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::parse(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::parse(&value)
    }
}

impl_comparable!(Identifier);
impl_orderable!(Identifier);
impl_rangeable!(Identifier);
impl_computable!(Identifier);
impl_aliaseable!(Identifier);
