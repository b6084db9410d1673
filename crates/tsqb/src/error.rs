//! Error types for tsqb

use crate::exp::{BooleanOperation, Operator, RangeOperation};
use crate::sql::SqlFragment;
use thiserror::Error;

/// Result type alias for tsqb operations
pub type QbResult<T> = Result<T, QbError>;

/// Errors raised while generating SQL or handing it to an executor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QbError {
    /// Identifier without schema, table or column
    #[error(r#"an empty identifier was encountered, please specify a "schema", "table" or "column""#)]
    EmptyIdentifier,

    /// Expression (or map shorthand operator) the generator cannot render
    #[error("unsupported expression type {0}")]
    UnsupportedExpressionType(String),

    /// Identifier column that is neither a name nor a literal
    #[error("unexpected col type must be string or LiteralExpression received {0}")]
    UnsupportedIdentifierColumn(&'static str),

    /// Boolean operator missing from the dialect's lookup table
    #[error("boolean operator '{0}' not supported")]
    UnsupportedBooleanOperator(BooleanOperation),

    /// Arithmetic operator missing from the dialect's lookup table
    #[error("operator '{0}' not supported")]
    UnsupportedComputeOperator(Operator),

    /// Range operator the dialect cannot desugar
    #[error("range operator {0} not supported")]
    UnsupportedRangeOperator(RangeOperation),

    /// Fragment kind the statement generator does not implement
    #[error("unsupported {statement} SQL fragment {fragment:?}")]
    UnsupportedFragment {
        statement: &'static str,
        fragment: SqlFragment,
    },

    /// Value that cannot be encoded as SQL text
    #[error("encode error: Unable to encode value {0}")]
    Encode(String),

    /// Connection settings that cannot be turned into an endpoint
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The executor returned no rows
    #[error("no data found")]
    NoData,

    /// The executor failed (transport, auth, decoding)
    #[error("Execution error: {0}")]
    Execution(String),
}

impl QbError {
    /// Create an encode error for a value's debug form
    pub fn encode(value: impl std::fmt::Debug) -> Self {
        Self::Encode(format!("{value:?}"))
    }

    /// Create an execution error
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution(message.into())
    }

    /// Check if this is a no-data error
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Check if this error was raised while generating SQL (as opposed to executing it)
    pub fn is_generation_error(&self) -> bool {
        !matches!(
            self,
            Self::NoData | Self::Execution(_) | Self::InvalidConfig(_)
        )
    }
}
