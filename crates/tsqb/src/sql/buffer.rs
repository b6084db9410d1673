use crate::error::{QbError, QbResult};

/// Append-only SQL text with first-error-wins semantics.
///
/// Once an error is recorded every write is ignored and [`into_sql`](Self::into_sql) yields
/// the error, so generators can write unconditionally and only check at branch points.
#[derive(Debug, Default)]
pub struct SqlBuffer {
    buf: String,
    err: Option<QbError>,
}

impl SqlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            err: None,
        }
    }

    pub fn write_str(&mut self, s: &str) -> &mut Self {
        if self.err.is_none() {
            self.buf.push_str(s);
        }
        self
    }

    pub fn write_char(&mut self, c: char) -> &mut Self {
        if self.err.is_none() {
            self.buf.push(c);
        }
        self
    }

    /// Record `err` unless an earlier error is already held.
    pub fn set_error(&mut self, err: QbError) -> &mut Self {
        if self.err.is_none() {
            self.err = Some(err);
        }
        self
    }

    pub fn error(&self) -> Option<&QbError> {
        self.err.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.err.is_some()
    }

    /// Text written so far. Partial when an error is held.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_sql(self) -> QbResult<String> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.buf),
        }
    }
}
