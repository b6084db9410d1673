use super::{CompiledQuery, QueryBuilder};
use crate::client::Executor;
use crate::error::QbResult;
use serde::de::DeserializeOwned;

/// Two SELECT statements joined with `UNION ALL`.
#[derive(Debug, Clone)]
pub struct UnionBuilder {
    first: QueryBuilder,
    second: QueryBuilder,
    timezone: Option<String>,
}

pub fn union_all(first: QueryBuilder, second: QueryBuilder) -> UnionBuilder {
    UnionBuilder {
        first,
        second,
        timezone: None,
    }
}

impl UnionBuilder {
    /// Timezone forwarded to the executor. The member queries keep their own.
    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        let tz = tz.into();
        self.timezone = (!tz.is_empty()).then_some(tz);
        self
    }

    /// Compile both members and join them with the first member's union fragment.
    pub fn to_sql(self) -> QbResult<CompiledQuery> {
        let joiner = self.first.dialect().union_all_fragment.clone();
        let first = self.first.to_sql();
        let second = self.second.to_sql();
        let (first, second) = (first?, second?);
        Ok(CompiledQuery {
            sql: format!("{}{joiner}{}", first.sql, second.sql),
            timezone: self.timezone,
        })
    }

    /// Compile and run on the executor's secondary backend with the union timezone.
    pub async fn query<T, E>(self, conn: &E) -> QbResult<Vec<T>>
    where
        T: DeserializeOwned + Send,
        E: Executor,
    {
        let compiled = self.to_sql()?;
        conn.execute_tz(&compiled.sql, compiled.timezone.as_deref()).await
    }
}
