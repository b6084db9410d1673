//! Builder execution against an in-memory executor.

use serde::Deserialize;
use serde_json::json;
use std::sync::Mutex;
use tsqb::ConnConfig;
use tsqb::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Execute { sql: String, format: FormatType },
    ExecuteTz { sql: String, timezone: Option<String> },
}

/// Records every call and answers with canned JSON rows.
struct MockExecutor {
    rows: serde_json::Value,
    calls: Mutex<Vec<Call>>,
}

impl MockExecutor {
    fn new(rows: serde_json::Value) -> Self {
        Self {
            rows,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn decode<T: serde::de::DeserializeOwned>(&self) -> QbResult<Vec<T>> {
        let rows: Vec<T> = serde_json::from_value(self.rows.clone())
            .map_err(|e| QbError::execution(e.to_string()))?;
        if rows.is_empty() {
            return Err(QbError::NoData);
        }
        Ok(rows)
    }
}

impl Executor for MockExecutor {
    async fn execute<T>(&self, sql: &str, format: FormatType) -> QbResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        self.calls.lock().unwrap().push(Call::Execute {
            sql: sql.to_string(),
            format,
        });
        self.decode()
    }

    async fn execute_tz<T>(&self, sql: &str, timezone: Option<&str>) -> QbResult<Vec<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        self.calls.lock().unwrap().push(Call::ExecuteTz {
            sql: sql.to_string(),
            timezone: timezone.map(str::to_string),
        });
        self.decode()
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct CpuRow {
    host: String,
    usage: f64,
}

fn cpu_rows() -> serde_json::Value {
    json!([
        {"host": "server01", "usage": 12.5},
        {"host": "server02", "usage": 40.0},
    ])
}

#[tokio::test]
async fn query_sends_compiled_sql_with_format() {
    let conn = MockExecutor::new(cpu_rows());
    let rows: Vec<CpuRow> = from("cpu")
        .select(cols!["host", "usage"])
        .where_(ident("host").regexp_like("^server"))
        .query(&conn, FormatType::Csv)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].host, "server01");
    assert_eq!(
        conn.calls(),
        vec![Call::Execute {
            sql: "SELECT host, usage FROM cpu WHERE (host ~ '^server')".to_string(),
            format: FormatType::Csv,
        }]
    );
}

#[tokio::test]
async fn query_taos_forwards_timezone() {
    let conn = MockExecutor::new(cpu_rows());
    let _: Vec<CpuRow> = from("cpu")
        .interval("1h")
        .timezone("Asia/Shanghai")
        .query_taos(&conn)
        .await
        .unwrap();

    assert_eq!(
        conn.calls(),
        vec![Call::ExecuteTz {
            sql: "SELECT * FROM cpu INTERVAL(1h)".to_string(),
            timezone: Some("Asia/Shanghai".to_string()),
        }]
    );
}

#[tokio::test]
async fn union_query_uses_union_timezone() {
    let conn = MockExecutor::new(cpu_rows());
    let _: Vec<CpuRow> = union_all(
        from("cpu").select(["host", "usage"]).timezone("UTC"),
        from("cpu_archive").select(["host", "usage"]),
    )
    .timezone("Asia/Kolkata")
    .query(&conn)
    .await
    .unwrap();

    assert_eq!(
        conn.calls(),
        vec![Call::ExecuteTz {
            sql: "SELECT host, usage FROM cpu UNION ALL SELECT host, usage FROM cpu_archive"
                .to_string(),
            timezone: Some("Asia/Kolkata".to_string()),
        }]
    );
}

#[tokio::test]
async fn compile_errors_never_reach_the_executor() {
    let conn = MockExecutor::new(cpu_rows());
    let err = from("cpu")
        .where_(Ex::new().set_op("usage", Op::new().set("between", 1)))
        .query::<CpuRow, _>(&conn, FormatType::Json)
        .await
        .unwrap_err();

    assert_eq!(err, QbError::UnsupportedExpressionType("between".to_string()));
    assert!(conn.calls().is_empty());
}

#[tokio::test]
async fn empty_results_are_no_data() {
    let conn = MockExecutor::new(json!([]));
    let err = from("cpu")
        .query::<CpuRow, _>(&conn, FormatType::Json)
        .await
        .unwrap_err();
    assert!(err.is_no_data());
    assert!(!err.is_generation_error());
}

#[tokio::test]
async fn execute_one_returns_first_row() {
    let conn = MockExecutor::new(cpu_rows());
    let compiled = from("cpu").limit(1).to_sql().unwrap();
    let row: CpuRow = conn.execute_one(&compiled.sql, FormatType::Json).await.unwrap();
    assert_eq!(
        row,
        CpuRow {
            host: "server01".to_string(),
            usage: 12.5
        }
    );
}

#[tokio::test]
async fn decode_failures_are_execution_errors() {
    let conn = MockExecutor::new(json!([{"host": 1}]));
    let err = from("cpu")
        .query::<CpuRow, _>(&conn, FormatType::Json)
        .await
        .unwrap_err();
    assert!(matches!(err, QbError::Execution(_)));
}

#[test]
fn conn_config_from_json() {
    let cfg: ConnConfig = serde_json::from_value(json!({
        "host": "http://tsdb.local",
        "username": "root",
        "password": "taosdata",
        "database": "metrics",
        "query_timeout_secs": 10
    }))
    .unwrap();

    assert_eq!(cfg.port, 6041);
    assert_eq!(cfg.rate_limit, 150);
    assert_eq!(cfg.query_timeout(), std::time::Duration::from_secs(10));
    assert_eq!(cfg.read_endpoint(), "http://tsdb.local:6041/rest/sql/metrics");
    assert!(cfg.has_credentials());
}
