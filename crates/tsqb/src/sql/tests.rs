use super::*;
use crate::clauses::{Fill, SelectClauses};
use crate::error::QbError;
use crate::cols;
use crate::exp::*;

fn render(expr: impl Into<Expression>) -> String {
    expression_sql(&DialectOptions::default(), expr).unwrap()
}

fn render_err(expr: impl Into<Expression>) -> QbError {
    expression_sql(&DialectOptions::default(), expr).unwrap_err()
}

fn render_value(val: impl Into<Value>) -> QbResult<String> {
    let dialect = DialectOptions::default();
    let mut sb = SqlBuffer::new();
    ExpressionSqlGenerator::new(&dialect).generate_value(&mut sb, &val.into());
    sb.into_sql()
}

#[test]
fn star_renders_asterisk() {
    assert_eq!(render(star()), "*");
}

#[test]
fn identifiers_join_present_parts() {
    assert_eq!(render(ident("db.tbl.col")), "db.tbl.col");
    assert_eq!(render(ident("tbl.col")), "tbl.col");
    assert_eq!(render(ident("col")), "col");
    assert_eq!(render(ident("cpu.*")), "cpu.*");
    assert_eq!(render(Identifier::new("db", "", "col")), "db.col");
    assert_eq!(render(Identifier::new("", "tbl", "")), "tbl");
}

#[test]
fn empty_identifier_fails() {
    assert_eq!(render_err(Identifier::default()), QbError::EmptyIdentifier);
}

#[test]
fn identifier_rejects_expression_column() {
    let id = Identifier::new("", "t", Expression::from(ident("a").eq(1)));
    assert_eq!(
        render_err(id),
        QbError::UnsupportedIdentifierColumn("BooleanExpression")
    );
}

#[test]
fn scalar_values() {
    assert_eq!(render_value(None::<i64>).unwrap(), "NULL");
    assert_eq!(render_value(-5).unwrap(), "-5");
    assert_eq!(render_value(7u32).unwrap(), "7");
    assert_eq!(render_value(1.5).unwrap(), "1.5");
    assert_eq!(render_value(2.0).unwrap(), "2");
    assert_eq!(render_value("it's").unwrap(), "'it''s'");
    assert_eq!(render_value(Value::bytes(b"o'k".to_vec())).unwrap(), "'o''k'");
    assert_eq!(render_value(vec![1, 2, 3]).unwrap(), "(1, 2, 3)");
    assert_eq!(render_value(vec!["a", "b"]).unwrap(), "('a', 'b')");
}

#[test]
fn booleans_cannot_be_encoded() {
    assert_eq!(render_value(true).unwrap_err(), QbError::Encode("true".into()));
}

#[test]
fn literal_substitutes_placeholders_in_order() {
    assert_eq!(render(literal("a = ? AND b = ?", [Value::from(1), Value::from("x")])), "a = 1 AND b = 'x'");
    assert_eq!(render(literal("? + ?", [1])), "1 + ?");
    assert_eq!(render(literal("no ? args", Vec::<Value>::new())), "no ? args");
    assert_eq!(render(now()), "NOW");
    assert_eq!(render(now_with("() - 1h")), "NOW() - 1h");
}

#[test]
fn comparisons_are_parenthesized() {
    assert_eq!(render(ident("host").eq("server01")), "(host = 'server01')");
    assert_eq!(render(ident("host").neq("a")), "(host != 'a')");
    assert_eq!(render(ident("v").gt(1)), "(v > 1)");
    assert_eq!(render(ident("v").gte(1.5)), "(v >= 1.5)");
    assert_eq!(render(ident("v").lt(ident("w"))), "(v < w)");
    assert_eq!(render(ident("v").lte(0)), "(v <= 0)");
    assert_eq!(render(ident("host").eq(vec!["a", "b"])), "(host IN ('a', 'b'))");
    assert_eq!(render(ident("host").regexp_like("^s")), "(host ~ '^s')");
    assert_eq!(render(ident("host").regexp_not_like("^s")), "(host !~ '^s')");
    assert_eq!(render(ident("host").regexp_i_like("^s")), "(host ~* '^s')");
    assert_eq!(render(ident("host").regexp_not_i_like("^s")), "(host !~* '^s')");
}

#[test]
fn operators_missing_from_dialect_fail() {
    assert_eq!(
        render_err(ident("host").eq(None::<i64>)),
        QbError::UnsupportedBooleanOperator(BooleanOperation::Is)
    );
    assert_eq!(
        render_err(ident("host").like("a%")),
        QbError::UnsupportedBooleanOperator(BooleanOperation::Like)
    );

    let dialect = DialectOptions::default().with_boolean_operator(BooleanOperation::Is, "IS");
    assert_eq!(
        expression_sql(&dialect, ident("host").eq(None::<i64>)).unwrap(),
        "(host IS NULL)"
    );

    let dialect = DialectOptions::default().without_boolean_operator(BooleanOperation::Gte);
    assert_eq!(
        expression_sql(&dialect, ident("t").between(range(1, 2))).unwrap_err(),
        QbError::UnsupportedRangeOperator(RangeOperation::Between)
    );
}

#[test]
fn arithmetic_has_no_spaces() {
    assert_eq!(render(ident("a").add(1)), "a+1");
    assert_eq!(render(ident("a").add(1).sub(2)), "a+1-2");
    assert_eq!(render(ident("a").mul(ident("b")).as_("c")), "a*b AS c");
}

#[test]
fn ranges_desugar_to_comparisons() {
    assert_eq!(
        render(ident("time").between(range("2024-01-01", "2024-01-02"))),
        "(time >= '2024-01-01' AND time <= '2024-01-02')"
    );
    assert_eq!(render(ident("v").not_between(range(1, 10))), "(v < 1 AND v > 10)");
}

#[test]
fn ordering_and_aliases() {
    assert_eq!(render(ident("time").desc()), "time DESC");
    assert_eq!(render(ident("time").asc()), "time ASC");
    assert_eq!(render(ident("value").as_("v")), "value AS v");
}

#[test]
fn functions_render_argument_lists() {
    assert_eq!(render(count("value")), "COUNT(value)");
    assert_eq!(render(last("cpu.usage").as_("usage")), "LAST(cpu.usage) AS usage");
    assert_eq!(render(time("1h")), "time(1h)");
    assert_eq!(render(func("PERCENTILE", [Value::from(ident("v")), Value::from(90)])), "PERCENTILE(v, 90)");
    assert_eq!(render(func("NOW", Vec::<Value>::new())), "NOW()");
    assert_eq!(render(sum("v").mul(2)), "SUM(v)*2");
}

#[test]
fn expression_lists_parenthesize_only_multiple_children() {
    assert_eq!(render(and([ident("a").eq(1)])), "(a = 1)");
    assert_eq!(
        render(and([ident("a").eq(1), ident("b").eq(2)])),
        "((a = 1) AND (b = 2))"
    );
    assert_eq!(
        render(or([ident("a").eq(1), ident("b").eq(2), ident("c").eq(3)])),
        "((a = 1) OR (b = 2) OR (c = 3))"
    );
    assert_eq!(render(and(Vec::<Expression>::new())), "");

    let nested = and([
        Expression::from(ident("a").eq(1)),
        Expression::from(or(Vec::<Expression>::new())),
    ]);
    assert_eq!(render(nested), "(a = 1)");
}

#[test]
fn map_shorthand_is_deterministic() {
    let forward = Ex::new().set("host", "a").set_op("value", Op::new().set("gt", 1));
    let backward = Ex::new().set_op("value", Op::new().set("gt", 1)).set("host", "a");
    assert_eq!(render(forward), "((host = 'a') AND (value > 1))");
    assert_eq!(render(backward), "((host = 'a') AND (value > 1))");

    let ors = ExOr::new().set("b", 2).set("a", 1);
    assert_eq!(render(ors), "((a = 1) OR (b = 2))");

    let ranged = Ex::new().set_op("v", Op::new().set("lt", 10).set("gt", 1));
    assert_eq!(render(ranged), "((v > 1) OR (v < 10))");
}

#[test]
fn op_keys_match_case_insensitively() {
    assert_eq!(render(Ex::new().set_op("v", Op::new().set("GT", 1))), "(v > 1)");
    assert_eq!(
        render(Ex::new().set_op("v", Op::new().set("Lte", 5).set("NEQ", 0))),
        "((v <= 5) OR (v != 0))"
    );

    let bad = Ex::new().set_op("v", Op::new().set("Between", 1));
    assert_eq!(render_err(bad), QbError::UnsupportedExpressionType("Between".into()));
}

#[test]
fn maps_expanding_to_nothing_are_dropped() {
    let empty = Ex::new().set_op("v", Op::new());
    assert!(Expression::from(empty.clone()).is_empty_list());
    assert!(Expression::from(ExOr::new().set_op("v", Op::new())).is_empty_list());
    assert_eq!(render(and([Expression::from(empty.clone())])), "");

    let mixed = and([Expression::from(ident("a").eq(1)), Expression::from(empty)]);
    assert_eq!(mixed.len(), 1);
    assert_eq!(render(mixed), "(a = 1)");

    let failing = Expression::from(Ex::new().set_op("v", Op::new().set("like", "x")));
    assert!(!failing.is_empty_list());
}

#[test]
fn map_shorthand_errors_propagate() {
    let bad = Ex::new().set_op("v", Op::new().set("like", "x"));
    assert_eq!(render_err(bad), QbError::UnsupportedExpressionType("like".into()));
}

#[test]
fn column_lists_are_comma_separated() {
    assert_eq!(render(ColumnList::new(cols!["a", count("b").as_("n")])), "a, COUNT(b) AS n");
}

#[test]
fn custom_escape_table() {
    let dialect = DialectOptions::default().with_escape('\\', "\\\\");
    assert_eq!(
        expression_sql(&dialect, ident("p").eq("C:\\tmp")).unwrap(),
        "(p = 'C:\\\\tmp')"
    );
}

fn clauses_from(table: &str) -> SelectClauses {
    let mut clauses = SelectClauses::new();
    clauses.set_from(ColumnList::new([table]));
    clauses
}

#[test]
fn select_defaults_to_star() {
    let sql = to_select_sql(&DialectOptions::default(), &clauses_from("cpu")).unwrap();
    assert_eq!(sql, "SELECT * FROM cpu");

    let mut clauses = clauses_from("cpu");
    clauses.set_select(ColumnList::default());
    let sql = to_select_sql(&DialectOptions::default(), &clauses).unwrap();
    assert_eq!(sql, "SELECT * FROM cpu");
}

#[test]
fn select_renders_fragments_in_dialect_order() {
    let mut clauses = clauses_from("cpu");
    clauses.set_select(ColumnList::new(cols![last("usage").as_("usage")]));
    clauses.where_append(vec![ident("host").eq("a").into(), ident("ts").gt(now_with("-1d")).into()]);
    clauses.set_partition_by(ColumnList::new(["region"]));
    clauses.set_group_by(ColumnList::new(["host"]));
    clauses.set_interval("1h");
    clauses.set_fill(Some(Fill::from("PREV")));
    clauses.set_order(vec![ident("ts").desc()]);
    clauses.set_limit(Some(5));
    clauses.set_offset(10);
    clauses.set_timezone("UTC");

    let sql = to_select_sql(&DialectOptions::default(), &clauses).unwrap();
    assert_eq!(
        sql,
        "SELECT LAST(usage) AS usage FROM cpu WHERE ((host = 'a') AND (ts > NOW-1d)) \
         PARTITION BY region GROUP BY host INTERVAL(1h) FILL(PREV) ORDER BY ts DESC \
         LIMIT 5 OFFSET 10"
    );
}

#[test]
fn fill_variants() {
    let cases = [
        (Fill::from("NULL"), " FILL(NULL)"),
        (Fill::from(0), " FILL(VALUE, 0)"),
        (Fill::from(1.5), " FILL(VALUE, 1.5)"),
        (Fill::from(Value::from("x")), " FILL('x')"),
    ];
    for (fill, expected) in cases {
        let mut clauses = clauses_from("cpu");
        clauses.set_fill(Some(fill));
        let sql = to_select_sql(&DialectOptions::default(), &clauses).unwrap();
        assert_eq!(sql, format!("SELECT * FROM cpu{expected}"));
    }
}

#[test]
fn non_finite_floats_are_encode_errors() {
    assert!(matches!(render_value(f64::NAN), Err(QbError::Encode(_))));
    assert!(matches!(render_value(f64::INFINITY), Err(QbError::Encode(_))));

    let mut clauses = clauses_from("cpu");
    clauses.set_fill(Some(Fill::from(f64::NEG_INFINITY)));
    let err = to_select_sql(&DialectOptions::default(), &clauses).unwrap_err();
    assert!(matches!(err, QbError::Encode(_)));
}

#[test]
fn zero_offset_and_empty_interval_are_omitted() {
    let mut clauses = clauses_from("cpu");
    clauses.set_offset(0);
    clauses.set_interval("");
    let sql = to_select_sql(&DialectOptions::default(), &clauses).unwrap();
    assert_eq!(sql, "SELECT * FROM cpu");
}

#[test]
fn timezone_fragment_is_dialect_controlled() {
    let mut clauses = clauses_from("cpu");
    clauses.set_timezone("Asia/Shanghai");

    let sql = to_select_sql(&DialectOptions::default(), &clauses).unwrap();
    assert_eq!(sql, "SELECT * FROM cpu");

    let dialect = DialectOptions::default().with_timezone_fragment(" TZ");
    let sql = to_select_sql(&dialect, &clauses).unwrap();
    assert_eq!(sql, "SELECT * FROM cpu TZ('Asia/Shanghai')");
}

#[test]
fn unsupported_fragment_halts_compilation() {
    let dialect = DialectOptions::default().with_select_order([
        SqlFragment::Select,
        SqlFragment::Join,
        SqlFragment::From,
    ]);
    let err = to_select_sql(&dialect, &clauses_from("cpu")).unwrap_err();
    assert_eq!(
        err,
        QbError::UnsupportedFragment {
            statement: "SELECT",
            fragment: SqlFragment::Join,
        }
    );
}

#[test]
fn first_error_is_reported() {
    let mut clauses = clauses_from("cpu");
    clauses.set_select(ColumnList::new([Identifier::default()]));
    clauses.where_append(vec![ident("x").like("a").into()]);
    let err = to_select_sql(&DialectOptions::default(), &clauses).unwrap_err();
    assert_eq!(err, QbError::EmptyIdentifier);
}

#[test]
fn dialect_can_reorder_fragments() {
    let dialect = DialectOptions::default().with_select_order([
        SqlFragment::Select,
        SqlFragment::From,
        SqlFragment::Limit,
        SqlFragment::Where,
    ]);
    let mut clauses = clauses_from("cpu");
    clauses.set_limit(Some(1));
    clauses.where_append(vec![ident("a").eq(1).into()]);
    assert_eq!(
        to_select_sql(&dialect, &clauses).unwrap(),
        "SELECT * FROM cpu LIMIT 1 WHERE (a = 1)"
    );
}

#[test]
fn shared_default_is_reused() {
    let a = DialectOptions::shared_default();
    let b = DialectOptions::shared_default();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(*a, DialectOptions::default());
}

#[test]
fn truncation_respects_char_boundaries() {
    assert_eq!(truncate_sql_bytes("SELECT", 10), "SELECT");
    assert_eq!(truncate_sql_bytes("SELECT", 3), "SEL");
    assert_eq!(truncate_sql_bytes("é", 1), "");
}
