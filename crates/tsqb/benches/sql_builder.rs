use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;
use tsqb::exp::ExValue;
use tsqb::prelude::*;

/// SELECT col0, col1, ... FROM t WHERE (col0 = 0) AND (col1 = 1) ...
fn build_select(n: usize) -> QueryBuilder {
    let cols: Vec<Expression> = (0..n).map(|i| ident(&format!("col{i}")).into()).collect();
    let conds: Vec<Expression> = (0..n)
        .map(|i| ident(&format!("col{i}")).eq(i as i64).into())
        .collect();
    QueryBuilder::new().from("t").select(cols).where_all(conds)
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.clone().to_sql()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).to_sql()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let qb = from("t").where_(ident("id").in_(values.clone()));
                black_box(qb.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_map_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/map_expansion");
    let dialect = Arc::new(DialectOptions::default());

    for n in [1, 5, 10, 50] {
        let ex: Ex = (0..n)
            .map(|i| (format!("col{i}"), ExValue::Op(Op::new().set("gte", i).set("lt", i + 10))))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &ex, |b, ex| {
            b.iter(|| {
                let qb = QueryBuilder::new()
                    .with_dialect(dialect.clone())
                    .from("t")
                    .where_(ex.clone());
                black_box(qb.to_sql());
            });
        });
    }

    group.finish();
}

fn bench_calendar_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/calendar_interval");

    for tz in ["UTC", "Asia/Shanghai", "America/New_York"] {
        group.bench_with_input(BenchmarkId::from_parameter(tz), &tz, |b, &tz| {
            b.iter(|| {
                let qb = from("t").interval("1d").timezone(tz);
                black_box(qb.to_sql());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_render,
    bench_in_list,
    bench_map_expansion,
    bench_calendar_interval
);
criterion_main!(benches);
