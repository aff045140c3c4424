//! Pipeline benchmarks over a synthetic dataset sized well past the bundled one.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use govdb_core::prelude::*;

fn synthetic(n: usize) -> Vec<Country> {
    let base = GovDb::load().unwrap();
    base.countries()
        .iter()
        .cycle()
        .take(n)
        .enumerate()
        .map(|(i, c)| {
            let mut c = c.clone();
            c.id = format!("{}-{i}", c.id);
            c.score.overall = (i % 97) as f64;
            c
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let records = synthetic(10_000);
    let criteria = Criteria::new()
        .search("a")
        .region("Europe")
        .sort_by(SortSpec::default());

    c.bench_function("query_search_region_sort_10k", |b| {
        b.iter(|| query(black_box(&records), black_box(&criteria)).unwrap())
    });

    let by_name = Criteria::new().sort_by(SortSpec::ascending("name").unwrap());
    c.bench_function("query_sort_by_name_10k", |b| {
        b.iter(|| query(black_box(&records), black_box(&by_name)).unwrap())
    });
}

fn bench_export(c: &mut Criterion) {
    let records = synthetic(10_000);

    c.bench_function("to_delimited_text_full_10k", |b| {
        b.iter(|| to_delimited_text(black_box(&records), FULL_COLUMNS).unwrap())
    });

    c.bench_function("to_json_10k", |b| {
        b.iter(|| to_json(black_box(&records)).unwrap())
    });
}

criterion_group!(benches, bench_query, bench_export);
criterion_main!(benches);
