//! Parse/serialize throughput over a synthetic document.

use criterion::{criterion_group, criterion_main, Criterion};
use jed_core::{parse_root, search_by_key, serialize, validate};

/// Build a moderately nested document with `records` array entries.
fn sample_document(records: usize) -> String {
    let mut out = String::from("{\"records\": [");
    for i in 0..records {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&format!(
            "{{\"id\": {i}, \"name\": \"record {i}\", \"score\": {}.5, \
             \"tags\": [\"a\", \"b\"], \"meta\": {{\"active\": true, \"note\": null}}}}",
            i % 100
        ));
    }
    out.push_str("]}");
    out
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_document(500);
    c.bench_function("parse_500_records", |b| {
        b.iter(|| parse_root(std::hint::black_box(&doc)).unwrap())
    });
}

fn bench_validate(c: &mut Criterion) {
    let doc = sample_document(500);
    c.bench_function("validate_500_records", |b| {
        b.iter(|| validate(std::hint::black_box(&doc)))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let root = parse_root(&sample_document(500)).unwrap();
    c.bench_function("serialize_500_records", |b| {
        b.iter(|| serialize(std::hint::black_box(&root)))
    });
}

fn bench_search(c: &mut Criterion) {
    let root = parse_root(&sample_document(500)).unwrap();
    c.bench_function("search_500_records", |b| {
        b.iter(|| search_by_key(std::hint::black_box(&root), "score"))
    });
}

criterion_group!(benches, bench_parse, bench_validate, bench_serialize, bench_search);
criterion_main!(benches);
