use criterion::{criterion_group, criterion_main, Criterion};
use dialcodes_core::prelude::*;
use std::hint::black_box;

fn pipeline(c: &mut Criterion) {
    let db = CountryDirectory::bundled();

    c.bench_function("visible_list_unfiltered", |b| {
        let criteria = FilterCriteria::new("en");
        b.iter(|| black_box(db.visible(black_box(&criteria))).len())
    });

    c.bench_function("visible_list_search_keystroke", |b| {
        let criteria = FilterCriteria::new("fr")
            .exclude(["US", "CA"])
            .search("ile");
        b.iter(|| black_box(db.visible(black_box(&criteria))).len())
    });

    c.bench_function("sections_with_popular", |b| {
        let criteria = FilterCriteria::new("de")
            .popular(["DE", "AT", "CH"])
            .policy(PopularPolicy::Dedupe);
        b.iter(|| black_box(db.sections(black_box(&criteria))).body.len())
    });

    c.bench_function("snapshot_decode", |b| {
        let bytes = db.to_bytes().unwrap();
        b.iter(|| CountryDirectory::from_bytes(black_box(&bytes), None).map(|d| d.len()))
    });
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
