//! Benchmarks for panelvp conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic source documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panelvp::{ConvertOptions, Converter, JsonFormat, SourceDocument};

/// Creates a synthetic source document with a 2x3 panel grid per page.
///
/// Every fifth page has a single full-page panel so the compaction path
/// is exercised too.
fn create_test_document(page_count: usize, is_rtl: bool) -> String {
    let mut pages = Vec::with_capacity(page_count);
    let mut viewport_count = 0;

    for i in 0..page_count {
        let page_id = 1000 + i;
        let rects: Vec<(u32, u32, u32, u32)> = if i % 5 == 0 {
            vec![(0, 0, 1988, 3056)]
        } else {
            (0..6)
                .map(|n| ((n % 2) * 994, (n / 2) * 1018, 994, 1018))
                .collect()
        };

        let count = rects.len();
        let viewports: Vec<String> = rects
            .iter()
            .enumerate()
            .map(|(n, (x, y, w, h))| {
                let sort_order = if is_rtl { count - n } else { n + 1 };
                format!(
                    r#"{{"id":{},"page_id":{},"sort_order":{},"pos_x":{},"pos_y":{},"width":{},"height":{},"ext_url":null}}"#,
                    page_id * 10 + n,
                    page_id,
                    sort_order,
                    x,
                    y,
                    w,
                    h
                )
            })
            .collect();
        viewport_count += count;

        pages.push(format!(
            r#"{{"id":{},"book_id":1,"sort_order":{},"skip":false,"is_preview":false,"title":null,"ext_url":null,"width":1988,"height":3056,"viewports":[{}]}}"#,
            page_id,
            i + 1,
            viewports.join(",")
        ));
    }

    format!(
        r#"{{"id":1,"page_count":{},"pages":[{}],"is_rtl":{},"viewport_count":{}}}"#,
        page_count,
        pages.join(","),
        is_rtl,
        viewport_count
    )
}

/// Benchmark parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for page_count in [10, 100, 500].iter() {
        let json = create_test_document(*page_count, false);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| SourceDocument::from_json_str(black_box(&json)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark conversion of already parsed documents.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let converter = Converter::new(ConvertOptions::default());

    for (name, is_rtl) in [("ltr", false), ("rtl", true)] {
        let doc = SourceDocument::from_json_str(&create_test_document(500, is_rtl)).unwrap();

        group.bench_function(format!("500_pages_{}", name), |b| {
            b.iter(|| converter.convert(black_box(&doc)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rendering of the output array.
fn bench_rendering(c: &mut Criterion) {
    let doc = SourceDocument::from_json_str(&create_test_document(500, false)).unwrap();
    let result = Converter::default().convert(&doc).unwrap();

    c.bench_function("render_compact", |b| {
        b.iter(|| panelvp::render::to_json(black_box(&result.pages), JsonFormat::Compact).unwrap());
    });
}

criterion_group!(benches, bench_parsing, bench_conversion, bench_rendering);
criterion_main!(benches);
