use cellsplit_core::{
    detect_multivalue_columns, split_and_explode, ExpandMode, SplitOptions, Tokenizer,
    DEFAULT_DELIMITER_PATTERN,
};
use cellsplit_table::{CellValue, Dataset};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_table(rows: usize) -> Dataset {
    let mut dataset = Dataset::new(["CPU", "TTS", "Pages/s", "Notes"]).unwrap();
    for i in 0..rows {
        dataset
            .row_append(vec![
                format!("Apple M3 Max ({} cores)", 8 + i % 8),
                format!("{} s {} s", 100 + i, 90 + i),
                format!("1.{:02} 0.{:02}", i % 100, (i * 7) % 100),
                "tables; figures".to_string(),
            ])
            .unwrap();
    }
    dataset
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let plain = Tokenizer::default();
    let smart = Tokenizer::new(DEFAULT_DELIMITER_PATTERN, true).unwrap();

    let delimited = CellValue::from("alpha; beta, gamma / delta");
    let number_unit = CellValue::from("177 s 167 s");
    let bare_numbers = CellValue::from("1.27 1.34");
    let model_name = CellValue::from("Apple M3 Max (16 cores)");

    group.bench_function("plain_delimited", |b| {
        b.iter(|| plain.tokenize(black_box(&delimited)))
    });

    group.bench_function("smart_number_unit", |b| {
        b.iter(|| smart.tokenize(black_box(&number_unit)))
    });

    group.bench_function("smart_bare_numbers", |b| {
        b.iter(|| smart.tokenize(black_box(&bare_numbers)))
    });

    group.bench_function("smart_fallback", |b| {
        b.iter(|| smart.tokenize(black_box(&model_name)))
    });

    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    for size in [10, 100, 1000].iter() {
        let dataset = benchmark_table(*size);
        group.bench_with_input(BenchmarkId::new("columns", size), size, |b, _| {
            b.iter(|| detect_multivalue_columns(black_box(&dataset)))
        });
    }

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    let columns = ["TTS", "Pages/s"];

    for size in [10, 100, 1000].iter() {
        let dataset = benchmark_table(*size);

        let cartesian = SplitOptions::default().with_smart(true);
        group.bench_with_input(BenchmarkId::new("cartesian", size), size, |b, _| {
            b.iter(|| split_and_explode(black_box(&dataset), &columns, &cartesian))
        });

        let pairwise = cartesian.clone().with_mode(ExpandMode::Pairwise);
        group.bench_with_input(BenchmarkId::new("pairwise", size), size, |b, _| {
            b.iter(|| split_and_explode(black_box(&dataset), &columns, &pairwise))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_detect, bench_expand);
criterion_main!(benches);
