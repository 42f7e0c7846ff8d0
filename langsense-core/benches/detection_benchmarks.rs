//! Detection throughput benchmarks
//!
//! Run with: cargo bench --bench detection_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use langsense_core::{Lexicon, LanguageDetector};
use std::hint::black_box;

const SAMPLES: [&str; 4] = [
    "I am going to office",
    "मैं आज ऑफिस जा रहा हूँ",
    "Main office ja raha hoon",
    "Hello! कैसे हैं आप?",
];

/// Repeat the samples until the text reaches `size` bytes
fn generate_text(size: usize) -> String {
    let mut text = String::with_capacity(size + 64);
    for sample in SAMPLES.iter().cycle() {
        if text.len() >= size {
            break;
        }
        text.push_str(sample);
        text.push(' ');
    }
    text
}

fn bench_single_snippets(c: &mut Criterion) {
    let mut group = c.benchmark_group("snippets");
    let detector = LanguageDetector::new();

    for (i, sample) in SAMPLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("detect", i), sample, |b, text| {
            b.iter(|| detector.detect(black_box(text)));
        });
    }

    group.finish();
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let detector = LanguageDetector::new();

    for size in [256, 1024, 10_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("detect", size), &text, |b, text| {
            b.iter(|| detector.detect(black_box(text)));
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let detector = LanguageDetector::new();

    for count in [100, 1000] {
        let texts: Vec<&str> = SAMPLES.iter().cycle().take(count).copied().collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("detect_batch", count), &texts, |b, texts| {
            b.iter(|| detector.detect_batch(black_box(texts)));
        });
    }

    group.finish();
}

fn bench_lexicon_compile(c: &mut Criterion) {
    c.bench_function("compile_default_lexicon", |b| {
        b.iter(|| Lexicon::from_toml_str(black_box(Lexicon::embedded_toml())).unwrap());
    });
}

criterion_group!(
    benches,
    bench_single_snippets,
    bench_text_sizes,
    bench_batch,
    bench_lexicon_compile
);
criterion_main!(benches);
