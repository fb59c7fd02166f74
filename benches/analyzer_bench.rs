use authorify_readability::markup::strip_markup;
use authorify_readability::{AnalysisCache, AnalysisOptions, Analyzer, TokenizedText};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const PARAGRAPH: &str = "The rain fell on the old house. Mara counted the drops slowly, \
    because she felt very anxious about the letter that was written by her brother. \
    In order to stay calm, she walked to the window, opened it, and listened while the wind, \
    which had risen since noon, rattled the shutters. He was sad. The dog barked twice!";

// WHY: a chapter-sized input keeps per-call setup out of the measurement
fn chapter() -> String {
    PARAGRAPH.repeat(200)
}

fn bench_analysis(c: &mut Criterion) {
    let text = chapter();
    let analyzer = Analyzer::with_default_config().unwrap();
    let options = AnalysisOptions::default();

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("tokenize", |b| {
        b.iter(|| TokenizedText::new(black_box(&text)));
    });

    group.bench_function("analyze", |b| {
        b.iter(|| analyzer.analyze(black_box(&text), &options).unwrap());
    });

    group.bench_function("analyze_cached", |b| {
        let mut cache = AnalysisCache::default();
        b.iter(|| cache.get_or_analyze(&analyzer, black_box(&text), &options).unwrap());
    });

    group.finish();
}

fn bench_markup(c: &mut Criterion) {
    let html: String = (0..200)
        .map(|i| format!("<h2>Scene {i}</h2><p>{PARAGRAPH} &mdash; &ldquo;Go.&rdquo;</p>\n"))
        .collect();

    let mut group = c.benchmark_group("markup");
    group.throughput(Throughput::Bytes(html.len() as u64));
    group.bench_function("strip_markup", |b| {
        b.iter(|| strip_markup(black_box(&html)));
    });
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_markup);
criterion_main!(benches);
