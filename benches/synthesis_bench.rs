//! Benchmark for the metric and suggestion synthesizers and the
//! filter/paginate pipeline that sits on top of them.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keywordmap::synth::rng::for_seed;
use keywordmap::{
    filter_and_paginate, synthesize_metrics, synthesize_suggestions, SearchIntent,
    SuggestionFilter,
};
use std::hint::black_box;

fn benchmark_metric_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("metric_synthesis");

    for keyword in ["seo", "seo tools", "long tail keyword research strategy"] {
        group.bench_with_input(
            BenchmarkId::from_parameter(keyword),
            keyword,
            |b, keyword| {
                let mut rng = for_seed(Some(42));
                b.iter(|| black_box(synthesize_metrics(black_box(keyword), &mut rng)));
            },
        );
    }

    group.finish();
}

fn benchmark_suggestion_synthesis(c: &mut Criterion) {
    c.bench_function("suggestion_synthesis", |b| {
        let mut rng = for_seed(Some(42));
        b.iter(|| black_box(synthesize_suggestions(black_box("keyword research"), &mut rng)));
    });
}

fn benchmark_filter_and_paginate(c: &mut Criterion) {
    let mut rng = for_seed(Some(42));
    let suggestions = synthesize_suggestions("keyword research", &mut rng);

    let mut group = c.benchmark_group("filter_and_paginate");

    group.bench_function("unfiltered", |b| {
        let filter = SuggestionFilter::new();
        b.iter(|| black_box(filter_and_paginate(&suggestions, &filter, 1, 10)));
    });

    group.bench_function("text_and_intent", |b| {
        let filter = SuggestionFilter {
            text: "best".to_string(),
            intent: Some(SearchIntent::Commercial),
            ..Default::default()
        };
        b.iter(|| black_box(filter_and_paginate(&suggestions, &filter, 1, 10)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_metric_synthesis,
    benchmark_suggestion_synthesis,
    benchmark_filter_and_paginate
);
criterion_main!(benches);
