use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;
use studydrill_core::generator::{generate, generate_mixed, GeneratorConfig};
use studydrill_core::model::{Concept, Language, QuestionKinds, SessionMode};
use studydrill_core::shuffle::fisher_yates;

fn make_concepts(n: usize) -> Vec<Concept> {
    (0..n)
        .map(|i| Concept {
            name: format!("Concept {i}"),
            description: format!("Definition number {i} with a sentence of text."),
            comparison: format!("Unlike concept {}, this one is different.", i + 1),
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for &n in &[10usize, 50, 200] {
        let concepts = make_concepts(n);
        let config = GeneratorConfig {
            kinds: QuestionKinds::Both,
            ..GeneratorConfig::default()
        };
        group.bench_function(format!("both_{n}_concepts"), |b| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                generate(black_box(&concepts), black_box(&config), &mut rng)
            })
        });
    }

    let concepts = make_concepts(100);
    let choice_only = GeneratorConfig {
        kinds: QuestionKinds::Choice,
        ..GeneratorConfig::default()
    };
    group.bench_function("choice_100_concepts", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            generate(black_box(&concepts), black_box(&choice_only), &mut rng)
        })
    });

    group.finish();
}

fn bench_generate_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_mixed");

    let topics: Vec<(String, Vec<Concept>)> = (0..5)
        .map(|i| (format!("topic-{i}"), make_concepts(30)))
        .collect();
    let config = GeneratorConfig {
        questions_per_topic: 20,
        kinds: QuestionKinds::Both,
        mode: SessionMode::Mixed,
        language: Language::En,
    };

    group.bench_function("5_topics_20_each", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            generate_mixed(black_box(&topics), black_box(&config), &mut rng)
        })
    });

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fisher_yates");

    for &n in &[10usize, 1000] {
        group.bench_function(format!("{n}_items"), |b| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let mut items: Vec<usize> = (0..n).collect();
                fisher_yates(black_box(&mut items), &mut rng);
                items
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_generate_mixed, bench_shuffle);
criterion_main!(benches);
