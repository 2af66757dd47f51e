use criterion::{black_box, criterion_group, criterion_main, Criterion};

use studydrill_core::parser::{inspect_document, parse_document};

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    // Documents of various section counts
    let small = generate_document(5);
    let medium = generate_document(50);
    let large = generate_document(200);

    group.bench_function("5_sections", |b| {
        b.iter(|| parse_document(black_box(&small)))
    });

    group.bench_function("50_sections", |b| {
        b.iter(|| parse_document(black_box(&medium)))
    });

    group.bench_function("200_sections", |b| {
        b.iter(|| parse_document(black_box(&large)))
    });

    let noisy = {
        let mut s = generate_document(50);
        for i in 0..50 {
            s.push_str(&format!(
                "\n## Example-heavy {i}\n**Description:** short.\n**Example:**\n```\nlet x = {i};\n```\n"
            ));
        }
        s
    };

    group.bench_function("50_sections_with_examples", |b| {
        b.iter(|| parse_document(black_box(&noisy)))
    });

    group.finish();
}

fn bench_inspect_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("inspect_document");

    let clean = generate_document(50);
    let broken = {
        let mut s = String::new();
        for i in 0..50 {
            s.push_str(&format!("\n## Broken {i}\n**Example:**\nonly an example\n"));
        }
        s
    };

    group.bench_function("clean_50", |b| {
        b.iter(|| inspect_document(black_box(&clean)))
    });

    group.bench_function("broken_50", |b| {
        b.iter(|| inspect_document(black_box(&broken)))
    });

    group.finish();
}

fn generate_document(n: usize) -> String {
    let mut s = String::from("# Benchmark Topic\n");
    for i in 0..n {
        s.push_str(&format!(
            "\n## Concept {i}\n**Description:** Definition number {i} spread\nover two lines.\n**Comparison:** Unlike concept {}.\n",
            i + 1
        ));
    }
    s
}

criterion_group!(benches, bench_parse_document, bench_inspect_document);
criterion_main!(benches);
