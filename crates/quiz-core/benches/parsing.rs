use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quiz_core::parser::ProblemReader;
use quiz_core::stdin::first_token;

fn bench_problem_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("problem_reader");

    // Generate records files of various sizes
    let small = generate_problems_csv(12);
    let medium = generate_problems_csv(500);
    let large = generate_problems_csv(10_000);
    let quoted = generate_quoted_csv(500);

    for (name, input) in [
        ("12_rows", &small),
        ("500_rows", &medium),
        ("10000_rows", &large),
        ("500_quoted_rows", &quoted),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                ProblemReader::from_reader(black_box(input.as_bytes()))
                    .filter_map(Result::ok)
                    .count()
            })
        });
    }

    group.finish();
}

fn bench_first_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_token");

    group.bench_function("plain", |b| b.iter(|| first_token(black_box("42\n"))));
    group.bench_function("padded", |b| {
        b.iter(|| first_token(black_box("   42    trailing words\r\n")))
    });

    group.finish();
}

fn generate_problems_csv(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!("{i}+{i}, {} \n", i * 2));
    }
    s
}

fn generate_quoted_csv(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!("\"what is {i}, doubled?\",{}\n", i * 2));
    }
    s
}

criterion_group!(benches, bench_problem_reader, bench_first_token);
criterion_main!(benches);
