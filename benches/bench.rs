use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use dynarray::{patterns, quicksort, DynArray};

fn bench_sort(
    c: &mut Criterion,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    for test_size in [20usize, 1_000, 10_000] {
        c.bench_function(&format!("quicksort-{pattern_name}-{test_size}"), |b| {
            b.iter_batched(
                || DynArray::from_slice(&pattern_provider(test_size)),
                |mut test_data| quicksort::sort(black_box(&mut test_data)).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_push(c: &mut Criterion) {
    for test_size in [20usize, 1_000, 10_000] {
        c.bench_function(&format!("push-{test_size}"), |b| {
            b.iter_batched(
                || patterns::random(test_size),
                |test_data| {
                    let mut arr = DynArray::new();
                    for val in test_data {
                        arr.push(black_box(val));
                    }
                    arr
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let sort_patterns: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
    ];

    bench_push(c);
    for (pattern_name, pattern_provider) in &sort_patterns {
        bench_sort(c, pattern_name, pattern_provider);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
