use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use subseq::combinatorial::{SubsequenceEnumerator, SubsequenceMemo, Traversal};

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("subsequences");
    let enumerator = SubsequenceEnumerator::new();

    for n in [8usize, 12, 16] {
        let input: String = ('a'..='z').take(n).collect();

        group.bench_with_input(BenchmarkId::new("preorder", n), &input, |b, s| {
            b.iter(|| enumerator.enumerate(black_box(s), Traversal::Preorder))
        });
        group.bench_with_input(BenchmarkId::new("power_set", n), &input, |b, s| {
            b.iter(|| enumerator.enumerate(black_box(s), Traversal::PowerSet))
        });
        group.bench_with_input(BenchmarkId::new("lexicographic", n), &input, |b, s| {
            b.iter(|| enumerator.enumerate_all(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("for_each", n), &input, |b, s| {
            b.iter(|| enumerator.for_each(black_box(s), |sub| {
                black_box(sub);
            }))
        });
    }

    group.finish();
}

fn bench_shared_memo(c: &mut Criterion) {
    let enumerator = SubsequenceEnumerator::new();
    let inputs: Vec<String> = ('a'..='h')
        .map(|head| format!("{}ijklmnopqr", head))
        .collect();

    c.bench_function("subsequences_shared_memo", |b| {
        b.iter(|| {
            let mut memo = SubsequenceMemo::new();
            for input in &inputs {
                black_box(enumerator.enumerate_with_memo(input, &mut memo)).ok();
            }
        })
    });
}

criterion_group!(benches, bench_traversals, bench_shared_memo);
criterion_main!(benches);
