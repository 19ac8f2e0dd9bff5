use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;

use pentomino_dlx::solve;

const ALL_LETTERS: [char; 12] = ['F', 'I', 'L', 'N', 'P', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];

/// Randomly picks a handful of distinct piece-count selections to bench.
fn randomized_selections() -> Vec<BTreeSet<char>> {
    let mut rng = rand::thread_rng();
    let mut selections = Vec::new();

    for piece_count in [4usize, 6, 8] {
        let mut letters = ALL_LETTERS;
        letters.shuffle(&mut rng);
        selections.push(letters[..piece_count].iter().copied().collect());
    }

    selections
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solve");

    for (i, selection) in randomized_selections().into_iter().enumerate() {
        let label = format!("{}-pieces", selection.len());
        group.bench_with_input(BenchmarkId::new(label, i), &selection, |b, selection| {
            b.iter(|| {
                let _ = solve(black_box(selection));
            })
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
