use std::hint::black_box;

use balatro_poker::cards::parse_cards;
use balatro_poker::deck::Deck;
use balatro_poker::evaluator::{analyze, classify};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_classify(c: &mut Criterion) {
    let royal = parse_cards("Ts Js Qs Ks As").unwrap();
    let junk = parse_cards("2c 5d 9h Js Kc").unwrap();

    let mut g = c.benchmark_group("classify");
    g.bench_with_input(BenchmarkId::new("royal_flush", "T-A spades"), &royal, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("high_card", "2,5,9,J,K"), &junk, |b, input| {
        b.iter(|| classify(black_box(input)))
    });
    g.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut g = c.benchmark_group("analyze");
    for size in [5usize, 8, 12] {
        let mut deck = Deck::shuffled(7);
        let hand = deck.draw_n(size);
        g.bench_with_input(BenchmarkId::from_parameter(size), &hand, |b, input| {
            b.iter(|| analyze(black_box(input)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_classify, bench_analyze);
criterion_main!(benches);
