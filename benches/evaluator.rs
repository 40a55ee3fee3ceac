use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_sim::agents::RandomBetting;
use holdem_sim::cards::{parse_cards, Card};
use holdem_sim::config::TableConfig;
use holdem_sim::deck::Deck;
use holdem_sim::evaluator::evaluate_hand;
use holdem_sim::game::Game;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap_or_default()
}

fn bench_evaluate_hand(c: &mut Criterion) {
    let mut g = c.benchmark_group("evaluate_hand");
    for (name, hand) in [
        ("high_card", "Ah Kd 7s 5c 2d"),
        ("royal_flush", "As Ks Qs Js Ts"),
        ("full_house_7", "Ac Ad Ah 9s 9c 4d 2h"),
        ("straight_7", "3c 4d 5h 6s 7c Kd Kh"),
    ] {
        let input = cards(hand);
        g.bench_with_input(BenchmarkId::new(name, hand), &input, |b, input| {
            b.iter(|| evaluate_hand(black_box(input)))
        });
    }
    g.finish();
}

fn bench_shuffle_and_deal(c: &mut Criterion) {
    c.bench_function("shuffle_and_deal", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut deck = Deck::standard();
            deck.shuffle_seeded(seed);
            deck.deal(11)
        })
    });
}

fn bench_play_hand(c: &mut Criterion) {
    c.bench_function("play_hand", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut game = Game::seeded(TableConfig::default(), seed).ok()?;
            game.play(&mut RandomBetting).ok()
        })
    });
}

criterion_group!(benches, bench_evaluate_hand, bench_shuffle_and_deal, bench_play_hand);
criterion_main!(benches);
