// Proptest generators for domain types.
// Cards within one generated value are always unique.

use proptest::prelude::*;

use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Spades),
        Just(Suit::Hearts),
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// `count` distinct cards from the 32-card deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all: Vec<Card> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        for i in 0..count.min(all.len()) {
            let j = rng.random_range(i..all.len());
            all.swap(i, j);
        }
        all.truncate(count);
        all
    })
}

/// A hand of 1..=5 cards.
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1usize..=5).prop_flat_map(unique_cards)
}

pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// A pile of 3 or 4 plays (going alone or not), seats in call order from `first`.
pub fn pile() -> impl Strategy<Value = Vec<(Seat, Card)>> {
    (seat(), 3usize..=4)
        .prop_flat_map(|(first, n)| (Just(first), unique_cards(n)))
        .prop_map(|(first, cards)| {
            cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| ((first + i as u8) % 4, c))
                .collect()
        })
}
