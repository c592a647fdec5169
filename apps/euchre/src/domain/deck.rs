//! Euchre decks and deterministic shuffling.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Which ranks are in the deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    /// 7 through Ace in every suit: 32 cards.
    #[default]
    Full32,
    /// 9 through Ace in every suit: 24 cards.
    Short24,
}

const SHORT_RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl DeckKind {
    pub fn ranks(self) -> &'static [Rank] {
        match self {
            DeckKind::Full32 => &Rank::ALL,
            DeckKind::Short24 => &SHORT_RANKS,
        }
    }

    pub fn size(self) -> usize {
        self.ranks().len() * Suit::ALL.len()
    }
}

/// An ordered pile of cards. The top of the deck is the end of `cards`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every card of `kind`, suit by suit, in rank order.
    pub fn new(kind: DeckKind) -> Self {
        let mut cards = Vec::with_capacity(kind.size());
        for suit in Suit::ALL {
            for &rank in kind.ranks() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// The full 32-card deck.
    pub fn standard() -> Self {
        Self::new(DeckKind::Full32)
    }

    /// A deck of `kind` shuffled with a portable seeded RNG.
    ///
    /// The same seed always yields the same order on every platform.
    pub fn shuffled(kind: DeckKind, seed: u64) -> Self {
        let mut deck = Self::new(kind);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.shuffle_with(&mut rng);
        deck
    }

    /// A deck that deals exactly `top_first` in order, first element first.
    pub fn stacked(top_first: Vec<Card>) -> Self {
        let mut cards = top_first;
        cards.reverse();
        Self { cards }
    }

    /// Fisher-Yates shuffle using the caller's RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top, failing without side effects if too few remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::validation(
                ValidationKind::DeckExhausted,
                format!("cannot deal {n} cards from a deck of {}", self.cards.len()),
            ));
        }
        let split = self.cards.len() - n;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        Ok(dealt)
    }

    /// Return a card to the bottom of the deck.
    pub fn add(&mut self, card: Card) {
        self.cards.insert(0, card.plain());
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}
