//! Core card-related types: Card, Rank, Suit, Color

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// The other suit of the same color (♠↔♣, ♥↔♦).
    pub fn same_color(self) -> Suit {
        match self {
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value: 7..=10, J=11, Q=12, K=13, A=14.
    pub fn value(self) -> u8 {
        match self {
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }
}

/// A playing card.
///
/// Identity is `(rank, suit)`. The effective suit is round-scoped state that
/// only differs from `suit` for the left bower once trump is known, so it takes
/// no part in equality, hashing or ordering.
#[derive(Debug, Copy, Clone)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    effective_suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            suit,
            rank,
            effective_suit: suit,
        }
    }

    /// The suit this card counts as for following and winning tricks.
    pub fn effective_suit(&self) -> Suit {
        self.effective_suit
    }

    /// Recompute the effective suit for `trump`.
    ///
    /// The Jack of trump's same-color suit becomes trump; every other card
    /// reverts to its printed suit.
    pub fn with_trump(self, trump: Suit) -> Self {
        let effective_suit = if self.rank == Rank::Jack && self.suit == trump.same_color() {
            trump
        } else {
            self.suit
        };
        Self {
            effective_suit,
            ..self
        }
    }

    /// The card with no trump applied.
    pub fn plain(self) -> Self {
        Self::new(self.rank, self.suit)
    }

    pub fn is_right_bower(&self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    pub fn is_left_bower(&self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.same_color()
    }

    pub fn is_bower(&self, trump: Suit) -> bool {
        self.is_right_bower(trump) || self.is_left_bower(trump)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

// Note: Ord on Card is only for stable sorting: suit order S<H<C<D then rank order.
// Do not use for trick resolution; see `cards_logic::card_beats`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
