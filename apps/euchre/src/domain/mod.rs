//! Domain layer: the Euchre rule engine.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod game;
pub mod player_view;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, effective_suit, hand_has_suit};
pub use cards_types::{Card, Color, Rank, Suit};
pub use deck::{Deck, DeckKind};
pub use seed_derivation::{derive_dealing_seed, derive_player_seed};
pub use state::{Seat, TeamId};
