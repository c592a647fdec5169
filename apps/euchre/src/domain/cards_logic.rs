//! Card game logic: effective suits in hands, comparing card strength under trump

use super::cards_types::{Card, Suit};

/// Effective suit of `card` once `trump` is fixed.
pub fn effective_suit(card: Card, trump: Suit) -> Suit {
    card.with_trump(trump).effective_suit()
}

pub fn hand_has_suit(hand: &[Card], suit: Suit, trump: Suit) -> bool {
    hand.iter().any(|&c| effective_suit(c, trump) == suit)
}

/// Ordering key of a card within a trick: (tier, strength).
///
/// Tier 2 is trump, 1 is the lead suit, 0 is any other suit. Within trump the
/// right bower is strongest, then the left bower, then A K Q 10 9 8 7.
fn trick_strength(card: Card, lead: Suit, trump: Suit) -> (u8, u8) {
    if card.is_right_bower(trump) {
        return (2, 16);
    }
    if card.is_left_bower(trump) {
        return (2, 15);
    }
    match effective_suit(card, trump) {
        s if s == trump => (2, card.rank.value()),
        s if s == lead => (1, card.rank.value()),
        _ => (0, card.rank.value()),
    }
}

/// Whether `challenger` takes the trick from the current `leader`.
///
/// Cards of a suit that is neither trump nor lead never win.
pub fn card_beats(challenger: Card, leader: Card, lead: Suit, trump: Suit) -> bool {
    let c = trick_strength(challenger, lead, trump);
    if c.0 == 0 {
        return false;
    }
    c > trick_strength(leader, lead, trump)
}
