//! What a seat is allowed to see when the engine asks it for a decision.

use serde::Serialize;

use crate::domain::state::Seat;
use crate::domain::tricks::legal_plays;
use crate::domain::{Card, Suit};

/// Bidding-phase view: order-up, discard, call-it and go-alone decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidView {
    pub seat: Seat,
    pub dealer: Seat,
    pub hand: Vec<Card>,
    /// The card turned up from the deck.
    pub upcard: Card,
    /// Set once trump is fixed (discard and go-alone decisions).
    pub trump: Option<Suit>,
    /// Suit of the upcard after everyone passed it (call-it round only).
    pub turned_down: Option<Suit>,
    /// Stick-the-dealer: passing is not an option for this call.
    pub must_call: bool,
}

impl BidView {
    /// Suits that may be named in the call-it round.
    pub fn callable_suits(&self) -> Vec<Suit> {
        Suit::ALL.to_vec()
    }
}

/// Trick-phase view for `decide_play`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub trump: Suit,
    /// Effective suit of the first card in the trick; `None` when leading.
    pub lead: Option<Suit>,
    /// Cards already played this trick, in order.
    pub pile: Vec<(Seat, Card)>,
}

impl PlayView {
    /// Cards this seat may play right now.
    pub fn legal_plays(&self) -> Vec<Card> {
        legal_plays(&self.hand, self.lead, self.trump)
    }
}
