//! Decision interface the engine calls out to for every player choice.

use thiserror::Error;

use crate::domain::player_view::{BidView, PlayView};
use crate::domain::{Card, Suit};

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// AI failed to make a decision within timeout
    #[error("AI decision timeout")]
    Timeout,
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI produced an invalid move
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// A seat's strategy.
///
/// Every call is synchronous and authoritative: the engine validates the
/// answer but never asks twice. Illegal answers abort the round.
pub trait AiPlayer: Send + Sync {
    /// Round 1: order the upcard's suit as trump?
    fn decide_order_up(&self, view: &BidView) -> Result<bool, AiError>;

    /// After ordering up: which card leaves the hand for the upcard.
    ///
    /// Must be a member of `view.hand` (which does not contain the upcard).
    fn decide_discard(&self, view: &BidView) -> Result<Card, AiError>;

    /// Round 2: name trump, or `None` to pass.
    ///
    /// When `view.must_call` is set, passing is an illegal answer.
    fn decide_call_suit(&self, view: &BidView) -> Result<Option<Suit>, AiError>;

    /// Asked of the caller once trump is fixed.
    fn decide_go_alone(&self, view: &BidView) -> Result<bool, AiError>;

    /// Choose a card to play.
    ///
    /// The AI should query `view.legal_plays()` to get valid cards.
    fn decide_play(&self, view: &PlayView) -> Result<Card, AiError>;
}
