use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::ai::AiPlayer;
use crate::domain::player_view::PlayView;
use crate::domain::rules::PLAYERS;
use crate::domain::state::Seat;
use crate::domain::{card_beats, effective_suit, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, IllegalStateKind, ValidationKind};
use crate::events::{EventSink, GameEvent};

/// Why the trick winner won. Reporting only; scoring never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The winning card's effective suit is trump.
    HighTrump,
    /// Highest card of the lead suit, no trump played.
    HighLead,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::HighTrump => f.write_str("high trump"),
            WinReason::HighLead => f.write_str("high lead"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTrick {
    pub winner: Seat,
    pub reason: WinReason,
    pub lead: Suit,
    pub plays: Vec<(Seat, Card)>,
}

/// Cards `hand` may play: the lead's effective suit if held, otherwise anything.
pub fn legal_plays(hand: &[Card], lead: Option<Suit>, trump: Suit) -> Vec<Card> {
    if let Some(lead) = lead {
        if hand_has_suit(hand, lead, trump) {
            let mut v: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|&c| effective_suit(c, trump) == lead)
                .collect();
            v.sort();
            return v;
        }
    }

    let mut any = hand.to_vec();
    any.sort();
    any
}

/// Reject a card that is not held, or that reneges on the lead suit.
pub fn validate_play(
    hand: &[Card],
    card: Card,
    lead: Option<Suit>,
    trump: Suit,
) -> Result<(), DomainError> {
    if !hand.contains(&card) {
        return Err(DomainError::illegal_state(
            IllegalStateKind::CardNotInHand,
            format!("{} is not in hand", card.to_token()),
        ));
    }
    if let Some(lead) = lead {
        if effective_suit(card, trump) != lead && hand_has_suit(hand, lead, trump) {
            return Err(DomainError::illegal_state(
                IllegalStateKind::MustFollowSuit,
                format!("{} played while holding {lead:?}", card.to_token()),
            ));
        }
    }
    Ok(())
}

/// Winner of a (possibly partial) pile, or `None` if nothing has been played.
pub fn judge_leader(pile: &[(Seat, Card)], trump: Suit) -> Option<(Seat, WinReason)> {
    let (first, rest) = pile.split_first()?;
    let lead = effective_suit(first.1, trump);

    let mut best = *first;
    for &(seat, card) in rest {
        if card_beats(card, best.1, lead, trump) {
            best = (seat, card);
        }
    }

    let reason = if effective_suit(best.1, trump) == trump {
        WinReason::HighTrump
    } else {
        WinReason::HighLead
    };
    Some((best.0, reason))
}

/// Run one trick over `order`, moving each played card out of its hand.
pub fn play_trick(
    order: &[Seat],
    hands: &mut [Vec<Card>; PLAYERS],
    trump: Suit,
    ais: &[Box<dyn AiPlayer>; PLAYERS],
    events: &mut dyn EventSink,
) -> Result<CompletedTrick, DomainError> {
    let mut pile: Vec<(Seat, Card)> = Vec::with_capacity(order.len());
    let mut lead: Option<Suit> = None;

    for &seat in order {
        let hand = &mut hands[seat as usize];
        let view = PlayView {
            seat,
            hand: hand.clone(),
            trump,
            lead,
            pile: pile.clone(),
        };
        let card = ais[seat as usize]
            .decide_play(&view)
            .map_err(|e| DomainError::decision(seat, "play", e))?;
        validate_play(hand, card, lead, trump)
            .inspect_err(|e| warn!(seat, error = %e, "illegal play rejected"))?;

        let Some(pos) = hand.iter().position(|&c| c == card) else {
            return Err(DomainError::illegal_state(
                IllegalStateKind::CardNotInHand,
                format!("seat {seat}: {} vanished from hand", card.to_token()),
            ));
        };
        let played = hand.remove(pos);

        if lead.is_none() {
            lead = Some(effective_suit(played, trump));
        }
        debug!(seat, card = %played, "card played");
        events.emit(&GameEvent::CardPlayed { seat, card: played });
        pile.push((seat, played));
    }

    let (winner, reason) = judge_leader(&pile, trump).ok_or_else(|| {
        DomainError::validation(ValidationKind::Other("trick".into()), "no players in trick")
    })?;
    let lead = lead.unwrap_or(trump);
    debug!(winner, %reason, "trick complete");

    Ok(CompletedTrick {
        winner,
        reason,
        lead,
        plays: pile,
    })
}
