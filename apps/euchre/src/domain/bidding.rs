//! Trump bidding: order-up on the upcard, then call-it.

use serde::Serialize;
use tracing::debug;

use crate::ai::AiPlayer;
use crate::config::AllPassPolicy;
use crate::domain::player_view::BidView;
use crate::domain::round::Round;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{call_order, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, IllegalStateKind};
use crate::events::{EventSink, GameEvent};

/// The result of a successful bid: who fixed trump and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contract {
    pub caller: Seat,
    pub trump: Suit,
    /// Fixed in the order-up round (the caller took the upcard).
    pub ordered_up: bool,
}

/// Both bidding rounds. `Ok(None)` means everyone passed under
/// [`AllPassPolicy::Redeal`].
pub fn run_bidding(
    round: &mut Round,
    policy: AllPassPolicy,
    ais: &[Box<dyn AiPlayer>; PLAYERS],
    events: &mut dyn EventSink,
) -> Result<Option<Contract>, DomainError> {
    if let Some(contract) = order_up_round(round, ais, events)? {
        return Ok(Some(contract));
    }
    call_it_round(round, policy, ais, events)
}

fn bid_view(round: &Round, seat: Seat, trump: Option<Suit>, must_call: bool) -> BidView {
    BidView {
        seat,
        dealer: round.dealer,
        hand: round.hands[seat as usize].clone(),
        upcard: round.upcard,
        trump,
        turned_down: round.turned_down,
        must_call,
    }
}

/// Round 1. Each seat from the dealer's left may order the upcard's suit.
///
/// On acceptance the caller discards one card to the deck and takes the
/// upcard. If everyone declines the upcard goes back into the deck.
pub fn order_up_round(
    round: &mut Round,
    ais: &[Box<dyn AiPlayer>; PLAYERS],
    events: &mut dyn EventSink,
) -> Result<Option<Contract>, DomainError> {
    let Some(upcard) = round.table else {
        return Err(DomainError::illegal_state(
            IllegalStateKind::CardConservation,
            "order-up round started without an upcard on the table",
        ));
    };

    for seat in call_order(round.dealer) {
        let view = bid_view(round, seat, None, false);
        let ordered = ais[seat as usize]
            .decide_order_up(&view)
            .map_err(|e| DomainError::decision(seat, "order_up", e))?;
        debug!(seat, ordered, upcard = %upcard, "order-up decision");
        events.emit(&GameEvent::OrderUpDecided { seat, ordered });

        if ordered {
            let trump = upcard.suit;
            exchange_upcard(round, seat, upcard, trump, ais, events)?;
            return Ok(Some(Contract {
                caller: seat,
                trump,
                ordered_up: true,
            }));
        }
    }

    round.table = None;
    round.deck.add(upcard);
    round.turned_down = Some(upcard.suit);
    events.emit(&GameEvent::UpcardTurnedDown { card: upcard });
    Ok(None)
}

fn exchange_upcard(
    round: &mut Round,
    seat: Seat,
    upcard: Card,
    trump: Suit,
    ais: &[Box<dyn AiPlayer>; PLAYERS],
    events: &mut dyn EventSink,
) -> Result<(), DomainError> {
    let view = bid_view(round, seat, Some(trump), false);
    let discard = ais[seat as usize]
        .decide_discard(&view)
        .map_err(|e| DomainError::decision(seat, "discard", e))?;

    let hand = &mut round.hands[seat as usize];
    let Some(pos) = hand.iter().position(|&c| c == discard) else {
        return Err(DomainError::illegal_state(
            IllegalStateKind::CardNotInHand,
            format!("seat {seat} discarded {} which is not in hand", discard.to_token()),
        ));
    };
    let discarded = hand.remove(pos);
    hand.push(upcard);
    round.table = None;
    round.deck.add(discarded);

    debug!(seat, discard = %discarded, "upcard taken");
    events.emit(&GameEvent::Discarded {
        seat,
        card: discarded,
    });
    Ok(())
}

/// Round 2. Each seat may name any suit or pass.
///
/// Under stick-the-dealer the dealer's pass is an illegal answer.
pub fn call_it_round(
    round: &mut Round,
    policy: AllPassPolicy,
    ais: &[Box<dyn AiPlayer>; PLAYERS],
    events: &mut dyn EventSink,
) -> Result<Option<Contract>, DomainError> {
    for seat in call_order(round.dealer) {
        let must_call = policy == AllPassPolicy::StickTheDealer && seat == round.dealer;
        let view = bid_view(round, seat, None, must_call);
        let choice = ais[seat as usize]
            .decide_call_suit(&view)
            .map_err(|e| DomainError::decision(seat, "call_suit", e))?;
        debug!(seat, ?choice, must_call, "call-it decision");

        match choice {
            Some(suit) => {
                events.emit(&GameEvent::TrumpCalled { seat, suit });
                return Ok(Some(Contract {
                    caller: seat,
                    trump: suit,
                    ordered_up: false,
                }));
            }
            None if must_call => {
                return Err(DomainError::illegal_state(
                    IllegalStateKind::DealerMustCall,
                    format!("dealer (seat {seat}) passed after everyone else did"),
                ));
            }
            None => events.emit(&GameEvent::CallPassed { seat }),
        }
    }
    Ok(None)
}
