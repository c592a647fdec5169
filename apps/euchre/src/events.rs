//! Structured engine events.
//!
//! The engine reports what happened through an [`EventSink`]; narration,
//! logging and recording are all just sinks.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::scoring::RoundOutcome;
use crate::domain::state::{Seat, TeamId};
use crate::domain::tricks::WinReason;
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        dealer: Seat,
    },
    CardsDealt {
        hands: [Vec<Card>; PLAYERS],
    },
    UpcardTurned {
        card: Card,
    },
    OrderUpDecided {
        seat: Seat,
        ordered: bool,
    },
    Discarded {
        seat: Seat,
        card: Card,
    },
    UpcardTurnedDown {
        card: Card,
    },
    TrumpCalled {
        seat: Seat,
        suit: Suit,
    },
    CallPassed {
        seat: Seat,
    },
    TrumpFixed {
        caller: Seat,
        trump: Suit,
    },
    GoingAlone {
        seat: Seat,
        partner: Seat,
    },
    CardPlayed {
        seat: Seat,
        card: Card,
    },
    TrickWon {
        trick_no: u8,
        winner: Seat,
        reason: WinReason,
        plays: Vec<(Seat, Card)>,
    },
    RoundScored {
        outcome: RoundOutcome,
        team: TeamId,
        points: u16,
        tricks_won: [u8; TEAMS],
    },
    Misdeal {
        dealer: Seat,
    },
    ScoresUpdated {
        scores: [u16; TEAMS],
    },
    GameOver {
        winner: TeamId,
        scores: [u16; TEAMS],
        rounds: u32,
    },
}

pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

/// Records every event, in order.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Forwards events to `tracing`: round and game results at info, the rest at debug.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundScored {
                outcome,
                team,
                points,
                tricks_won,
            } => info!(?outcome, team, points, ?tricks_won, "round scored"),
            GameEvent::Misdeal { dealer } => info!(dealer, "misdeal"),
            GameEvent::GameOver {
                winner,
                scores,
                rounds,
            } => info!(winner, ?scores, rounds, "game over"),
            other => debug!(event = ?other, "game event"),
        }
    }
}
