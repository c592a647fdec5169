//! Human-readable play-by-play of engine events.

use std::io::{self, Write};

use euchre::{EventSink, GameEvent};
use tracing::warn;

/// Writes one line per interesting event to `out`.
pub struct Narrator<W: Write> {
    out: W,
}

impl Narrator<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// The narration for `event`; dealt hands span several lines.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::RoundStarted { dealer } => {
            format!("--- new round, player {dealer} deals ---")
        }
        GameEvent::CardsDealt { hands } => hands
            .iter()
            .enumerate()
            .map(|(seat, hand)| {
                let cards: Vec<String> = hand.iter().map(ToString::to_string).collect();
                format!("player {seat}: {}", cards.join(" "))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        GameEvent::UpcardTurned { card } => format!("turned up {card}"),
        GameEvent::OrderUpDecided {
            seat,
            ordered: false,
        } => format!("player {seat} passed"),
        GameEvent::OrderUpDecided {
            seat,
            ordered: true,
        } => format!("player {seat} ordered it up"),
        GameEvent::Discarded { seat, card } => format!("player {seat} discarded {card}"),
        GameEvent::UpcardTurnedDown { card } => format!("everyone passed, {card} turned down"),
        GameEvent::TrumpCalled { seat, suit } => format!("player {seat} called {suit}"),
        GameEvent::CallPassed { seat } => format!("player {seat} passed"),
        GameEvent::TrumpFixed { caller, trump } => {
            format!("trump is {trump}, called by player {caller}")
        }
        GameEvent::GoingAlone { seat, partner } => {
            format!("player {seat} goes alone, player {partner} sits out")
        }
        GameEvent::CardPlayed { seat, card } => format!("player {seat} played {card}"),
        GameEvent::TrickWon {
            trick_no,
            winner,
            reason,
            ..
        } => format!("player {winner} won trick {trick_no} with {reason}"),
        GameEvent::RoundScored {
            outcome,
            team,
            points,
            tricks_won,
        } => format!(
            "{outcome}: team {team} scores {points} (tricks {}-{})",
            tricks_won[0], tricks_won[1]
        ),
        GameEvent::Misdeal { dealer } => {
            format!("misdeal: nobody named trump, player {dealer}'s deal is thrown in")
        }
        GameEvent::ScoresUpdated { scores } => format!("score {} - {}", scores[0], scores[1]),
        GameEvent::GameOver {
            winner,
            scores,
            rounds,
        } => format!(
            "team {winner} wins {} - {} after {rounds} rounds",
            scores[*winner as usize],
            scores[1 - *winner as usize]
        ),
    }
}

impl<W: Write> EventSink for Narrator<W> {
    fn emit(&mut self, event: &GameEvent) {
        if let Err(e) = writeln!(self.out, "{}", describe(event)) {
            warn!(error = %e, "narration write failed");
        }
    }
}
