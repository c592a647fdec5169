//! One round of play: deal, bid, fix trump, play tricks, score.

use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::ai::AiPlayer;
use crate::config::RulesConfig;
use crate::domain::bidding::{run_bidding, Contract};
use crate::domain::deck::Deck;
use crate::domain::player_view::BidView;
use crate::domain::rules::{HAND_SIZE, PLAYERS, TEAMS};
use crate::domain::scoring::{final_outcome, score_for, settle, RoundOutcome, RoundScore};
use crate::domain::state::{call_order, partner_of, require_seat, team_of, Seat};
use crate::domain::tricks::{play_trick, CompletedTrick};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, IllegalStateKind, ValidationKind};
use crate::events::{EventSink, GameEvent};

/// Live state of a round in progress.
///
/// Every card dealt from the starting deck is in exactly one place: a hand,
/// the deck, on the table as the upcard, or in a completed trick.
#[derive(Debug, Clone)]
pub struct Round {
    pub dealer: Seat,
    pub hands: [Vec<Card>; PLAYERS],
    pub deck: Deck,
    /// The card turned up for the order-up round.
    pub upcard: Card,
    /// The upcard while it is still face up on the table.
    pub table: Option<Card>,
    /// Set when everyone passed the upcard.
    pub turned_down: Option<Suit>,
    pub contract: Option<Contract>,
    pub alone: bool,
    /// Seats that play tricks, in play order. Fixed once after bidding.
    pub active: Vec<Seat>,
    pub tricks: Vec<CompletedTrick>,
    pub tricks_won: [u8; TEAMS],
    total_cards: usize,
}

impl Round {
    /// Deal five cards to each seat from the dealer's left, then turn up one card.
    pub fn deal(dealer: Seat, mut deck: Deck) -> Result<Self, DomainError> {
        require_seat(dealer, "deal")?;
        let total_cards = deck.len();

        let mut hands: [Vec<Card>; PLAYERS] = Default::default();
        for seat in call_order(dealer) {
            hands[seat as usize] = deck.deal(HAND_SIZE)?;
        }
        let upcard = deck.draw().ok_or_else(|| {
            DomainError::validation(ValidationKind::DeckExhausted, "no card left to turn up")
        })?;

        Ok(Self {
            dealer,
            hands,
            deck,
            upcard,
            table: Some(upcard),
            turned_down: None,
            contract: None,
            alone: false,
            active: call_order(dealer),
            tricks: Vec::new(),
            tricks_won: [0; TEAMS],
            total_cards,
        })
    }

    /// Cards currently accounted for across hands, deck, table and tricks.
    pub fn card_count(&self) -> usize {
        let in_hands: usize = self.hands.iter().map(Vec::len).sum();
        let in_tricks: usize = self.tricks.iter().map(|t| t.plays.len()).sum();
        in_hands + self.deck.len() + usize::from(self.table.is_some()) + in_tricks
    }

    pub fn check_card_conservation(&self) -> Result<(), DomainError> {
        let count = self.card_count();
        if count != self.total_cards {
            return Err(DomainError::illegal_state(
                IllegalStateKind::CardConservation,
                format!("{count} cards accounted for, expected {}", self.total_cards),
            ));
        }
        Ok(())
    }

    /// Record the contract and recompute every held card's effective suit.
    fn fix_trump(&mut self, contract: Contract) {
        for hand in self.hands.iter_mut() {
            for card in hand.iter_mut() {
                *card = card.with_trump(contract.trump);
            }
        }
        self.contract = Some(contract);
    }

    fn decide_alone(
        &mut self,
        contract: Contract,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
        events: &mut dyn EventSink,
    ) -> Result<(), DomainError> {
        let seat = contract.caller;
        let view = BidView {
            seat,
            dealer: self.dealer,
            hand: self.hands[seat as usize].clone(),
            upcard: self.upcard,
            trump: Some(contract.trump),
            turned_down: self.turned_down,
            must_call: false,
        };
        self.alone = ais[seat as usize]
            .decide_go_alone(&view)
            .map_err(|e| DomainError::decision(seat, "go_alone", e))?;

        if self.alone {
            let partner = partner_of(seat);
            self.active = call_order(self.dealer)
                .into_iter()
                .filter(|&s| s != partner)
                .collect();
            debug!(seat, partner, "caller goes alone");
            events.emit(&GameEvent::GoingAlone { seat, partner });
        }
        Ok(())
    }

    fn into_result(self, outcome: RoundOutcome, score: Option<RoundScore>) -> RoundResult {
        RoundResult {
            dealer: self.dealer,
            caller: self.contract.map(|c| c.caller),
            trump: self.contract.map(|c| c.trump),
            ordered_up: self.contract.is_some_and(|c| c.ordered_up),
            alone: self.alone,
            tricks: self.tricks,
            tricks_won: self.tricks_won,
            outcome,
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub dealer: Seat,
    pub caller: Option<Seat>,
    pub trump: Option<Suit>,
    pub ordered_up: bool,
    pub alone: bool,
    pub tricks: Vec<CompletedTrick>,
    pub tricks_won: [u8; TEAMS],
    pub outcome: RoundOutcome,
    /// `None` for a misdeal.
    pub score: Option<RoundScore>,
}

/// Play one round with `deck` as dealt. Team scores are left to the caller.
pub fn play_round(
    config: &RulesConfig,
    dealer: Seat,
    deck: Deck,
    ais: &[Box<dyn AiPlayer>; PLAYERS],
    events: &mut dyn EventSink,
) -> Result<RoundResult, DomainError> {
    let _span = info_span!("round", dealer).entered();
    events.emit(&GameEvent::RoundStarted { dealer });

    let mut round = Round::deal(dealer, deck)?;
    events.emit(&GameEvent::CardsDealt {
        hands: round.hands.clone(),
    });
    events.emit(&GameEvent::UpcardTurned { card: round.upcard });

    let Some(contract) = run_bidding(&mut round, config.all_pass_policy, ais, events)? else {
        round.check_card_conservation()?;
        info!(dealer, "everyone passed; hand thrown in");
        events.emit(&GameEvent::Misdeal { dealer });
        return Ok(round.into_result(RoundOutcome::Misdeal, None));
    };
    round.check_card_conservation()?;

    round.fix_trump(contract);
    debug!(caller = contract.caller, trump = ?contract.trump, "trump fixed");
    events.emit(&GameEvent::TrumpFixed {
        caller: contract.caller,
        trump: contract.trump,
    });
    round.decide_alone(contract, ais, events)?;

    let caller_team = team_of(contract.caller);
    let mut settled = None;
    for trick_no in 1..=config.tricks_per_round {
        let order = round.active.clone();
        let trick = play_trick(&order, &mut round.hands, contract.trump, ais, events)?;
        round.tricks_won[team_of(trick.winner) as usize] += 1;
        events.emit(&GameEvent::TrickWon {
            trick_no,
            winner: trick.winner,
            reason: trick.reason,
            plays: trick.plays.clone(),
        });
        round.tricks.push(trick);
        round.check_card_conservation()?;

        settled = settle(round.tricks_won, caller_team, trick_no, config);
        if settled.is_some() {
            break;
        }
    }
    let outcome = settled.unwrap_or_else(|| final_outcome(round.tricks_won, caller_team, config));

    let score = score_for(outcome, caller_team, config);
    if let Some(s) = score {
        info!(
            %outcome,
            team = s.team,
            points = s.points,
            tricks = ?round.tricks_won,
            "round scored"
        );
        events.emit(&GameEvent::RoundScored {
            outcome,
            team: s.team,
            points: s.points,
            tricks_won: round.tricks_won,
        });
    }
    Ok(round.into_result(outcome, score))
}
