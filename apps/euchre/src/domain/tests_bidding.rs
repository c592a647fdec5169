use std::sync::{Arc, Mutex};

use crate::ai::{AiError, AiPlayer};
use crate::config::AllPassPolicy;
use crate::domain::bidding::{run_bidding, Contract};
use crate::domain::fixtures::{card, seats, stacked_deal, Scripted};
use crate::domain::player_view::{BidView, PlayView};
use crate::domain::round::Round;
use crate::domain::state::Seat;
use crate::domain::{Card, Suit};
use crate::errors::domain::IllegalStateKind;
use crate::events::{GameEvent, NullSink};

const HANDS: [&[&str]; 4] = [
    &["7S", "8S", "TS", "QS", "KS"],
    &["7H", "8H", "9H", "TH", "JH"],
    &["7D", "8D", "9D", "TD", "JD"],
    &["7C", "8C", "9C", "TC", "JC"],
];

fn dealt(dealer: Seat) -> Round {
    Round::deal(dealer, stacked_deal(dealer, HANDS, "9S")).unwrap()
}

fn passers() -> [Scripted; 4] {
    [
        Scripted::passer(),
        Scripted::passer(),
        Scripted::passer(),
        Scripted::passer(),
    ]
}

#[test]
fn first_to_order_up_calls_and_swaps_the_upcard() {
    let mut round = dealt(0);
    let [p0, p1, _, p3] = passers();
    let ais = seats([p0, p1, Scripted::passer().ordering_up("7D"), p3]);
    let mut events: Vec<GameEvent> = Vec::new();

    let contract = run_bidding(&mut round, AllPassPolicy::StickTheDealer, &ais, &mut events)
        .unwrap()
        .unwrap();

    assert_eq!(
        contract,
        Contract {
            caller: 2,
            trump: Suit::Spades,
            ordered_up: true
        }
    );
    assert!(round.hands[2].contains(&card("9S")));
    assert!(!round.hands[2].contains(&card("7D")));
    assert_eq!(round.hands[2].len(), 5);
    assert_eq!(round.table, None);
    assert_eq!(round.deck.cards().last(), Some(&card("7D")));
    assert_eq!(round.card_count(), 32);

    // seats 1 then 2 were asked; 3 and the dealer never were
    assert_eq!(
        events,
        vec![
            GameEvent::OrderUpDecided {
                seat: 1,
                ordered: false
            },
            GameEvent::OrderUpDecided {
                seat: 2,
                ordered: true
            },
            GameEvent::Discarded {
                seat: 2,
                card: card("7D")
            },
        ]
    );
}

#[test]
fn passed_upcard_returns_to_the_deck_before_call_it() {
    let mut round = dealt(1);
    let [p0, p1, p2, _] = passers();
    let ais = seats([p0, p1, p2, Scripted::passer().calling(Suit::Spades)]);
    let mut events: Vec<GameEvent> = Vec::new();

    let contract = run_bidding(&mut round, AllPassPolicy::StickTheDealer, &ais, &mut events)
        .unwrap()
        .unwrap();

    // call order from dealer 1 is 2, 3: seat 3 names the turned-down suit
    assert_eq!(
        contract,
        Contract {
            caller: 3,
            trump: Suit::Spades,
            ordered_up: false
        }
    );
    assert_eq!(round.turned_down, Some(Suit::Spades));
    assert_eq!(round.table, None);
    assert_eq!(round.deck.cards().last(), Some(&card("9S")));
    assert!(round.hands.iter().all(|h| h.len() == 5));
    assert_eq!(round.card_count(), 32);
    assert!(events.contains(&GameEvent::UpcardTurnedDown { card: card("9S") }));
    assert!(events.contains(&GameEvent::CallPassed { seat: 2 }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::TrumpCalled {
            seat: 3,
            suit: Suit::Spades
        })
    );
}

#[test]
fn stick_the_dealer_rejects_a_dealer_pass() {
    let mut round = dealt(0);
    let err = run_bidding(
        &mut round,
        AllPassPolicy::StickTheDealer,
        &seats(passers()),
        &mut NullSink,
    )
    .unwrap_err();
    assert_eq!(err.illegal_kind(), Some(&IllegalStateKind::DealerMustCall));
}

#[test]
fn redeal_policy_reports_no_contract() {
    let mut round = dealt(2);
    let mut events: Vec<GameEvent> = Vec::new();
    let contract =
        run_bidding(&mut round, AllPassPolicy::Redeal, &seats(passers()), &mut events).unwrap();

    assert_eq!(contract, None);
    let passes = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CallPassed { .. }))
        .count();
    assert_eq!(passes, 4);
    assert_eq!(round.card_count(), 32);
}

#[test]
fn discarding_a_card_not_held_is_illegal() {
    let mut round = dealt(3);
    let [_, p1, p2, p3] = passers();
    let ais = seats([Scripted::passer().ordering_up("AD"), p1, p2, p3]);
    let err = run_bidding(&mut round, AllPassPolicy::StickTheDealer, &ais, &mut NullSink)
        .unwrap_err();
    assert_eq!(err.illegal_kind(), Some(&IllegalStateKind::CardNotInHand));
}

/// Records the `must_call` flag of every call-it view it sees.
struct MustCallProbe {
    seen: Arc<Mutex<Vec<(Seat, bool)>>>,
}

impl AiPlayer for MustCallProbe {
    fn decide_order_up(&self, _view: &BidView) -> Result<bool, AiError> {
        Ok(false)
    }
    fn decide_discard(&self, view: &BidView) -> Result<Card, AiError> {
        Ok(view.hand[0])
    }
    fn decide_call_suit(&self, view: &BidView) -> Result<Option<Suit>, AiError> {
        self.seen.lock().unwrap().push((view.seat, view.must_call));
        assert_eq!(view.turned_down, Some(Suit::Spades));
        Ok(view.must_call.then_some(Suit::Diamonds))
    }
    fn decide_go_alone(&self, _view: &BidView) -> Result<bool, AiError> {
        Ok(false)
    }
    fn decide_play(&self, view: &PlayView) -> Result<Card, AiError> {
        Ok(view.legal_plays()[0])
    }
}

#[test]
fn only_the_dealer_is_stuck() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let ais: [Box<dyn AiPlayer>; 4] = std::array::from_fn(|_| {
        Box::new(MustCallProbe {
            seen: Arc::clone(&seen),
        }) as Box<dyn AiPlayer>
    });
    let mut round = dealt(1);

    let contract = run_bidding(&mut round, AllPassPolicy::StickTheDealer, &ais, &mut NullSink)
        .unwrap()
        .unwrap();

    assert_eq!(contract.caller, 1);
    assert_eq!(contract.trump, Suit::Diamonds);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(2, false), (3, false), (0, false), (1, true)]
    );
}
