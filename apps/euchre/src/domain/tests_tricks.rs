use crate::domain::fixtures::{card, cards, seats, Scripted};
use crate::domain::tricks::{judge_leader, legal_plays, play_trick, validate_play, WinReason};
use crate::domain::Suit;
use crate::errors::domain::IllegalStateKind;
use crate::events::{GameEvent, NullSink};

#[test]
fn right_bower_wins_over_ace_of_trump() {
    // trump ♠: P0 leads ♣9, P1 the right bower, P2 the trump ace, P3 ♣K
    let pile = vec![
        (0, card("9C")),
        (1, card("JS")),
        (2, card("AS")),
        (3, card("KC")),
    ];
    assert_eq!(
        judge_leader(&pile, Suit::Spades),
        Some((1, WinReason::HighTrump))
    );
}

#[test]
fn high_lead_when_no_trump_played() {
    let pile = vec![
        (2, card("9D")),
        (3, card("AC")),
        (0, card("KD")),
        (1, card("TD")),
    ];
    assert_eq!(
        judge_leader(&pile, Suit::Hearts),
        Some((0, WinReason::HighLead))
    );
}

#[test]
fn off_suit_never_wins() {
    let pile = vec![(1, card("7H")), (2, card("AC")), (3, card("AD"))];
    assert_eq!(
        judge_leader(&pile, Suit::Spades),
        Some((1, WinReason::HighLead))
    );
}

#[test]
fn left_bower_led_sets_trump_as_lead() {
    // trump ♥: J♦ counts as a heart, so hearts must follow and the ace of
    // diamonds is off-suit
    let pile = vec![
        (0, card("JD")),
        (1, card("AH")),
        (2, card("AD")),
        (3, card("QH")),
    ];
    assert_eq!(
        judge_leader(&pile, Suit::Hearts),
        Some((0, WinReason::HighTrump))
    );
}

#[test]
fn bower_leader_is_not_displaced_by_later_trump() {
    let pile = vec![
        (3, card("7C")),
        (0, card("JC")),
        (1, card("AS")),
        (2, card("KS")),
    ];
    // trump ♠: J♣ is the left bower, above the ace
    assert_eq!(
        judge_leader(&pile, Suit::Spades),
        Some((0, WinReason::HighTrump))
    );
}

#[test]
fn empty_pile_has_no_leader() {
    assert_eq!(judge_leader(&[], Suit::Spades), None);
}

#[test]
fn legal_plays_follow_effective_suit() {
    let hand = cards(&["JD", "9H", "AD", "7S"]);
    // trump ♥, diamonds led: J♦ is a heart, only A♦ follows
    assert_eq!(
        legal_plays(&hand, Some(Suit::Diamonds), Suit::Hearts),
        cards(&["AD"])
    );
    // hearts led: 9♥ and the left bower
    let mut hearts = legal_plays(&hand, Some(Suit::Hearts), Suit::Hearts);
    hearts.sort();
    assert_eq!(hearts, cards(&["9H", "JD"]));
    // void in clubs: anything
    assert_eq!(legal_plays(&hand, Some(Suit::Clubs), Suit::Hearts).len(), 4);
    // leading: anything
    assert_eq!(legal_plays(&hand, None, Suit::Hearts).len(), 4);
}

#[test]
fn validate_play_rejects_renege_and_foreign_cards() {
    let hand = cards(&["9H", "AD", "7S"]);

    let err = validate_play(&hand, card("AS"), None, Suit::Clubs).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(&IllegalStateKind::CardNotInHand));

    let err = validate_play(&hand, card("7S"), Some(Suit::Hearts), Suit::Clubs).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(&IllegalStateKind::MustFollowSuit));

    assert!(validate_play(&hand, card("9H"), Some(Suit::Hearts), Suit::Clubs).is_ok());
    assert!(validate_play(&hand, card("7S"), Some(Suit::Clubs), Suit::Clubs).is_ok());
}

#[test]
fn play_trick_moves_cards_out_of_hands() {
    let mut hands = [
        cards(&["9C", "TH"]),
        cards(&["JS", "8D"]),
        cards(&["AS", "QH"]),
        cards(&["KC", "7D"]),
    ];
    let ais = seats([
        Scripted::passer().playing(&["9C"]),
        Scripted::passer().playing(&["JS"]),
        Scripted::passer().playing(&["AS"]),
        Scripted::passer().playing(&["KC"]),
    ]);
    let mut events: Vec<GameEvent> = Vec::new();

    let trick = play_trick(&[0, 1, 2, 3], &mut hands, Suit::Spades, &ais, &mut events).unwrap();

    assert_eq!(trick.winner, 1);
    assert_eq!(trick.reason, WinReason::HighTrump);
    assert_eq!(trick.lead, Suit::Clubs);
    assert_eq!(trick.plays.len(), 4);
    assert!(hands.iter().all(|h| h.len() == 1));
    assert_eq!(events.len(), 4);
    assert_eq!(
        events[1],
        GameEvent::CardPlayed {
            seat: 1,
            card: card("JS")
        }
    );
}

#[test]
fn play_trick_aborts_on_renege() {
    let mut hands = [
        cards(&["9C"]),
        cards(&["TC", "8D"]),
        cards(&["AS"]),
        cards(&["KC"]),
    ];
    let ais = seats([
        Scripted::passer(),
        Scripted::passer().playing(&["8D"]),
        Scripted::passer(),
        Scripted::passer(),
    ]);
    let err = play_trick(&[0, 1, 2, 3], &mut hands, Suit::Hearts, &ais, &mut NullSink).unwrap_err();
    assert_eq!(err.illegal_kind(), Some(&IllegalStateKind::MustFollowSuit));
    // the reneging card stays in hand
    assert_eq!(hands[1].len(), 2);
}

#[test]
fn play_trick_with_three_players() {
    let mut hands = [
        cards(&["9C"]),
        cards(&["TC"]),
        cards(&["AC"]),
        cards(&["KC"]),
    ];
    let ais = seats([
        Scripted::passer(),
        Scripted::passer(),
        Scripted::passer(),
        Scripted::passer(),
    ]);
    let trick = play_trick(&[1, 2, 3], &mut hands, Suit::Hearts, &ais, &mut NullSink).unwrap();
    assert_eq!(trick.winner, 2);
    assert_eq!(trick.plays.iter().map(|p| p.0).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(hands[0].len(), 1);
}
