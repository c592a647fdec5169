use crate::config::RulesConfig;
use crate::domain::scoring::{final_outcome, score_for, settle, RoundOutcome, RoundScore};

fn rules() -> RulesConfig {
    RulesConfig::default()
}

#[test]
fn defenders_reaching_three_end_the_round() {
    // caller team 0, defenders take three straight
    assert_eq!(settle([0, 3], 0, 3, &rules()), Some(RoundOutcome::Euchre));
    assert_eq!(settle([1, 3], 0, 4, &rules()), Some(RoundOutcome::Euchre));
    assert_eq!(settle([3, 0], 1, 3, &rules()), Some(RoundOutcome::Euchre));
}

#[test]
fn caller_majority_after_a_lost_trick_is_a_point() {
    assert_eq!(settle([3, 1], 0, 4, &rules()), Some(RoundOutcome::Point));
    assert_eq!(settle([1, 3], 1, 4, &rules()), Some(RoundOutcome::Point));
    assert_eq!(settle([3, 2], 0, 5, &rules()), Some(RoundOutcome::Point));
}

#[test]
fn clean_caller_majority_plays_on_for_the_march() {
    assert_eq!(settle([3, 0], 0, 3, &rules()), None);
    assert_eq!(settle([4, 0], 0, 4, &rules()), None);
    assert_eq!(settle([5, 0], 0, 5, &rules()), Some(RoundOutcome::March));
}

#[test]
fn clean_caller_majority_ends_as_a_point_when_not_playing_out() {
    let config = RulesConfig {
        play_out_march: false,
        ..RulesConfig::default()
    };
    assert_eq!(settle([3, 0], 0, 3, &config), Some(RoundOutcome::Point));
    assert_eq!(settle([0, 3], 1, 3, &config), Some(RoundOutcome::Point));
    assert_eq!(settle([2, 0], 0, 2, &config), None);
    assert_eq!(settle([0, 3], 0, 3, &config), Some(RoundOutcome::Euchre));
}

#[test]
fn undecided_rounds_continue() {
    assert_eq!(settle([0, 0], 0, 0, &rules()), None);
    assert_eq!(settle([1, 1], 0, 2, &rules()), None);
    assert_eq!(settle([2, 2], 1, 4, &rules()), None);
}

#[test]
fn shorter_rounds_use_their_own_majority() {
    let config = RulesConfig {
        tricks_per_round: 3,
        ..RulesConfig::default()
    };
    assert_eq!(settle([0, 2], 0, 2, &config), Some(RoundOutcome::Euchre));
    assert_eq!(settle([2, 0], 0, 2, &config), None);
    assert_eq!(settle([3, 0], 0, 3, &config), Some(RoundOutcome::March));
    assert_eq!(final_outcome([2, 1], 0, &config), RoundOutcome::Point);
}

#[test]
fn even_split_is_a_euchre() {
    let config = RulesConfig {
        tricks_per_round: 4,
        ..RulesConfig::default()
    };
    assert_eq!(settle([2, 2], 0, 4, &config), Some(RoundOutcome::Euchre));
}

#[test]
fn points_follow_the_bonus_table() {
    let config = rules();
    assert_eq!(
        score_for(RoundOutcome::March, 1, &config),
        Some(RoundScore { team: 1, points: 2 })
    );
    assert_eq!(
        score_for(RoundOutcome::Point, 0, &config),
        Some(RoundScore { team: 0, points: 1 })
    );
    assert_eq!(
        score_for(RoundOutcome::Euchre, 0, &config),
        Some(RoundScore { team: 1, points: 2 })
    );
    assert_eq!(score_for(RoundOutcome::Misdeal, 0, &config), None);
}

#[test]
fn custom_bonuses_apply() {
    let config = RulesConfig {
        march_bonus: 4,
        point_bonus: 2,
        euchre_bonus: 3,
        ..RulesConfig::default()
    };
    assert_eq!(score_for(RoundOutcome::March, 0, &config).map(|s| s.points), Some(4));
    assert_eq!(score_for(RoundOutcome::Point, 0, &config).map(|s| s.points), Some(2));
    assert_eq!(score_for(RoundOutcome::Euchre, 0, &config).map(|s| s.points), Some(3));
}
