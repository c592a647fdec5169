use std::fmt;

use serde::Serialize;

use crate::config::RulesConfig;
use crate::domain::rules::{majority, TEAMS};
use crate::domain::state::{opposing_team, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Calling team took every trick.
    March,
    /// Calling team took a majority, not every trick.
    Point,
    /// Defenders took a majority (or the caller fell short).
    Euchre,
    /// Nobody named trump; thrown in unscored.
    Misdeal,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoundOutcome::March => "march",
            RoundOutcome::Point => "point",
            RoundOutcome::Euchre => "euchre",
            RoundOutcome::Misdeal => "misdeal",
        };
        f.write_str(s)
    }
}

/// Points awarded to one team at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundScore {
    pub team: TeamId,
    pub points: u16,
}

/// Decide whether the round is settled after `tricks_played` tricks.
///
/// Defenders reaching the majority settle it at once. A calling majority
/// settles it once the defenders hold a trick. A clean calling majority plays
/// on to decide march against point when `play_out_march` is set, and is
/// scored as a point right away when it is not.
pub fn settle(
    tricks_won: [u8; TEAMS],
    caller_team: TeamId,
    tricks_played: u8,
    config: &RulesConfig,
) -> Option<RoundOutcome> {
    let needed = majority(config.tricks_per_round);
    let caller = tricks_won[caller_team as usize];
    let defenders = tricks_won[opposing_team(caller_team) as usize];

    if defenders >= needed {
        return Some(RoundOutcome::Euchre);
    }
    if caller >= needed && (defenders > 0 || !config.play_out_march) {
        return Some(RoundOutcome::Point);
    }
    if tricks_played >= config.tricks_per_round {
        return Some(final_outcome(tricks_won, caller_team, config));
    }
    None
}

/// Outcome once every trick of the round has been played.
pub fn final_outcome(
    tricks_won: [u8; TEAMS],
    caller_team: TeamId,
    config: &RulesConfig,
) -> RoundOutcome {
    let needed = majority(config.tricks_per_round);
    let caller = tricks_won[caller_team as usize];
    let defenders = tricks_won[opposing_team(caller_team) as usize];
    match (caller >= needed, defenders) {
        (true, 0) => RoundOutcome::March,
        (true, _) => RoundOutcome::Point,
        (false, _) => RoundOutcome::Euchre,
    }
}

/// Who scores for `outcome` and how much. `None` for a misdeal.
pub fn score_for(
    outcome: RoundOutcome,
    caller_team: TeamId,
    config: &RulesConfig,
) -> Option<RoundScore> {
    let (team, points) = match outcome {
        RoundOutcome::March => (caller_team, config.march_bonus),
        RoundOutcome::Point => (caller_team, config.point_bonus),
        RoundOutcome::Euchre => (opposing_team(caller_team), config.euchre_bonus),
        RoundOutcome::Misdeal => return None,
    };
    Some(RoundScore { team, points })
}
