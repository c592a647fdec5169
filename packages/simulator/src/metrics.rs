//! Per-game metrics for simulation output.

use euchre::domain::rules::{PLAYERS, TEAMS};
use euchre::domain::scoring::RoundOutcome;
use euchre::domain::state::{team_of, TeamId};
use euchre::{RoundResult, RulesConfig};
use serde::Serialize;

use crate::simulator::SimulatedGame;

#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub team_metrics: Vec<TeamMetrics>,
    pub seat_metrics: Vec<SeatMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; PLAYERS],
    pub total_games: u32,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [u16; TEAMS],
    pub winner: TeamId,
    pub rounds: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub dealer: u8,
    pub caller: Option<u8>,
    pub trump: Option<String>,
    pub ordered_up: bool,
    pub alone: bool,
    pub outcome: RoundOutcome,
    pub tricks_won: [u8; TEAMS],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_team: Option<TeamId>,
    pub points: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamMetrics {
    pub team: TeamId,
    pub final_score: u16,
    /// Rounds in which this team named trump.
    pub calls: u32,
    /// Calls that scored (point or march).
    pub calls_made: u32,
    pub marches: u32,
    /// Own calls that were euchred.
    pub euchred: u32,
    /// Opponents' calls this team euchred.
    pub euchres: u32,
    pub alone_calls: u32,
    pub tricks_won: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub calls: u32,
    pub tricks_won: u32,
    pub avg_tricks_per_round: f64,
}

pub fn build_game_metrics(
    game_id: u32,
    ai_types: [String; PLAYERS],
    total_games: u32,
    rules: &RulesConfig,
    game: &SimulatedGame,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = game
        .rounds
        .iter()
        .enumerate()
        .map(|(i, round)| build_round_metrics(i as u32 + 1, round))
        .collect();

    let team_metrics = (0..TEAMS as u8)
        .map(|team| build_team_metrics(team, game.result.scores[team as usize], &game.rounds))
        .collect();

    let seat_metrics = (0..PLAYERS as u8)
        .map(|seat| build_seat_metrics(seat, &ai_types[seat as usize], &game.rounds))
        .collect();

    GameMetrics {
        game_id,
        seed: game.seed,
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
            rules: rules.clone(),
        },
        result: GameResultMetrics {
            final_scores: game.result.scores,
            winner: game.result.winner,
            rounds: game.result.rounds,
            duration_ms,
        },
        rounds,
        team_metrics,
        seat_metrics,
    }
}

fn build_round_metrics(round_no: u32, round: &RoundResult) -> RoundMetrics {
    RoundMetrics {
        round_no,
        dealer: round.dealer,
        caller: round.caller,
        trump: round.trump.map(|t| format!("{t:?}")),
        ordered_up: round.ordered_up,
        alone: round.alone,
        outcome: round.outcome,
        tricks_won: round.tricks_won,
        scoring_team: round.score.map(|s| s.team),
        points: round.score.map_or(0, |s| s.points),
    }
}

fn build_team_metrics(team: TeamId, final_score: u16, rounds: &[RoundResult]) -> TeamMetrics {
    let mut m = TeamMetrics {
        team,
        final_score,
        ..TeamMetrics::default()
    };
    for round in rounds {
        m.tricks_won += u32::from(round.tricks_won[team as usize]);
        let Some(caller) = round.caller else {
            continue;
        };
        let calling = team_of(caller) == team;
        match (calling, round.outcome) {
            (true, RoundOutcome::March) => {
                m.calls_made += 1;
                m.marches += 1;
            }
            (true, RoundOutcome::Point) => m.calls_made += 1,
            (true, RoundOutcome::Euchre) => m.euchred += 1,
            (false, RoundOutcome::Euchre) => m.euchres += 1,
            _ => {}
        }
        if calling {
            m.calls += 1;
            if round.alone {
                m.alone_calls += 1;
            }
        }
    }
    m
}

fn build_seat_metrics(seat: u8, ai_type: &str, rounds: &[RoundResult]) -> SeatMetrics {
    let calls = rounds.iter().filter(|r| r.caller == Some(seat)).count() as u32;
    let tricks_won = rounds
        .iter()
        .flat_map(|r| &r.tricks)
        .filter(|t| t.winner == seat)
        .count() as u32;
    let avg_tricks_per_round = if rounds.is_empty() {
        0.0
    } else {
        f64::from(tricks_won) / rounds.len() as f64
    };
    SeatMetrics {
        seat,
        ai_type: ai_type.to_string(),
        calls,
        tricks_won,
        avg_tricks_per_round,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: TeamId,
    pub team0_score: u16,
    pub team1_score: u16,
    pub rounds: u32,
    pub misdeals: u32,
    pub euchres: u32,
    pub marches: u32,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let count = |outcome: RoundOutcome| {
            metrics
                .rounds
                .iter()
                .filter(|r| r.outcome == outcome)
                .count() as u32
        };
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            team0_score: metrics.result.final_scores[0],
            team1_score: metrics.result.final_scores[1],
            rounds: metrics.result.rounds,
            misdeals: count(RoundOutcome::Misdeal),
            euchres: count(RoundOutcome::Euchre),
            marches: count(RoundOutcome::March),
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}
