//! Game controller: team scores, dealer rotation and the round loop.

use serde::Serialize;
use tracing::{info, info_span};

use crate::ai::AiPlayer;
use crate::config::RulesConfig;
use crate::domain::deck::Deck;
use crate::domain::round::{play_round, RoundResult};
use crate::domain::rules::{PLAYERS, TEAMS};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{next_player, Seat, TeamId};
use crate::errors::domain::DomainError;
use crate::events::{EventSink, GameEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub score: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub scores: [u16; TEAMS],
    pub winner: TeamId,
    pub rounds: u32,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: RulesConfig,
    seed: u64,
    teams: [Team; TEAMS],
    dealer: Seat,
    rounds_played: u32,
    history: Vec<RoundResult>,
}

impl Game {
    pub fn new(config: RulesConfig, seed: u64) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self {
            dealer: config.first_dealer,
            config,
            seed,
            teams: [Team { id: 0, score: 0 }, Team { id: 1, score: 0 }],
            rounds_played: 0,
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn teams(&self) -> &[Team; TEAMS] {
        &self.teams
    }

    pub fn scores(&self) -> [u16; TEAMS] {
        [self.teams[0].score, self.teams[1].score]
    }

    /// Dealer of the next round.
    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Every round played so far, oldest first.
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }

    /// First team at or past the winning score.
    pub fn winner(&self) -> Option<TeamId> {
        self.teams
            .iter()
            .filter(|t| t.score >= self.config.winning_score)
            .max_by_key(|t| t.score)
            .map(|t| t.id)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Play the next round on a deck shuffled from the game seed.
    pub fn play_next_round(
        &mut self,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
        events: &mut dyn EventSink,
    ) -> Result<RoundResult, DomainError> {
        let deck = Deck::shuffled(
            self.config.deck,
            derive_dealing_seed(self.seed, self.rounds_played),
        );
        self.play_round_with(deck, ais, events)
    }

    /// Play the next round on a caller-supplied deck.
    pub fn play_round_with(
        &mut self,
        deck: Deck,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
        events: &mut dyn EventSink,
    ) -> Result<RoundResult, DomainError> {
        let result = play_round(&self.config, self.dealer, deck, ais, events)?;
        self.apply(&result);
        events.emit(&GameEvent::ScoresUpdated {
            scores: self.scores(),
        });
        Ok(result)
    }

    fn apply(&mut self, result: &RoundResult) {
        if let Some(score) = result.score {
            let team = &mut self.teams[score.team as usize];
            team.score = team.score.saturating_add(score.points);
        }
        self.rounds_played += 1;
        self.dealer = next_player(self.dealer);
        self.history.push(result.clone());
    }

    /// Play rounds until a team reaches the winning score.
    pub fn play(
        &mut self,
        ais: &[Box<dyn AiPlayer>; PLAYERS],
        events: &mut dyn EventSink,
    ) -> Result<GameResult, DomainError> {
        let _span = info_span!("game", seed = self.seed).entered();
        loop {
            if let Some(winner) = self.winner() {
                let result = GameResult {
                    scores: self.scores(),
                    winner,
                    rounds: self.rounds_played,
                };
                info!(winner, scores = ?result.scores, rounds = result.rounds, "game over");
                events.emit(&GameEvent::GameOver {
                    winner,
                    scores: result.scores,
                    rounds: result.rounds,
                });
                return Ok(result);
            }
            if self.rounds_played >= self.config.max_rounds {
                return Err(DomainError::RoundLimitExceeded(self.config.max_rounds));
            }
            self.play_next_round(ais, events)?;
        }
    }
}
