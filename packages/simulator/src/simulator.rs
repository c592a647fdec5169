//! Runs whole games in memory with seeded strategies.

use std::sync::Arc;
use std::time::Duration;

use euchre::domain::derive_player_seed;
use euchre::domain::rules::PLAYERS;
use euchre::{
    create_ai, AiConfig, AiPlayer, EventSink, Game, GameEvent, GameResult, RoundResult,
    RulesConfig, TimeBoxed, TracingSink,
};

use crate::narration::Narrator;
use crate::types::AiType;

/// A finished game together with its round-by-round record.
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    pub seed: u64,
    pub result: GameResult,
    pub rounds: Vec<RoundResult>,
}

pub struct Simulator {
    rules: RulesConfig,
    seat_types: [AiType; PLAYERS],
    go_alone_rate: f64,
    decision_timeout: Option<Duration>,
    narrate: bool,
}

impl Simulator {
    pub fn new(rules: RulesConfig, seat_types: [AiType; PLAYERS]) -> Self {
        Self {
            rules,
            seat_types,
            go_alone_rate: 0.0,
            decision_timeout: None,
            narrate: false,
        }
    }

    pub fn with_go_alone_rate(mut self, rate: f64) -> Self {
        self.go_alone_rate = rate;
        self
    }

    pub fn with_decision_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.decision_timeout = timeout;
        self
    }

    pub fn with_narration(mut self, narrate: bool) -> Self {
        self.narrate = narrate;
        self
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Build the four seats for one game. Each seat's seed is derived from
    /// `game_seed`, so a game replays exactly from its seed alone.
    pub fn build_seats(
        &self,
        game_seed: u64,
    ) -> Result<[Box<dyn AiPlayer>; PLAYERS], Box<dyn std::error::Error>> {
        let mut seats: Vec<Box<dyn AiPlayer>> = Vec::with_capacity(PLAYERS);
        for (seat, ai_type) in self.seat_types.iter().enumerate() {
            let config = AiConfig::from_json(Some(&serde_json::json!({
                "seed": derive_player_seed(game_seed, seat as u8),
                "go_alone_rate": self.go_alone_rate,
            })));
            let ai = create_ai(ai_type.registry_name(), &config)
                .ok_or_else(|| format!("unknown AI type: {}", ai_type.registry_name()))?;
            let ai: Box<dyn AiPlayer> = match self.decision_timeout {
                Some(limit) => Box::new(TimeBoxed::new(Arc::from(ai), limit)),
                None => ai,
            };
            seats.push(ai);
        }
        seats
            .try_into()
            .map_err(|_| "seat count mismatch".into())
    }

    pub fn simulate_game(
        &self,
        game_seed: u64,
    ) -> Result<SimulatedGame, Box<dyn std::error::Error>> {
        let ais = self.build_seats(game_seed)?;
        let mut game = Game::new(self.rules.clone(), game_seed)?;
        let mut sink = SimSink {
            narrator: self.narrate.then(Narrator::stdout),
        };
        let result = game.play(&ais, &mut sink)?;
        Ok(SimulatedGame {
            seed: game_seed,
            result,
            rounds: game.history().to_vec(),
        })
    }
}

/// Logs every event and optionally narrates it.
struct SimSink {
    narrator: Option<Narrator<std::io::Stdout>>,
}

impl EventSink for SimSink {
    fn emit(&mut self, event: &GameEvent) {
        TracingSink.emit(event);
        if let Some(narrator) = self.narrator.as_mut() {
            narrator.emit(event);
        }
    }
}
