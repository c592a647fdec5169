#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod telemetry;


pub use ai::{create_ai, AiConfig, AiError, AiPlayer, RandomPlayer, TimeBoxed};
pub use config::{AllPassPolicy, RulesConfig};
pub use domain::game::{Game, GameResult, Team};
pub use domain::round::{play_round, RoundResult};
pub use errors::DomainError;
pub use events::{EventSink, GameEvent, NullSink, TracingSink};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
