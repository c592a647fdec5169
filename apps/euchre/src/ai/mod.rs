//! Player strategies behind the decision interface.
//!
//! - `AiPlayer`: the five decisions the engine asks of a seat
//! - `RandomPlayer`: uniform random legal choices (seedable for tests)
//! - `TimeBoxed`: bounded wait around any strategy
//! - `create_ai`: strategy registry by name

mod config;
mod random;
mod time_boxed;
mod trait_def;

pub use config::AiConfig;
pub use random::RandomPlayer;
pub use time_boxed::TimeBoxed;
pub use trait_def::{AiError, AiPlayer};

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &[RandomPlayer::NAME];

/// Create a strategy from its registry name and config.
///
/// Returns `None` if `ai_type` is unrecognized.
pub fn create_ai(ai_type: &str, config: &AiConfig) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        RandomPlayer::NAME => Some(Box::new(
            RandomPlayer::new(config.seed()).with_go_alone_rate(config.go_alone_rate()),
        )),
        _ => None,
    }
}
