//! Random AI player - makes random legal decisions.

use std::sync::{Mutex, MutexGuard};

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::{BidView, PlayView};
use crate::domain::{Card, Suit};

/// Chooses uniformly among legal options.
///
/// Orders up half the time, always names a random suit in the call-it round
/// and goes alone only when a `go_alone_rate` is configured. Seeded instances
/// are reproducible.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
    go_alone_rate: f64,
}

impl RandomPlayer {
    /// Registry name.
    pub const NAME: &'static str = "random";

    /// `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
            go_alone_rate: 0.0,
        }
    }

    pub fn with_go_alone_rate(mut self, rate: f64) -> Self {
        self.go_alone_rate = rate.clamp(0.0, 1.0);
        self
    }

    fn rng(&self) -> Result<MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn decide_order_up(&self, _view: &BidView) -> Result<bool, AiError> {
        Ok(self.rng()?.random_bool(0.5))
    }

    fn decide_discard(&self, view: &BidView) -> Result<Card, AiError> {
        if view.hand.is_empty() {
            return Err(AiError::InvalidMove("No card to discard".into()));
        }
        let mut rng = self.rng()?;
        view.hand
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose discard".into()))
    }

    fn decide_call_suit(&self, view: &BidView) -> Result<Option<Suit>, AiError> {
        let suits = view.callable_suits();
        let mut rng = self.rng()?;
        let choice = suits
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random suit".into()))?;
        Ok(Some(choice))
    }

    fn decide_go_alone(&self, _view: &BidView) -> Result<bool, AiError> {
        if self.go_alone_rate <= 0.0 {
            return Ok(false);
        }
        Ok(self.rng()?.random_bool(self.go_alone_rate))
    }

    fn decide_play(&self, view: &PlayView) -> Result<Card, AiError> {
        let legal_plays = view.legal_plays();
        if legal_plays.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        let mut rng = self.rng()?;
        legal_plays
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
