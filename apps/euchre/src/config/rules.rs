//! House rules for a game, loaded from JSON and/or environment variables.
//!
//! Every field has a default, so `{}` is a valid configuration. Environment
//! overrides use the `EUCHRE_` prefix:
//!
//! - `EUCHRE_WINNING_SCORE`
//! - `EUCHRE_TRICKS_PER_ROUND`
//! - `EUCHRE_MARCH_BONUS`, `EUCHRE_POINT_BONUS`, `EUCHRE_EUCHRE_BONUS`
//! - `EUCHRE_ALL_PASS_POLICY` (`stick_the_dealer` | `redeal`)
//! - `EUCHRE_FIRST_DEALER`
//! - `EUCHRE_MAX_ROUNDS`
//! - `EUCHRE_DECK` (`full32` | `short24`)
//! - `EUCHRE_PLAY_OUT_MARCH` (`true` | `false`)

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::deck::DeckKind;
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

/// What happens when all four players pass in both bidding rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllPassPolicy {
    /// The dealer must name trump on their second-round turn.
    #[default]
    StickTheDealer,
    /// The hand is thrown in unscored and the deal passes on.
    Redeal,
}

impl FromStr for AllPassPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stick_the_dealer" | "stick" => Ok(Self::StickTheDealer),
            "redeal" => Ok(Self::Redeal),
            other => Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("unknown all-pass policy '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// First team to reach this score wins the game.
    pub winning_score: u16,
    /// Tricks in a full round; the majority threshold is derived from it.
    pub tricks_per_round: u8,
    /// Calling team takes every trick.
    pub march_bonus: u16,
    /// Calling team takes a majority but not every trick.
    pub point_bonus: u16,
    /// Defenders take a majority.
    pub euchre_bonus: u16,
    pub all_pass_policy: AllPassPolicy,
    /// Dealer of the first round.
    pub first_dealer: Seat,
    /// Safety stop for games that never finish (e.g. endless redeals).
    pub max_rounds: u32,
    pub deck: DeckKind,
    /// Keep playing after a clean calling majority to see whether it becomes
    /// a march. When off, the round ends as a point the moment the callers
    /// reach the majority.
    pub play_out_march: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            winning_score: 10,
            tricks_per_round: HAND_SIZE as u8,
            march_bonus: 2,
            point_bonus: 1,
            euchre_bonus: 2,
            all_pass_policy: AllPassPolicy::StickTheDealer,
            first_dealer: 0,
            max_rounds: 1000,
            deck: DeckKind::Full32,
            play_out_march: true,
        }
    }
}

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidConfig, detail)
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, DomainError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| invalid(format!("{name} has an invalid value '{raw}'")))
}

impl RulesConfig {
    /// Parse and validate a JSON rules document.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| invalid(format!("rules JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `EUCHRE_*` environment variables.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::default().with_overrides(|name| env::var(name).ok())
    }

    /// Apply overrides from any key/value source, then validate.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("EUCHRE_WINNING_SCORE") {
            self.winning_score = parse_var("EUCHRE_WINNING_SCORE", &v)?;
        }
        if let Some(v) = lookup("EUCHRE_TRICKS_PER_ROUND") {
            self.tricks_per_round = parse_var("EUCHRE_TRICKS_PER_ROUND", &v)?;
        }
        if let Some(v) = lookup("EUCHRE_MARCH_BONUS") {
            self.march_bonus = parse_var("EUCHRE_MARCH_BONUS", &v)?;
        }
        if let Some(v) = lookup("EUCHRE_POINT_BONUS") {
            self.point_bonus = parse_var("EUCHRE_POINT_BONUS", &v)?;
        }
        if let Some(v) = lookup("EUCHRE_EUCHRE_BONUS") {
            self.euchre_bonus = parse_var("EUCHRE_EUCHRE_BONUS", &v)?;
        }
        if let Some(v) = lookup("EUCHRE_ALL_PASS_POLICY") {
            self.all_pass_policy = v.trim().parse()?;
        }
        if let Some(v) = lookup("EUCHRE_FIRST_DEALER") {
            self.first_dealer = parse_var("EUCHRE_FIRST_DEALER", &v)?;
        }
        if let Some(v) = lookup("EUCHRE_MAX_ROUNDS") {
            self.max_rounds = parse_var("EUCHRE_MAX_ROUNDS", &v)?;
        }
        if let Some(v) = lookup("EUCHRE_DECK") {
            self.deck = match v.trim() {
                "full32" => DeckKind::Full32,
                "short24" => DeckKind::Short24,
                other => return Err(invalid(format!("EUCHRE_DECK has an invalid value '{other}'"))),
            };
        }
        if let Some(v) = lookup("EUCHRE_PLAY_OUT_MARCH") {
            self.play_out_march = parse_var("EUCHRE_PLAY_OUT_MARCH", &v)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.winning_score == 0 {
            return Err(invalid("winning_score must be at least 1"));
        }
        if !(1..=HAND_SIZE as u8).contains(&self.tricks_per_round) {
            return Err(invalid(format!(
                "tricks_per_round must be 1..={HAND_SIZE}, got {}",
                self.tricks_per_round
            )));
        }
        if self.march_bonus == 0 || self.point_bonus == 0 || self.euchre_bonus == 0 {
            return Err(invalid("round bonuses must be at least 1"));
        }
        if (self.first_dealer as usize) >= PLAYERS {
            return Err(invalid(format!(
                "first_dealer must be 0..=3, got {}",
                self.first_dealer
            )));
        }
        if self.max_rounds == 0 {
            return Err(invalid("max_rounds must be at least 1"));
        }
        Ok(())
    }
}
