//! Shared CLI types for the simulator.

use clap::ValueEnum;
use euchre::domain::DeckKind;
use euchre::{AllPassPolicy, RandomPlayer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One game per line, streamed as games finish.
    Jsonl,
    /// A single JSON array written when the run completes.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Random,
}

impl AiType {
    /// Name in the engine's strategy registry.
    pub fn registry_name(self) -> &'static str {
        match self {
            AiType::Random => RandomPlayer::NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AllPassArg {
    Stick,
    Redeal,
}

impl From<AllPassArg> for AllPassPolicy {
    fn from(arg: AllPassArg) -> Self {
        match arg {
            AllPassArg::Stick => AllPassPolicy::StickTheDealer,
            AllPassArg::Redeal => AllPassPolicy::Redeal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeckArg {
    Full32,
    Short24,
}

impl From<DeckArg> for DeckKind {
    fn from(arg: DeckArg) -> Self {
        match arg {
            DeckArg::Full32 => DeckKind::Full32,
            DeckArg::Short24 => DeckKind::Short24,
        }
    }
}
