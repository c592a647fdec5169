//! Domain-level error type used across the engine and its drivers.
//!
//! Illegal-state errors mean a decision-maker broke the contract of the
//! decision interface. They abort the round and are never corrected or re-asked.

use thiserror::Error;

use crate::ai::AiError;
use crate::domain::state::Seat;

/// Contract violations by a decision-maker, or broken engine invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IllegalStateKind {
    CardNotInHand,
    MustFollowSuit,
    DealerMustCall,
    CardConservation,
}

/// Rejected input: configuration, parsing, seats, deck bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    InvalidConfig,
    InvalidSeat,
    DeckExhausted,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("illegal state {kind:?}: {detail}")]
    IllegalState {
        kind: IllegalStateKind,
        detail: String,
    },
    #[error("validation error {kind:?}: {detail}")]
    Validation {
        kind: ValidationKind,
        detail: String,
    },
    #[error("decision failed (seat {seat}, {action}): {source}")]
    Decision {
        seat: Seat,
        action: &'static str,
        #[source]
        source: AiError,
    },
    #[error("game did not finish within {0} rounds")]
    RoundLimitExceeded(u32),
}

impl DomainError {
    pub fn illegal_state(kind: IllegalStateKind, detail: impl Into<String>) -> Self {
        Self::IllegalState {
            kind,
            detail: detail.into(),
        }
    }

    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            detail: detail.into(),
        }
    }

    pub fn decision(seat: Seat, action: &'static str, source: AiError) -> Self {
        Self::Decision {
            seat,
            action,
            source,
        }
    }

    /// The illegal-state kind, if this is an illegal-state error.
    pub fn illegal_kind(&self) -> Option<&IllegalStateKind> {
        match self {
            Self::IllegalState { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// The validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            Self::Validation { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
