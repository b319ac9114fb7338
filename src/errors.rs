//! Engine error taxonomy.
//!
//! Every rejected call is total: the game state is left untouched and the
//! caller receives a typed error. No retries are meaningful; all operations
//! are deterministic and synchronous.

use thiserror::Error;

/// Why an action was rejected by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionErrorKind {
    /// Action does not belong to the current phase.
    PhaseMismatch,
    /// Action issued by a seat other than the one expected to act.
    OutOfTurn,
    /// The turned-down up-card's suit may not be called in round two.
    BarredSuit,
    /// With stick-the-dealer in force, the dealer may not pass in round two.
    DealerMustCall,
}

/// Why a card was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardErrorKind {
    /// The acting seat does not hold the card.
    NotInHand,
    /// The seat holds a card of the led suit and must play one.
    MustFollowSuit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("deck must contain exactly {expected} cards, got {actual}")]
    InvalidDeckSize { expected: usize, actual: usize },

    #[error("illegal action: {0:?}")]
    IllegalAction(ActionErrorKind),

    #[error("illegal card: {0:?}")]
    IllegalCard(CardErrorKind),

    #[error("parse card: {0}")]
    ParseCard(String),
}
