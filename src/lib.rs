#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Pure rules engine for four-player Euchre.
//!
//! The engine decides, from declarative game facts, who wins each trick,
//! how a completed hand is scored, and when the match ends. It also owns
//! the bidding/play protocol as an explicit phase state machine driven by
//! player actions. There is no I/O, no concurrency, and no ambient state:
//! a match lives in a [`GameState`] value owned by the caller.

pub mod actions;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod errors;
pub mod ranking;
pub mod scoring;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests_actions;

// Re-exports for ergonomics
pub use actions::{
    auto_play, call_best, deal_hand, deal_shuffled, dealer_discard_and_pickup, legal_moves,
    order_up_card, pass_bid, play_card, PlayOutcome,
};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal, euchre_deck, left_of_player, random_player, right_of_player};
pub use errors::{ActionErrorKind, CardErrorKind, DomainError};
pub use ranking::{card_score, compare_cards, sort_cards, winning_player};
pub use scoring::{add_scores, get_winners, hand_over, score_hand, winner, Scores, Team};
pub use state::{GameConfig, GameState, Phase, Play, Seat, TableState, Trick};
