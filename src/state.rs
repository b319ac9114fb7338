//! Game session state: phases, table, configuration.
//!
//! A match is a [`GameState`] value owned by the caller and passed by
//! reference to the command handlers in [`crate::actions`]. Exactly one
//! phase is active at a time per session; there is no ambient or static
//! game state anywhere in the crate.

use serde::{Deserialize, Serialize};

use crate::cards_types::{Card, Suit};
use crate::scoring::{Scores, DEFAULT_WINNING_SCORE};

pub type Seat = u8; // 0..=3
pub const SEATS: usize = 4;

/// Authoritative sequence of game phases.
///
/// `Deal → Bid1 → Bid2 → DealerDiscard → PlayHand → (Deal | End)`, with the
/// Bid1 order-up path skipping Bid2 and going through DealerDiscard.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Dealer deals a fresh deck.
    Deal,
    /// Round one of bidding: pass or order up the up-card.
    Bid1,
    /// Round two of bidding: pass or call any suit except the up-card's.
    Bid2,
    /// Dealer exchanges one card of their six for the picked-up up-card.
    DealerDiscard,
    /// Five tricks of card play.
    PlayHand,
    /// Terminal: match scores and winners are final.
    End,
}

/// One card placed into the current trick by a seat.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub player: Seat,
    pub card: Card,
}

/// A completed trick: four plays, leader at position 0.
pub type Trick = Vec<Play>;

/// The four hands, the kitty, the up-card, and completed tricks per seat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    pub hands: [Vec<Card>; SEATS],
    /// The three undealt cards set aside after dealing; fixed once dealt.
    pub kitty: Vec<Card>,
    /// Face-up card biddable as trump in round one. Consumed once ordered
    /// up; cleared once round-two bidding resolves.
    pub up_card: Option<Card>,
    /// Completed tricks per seat, in the order they were won.
    pub tricks: [Vec<Trick>; SEATS],
}

impl TableState {
    pub fn empty() -> Self {
        Self {
            hands: Default::default(),
            kitty: Vec::new(),
            up_card: None,
            tricks: Default::default(),
        }
    }
}

/// Rule knobs that are configuration, not hidden constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// First team to reach this total wins the match.
    pub winning_score: i16,
    /// When set, the dealer may not pass in the second bidding round.
    /// When unset, a dealer pass throws the hand in and the deal rotates.
    pub stick_the_dealer: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            stick_the_dealer: false,
        }
    }
}

/// Entire match container, sufficient for every engine operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: Phase,
    /// Dealer seat for the current hand.
    pub dealer: Seat,
    /// Seat expected to act; None once the match has ended.
    pub current_player: Option<Seat>,
    pub table: TableState,
    /// Trump ("best") suit for the current hand, set once bidding resolves.
    pub best: Option<Suit>,
    /// Seat that named trump this hand; its team is the maker.
    pub maker: Option<Seat>,
    /// Plays of the trick in progress, leader first.
    pub current_trick: Trick,
    /// Card the dealer exchanged for the up-card; out of play for the hand.
    pub discarded: Option<Card>,
    /// Match totals, accumulated hand over hand.
    pub scores: Scores,
}

impl GameState {
    /// Fresh match with the given first dealer, ready for the Deal phase.
    pub fn new(dealer: Seat, config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::Deal,
            dealer,
            current_player: Some(dealer),
            table: TableState::empty(),
            best: None,
            maker: None,
            current_trick: Vec::with_capacity(SEATS),
            discarded: None,
            scores: Scores::default(),
        }
    }
}
