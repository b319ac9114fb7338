//! Display keys and legal-action predicates for a UI layer.
//!
//! Everything here is a pure mapping from engine state to opaque strings
//! or booleans; no game rules live in this module. A consumer reads the
//! current phase, table, and scores, uses these predicates to decide which
//! controls to present, and issues the actions in [`crate::actions`].

use crate::cards_types::{Card, Rank, Suit};
use crate::state::{GameState, Phase, Seat};

pub fn short_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        Rank::Joker => "Joker",
    }
}

pub fn rank_name(rank: Rank) -> &'static str {
    match rank {
        Rank::Nine => "Nine",
        Rank::Ten => "Ten",
        Rank::Jack => "Jack",
        Rank::Queen => "Queen",
        Rank::King => "King",
        Rank::Ace => "Ace",
        Rank::Joker => "Joker",
    }
}

pub fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

/// Human label, e.g. "Jack of Hearts".
pub fn card_label(card: Card) -> String {
    format!("{} of {}", rank_name(card.rank), suit_name(card.suit))
}

/// Opaque asset key for a card image, e.g. "cards/jack_of_hearts".
pub fn card_image_key(card: Card) -> String {
    format!(
        "cards/{}_of_{}",
        rank_name(card.rank).to_lowercase(),
        suit_name(card.suit).to_lowercase()
    )
}

/// Opaque asset key for a suit image, e.g. "suits/hearts".
pub fn suit_image_key(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "suits/clubs",
        Suit::Diamonds => "suits/diamonds",
        Suit::Hearts => "suits/hearts",
        Suit::Spades => "suits/spades",
    }
}

pub fn can_deal(state: &GameState, seat: Seat) -> bool {
    state.phase == Phase::Deal && state.dealer == seat
}

pub fn can_pass_bid(state: &GameState, seat: Seat) -> bool {
    state.current_player == Some(seat)
        && match state.phase {
            Phase::Bid1 => true,
            Phase::Bid2 => seat != state.dealer || !state.config.stick_the_dealer,
            _ => false,
        }
}

pub fn can_order_up(state: &GameState, seat: Seat) -> bool {
    state.current_player == Some(seat) && state.phase == Phase::Bid1
}

pub fn can_call_best(state: &GameState, seat: Seat) -> bool {
    state.current_player == Some(seat) && state.phase == Phase::Bid2
}

pub fn can_play_card(state: &GameState, seat: Seat) -> bool {
    state.current_player == Some(seat) && state.phase == Phase::PlayHand
}

pub fn must_discard(state: &GameState, seat: Seat) -> bool {
    state.phase == Phase::DealerDiscard && state.dealer == seat
}
