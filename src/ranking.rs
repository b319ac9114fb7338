//! Card ranking and trick resolution under Euchre rules.
//!
//! A card's strength is a single integer built from four components:
//! base rank score, a per-suit tie-break offset, a lead-suit bonus, and a
//! trump bonus. The bonus tiers are spaced wider than any rank score can
//! reach, so the magnitude ordering trump > lead > suit is the load-bearing
//! invariant: any trump strictly outranks any non-trump card, and any card
//! of the led suit strictly outranks any off-suit, non-trump card.
//!
//! The bowers are the two special cases. The right bower is the Jack of
//! trump, highest card in the hand. The left bower is the Jack of the suit
//! sharing trump's color: it *plays as trump* and ranks one below the
//! right bower.

use std::cmp::Ordering;

use crate::cards_types::{Card, Rank, Suit};
use crate::state::{Play, Seat};

const TRUMP_BONUS: i32 = 1_000_000;
const LEAD_BONUS: i32 = 100_000;

/// Traditional (though arbitrary) suit order. Purely a deterministic
/// tie-break between cards that are neither trump nor lead and therefore
/// cannot legally win the trick anyway; callers must never rely on it to
/// pick a legal winner, only to obtain a strict total order.
fn suit_bonus(suit: Suit) -> i32 {
    match suit {
        Suit::Spades => 10_000,
        Suit::Diamonds => 1_000,
        Suit::Clubs => 100,
        Suit::Hearts => 0,
    }
}

/// True if `card` is the left bower: the Jack of the suit the same color
/// as the best suit.
pub fn is_left_bower(card: Card, best: Option<Suit>) -> bool {
    best.is_some_and(|b| card.rank == Rank::Jack && card.suit == b.same_color())
}

/// True if `card` is the right bower: the Jack of the best suit itself.
pub fn is_right_bower(card: Card, best: Option<Suit>) -> bool {
    best.is_some_and(|b| card.rank == Rank::Jack && card.suit == b)
}

/// True if `card` belongs to the best suit for the hand, counting the left
/// bower, whose printed suit differs.
pub fn is_best_card(card: Card, best: Option<Suit>) -> bool {
    best.is_some_and(|b| card.suit == b) || is_left_bower(card, best)
}

/// The suit a card plays as: trump for the left bower, the printed suit
/// for everything else.
pub fn effective_suit(card: Card, best: Option<Suit>) -> Suit {
    match best {
        Some(b) if is_left_bower(card, best) => b,
        _ => card.suit,
    }
}

fn face_score(rank: Rank, is_best: bool) -> i32 {
    if is_best {
        match rank {
            Rank::Queen => 11,
            Rank::King => 12,
            Rank::Ace => 13,
            Rank::Jack => 15,
            _ => 0,
        }
    } else {
        match rank {
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            _ => 0,
        }
    }
}

/// Rank-only score. Best-suit cards use a different table that reorders
/// the faces around the right bower; the left bower lands one below it.
fn base_card_score(card: Card, best: Option<Suit>) -> i32 {
    let score = match card.rank {
        Rank::Nine => 9,
        Rank::Ten => 10,
        rank => face_score(rank, is_best_card(card, best)),
    };

    // Left bower is scored one less than the right bower
    let left_bower_penalty = if is_left_bower(card, best) { -1 } else { 0 };
    score + left_bower_penalty
}

/// The left bower counts as leading only when trump itself was led, not
/// its printed suit.
fn is_lead_card(card: Card, best: Option<Suit>, lead: Option<Suit>) -> bool {
    if is_left_bower(card, best) {
        best == lead && lead.is_some()
    } else {
        lead == Some(card.suit)
    }
}

/// Numeric strength of `card` given the best suit and the suit led this
/// trick. Only valid compared against other cards scored with the same
/// `best` and `lead`.
pub fn card_score(card: Card, best: Option<Suit>, lead: Option<Suit>) -> i32 {
    let lead_bonus = if is_lead_card(card, best, lead) {
        LEAD_BONUS
    } else {
        0
    };
    let best_bonus = if is_best_card(card, best) {
        TRUMP_BONUS
    } else {
        0
    };
    base_card_score(card, best) + suit_bonus(effective_suit(card, best)) + best_bonus + lead_bonus
}

/// Compare two cards in the given context. `Greater` means `a` is the
/// superior card. If neither card is best or lead the result falls back to
/// the tie-break order, which never matters for picking a legal winner.
pub fn compare_cards(a: Card, b: Card, best: Option<Suit>, lead: Option<Suit>) -> Ordering {
    card_score(a, best, lead).cmp(&card_score(b, best, lead))
}

/// The seat that played the winning card of `trick`, or None for an empty
/// trick. The lead suit is taken from the first play, resolved through the
/// left-bower rule (a led left bower leads trump, not its printed suit).
pub fn winning_player(trick: &[Play], best: Option<Suit>) -> Option<Seat> {
    let lead_card = trick.first()?.card;
    let lead = Some(effective_suit(lead_card, best));
    trick
        .iter()
        .max_by_key(|play| card_score(play.card, best, lead))
        .map(|play| play.player)
}

/// Sort cards ascending by strength in the given context (winner last).
/// The ordering is total because `card_score` is injective for distinct
/// cards of one deck.
pub fn sort_cards(cards: &[Card], best: Option<Suit>, lead: Option<Suit>) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|&card| card_score(card, best, lead));
    sorted
}
