//! Deterministic dealing of the 24-card Euchre deck, plus seat rotation.
//!
//! `deal` does *not* shuffle: the deck is dealt in the order given, so
//! tests can assert exact hand contents for a known input. Shuffling, when
//! wanted, is the caller's choice via [`shuffled_deck`].

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards_types::{Card, Rank, Suit};
use crate::errors::DomainError;
use crate::state::{Seat, TableState};

pub const DECK_SIZE: usize = 24;
pub const HAND_SIZE: usize = 5;
pub const KITTY_SIZE: usize = 3;

const PLAYABLE_RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

static DECK: Lazy<[Card; DECK_SIZE]> = Lazy::new(|| {
    let mut deck = [Card::new(Suit::Clubs, Rank::Nine); DECK_SIZE];
    let mut i = 0;
    for suit in Suit::ALL {
        for rank in PLAYABLE_RANKS {
            deck[i] = Card::new(suit, rank);
            i += 1;
        }
    }
    deck
});

/// The ordered deck template, generated once per process: 9 through Ace of
/// each suit, suit-major (Clubs, Diamonds, Hearts, Spades).
pub fn euchre_deck() -> &'static [Card; DECK_SIZE] {
    &DECK
}

/// A fresh copy of the template in uniformly random order.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = euchre_deck().to_vec();
    deck.shuffle(rng);
    deck
}

/// Fixed index pattern replicating a traditional 3-2-3-2-2-3-2-3 physical
/// deal: each seat receives two non-contiguous slices of the deck.
const DEAL_PATTERN: [[(usize, usize); 2]; 4] = [
    [(0, 3), (10, 12)],
    [(3, 5), (12, 15)],
    [(5, 8), (15, 17)],
    [(8, 10), (17, 20)],
];
const UP_CARD_INDEX: usize = 20;
const KITTY_START: usize = 21;

/// Distribute a deck of exactly 24 cards into four 5-card hands, a 3-card
/// kitty, and one up-card. Every card is placed exactly once. A deck of any
/// other size fails with [`DomainError::InvalidDeckSize`] and performs no
/// assignment. The dealer seat does not influence the distribution; it
/// lives on the session.
pub fn deal(deck: &[Card]) -> Result<TableState, DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::InvalidDeckSize {
            expected: DECK_SIZE,
            actual: deck.len(),
        });
    }

    let mut hands: [Vec<Card>; 4] = Default::default();
    for (hand, slices) in hands.iter_mut().zip(DEAL_PATTERN.iter()) {
        hand.reserve(HAND_SIZE);
        for &(start, end) in slices {
            hand.extend_from_slice(&deck[start..end]);
        }
    }

    Ok(TableState {
        hands,
        up_card: Some(deck[UP_CARD_INDEX]),
        kitty: deck[KITTY_START..DECK_SIZE].to_vec(),
        tricks: Default::default(),
    })
}

/// Uniformly random seat, used to pick the first dealer.
pub fn random_player() -> Seat {
    rand::rng().random_range(0..4)
}

/// Seat `delta` steps clockwise (negative for counter-clockwise).
/// `rem_euclid` keeps the result in 0..=3 for negative offsets.
#[inline]
fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(4)) as Seat
}

/// The seat whose turn usually comes *after* the given seat.
#[inline]
pub fn left_of_player(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// The seat whose turn usually comes *before* the given seat.
#[inline]
pub fn right_of_player(seat: Seat) -> Seat {
    seat_offset(seat, -1)
}
