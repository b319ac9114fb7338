//! Core card types: Card, Rank, Suit.

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// The other suit of the same color: Clubs↔Spades, Diamonds↔Hearts.
    /// The Jack of `best.same_color()` is the left bower for that hand.
    pub fn same_color(self) -> Suit {
        match self {
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Clubs,
            Suit::Diamonds => Suit::Hearts,
            Suit::Hearts => Suit::Diamonds,
        }
    }
}

/// Card ranks. `Joker` exists in the type but is never dealt: the deck
/// template only emits the six playable Euchre ranks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// Face cards require suit/trump context to score; numeric ranks carry
    /// their face value.
    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }
}

/// An immutable (suit, rank) pair. Cards are values with structural
/// equality; no card is ever mutated after creation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn is_face_card(self) -> bool {
        self.rank.is_face()
    }
}

// Note: Ord/Eq on Card is only for stable display sorting: suit order
// C<D<H<S then rank order. Do not use for trick resolution or any
// comparison involving trump/lead; that is `ranking::compare_cards`.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
