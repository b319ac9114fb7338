//! Card parsing from compact 2-character tokens (e.g. "AS", "9C").

use std::str::FromStr;

use crate::cards_types::{Card, Rank, Suit};
use crate::errors::DomainError;

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::ParseCard(s.to_string()));
        };

        let rank = match rank_ch {
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            'X' => Rank::Joker,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(DomainError::ParseCard(s.to_string())),
        };
        Ok(Card { suit, rank })
    }
}

/// Parse a batch of card tokens; fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
