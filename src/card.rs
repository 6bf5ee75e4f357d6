//! Card types (Suit/Rank/Card) and the two-character text codec.
//!
//! A card is a single byte id in 0..52 with `suit = id / 13` and
//! `rank = id % 13`, so a suit occupies a contiguous 13-bit run of a u64.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A playing card suit, in card-id order.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Suit {
    Diamonds = 0,
    Hearts = 1,
    Spades = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn from_u8(x: u8) -> Suit {
        match x & 0x3 {
            0 => Suit::Diamonds,
            1 => Suit::Hearts,
            2 => Suit::Spades,
            _ => Suit::Clubs,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
        }
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            'c' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// A playing card rank.
///
/// Ranks are stored as 0..12 (Two..Ace), which is also the bit position in a
/// 13-bit rank mask.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8
    }

    /// Single-bit mask of this rank.
    #[inline(always)]
    pub const fn bit(self) -> u16 {
        1u16 << (self as u16)
    }

    /// Convert 0..12 to a Rank (Two..Ace). Out of range values saturate to Ace.
    #[inline(always)]
    pub const fn from_u8(x: u8) -> Rank {
        match x {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }

    pub const fn to_char(self) -> char {
        RANK_CHARS[self as usize]
    }

    pub fn from_char(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        RANK_CHARS
            .iter()
            .position(|&r| r == c)
            .map(|i| Rank::from_u8(i as u8))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A card, stored as its 0..51 id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Card(u8);

impl Card {
    pub const COUNT: usize = 52;

    #[inline(always)]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self((suit as u8) * 13 + (rank as u8))
    }

    /// Checked conversion from a raw 0..51 id.
    #[inline]
    pub fn from_id(id: u8) -> Result<Self> {
        if id as usize >= Self::COUNT {
            return Err(Error::CardOutOfRange(id));
        }
        Ok(Self(id))
    }

    /// Caller guarantees `id < 52`.
    #[inline(always)]
    pub(crate) const fn from_u8_unchecked(id: u8) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn rank(self) -> Rank {
        Rank::from_u8(self.0 % 13)
    }

    #[inline(always)]
    pub const fn suit(self) -> Suit {
        Suit::from_u8(self.0 / 13)
    }

    /// All 52 cards in id order.
    pub fn all() -> impl DoubleEndedIterator<Item = Card> + ExactSizeIterator {
        (0..Self::COUNT as u8).map(Card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::Parse(format!("expected two characters, got {s:?}")));
        };
        let rank = Rank::from_char(r).ok_or_else(|| Error::Parse(format!("bad rank in {s:?}")))?;
        let suit = Suit::from_char(su).ok_or_else(|| Error::Parse(format!("bad suit in {s:?}")))?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse a whitespace separated list of cards, e.g. `"Ad Kd Qd"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_layout() {
        let c = Card::new(Rank::Ace, Suit::Diamonds);
        assert_eq!(c.id(), 12);
        let c = Card::new(Rank::Two, Suit::Clubs);
        assert_eq!(c.id(), 39);

        for c in Card::all() {
            assert_eq!(Card::new(c.rank(), c.suit()), c);
        }
    }

    #[test]
    fn from_id_rejects_out_of_range() {
        assert_eq!(Card::from_id(51).map(Card::id), Ok(51));
        assert_eq!(Card::from_id(52), Err(Error::CardOutOfRange(52)));
    }

    #[test]
    fn codec() {
        let c: Card = "Td".parse().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(c.to_string(), "Td");

        let c: Card = "aS".parse().unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Spades));

        for c in Card::all() {
            assert_eq!(c.to_string().parse::<Card>(), Ok(c));
        }
    }

    #[test]
    fn codec_errors() {
        assert!(matches!("".parse::<Card>(), Err(Error::Parse(_))));
        assert!(matches!("A".parse::<Card>(), Err(Error::Parse(_))));
        assert!(matches!("Adx".parse::<Card>(), Err(Error::Parse(_))));
        assert!(matches!("1d".parse::<Card>(), Err(Error::Parse(_))));
        assert!(matches!("Ax".parse::<Card>(), Err(Error::Parse(_))));
    }

    #[test]
    fn parse_list() {
        let cards = parse_cards("Ad  Kh\tQs Jc").unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3], Card::new(Rank::Jack, Suit::Clubs));
        assert!(parse_cards("Ad Zz").is_err());
    }
}
