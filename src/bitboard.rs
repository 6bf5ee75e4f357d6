//! 52-bit card field viewed as 4 suits × 13 ranks.
//!
//! Bit `id` of the field is set when the card with that id is present. Since
//! `id = suit * 13 + rank`, each suit is a contiguous 13-bit run.

use crate::card::{Card, Suit};
use crate::error::{Error, Result};

pub const MASK13: u16 = (1u16 << 13) - 1;
const MASK52: u64 = (1u64 << 52) - 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct BitBoard(u64);

impl BitBoard {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Every card of the deck.
    #[inline(always)]
    pub const fn full() -> Self {
        Self(MASK52)
    }

    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & MASK52)
    }

    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Build from distinct cards, failing on the first repeated one.
    pub fn try_from_cards<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> Result<Self> {
        let mut b = Self::new();
        for &c in cards {
            if b.insert(c) {
                return Err(Error::DuplicateCard(c));
            }
        }
        Ok(b)
    }

    /// Build from cards, collapsing repeats.
    #[inline]
    pub fn from_cards<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> Self {
        let mut b = Self::new();
        for &c in cards {
            b.insert(c);
        }
        b
    }

    /// Returns true if the card was already present.
    #[inline(always)]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let already = (self.0 & bit) != 0;
        self.0 |= bit;
        already
    }

    #[inline(always)]
    pub fn remove(&mut self, card: Card) {
        self.0 &= !(1u64 << card.id());
    }

    #[inline(always)]
    pub const fn contains(self, card: Card) -> bool {
        (self.0 >> card.id()) & 1 != 0
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline(always)]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Cards of the deck not in this board.
    #[inline(always)]
    pub const fn complement(self) -> Self {
        Self(!self.0 & MASK52)
    }

    /// Present cards in id order.
    pub fn iter(self) -> impl Iterator<Item = Card> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let id = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(Card::from_u8_unchecked(id))
        })
    }

    #[inline(always)]
    pub const fn suit_mask(self, suit: Suit) -> u16 {
        ((self.0 >> (13 * suit.idx())) as u16) & MASK13
    }

    /// Split into the four 13-bit suit masks, indexed by `Suit::idx`.
    #[inline(always)]
    pub const fn suits(self) -> [u16; 4] {
        let b = self.0;
        [
            (b as u16) & MASK13,
            ((b >> 13) as u16) & MASK13,
            ((b >> 26) as u16) & MASK13,
            ((b >> 39) as u16) & MASK13,
        ]
    }
}

impl std::ops::BitOr for BitBoard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl FromIterator<Card> for BitBoard {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut b = Self::new();
        for c in iter {
            b.insert(c);
        }
        b
    }
}

/// Per-rank multiplicity across the four suits, as 13-bit masks.
///
/// Bit r of `ge2` is set when rank r appears at least twice, and so on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Multiplicity {
    pub any: u16,
    pub ge2: u16,
    pub ge3: u16,
    pub ge4: u16,
}

impl Multiplicity {
    #[inline(always)]
    pub fn from_suits(h: &[u16; 4]) -> Self {
        let [h0, h1, h2, h3] = *h;
        Self {
            any: h0 | h1 | h2 | h3,
            ge2: (h0 & h1) | (h0 & h2) | (h0 & h3) | (h1 & h2) | (h1 & h3) | (h2 & h3),
            ge3: (h0 & h1 & h2) | (h0 & h1 & h3) | (h0 & h2 & h3) | (h1 & h2 & h3),
            ge4: h0 & h1 & h2 & h3,
        }
    }

    /// Ranks held exactly four times.
    #[inline(always)]
    pub fn quads(&self) -> u16 {
        self.ge4
    }

    /// Ranks held exactly three times.
    #[inline(always)]
    pub fn trips(&self) -> u16 {
        self.ge3 & !self.ge4
    }

    /// Ranks held exactly twice.
    #[inline(always)]
    pub fn pairs(&self) -> u16 {
        self.ge2 & !self.ge3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{parse_cards, Rank::*, Suit::*};

    #[test]
    fn insert_contains_remove() {
        let mut b = BitBoard::new();
        let c = Card::new(Ace, Spades);

        assert!(!b.insert(c));
        assert!(b.insert(c));
        assert!(b.contains(c));
        assert_eq!(b.len(), 1);

        b.remove(c);
        assert!(!b.contains(c));
        assert!(b.is_empty());
    }

    #[test]
    fn try_from_cards_reports_duplicate() {
        let cards = parse_cards("Ad Kd Ad").unwrap();
        assert_eq!(
            BitBoard::try_from_cards(&cards),
            Err(Error::DuplicateCard(Card::new(Ace, Diamonds)))
        );
        assert_eq!(BitBoard::from_cards(&cards).len(), 2);
    }

    #[test]
    fn suit_split() {
        let cards = parse_cards("2d Ad 3h Ks 7c Tc").unwrap();
        let b = BitBoard::from_cards(&cards);
        let s = b.suits();

        assert_eq!(s[Diamonds.idx()], Two.bit() | Ace.bit());
        assert_eq!(s[Hearts.idx()], Three.bit());
        assert_eq!(s[Spades.idx()], King.bit());
        assert_eq!(s[Clubs.idx()], Seven.bit() | Ten.bit());
        assert_eq!(b.suit_mask(Clubs), s[Clubs.idx()]);
    }

    #[test]
    fn complement_and_iter() {
        let cards = parse_cards("Ad Kh").unwrap();
        let b = BitBoard::from_cards(&cards);
        let rest = b.complement();

        assert_eq!(rest.len(), 50);
        assert!(rest.intersection(b).is_empty());
        assert_eq!(rest | b, BitBoard::full());
        assert_eq!(b.iter().collect::<Vec<_>>(), cards);
    }

    #[test]
    fn multiplicity_masks() {
        let cards = parse_cards("2d 2h 2s 2c 7d 7h 7s 9c 9d Ad").unwrap();
        let b = BitBoard::from_cards(&cards);
        let m = Multiplicity::from_suits(&b.suits());

        assert_eq!(m.quads(), Two.bit());
        assert_eq!(m.trips(), Seven.bit());
        assert_eq!(m.pairs(), Nine.bit());
        assert_eq!(m.any, Two.bit() | Seven.bit() | Nine.bit() | Ace.bit());
    }
}
