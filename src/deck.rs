//! A simple dealer over the 52 cards.
//!
//! Randomness always comes from the caller, so a seeded generator replays the
//! same deal.

use rand::prelude::*;

use crate::bitboard::BitBoard;
use crate::card::Card;

#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = Card::COUNT;

    /// A full deck in card-id order.
    pub fn new() -> Self {
        Self { cards: Card::all().collect() }
    }

    /// A full deck shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deal a uniformly random card still in the deck.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(i))
    }

    /// Deal `n` cards, or `None` if fewer remain.
    pub fn deal_many<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        (0..n).map(|_| self.deal(rng)).collect()
    }

    /// Return a dealt card. Returns false if the card is already in the deck.
    pub fn muck(&mut self, card: Card) -> bool {
        if self.cards.contains(&card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Take a specific card out of the deck. Returns false if it was not there.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(i) => {
                self.cards.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn to_board(&self) -> BitBoard {
        BitBoard::from_cards(&self.cards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
