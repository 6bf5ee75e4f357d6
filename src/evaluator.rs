//! Bit-packed hand evaluator over a [`BitBoard`].
//!
//! Split the card field into suit masks, derive the rank union and the
//! multiplicity masks, then walk the categories from StraightFlush down and
//! stop at the first one that matches.

use crate::bitboard::{BitBoard, Multiplicity};
use crate::card::{Card, Rank};
use crate::error::{Error, Result};
use crate::lut13::{highest, popcnt13, straight_top, top_ranks};
use crate::value::HandValue;

/// Smallest and largest card counts accepted by [`evaluate`].
pub const MIN_CARDS: usize = 5;
pub const MAX_CARDS: usize = 7;

/// Best straight flush top over all suits. Wheel tops out at Five.
#[inline(always)]
fn best_straight_flush(suits: &[u16; 4]) -> Option<Rank> {
    suits
        .iter()
        .filter(|&&s| popcnt13(s) >= 5)
        .filter_map(|&s| straight_top(s))
        .max()
}

/// Top five ranks of the best flush suit, if any suit holds five cards.
///
/// With at most 7 cards only one suit can qualify; larger boards keep the
/// suit whose top five compare highest.
#[inline(always)]
fn best_flush(suits: &[u16; 4]) -> Option<[Rank; 5]> {
    suits
        .iter()
        .filter(|&&s| popcnt13(s) >= 5)
        .map(|&s| top_ranks::<5>(s))
        .max()
}

/// Evaluate the best five-card hand in `board`.
///
/// No validation: the board must hold at least 5 cards. Use [`evaluate`] for
/// checked input.
#[inline]
pub fn evaluate_board(board: &BitBoard) -> HandValue {
    let suits = board.suits();
    let m = Multiplicity::from_suits(&suits);
    let ranks = m.any;

    if let Some(top) = best_straight_flush(&suits) {
        return HandValue::StraightFlush { top };
    }

    if let Some(quads) = highest(m.quads()) {
        let [kicker] = top_ranks::<1>(ranks & !quads.bit());
        return HandValue::Quads { quads, kicker };
    }

    // Full house: the best trips plus the best other rank held at least
    // twice, a second trips included.
    if let Some(set) = highest(m.trips()) {
        if let Some(pair) = highest(m.ge2 & !set.bit()) {
            return HandValue::FullHouse { set, pair };
        }
    }

    if let Some(flush) = best_flush(&suits) {
        return HandValue::Flush(flush);
    }

    if let Some(top) = straight_top(ranks) {
        return HandValue::Straight { top };
    }

    if let Some(trips) = highest(m.trips()) {
        let kickers = top_ranks::<2>(ranks & !trips.bit());
        return HandValue::Set { trips, kickers };
    }

    let pairs = m.pairs();
    if popcnt13(pairs) >= 2 {
        let [high, low] = top_ranks::<2>(pairs);
        // A third pair's rank is just another kicker.
        let [kicker] = top_ranks::<1>(ranks & !(high.bit() | low.bit()));
        return HandValue::TwoPair { high, low, kicker };
    }

    if let Some(pair) = highest(pairs) {
        let kickers = top_ranks::<3>(ranks & !pair.bit());
        return HandValue::Pair { pair, kickers };
    }

    HandValue::HighCard(top_ranks::<5>(ranks))
}

/// Evaluate 5 to 7 distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<HandValue> {
    if !(MIN_CARDS..=MAX_CARDS).contains(&cards.len()) {
        return Err(Error::InvalidInput { count: cards.len() });
    }
    let board = BitBoard::try_from_cards(cards)?;
    Ok(evaluate_board(&board))
}

/// Evaluate 5 to 7 distinct raw card ids (0..51).
pub fn evaluate_ids(ids: &[u8]) -> Result<HandValue> {
    if !(MIN_CARDS..=MAX_CARDS).contains(&ids.len()) {
        return Err(Error::InvalidInput { count: ids.len() });
    }
    let mut board = BitBoard::new();
    for &id in ids {
        let card = Card::from_id(id)?;
        if board.insert(card) {
            return Err(Error::DuplicateCard(card));
        }
    }
    Ok(evaluate_board(&board))
}
