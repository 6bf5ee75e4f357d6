//! Helpers over 13-bit rank masks (bit r set ⇔ rank r present).
//!
//! - STRAIGHT_TOP13[mask] -> top rank index of the best 5-rank run, or NO_STRAIGHT.
//!   The wheel A2345 reports 3 (Five-high), below every other run.
//! - highest / top_ranks walk the mask from the Ace down.

use crate::bitboard::MASK13;
use crate::card::Rank;

const N: usize = 1 << 13;

/// Ace, Two, Three, Four, Five.
pub const WHEEL_MASK: u16 = (1u16 << 12) | 0b1111;
pub const NO_STRAIGHT: u8 = u8::MAX;

const RUN5: u16 = 0b1_1111;

/// Scan the eight contiguous 5-bit windows from the highest start (8) down,
/// then the wheel.
const fn straight_top_scan(mask: u16) -> u8 {
    let mut start: u16 = 9;
    while start > 0 {
        start -= 1;
        let window = RUN5 << start;
        if mask & window == window {
            return (start + 4) as u8;
        }
    }
    if mask & WHEEL_MASK == WHEEL_MASK {
        return Rank::Five as u8;
    }
    NO_STRAIGHT
}

const fn build_straight_top13() -> [u8; N] {
    let mut arr = [NO_STRAIGHT; N];
    let mut i: usize = 0;
    while i < N {
        arr[i] = straight_top_scan(i as u16);
        i += 1;
    }
    arr
}

pub static STRAIGHT_TOP13: [u8; N] = build_straight_top13();

#[inline(always)]
pub fn popcnt13(mask: u16) -> u32 {
    (mask & MASK13).count_ones()
}

/// Top rank of the highest straight in `mask`, the wheel counting as Five-high.
#[inline(always)]
pub fn straight_top(mask: u16) -> Option<Rank> {
    match STRAIGHT_TOP13[(mask & MASK13) as usize] {
        NO_STRAIGHT => None,
        top => Some(Rank::from_u8(top)),
    }
}

#[inline(always)]
pub fn highest(mask: u16) -> Option<Rank> {
    let m = mask & MASK13;
    if m == 0 {
        return None;
    }
    Some(Rank::from_u8((15 - m.leading_zeros()) as u8))
}

/// The `K` highest ranks of `mask`, descending.
///
/// Slots past the number of set bits stay `Rank::Two`; callers only ask for
/// as many ranks as the mask is known to hold.
#[inline(always)]
pub fn top_ranks<const K: usize>(mut mask: u16) -> [Rank; K] {
    debug_assert!(popcnt13(mask) as usize >= K, "mask {mask:#015b} has fewer than {K} ranks");
    let mut out = [Rank::Two; K];
    for slot in out.iter_mut() {
        match highest(mask) {
            Some(r) => {
                *slot = r;
                mask &= !r.bit();
            }
            None => break,
        }
    }
    out
}
