//! Packed u32 score.
//!
//! Layout:
//! bits 20..23 : category (0..8), higher is better
//! bits 16..19 : r0, the most significant tie-break rank
//! bits 12..15 : r1
//! bits  8..11 : r2
//! bits  4..7  : r3
//! bits  0..3  : r4
//!
//! Each r* is a 4-bit rank index (0..12). Slots a category does not use are 0,
//! so comparing two scores as integers agrees with comparing their hand values.

use crate::value::HandCategory;

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Score(pub u32);

impl Score {
    #[inline(always)]
    pub const fn category(self) -> HandCategory {
        HandCategory::from_u8(((self.0 >> 20) & 0xF) as u8)
    }

    /// The five rank slots, most significant first.
    #[inline(always)]
    pub const fn slots(self) -> [u8; 5] {
        let v = self.0;
        [
            ((v >> 16) & 0xF) as u8,
            ((v >> 12) & 0xF) as u8,
            ((v >> 8) & 0xF) as u8,
            ((v >> 4) & 0xF) as u8,
            (v & 0xF) as u8,
        ]
    }
}

#[inline(always)]
pub const fn pack_score(cat: HandCategory, r0: u8, r1: u8, r2: u8, r3: u8, r4: u8) -> Score {
    Score(
        ((cat as u32) << 20)
            | (((r0 & 0xF) as u32) << 16)
            | (((r1 & 0xF) as u32) << 12)
            | (((r2 & 0xF) as u32) << 8)
            | (((r3 & 0xF) as u32) << 4)
            | ((r4 & 0xF) as u32),
    )
}
