//! Hand categories and the comparable hand value.

use std::cmp::Ordering;
use std::fmt;

use crate::card::Rank;
use crate::score::{pack_score, Score};

/// Hand categories, weakest first. The derived order is the primary sort key.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Set = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::Set,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::Quads,
        HandCategory::StraightFlush,
    ];

    #[inline(always)]
    pub const fn from_u8(x: u8) -> HandCategory {
        match x {
            0 => HandCategory::HighCard,
            1 => HandCategory::Pair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::Set,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::Quads,
            _ => HandCategory::StraightFlush,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::Set => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::Quads => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

/// Best five-card hand: the category tag plus its fixed-shape tie-break.
///
/// Every rank array is sorted descending. Straights report their top rank,
/// with the wheel (A2345) reported as `Rank::Five`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HandValue {
    HighCard([Rank; 5]),
    Pair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    Set { trips: Rank, kickers: [Rank; 2] },
    Straight { top: Rank },
    Flush([Rank; 5]),
    FullHouse { set: Rank, pair: Rank },
    Quads { quads: Rank, kicker: Rank },
    StraightFlush { top: Rank },
}

impl HandValue {
    pub const fn category(&self) -> HandCategory {
        match self {
            HandValue::HighCard(_) => HandCategory::HighCard,
            HandValue::Pair { .. } => HandCategory::Pair,
            HandValue::TwoPair { .. } => HandCategory::TwoPair,
            HandValue::Set { .. } => HandCategory::Set,
            HandValue::Straight { .. } => HandCategory::Straight,
            HandValue::Flush(_) => HandCategory::Flush,
            HandValue::FullHouse { .. } => HandCategory::FullHouse,
            HandValue::Quads { .. } => HandCategory::Quads,
            HandValue::StraightFlush { .. } => HandCategory::StraightFlush,
        }
    }

    /// Tie-break ranks, most significant first. Unused trailing slots are `None`.
    pub fn tiebreak(&self) -> [Option<Rank>; 5] {
        fn fill(ranks: &[Rank]) -> [Option<Rank>; 5] {
            let mut out = [None; 5];
            for (slot, r) in out.iter_mut().zip(ranks) {
                *slot = Some(*r);
            }
            out
        }

        match *self {
            HandValue::HighCard(r) | HandValue::Flush(r) => fill(&r),
            HandValue::Pair { pair, kickers: [k1, k2, k3] } => fill(&[pair, k1, k2, k3]),
            HandValue::TwoPair { high, low, kicker } => fill(&[high, low, kicker]),
            HandValue::Set { trips, kickers: [k1, k2] } => fill(&[trips, k1, k2]),
            HandValue::Straight { top } | HandValue::StraightFlush { top } => fill(&[top]),
            HandValue::FullHouse { set, pair } => fill(&[set, pair]),
            HandValue::Quads { quads, kicker } => fill(&[quads, kicker]),
        }
    }

    /// Pack into a u32 whose integer order matches [`compare`].
    #[inline]
    pub fn score(&self) -> Score {
        let t = self.tiebreak().map(|r| r.map_or(0, Rank::idx));
        pack_score(self.category(), t[0], t[1], t[2], t[3], t[4])
    }
}

/// Total order on hand values: category first, then the tie-break ranks
/// lexicographically. Only payloads of the same variant are ever compared.
pub fn compare(a: &HandValue, b: &HandValue) -> Ordering {
    use HandValue::*;

    match (a, b) {
        (HighCard(x), HighCard(y)) => x.cmp(y),
        (Pair { pair: p, kickers: k }, Pair { pair: q, kickers: l }) => (p, k).cmp(&(q, l)),
        (
            TwoPair { high: h1, low: l1, kicker: k1 },
            TwoPair { high: h2, low: l2, kicker: k2 },
        ) => (h1, l1, k1).cmp(&(h2, l2, k2)),
        (Set { trips: t, kickers: k }, Set { trips: u, kickers: l }) => (t, k).cmp(&(u, l)),
        (Straight { top: x }, Straight { top: y }) => x.cmp(y),
        (Flush(x), Flush(y)) => x.cmp(y),
        (FullHouse { set: s1, pair: p1 }, FullHouse { set: s2, pair: p2 }) => {
            (s1, p1).cmp(&(s2, p2))
        }
        (Quads { quads: q1, kicker: k1 }, Quads { quads: q2, kicker: k2 }) => {
            (q1, k1).cmp(&(q2, k2))
        }
        (StraightFlush { top: x }, StraightFlush { top: y }) => x.cmp(y),
        _ => a.category().cmp(&b.category()),
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cat = self.category();
        match self {
            HandValue::HighCard(r) | HandValue::Flush(r) => {
                write!(f, "{cat}, {}{}{}{}{}", r[0], r[1], r[2], r[3], r[4])
            }
            HandValue::Pair { pair, kickers: k } => {
                write!(f, "{cat} of {pair}, {}{}{} kickers", k[0], k[1], k[2])
            }
            HandValue::TwoPair { high, low, kicker } => {
                write!(f, "{cat}, {high} and {low}, {kicker} kicker")
            }
            HandValue::Set { trips, kickers: k } => {
                write!(f, "{cat}, {trips}, {}{} kickers", k[0], k[1])
            }
            HandValue::Straight { top } | HandValue::StraightFlush { top } => {
                write!(f, "{cat}, {top} high")
            }
            HandValue::FullHouse { set, pair } => write!(f, "{cat}, {set} full of {pair}"),
            HandValue::Quads { quads, kicker } => write!(f, "{cat}, {quads}, {kicker} kicker"),
        }
    }
}
