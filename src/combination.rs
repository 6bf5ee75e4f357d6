//! k-subset enumeration in lexicographic index order.
//!
//! Subsets are walked with an index vector `i0 < i1 < .. < i(k-1)` into the
//! pool: advance the rightmost index that still has room, then reset the ones
//! after it. The combinatorial number system maps a subset's position in that
//! order back to its index vector, so any range of positions can be walked
//! on its own.

use crate::error::{Error, Result};

/// Binomial coefficient C(n, k), 0 when k > n. Saturates at u64::MAX.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // Exact at every step: acc * (n - i) is divisible by (i + 1).
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > u64::MAX as u128 {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Index vector of the subset at lexicographic position `rank`.
///
/// Requires `k <= n` and `rank < binomial(n, k)`.
pub fn nth_subset(mut rank: u64, n: usize, k: usize) -> Vec<usize> {
    debug_assert!(k <= n && rank < binomial(n, k));

    let mut out = Vec::with_capacity(k);
    let mut c = 0usize;
    for slot in 0..k {
        // Subsets whose `slot`-th index is c: choose the rest from c+1..n.
        loop {
            let block = binomial(n - c - 1, k - slot - 1);
            if rank < block {
                break;
            }
            rank -= block;
            c += 1;
        }
        out.push(c);
        c += 1;
    }
    out
}

/// Step `idx` to the next k-subset of 0..n. Returns false past the last one.
#[inline]
fn advance(idx: &mut [usize], n: usize) -> bool {
    let k = idx.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if idx[i] < n - k + i {
            idx[i] += 1;
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// All k-element subsets of a pool, in lexicographic order of pool positions.
///
/// Borrowing the pool keeps this cheap to copy and re-iterate; every call to
/// [`Combinations::iter`] starts over from the first subset.
#[derive(Copy, Clone, Debug)]
pub struct Combinations<'a, T> {
    pool: &'a [T],
    k: usize,
}

impl<'a, T: Copy> Combinations<'a, T> {
    pub fn new(pool: &'a [T], k: usize) -> Result<Self> {
        if k > pool.len() {
            return Err(Error::InvalidParameter(format!(
                "subset size {k} exceeds pool size {}",
                pool.len()
            )));
        }
        Ok(Self { pool, k })
    }

    pub fn pool(&self) -> &'a [T] {
        self.pool
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of subsets, C(n, k).
    pub fn count(&self) -> u64 {
        binomial(self.pool.len(), self.k)
    }

    pub fn iter(&self) -> Iter<'a, T> {
        self.iter_from(0)
    }

    /// Iterate starting at lexicographic position `start`.
    pub fn iter_from(&self, start: u64) -> Iter<'a, T> {
        let total = self.count();
        let remaining = total.saturating_sub(start);
        let idx = if remaining > 0 {
            nth_subset(start, self.pool.len(), self.k)
        } else {
            Vec::new()
        };
        Iter { pool: self.pool, idx, remaining }
    }

    /// Call `f` for every subset without allocating per subset.
    pub fn for_each<F: FnMut(&[T])>(&self, f: F) {
        self.for_each_range(0, self.count(), f)
    }

    /// Call `f` for up to `count` subsets starting at position `start`.
    pub fn for_each_range<F: FnMut(&[T])>(&self, start: u64, count: u64, mut f: F) {
        let n = self.pool.len();
        let total = self.count();
        if start >= total {
            return;
        }
        let mut left = count.min(total - start);
        let mut idx = nth_subset(start, n, self.k);
        let mut buf: Vec<T> = idx.iter().map(|&i| self.pool[i]).collect();

        while left > 0 {
            f(&buf);
            left -= 1;
            if left == 0 || !advance(&mut idx, n) {
                break;
            }
            for (slot, &i) in buf.iter_mut().zip(&idx) {
                *slot = self.pool[i];
            }
        }
    }
}

impl<'a, T: Copy> IntoIterator for &Combinations<'a, T> {
    type Item = Vec<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Lazy iterator over the subsets of a [`Combinations`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    pool: &'a [T],
    idx: Vec<usize>,
    remaining: u64,
}

impl<T: Copy> Iterator for Iter<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.idx.iter().map(|&i| self.pool[i]).collect();
        self.remaining -= 1;
        if self.remaining > 0 {
            advance(&mut self.idx, self.pool.len());
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

/// Every k-subset of `pool` as an owned vector, lazily.
pub fn generate<T: Copy>(pool: &[T], k: usize) -> Result<Iter<'_, T>> {
    Ok(Combinations::new(pool, k)?.iter())
}
