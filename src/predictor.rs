//! Multi-way equity by exhaustive enumeration of the unseen cards.
//!
//! Every player holds the same number of known cards. The unseen pool is the
//! deck minus all of them, and each completion tops every hand up to seven
//! cards. A completion is credited to every player holding the best hand.
//!
//! Under [`TieCredit::Full`] (the default) each tied player is credited a
//! whole win, so reported equities can sum to more than 100%.
//! [`TieCredit::Split`] divides a tied completion evenly instead.

use log::{debug, warn};
use rand::prelude::*;

use crate::bitboard::BitBoard;
use crate::card::Card;
use crate::combination::Combinations;
use crate::error::{Error, Result};
use crate::evaluator::{evaluate_board, MAX_CARDS};
use crate::score::Score;

/// Above C(48, 5) = 1,712,304, the largest heads-up enumeration.
pub const DEFAULT_MAX_COMBINATIONS: u64 = 2_000_000;

/// Smallest number of known cards per player.
pub const MIN_HAND_CARDS: usize = 2;

/// How a completion won jointly by several players is credited.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum TieCredit {
    /// Every tied winner gets a full win.
    #[default]
    Full,
    /// Each of `w` tied winners gets `1 / w` of a win.
    Split,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictorConfig {
    /// Reject exhaustive runs with more completions than this.
    pub max_combinations: u64,
    pub tie_credit: TieCredit,
    /// Spread the enumeration over the rayon pool. Needs the `parallel` feature.
    pub parallel: bool,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            tie_credit: TieCredit::Full,
            parallel: true,
        }
    }
}

impl PredictorConfig {
    pub fn with_max_combinations(mut self, limit: u64) -> Self {
        self.max_combinations = limit;
        self
    }

    pub fn with_tie_credit(mut self, tie_credit: TieCredit) -> Self {
        self.tie_credit = tie_credit;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Per-player outcome counts.
///
/// `win` counts completions won alone, `tie` completions shared with at least
/// one other player, and `tie_share` the sum of `1 / winners` over those ties.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct EquityCounts {
    pub win: u64,
    pub tie: u64,
    pub lose: u64,
    pub tie_share: f64,
}

impl EquityCounts {
    #[inline(always)]
    pub fn total(&self) -> u64 {
        self.win + self.tie + self.lose
    }

    /// Credited wins under the given tie policy.
    pub fn credited(&self, tie_credit: TieCredit) -> f64 {
        match tie_credit {
            TieCredit::Full => (self.win + self.tie) as f64,
            TieCredit::Split => self.win as f64 + self.tie_share,
        }
    }

    pub fn merge(&mut self, other: &EquityCounts) {
        self.win += other.win;
        self.tie += other.tie;
        self.lose += other.lose;
        self.tie_share += other.tie_share;
    }
}

/// Result of a prediction: counts per player, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub counts: Vec<EquityCounts>,
    /// Completions evaluated.
    pub total: u64,
    pub tie_credit: TieCredit,
}

impl Prediction {
    pub fn players(&self) -> usize {
        self.counts.len()
    }

    /// Equity of `player` as a percentage of all completions.
    pub fn equity(&self, player: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts[player].credited(self.tie_credit) / self.total as f64 * 100.0
    }

    pub fn equities(&self) -> Vec<f64> {
        (0..self.players()).map(|p| self.equity(p)).collect()
    }
}

/// Validated input: each player's cards as a board, and the unseen pool.
struct Table {
    hands: Vec<BitBoard>,
    pool: Vec<Card>,
    completion: usize,
}

impl Table {
    fn new<H: AsRef<[Card]>>(hands: &[H]) -> Result<Self> {
        if hands.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "at least two players required, got {}",
                hands.len()
            )));
        }

        let size = hands[0].as_ref().len();
        if !(MIN_HAND_CARDS..=MAX_CARDS).contains(&size) {
            return Err(Error::InvalidParameter(format!(
                "hands must hold {MIN_HAND_CARDS} to {MAX_CARDS} cards, got {size}"
            )));
        }

        let mut used = BitBoard::new();
        let mut boards = Vec::with_capacity(hands.len());
        for (player, hand) in hands.iter().enumerate() {
            let hand = hand.as_ref();
            if hand.len() != size {
                return Err(Error::InvalidParameter(format!(
                    "player {player} holds {} cards, expected {size}",
                    hand.len()
                )));
            }
            for &card in hand {
                if used.insert(card) {
                    return Err(Error::InvalidParameter(format!(
                        "card {card} is held more than once"
                    )));
                }
            }
            boards.push(BitBoard::from_cards(hand));
        }

        Ok(Self {
            hands: boards,
            pool: used.complement().iter().collect(),
            completion: MAX_CARDS - size,
        })
    }

    fn combinations(&self) -> Result<Combinations<'_, Card>> {
        Combinations::new(&self.pool, self.completion)
    }
}

/// Running counts plus scratch space for one completion's scores.
struct Tally {
    counts: Vec<EquityCounts>,
    scores: Vec<Score>,
}

impl Tally {
    fn new(players: usize) -> Self {
        Self {
            counts: vec![EquityCounts::default(); players],
            scores: vec![Score(0); players],
        }
    }

    #[inline]
    fn record(&mut self, hands: &[BitBoard], completion: &[Card]) {
        let board = BitBoard::from_cards(completion);

        let mut best = Score(0);
        for (score, &hand) in self.scores.iter_mut().zip(hands) {
            *score = evaluate_board(&(board | hand)).score();
            best = best.max(*score);
        }

        let winners = self.scores.iter().filter(|&&s| s == best).count();
        for (counts, &score) in self.counts.iter_mut().zip(&self.scores) {
            if score != best {
                counts.lose += 1;
            } else if winners == 1 {
                counts.win += 1;
            } else {
                counts.tie += 1;
                counts.tie_share += 1.0 / winners as f64;
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn merge_counts(mut a: Vec<EquityCounts>, b: Vec<EquityCounts>) -> Vec<EquityCounts> {
    for (x, y) in a.iter_mut().zip(&b) {
        x.merge(y);
    }
    a
}

#[derive(Clone, Debug, Default)]
pub struct Predictor {
    config: PredictorConfig,
}

impl Predictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Exact equity for each player over every completion of the unseen pool.
    ///
    /// `hands` are the players' known cards: equal sizes between 2 and 7, no
    /// card held twice, at least two players.
    pub fn predict<H: AsRef<[Card]>>(&self, hands: &[H]) -> Result<Prediction> {
        let table = Table::new(hands)?;
        let combos = table.combinations()?;
        let total = combos.count();

        debug!(
            "predict: {} players, pool {}, completing {} cards, {} combinations",
            table.hands.len(),
            table.pool.len(),
            table.completion,
            total
        );

        if total > self.config.max_combinations {
            warn!(
                "predict: {total} combinations exceed the limit of {}",
                self.config.max_combinations
            );
            return Err(Error::TooManyCombinations {
                count: total,
                limit: self.config.max_combinations,
            });
        }

        let counts = if self.config.parallel {
            tally_parallel(&table, &combos)
        } else {
            tally_sequential(&table, &combos)
        };

        debug!("predict: counts {counts:?}");
        Ok(Prediction { counts, total, tie_credit: self.config.tie_credit })
    }

    /// Monte Carlo estimate from `iterations` random completions drawn with
    /// the caller's random source. Not bound by the combination limit.
    pub fn sample<H, R>(&self, hands: &[H], iterations: u64, rng: &mut R) -> Result<Prediction>
    where
        H: AsRef<[Card]>,
        R: Rng + ?Sized,
    {
        let table = Table::new(hands)?;
        if table.completion > table.pool.len() {
            return Err(Error::InvalidParameter(format!(
                "subset size {} exceeds pool size {}",
                table.completion,
                table.pool.len()
            )));
        }

        debug!(
            "sample: {} players, pool {}, completing {} cards, {iterations} iterations",
            table.hands.len(),
            table.pool.len(),
            table.completion
        );

        let mut tally = Tally::new(table.hands.len());
        let mut draw = Vec::with_capacity(table.completion);
        for _ in 0..iterations {
            draw.clear();
            draw.extend(table.pool.choose_multiple(rng, table.completion).copied());
            tally.record(&table.hands, &draw);
        }

        Ok(Prediction {
            counts: tally.counts,
            total: iterations,
            tie_credit: self.config.tie_credit,
        })
    }
}

fn tally_sequential(table: &Table, combos: &Combinations<'_, Card>) -> Vec<EquityCounts> {
    let mut tally = Tally::new(table.hands.len());
    combos.for_each(|completion| tally.record(&table.hands, completion));
    tally.counts
}

#[cfg(feature = "parallel")]
fn tally_parallel(table: &Table, combos: &Combinations<'_, Card>) -> Vec<EquityCounts> {
    use rayon::prelude::*;

    let total = combos.count();
    let players = table.hands.len();
    let chunks = (rayon::current_num_threads() as u64 * 4).clamp(1, total.max(1));
    let per_chunk = total.div_ceil(chunks);

    (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut tally = Tally::new(players);
            combos.for_each_range(chunk * per_chunk, per_chunk, |completion| {
                tally.record(&table.hands, completion)
            });
            tally.counts
        })
        .reduce(|| vec![EquityCounts::default(); players], merge_counts)
}

#[cfg(not(feature = "parallel"))]
fn tally_parallel(table: &Table, combos: &Combinations<'_, Card>) -> Vec<EquityCounts> {
    tally_sequential(table, combos)
}

/// Exact equity with the default configuration.
pub fn predict<H: AsRef<[Card]>>(hands: &[H]) -> Result<Prediction> {
    Predictor::default().predict(hands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::parse_cards;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hands(specs: &[&str]) -> Vec<Vec<Card>> {
        specs.iter().map(|s| parse_cards(s).unwrap()).collect()
    }

    #[test]
    fn complete_hands_are_one_trial() {
        let h = hands(&["Ad Ah Kd Kh Qd 2c 3c", "7s 7c 8s 9h Jd 4h 5h"]);
        let p = predict(&h).unwrap();
        assert_eq!(p.total, 1);
        assert_eq!(p.counts[0].win, 1);
        assert_eq!(p.counts[1].lose, 1);
        assert_eq!(p.equities(), vec![100.0, 0.0]);
    }

    #[test]
    fn exact_tie_credits_everyone() {
        // Both play the same broadway straight.
        let h = hands(&["Ad Kh Qs Jc Td 2c", "As Kd Qh Jd Tc 2d"]);
        let p = predict(&h).unwrap();
        assert_eq!(p.total, 40);

        for c in &p.counts {
            assert_eq!(c.total(), 40);
        }
        // Every completion is at least a tie for both players.
        let sum: f64 = p.equities().iter().sum();
        assert!(sum > 100.0, "sum {sum}");
    }

    #[test]
    fn split_mode_sums_to_one_hundred() {
        let h = hands(&["Ad Kh Qs Jc Td", "As Kd Qh Jd Tc", "2c 3c 4d 5h 7s"]);
        let predictor = Predictor::new(PredictorConfig::default().with_tie_credit(TieCredit::Split));
        let p = predictor.predict(&h).unwrap();

        assert_eq!(p.total, 666); // C(37, 2)
        let sum: f64 = p.equities().iter().sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum {sum}");
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let h = hands(&["Ad Ah 2c 3d", "Kd Kh 7s 8s", "9c Tc Jc 4h"]);
        let seq = Predictor::new(PredictorConfig::default().with_parallel(false))
            .predict(&h)
            .unwrap();
        let par = Predictor::new(PredictorConfig::default().with_parallel(true))
            .predict(&h)
            .unwrap();

        assert_eq!(seq.total, 9880); // C(40, 3)
        for (a, b) in seq.counts.iter().zip(&par.counts) {
            assert_eq!((a.win, a.tie, a.lose), (b.win, b.tie, b.lose));
        }
    }

    #[test]
    fn rejects_bad_hands() {
        let one = hands(&["Ad Ah"]);
        assert!(matches!(predict(&one), Err(Error::InvalidParameter(_))));

        let mixed = hands(&["Ad Ah", "Kd Kh Qd"]);
        assert!(matches!(predict(&mixed), Err(Error::InvalidParameter(_))));

        let overlap = hands(&["Ad Ah", "Ad Kh"]);
        assert!(matches!(predict(&overlap), Err(Error::InvalidParameter(_))));

        let single = hands(&["Ad", "Kd"]);
        assert!(matches!(predict(&single), Err(Error::InvalidParameter(_))));

        let eight = hands(&["2d 3d 4d 5d 6d 7d 8d 9d", "2c 3c 4c 5c 6c 7c 8c 9c"]);
        assert!(matches!(predict(&eight), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn work_ceiling() {
        let h = hands(&["Ad Ah", "Kd Kh"]);
        let predictor = Predictor::new(PredictorConfig::default().with_max_combinations(1000));
        assert_eq!(
            predictor.predict(&h),
            Err(Error::TooManyCombinations { count: 1_712_304, limit: 1000 })
        );
    }

    #[test]
    fn sampled_counts_sum() {
        let h = hands(&["Ad Ah", "Kd Kh", "7c 2s"]);
        let mut rng = StdRng::seed_from_u64(456);
        let p = Predictor::default().sample(&h, 5_000, &mut rng).unwrap();

        assert_eq!(p.total, 5_000);
        for c in &p.counts {
            assert_eq!(c.total(), 5_000);
        }
        assert!(p.equity(0) > 50.0, "equity {}", p.equity(0));
        assert!(p.equity(0) > p.equity(1));
    }
}
