use std::ops::AddAssign;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, instrument, trace, warn};

use crate::core::{
    Board, CandidatePool, Card, CardBitSet, EquityError, HandRank, HoleCards, Result,
    evaluate_unchecked,
};

use super::config::{EquityConfig, Runout};
use super::showdown::{Outcome, showdown};

/// Win, tie, and loss counts from an equity estimate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquityResult {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    /// How many trials were asked for. More than `trials()` when a deadline
    /// or cancel flag stopped the run early.
    pub requested: u64,
}

impl EquityResult {
    /// Number of trials that actually finished.
    pub fn trials(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    /// `(wins + ties / 2) / trials`. A tie is worth half a pot however many
    /// players share it.
    pub fn equity(&self) -> f64 {
        let trials = self.trials();
        if trials == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / trials as f64
    }

    pub fn win_rate(&self) -> f64 {
        let trials = self.trials();
        if trials == 0 {
            return 0.0;
        }
        self.wins as f64 / trials as f64
    }

    pub fn tie_rate(&self) -> f64 {
        let trials = self.trials();
        if trials == 0 {
            return 0.0;
        }
        self.ties as f64 / trials as f64
    }

    /// Did every requested trial run?
    pub fn is_complete(&self) -> bool {
        self.trials() == self.requested
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
}

impl AddAssign for EquityResult {
    fn add_assign(&mut self, rhs: Self) {
        self.wins += rhs.wins;
        self.ties += rhs.ties;
        self.losses += rhs.losses;
        self.requested += rhs.requested;
    }
}

/// Everything a trial needs, validated once before the first trial.
#[derive(Debug)]
struct Simulation {
    hero: HoleCards,
    board: Vec<Card>,
    /// Pool cards not held by the hero or on the board.
    pool: Vec<Card>,
    opponents: usize,
    /// Cards nobody holds yet. Only filled when the board is completed.
    deck: Vec<Card>,
    /// Board cards still to deal each trial.
    missing: usize,
    /// The hero's rank when the board is fixed.
    hero_rank: Option<HandRank>,
}

impl Simulation {
    fn new(
        hero: &HoleCards,
        pool: &CandidatePool,
        opponents: usize,
        board: &Board,
        runout: Runout,
    ) -> Result<Self> {
        if opponents == 0 {
            return Err(EquityError::NoOpponents);
        }

        let mut dead = board.to_bitset();
        for card in hero.iter() {
            if !dead.insert(card) {
                return Err(EquityError::DuplicateCard(card));
            }
        }

        let live_pool = pool.live_cards(dead);
        let required = opponents.saturating_mul(2);
        if live_pool.len() < required {
            return Err(EquityError::InsufficientPoolSize {
                required,
                available: live_pool.len(),
            });
        }

        // Two hole cards can't be ranked, so preflop always runs out.
        let complete = runout == Runout::Complete || board.is_empty();
        let (deck, missing, hero_rank) = if complete {
            let deck: Vec<Card> = (!dead).into_iter().collect();
            let missing = board.missing();
            // Every opponent card comes out of this deck too.
            let available = deck.len() - required;
            if available < missing {
                return Err(EquityError::InsufficientDeck {
                    required: missing,
                    available,
                });
            }
            (deck, missing, None)
        } else {
            let mut known: Vec<Card> = board.to_vec();
            known.extend(hero.iter());
            (Vec::new(), 0, Some(evaluate_unchecked(&known)))
        };

        Ok(Self {
            hero: *hero,
            board: board.to_vec(),
            pool: live_pool,
            opponents,
            deck,
            missing,
            hero_rank,
        })
    }

    /// Run `trials` trials with a private rng, stopping early when asked.
    fn run_batch(&self, seed: u64, trials: usize, stop: &StopCondition) -> EquityResult {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pool = self.pool.clone();
        let mut deck = self.deck.clone();
        let mut board = Vec::with_capacity(5);
        let mut hand = Vec::with_capacity(7);
        let mut opponent_ranks = Vec::with_capacity(self.opponents);

        let mut result = EquityResult {
            requested: trials as u64,
            ..Default::default()
        };

        for _ in 0..trials {
            if stop.should_stop() {
                break;
            }

            // Deal every opponent from the same shuffle so no card goes to
            // two players.
            let (dealt, _) = pool.partial_shuffle(&mut rng, 2 * self.opponents);

            board.clear();
            board.extend_from_slice(&self.board);
            if self.missing > 0 {
                let taken: CardBitSet = dealt.iter().copied().collect();
                let draw = (self.missing + dealt.len()).min(deck.len());
                let (shuffled, _) = deck.partial_shuffle(&mut rng, draw);
                board.extend(
                    shuffled
                        .iter()
                        .copied()
                        .filter(|c| !taken.contains(*c))
                        .take(self.missing),
                );
            }

            let hero_rank = match self.hero_rank {
                Some(rank) => rank,
                None => {
                    hand.clear();
                    hand.extend(self.hero.iter());
                    hand.extend_from_slice(&board);
                    evaluate_unchecked(&hand)
                }
            };

            opponent_ranks.clear();
            for hole in dealt.chunks_exact(2) {
                hand.clear();
                hand.extend_from_slice(hole);
                hand.extend_from_slice(&board);
                opponent_ranks.push(evaluate_unchecked(&hand));
            }

            result.record(showdown(hero_rank, opponent_ranks.iter().copied()));
        }
        result
    }
}

/// Deadline and cancel flag shared by every batch of one estimate.
#[derive(Debug)]
struct StopCondition {
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
}

impl StopCondition {
    fn should_stop(&self) -> bool {
        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return true;
            }
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Monte Carlo equity estimator.
///
/// Opponent hole cards are sampled from a candidate pool; the hero's hand
/// and the board stay fixed. Each call is independent and leaves nothing
/// behind.
///
/// The trials are split into batches. Each batch is seeded from a `u64`
/// drawn from the caller's rng, so the same seed always produces the same
/// result, whether batches run one after another or (with the `parallel`
/// feature) on a thread pool.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{Board, CandidatePool, HoleCards};
/// use holdem_equity::holdem::{EquityEstimatorBuilder, Runout};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let estimator = EquityEstimatorBuilder::default()
///     .trials(2_000)
///     .runout(Runout::Complete)
///     .build()
///     .unwrap();
///
/// let hero = HoleCards::new_from_str("AsAd").unwrap();
/// let pool = CandidatePool::new_from_str("KsKdKhKc").unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let result = estimator
///     .estimate(&hero, &pool, 1, &Board::preflop(), &mut rng)
///     .unwrap();
/// assert!(result.equity() > 0.7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EquityEstimator {
    config: EquityConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl EquityEstimator {
    /// Create an estimator from a validated configuration.
    pub fn new(config: EquityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: None,
        })
    }

    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// Estimate the hero's equity against `opponents` players whose hole
    /// cards come from `pool`.
    ///
    /// All validation happens before the first trial. Cards in the pool that
    /// the hero holds or that are on the board are skipped.
    #[instrument(level = "trace", skip(self, hero, pool, board, rng), fields(hero = %hero, board = %board))]
    pub fn estimate<R: Rng>(
        &self,
        hero: &HoleCards,
        pool: &CandidatePool,
        opponents: usize,
        board: &Board,
        rng: &mut R,
    ) -> Result<EquityResult> {
        let sim = Simulation::new(hero, pool, opponents, board, self.config.runout)?;
        debug!(
            opponents,
            pool = sim.pool.len(),
            missing = sim.missing,
            trials = self.config.trials,
            "Starting equity estimate"
        );

        let seeds: Vec<u64> = (0..self.config.num_batches())
            .map(|_| rng.random())
            .collect();
        let stop = StopCondition {
            deadline: self.config.deadline.map(|d| Instant::now() + d),
            cancel: self.cancel.clone(),
        };

        let result = self.run_batches(&sim, &seeds, &stop);
        if result.trials() == 0 {
            warn!("Equity estimate stopped before any trial finished");
            return Err(EquityError::NoTrialsCompleted);
        }
        if !result.is_complete() {
            warn!(
                completed = result.trials(),
                requested = result.requested,
                "Equity estimate stopped early"
            );
        }
        debug!(
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            equity = result.equity(),
            "Finished equity estimate"
        );
        Ok(result)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_batches(&self, sim: &Simulation, seeds: &[u64], stop: &StopCondition) -> EquityResult {
        let mut total = EquityResult::default();
        for (idx, seed) in seeds.iter().enumerate() {
            let batch = sim.run_batch(*seed, self.config.batch_trials(idx), stop);
            trace!(idx, trials = batch.trials(), "Finished batch");
            total += batch;
        }
        total
    }

    #[cfg(feature = "parallel")]
    fn run_batches(&self, sim: &Simulation, seeds: &[u64], stop: &StopCondition) -> EquityResult {
        use rayon::prelude::*;

        seeds
            .par_iter()
            .enumerate()
            .map(|(idx, seed)| {
                let batch = sim.run_batch(*seed, self.config.batch_trials(idx), stop);
                trace!(idx, trials = batch.trials(), "Finished batch");
                batch
            })
            .reduce(EquityResult::default, |mut a, b| {
                a += b;
                a
            })
    }
}

/// # EquityEstimatorBuilder
///
/// Builds an `EquityEstimator`. Every setter is optional; unset fields take
/// the `EquityConfig` defaults.
#[derive(Debug, Clone, Default)]
pub struct EquityEstimatorBuilder {
    config: Option<EquityConfig>,
    trials: Option<usize>,
    batch_size: Option<usize>,
    deadline: Option<Duration>,
    runout: Option<Runout>,
    cancel: Option<Arc<AtomicBool>>,
}

impl EquityEstimatorBuilder {
    /// Start from a whole configuration. Individual setters still win.
    pub fn config(mut self, config: EquityConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Stop after this much time, keeping the finished trials.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn runout(mut self, runout: Runout) -> Self {
        self.runout = Some(runout);
        self
    }

    /// A flag another thread can set to stop the estimate between trials.
    pub fn cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn build(self) -> Result<EquityEstimator> {
        let mut config = self.config.unwrap_or_default();
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(deadline) = self.deadline {
            config.deadline = Some(deadline);
        }
        if let Some(runout) = self.runout {
            config.runout = runout;
        }
        let mut estimator = EquityEstimator::new(config)?;
        estimator.cancel = self.cancel;
        Ok(estimator)
    }
}

/// Estimate the hero's equity with the board as it stands.
///
/// Shorthand for an `EquityEstimator` with `trial_count` trials and the
/// default settings otherwise. Returns the equity in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{Board, CandidatePool, EquityError, HoleCards};
/// use holdem_equity::holdem::estimate_equity;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let hero = HoleCards::new_from_str("AsAd").unwrap();
/// let pool = CandidatePool::new_from_str("2s3d4h").unwrap();
/// let board = Board::new_from_str("KhQcJh").unwrap();
/// let mut rng = StdRng::seed_from_u64(3);
/// assert_eq!(
///     Err(EquityError::InsufficientPoolSize { required: 4, available: 3 }),
///     estimate_equity(&hero, &pool, 2, &board, 100, &mut rng)
/// );
/// ```
pub fn estimate_equity<R: Rng>(
    hero: &HoleCards,
    pool: &CandidatePool,
    opponent_count: usize,
    board: &Board,
    trial_count: usize,
    rng: &mut R,
) -> Result<f64> {
    let estimator = EquityEstimatorBuilder::default()
        .trials(trial_count)
        .build()?;
    estimator
        .estimate(hero, pool, opponent_count, board, rng)
        .map(|r| r.equity())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(420)
    }

    #[test_log::test]
    fn test_aces_beat_forced_ace_high() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("2s3d").unwrap();
        for trials in [1, 7, 1_000] {
            let equity =
                estimate_equity(&hero, &pool, 1, &board, trials, &mut seeded()).unwrap();
            assert_eq!(1.0, equity);
        }
    }

    #[test]
    fn test_dominated_hero_has_zero_equity() {
        let hero = HoleCards::new_from_str("2s3d").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("AsAd").unwrap();
        let equity = estimate_equity(&hero, &pool, 1, &board, 250, &mut seeded()).unwrap();
        assert_eq!(0.0, equity);
    }

    #[test]
    fn test_identical_strength_splits() {
        let hero = HoleCards::new_from_str("AsKd").unwrap();
        let board = Board::new_from_str("2c7h9s").unwrap();
        let pool = CandidatePool::new_from_str("AhKc").unwrap();
        let equity = estimate_equity(&hero, &pool, 1, &board, 500, &mut seeded()).unwrap();
        assert_relative_eq!(0.5, equity);
    }

    #[test]
    fn test_multi_way_tie_worth_half() {
        // Royal flush on the board. Everyone plays the board.
        let hero = HoleCards::new_from_str("2c3c").unwrap();
        let board = Board::new_from_str("AhKhQhJhTh").unwrap();
        let pool = CandidatePool::new_from_str("4d5d6s7s8c9c").unwrap();
        let equity = estimate_equity(&hero, &pool, 3, &board, 100, &mut seeded()).unwrap();
        assert_relative_eq!(0.5, equity);
    }

    #[test]
    fn test_insufficient_pool() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("2s3d4h").unwrap();
        assert_eq!(
            Err(EquityError::InsufficientPoolSize {
                required: 4,
                available: 3
            }),
            estimate_equity(&hero, &pool, 2, &board, 10, &mut seeded())
        );
    }

    #[test]
    fn test_pool_cards_held_by_hero_or_board_are_skipped() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        // Only 2s3d is live once the hero's and board's cards are removed.
        let pool = CandidatePool::new_from_str("As2sKh3dJh").unwrap();
        assert_eq!(
            1.0,
            estimate_equity(&hero, &pool, 1, &board, 50, &mut seeded()).unwrap()
        );
        assert_eq!(
            Err(EquityError::InsufficientPoolSize {
                required: 4,
                available: 2
            }),
            estimate_equity(&hero, &pool, 2, &board, 50, &mut seeded())
        );
    }

    #[test]
    fn test_hero_on_board_is_rejected() {
        let hero = HoleCards::new_from_str("AsKh").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("2s3d").unwrap();
        let kh: Card = "Kh".parse().unwrap();
        assert_eq!(
            Err(EquityError::DuplicateCard(kh)),
            estimate_equity(&hero, &pool, 1, &board, 10, &mut seeded())
        );
    }

    #[test]
    fn test_zero_opponents_and_trials() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("2s3d").unwrap();
        assert_eq!(
            Err(EquityError::NoOpponents),
            estimate_equity(&hero, &pool, 0, &board, 10, &mut seeded())
        );
        assert_eq!(
            Err(EquityError::NoTrials),
            estimate_equity(&hero, &pool, 1, &board, 0, &mut seeded())
        );
    }

    #[test]
    fn test_deck_too_small_for_runout() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let dead: CardBitSet = hero.into();
        // 50 cards for 25 opponents leaves nothing to deal the board from.
        let pool = CandidatePool::full_deck_except(dead);
        let estimator = EquityEstimatorBuilder::default()
            .trials(10)
            .build()
            .unwrap();
        assert_eq!(
            Err(EquityError::InsufficientDeck {
                required: 5,
                available: 0
            }),
            estimator.estimate(&hero, &pool, 25, &Board::preflop(), &mut seeded())
        );
    }

    #[test]
    fn test_same_seed_same_result() {
        let hero = HoleCards::new_from_str("Th9h").unwrap();
        let board = Board::new_from_str("8h7c2d").unwrap();
        let pool = CandidatePool::full_deck_except(
            CardBitSet::from_iter(hero.iter().chain(board.iter().copied())),
        );
        let estimator = EquityEstimatorBuilder::default()
            .trials(3_000)
            .batch_size(128)
            .runout(Runout::Complete)
            .build()
            .unwrap();

        let a = estimator
            .estimate(&hero, &pool, 2, &board, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = estimator
            .estimate(&hero, &pool, 2, &board, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.equity().to_bits(), b.equity().to_bits());
        assert_eq!(3_000, a.trials());
        assert!(a.is_complete());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_batches_match_sequential_sum() {
        let hero = HoleCards::new_from_str("Th9h").unwrap();
        let board = Board::new_from_str("8h7c2d").unwrap();
        let pool = CandidatePool::full_deck_except(
            CardBitSet::from_iter(hero.iter().chain(board.iter().copied())),
        );
        let estimator = EquityEstimatorBuilder::default()
            .trials(5_000)
            .batch_size(100)
            .runout(Runout::Complete)
            .build()
            .unwrap();
        let sim = Simulation::new(&hero, &pool, 3, &board, Runout::Complete).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let seeds: Vec<u64> = (0..estimator.config().num_batches())
            .map(|_| rng.random())
            .collect();
        let stop = StopCondition {
            deadline: None,
            cancel: None,
        };

        let mut sequential = EquityResult::default();
        for (idx, seed) in seeds.iter().enumerate() {
            sequential += sim.run_batch(*seed, estimator.config().batch_trials(idx), &stop);
        }
        let parallel = estimator.run_batches(&sim, &seeds, &stop);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.equity().to_bits(), parallel.equity().to_bits());
        assert_eq!(5_000, parallel.trials());
    }

    #[test]
    fn test_huge_opponent_count_is_insufficient_pool() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("2s3d").unwrap();
        assert_eq!(
            Err(EquityError::InsufficientPoolSize {
                required: usize::MAX,
                available: 2
            }),
            estimate_equity(&hero, &pool, usize::MAX, &board, 10, &mut seeded())
        );
    }

    #[test_log::test]
    fn test_preflop_aces_vs_random() {
        // Pocket aces win roughly 85% heads up against a random hand.
        let hero = HoleCards::new_from_str("AsAh").unwrap();
        let pool = CandidatePool::full_deck_except(hero.into());
        let estimator = EquityEstimatorBuilder::default()
            .trials(20_000)
            .build()
            .unwrap();
        let result = estimator
            .estimate(&hero, &pool, 1, &Board::preflop(), &mut seeded())
            .unwrap();
        assert!(result.equity() > 0.82, "equity {}", result.equity());
        assert!(result.equity() < 0.88, "equity {}", result.equity());
    }

    #[test]
    fn test_flush_draw_completes_sometimes() {
        // Nut flush draw against a set on the flop. The draw is behind on
        // the known cards but wins about a quarter of runouts.
        let hero = HoleCards::new_from_str("Ah9h").unwrap();
        let board = Board::new_from_str("Kh7h2d").unwrap();
        let pool = CandidatePool::new_from_str("KsKc").unwrap();

        let known = EquityEstimatorBuilder::default()
            .trials(1_000)
            .build()
            .unwrap()
            .estimate(&hero, &pool, 1, &board, &mut seeded())
            .unwrap();
        assert_eq!(0.0, known.equity());

        let complete = EquityEstimatorBuilder::default()
            .trials(20_000)
            .runout(Runout::Complete)
            .build()
            .unwrap()
            .estimate(&hero, &pool, 1, &board, &mut seeded())
            .unwrap();
        assert!(complete.equity() > 0.2, "equity {}", complete.equity());
        assert!(complete.equity() < 0.32, "equity {}", complete.equity());
    }

    #[test]
    fn test_more_opponents_less_equity() {
        let hero = HoleCards::new_from_str("AsKs").unwrap();
        let pool = CandidatePool::full_deck_except(hero.into());
        let estimator = EquityEstimatorBuilder::default()
            .trials(5_000)
            .build()
            .unwrap();
        let heads_up = estimator
            .estimate(&hero, &pool, 1, &Board::preflop(), &mut seeded())
            .unwrap();
        let five_way = estimator
            .estimate(&hero, &pool, 4, &Board::preflop(), &mut seeded())
            .unwrap();
        assert!(heads_up.equity() > five_way.equity());
    }

    #[test]
    fn test_cancelled_before_start() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("2s3d").unwrap();
        let cancel = Arc::new(AtomicBool::new(true));
        let estimator = EquityEstimatorBuilder::default()
            .trials(100)
            .cancel_flag(cancel)
            .build()
            .unwrap();
        assert_eq!(
            Err(EquityError::NoTrialsCompleted),
            estimator.estimate(&hero, &pool, 1, &board, &mut seeded())
        );
    }

    #[test]
    fn test_zero_deadline_stops() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let board = Board::new_from_str("KhQcJh").unwrap();
        let pool = CandidatePool::new_from_str("2s3d").unwrap();
        let estimator = EquityEstimatorBuilder::default()
            .trials(100)
            .deadline(Duration::ZERO)
            .build()
            .unwrap();
        assert_eq!(
            Err(EquityError::NoTrialsCompleted),
            estimator.estimate(&hero, &pool, 1, &board, &mut seeded())
        );
    }

    #[test]
    fn test_builder_config_then_setters() {
        let config = EquityConfig {
            trials: 77,
            batch_size: 7,
            ..Default::default()
        };
        let estimator = EquityEstimatorBuilder::default()
            .config(config)
            .runout(Runout::Complete)
            .build()
            .unwrap();
        assert_eq!(77, estimator.config().trials);
        assert_eq!(7, estimator.config().batch_size);
        assert_eq!(Runout::Complete, estimator.config().runout);
    }

    #[test]
    fn test_result_counts() {
        let mut result = EquityResult {
            requested: 4,
            ..Default::default()
        };
        result.record(Outcome::Win);
        result.record(Outcome::Win);
        result.record(Outcome::Tie);
        result.record(Outcome::Loss);
        assert_eq!(4, result.trials());
        assert!(result.is_complete());
        assert_relative_eq!(0.625, result.equity());
        assert_relative_eq!(0.5, result.win_rate());
        assert_relative_eq!(0.25, result.tie_rate());
        assert_eq!(0.0, EquityResult::default().equity());
    }
}
