//! `holdem_equity` answers two questions about a Texas Hold'em hand: how
//! strong is it, and how often does it win against a range of opponent
//! holdings.
//!
//! # Core
//!
//! The `core` module holds the card primitives and the hand evaluator. Any 5
//! cards classify into a [`core::HandRank`], and 6 or 7 cards evaluate to the
//! best 5 card subset.
//!
//! ```
//! use holdem_equity::core::{best_of, parse_cards, CoreRank};
//!
//! let cards = parse_cards("AsAdKhQcJh2s3d").unwrap();
//! let rank = best_of(&cards).unwrap();
//! assert_eq!(CoreRank::OnePair, rank.core_rank());
//! ```
//!
//! # Holdem
//!
//! The `holdem` module runs Monte Carlo equity estimates. Opponent hole
//! cards are sampled from a candidate pool, and the hero's share of the pot
//! is averaged over all trials.
//!
//! ```
//! use holdem_equity::core::{Board, CandidatePool, HoleCards};
//! use holdem_equity::holdem::estimate_equity;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let hero = HoleCards::new_from_str("AsAd").unwrap();
//! let board = Board::new_from_str("KhQcJh").unwrap();
//! let pool = CandidatePool::new_from_str("2s3d").unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let equity = estimate_equity(&hero, &pool, 1, &board, 100, &mut rng).unwrap();
//! assert_eq!(1.0, equity);
//! ```

/// Card, hand ranking, and error types.
pub mod core;

/// Showdowns and Monte Carlo equity estimation.
pub mod holdem;
