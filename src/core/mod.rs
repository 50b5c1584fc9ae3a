/// Card, suit, and value types plus the two character token codec.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value, decode, encode, parse_cards};

/// A compact set of cards.
mod card_bit_set;
/// Export `CardBitSet`
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Everything that can go wrong.
mod error;
/// Export the error type and result alias
pub use self::error::{EquityError, Result};

/// Two private cards.
mod hole_cards;
/// Export `HoleCards`
pub use self::hole_cards::HoleCards;

/// Community cards.
mod board;
/// Export `Board` and `Street`
pub use self::board::{Board, Street};

/// Cards opponent hands are drawn from.
mod pool;
/// Export `CandidatePool`
pub use self::pool::CandidatePool;

/// Iterate over every subset of a fixed size.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;

/// Hand classification and best of N evaluation.
mod rank;
/// Export the ranking types and entry points
pub use self::rank::{CoreRank, HandRank, Rank, Rankable, best_of, classify, evaluate};
pub(crate) use self::rank::evaluate_unchecked;
