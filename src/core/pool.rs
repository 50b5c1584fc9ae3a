use std::ops::Deref;

use super::card::{Card, parse_cards};
use super::card_bit_set::CardBitSet;
use super::error::{EquityError, Result};

/// The cards an opponent's hole cards are sampled from.
///
/// Built outside this crate by range heuristics; here it is only an ordered
/// set of distinct cards that stays untouched while an estimate runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidatePool {
    cards: Vec<Card>,
}

impl CandidatePool {
    /// Wrap the cards, rejecting any card listed twice.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        CardBitSet::try_from_cards(cards.iter().copied()).map_err(EquityError::DuplicateCard)?;
        Ok(Self { cards })
    }

    /// Parse a pool from a string like `"2s3d4h"`.
    pub fn new_from_str(s: &str) -> Result<Self> {
        Self::new(parse_cards(s)?)
    }

    /// Every card in the deck not present in `dead`.
    pub fn full_deck_except(dead: CardBitSet) -> Self {
        Self {
            cards: (!dead).into_iter().collect(),
        }
    }

    /// The pool in its original order with every card in `dead` removed.
    pub fn live_cards(&self, dead: CardBitSet) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| !dead.contains(*c))
            .collect()
    }
}

impl TryFrom<Vec<Card>> for CandidatePool {
    type Error = EquityError;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::new(cards)
    }
}

impl From<CandidatePool> for Vec<Card> {
    fn from(pool: CandidatePool) -> Self {
        pool.cards
    }
}

impl Deref for CandidatePool {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}
