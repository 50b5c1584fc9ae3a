use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};

use super::card::Card;

const FULL_DECK: u64 = (1 << 52) - 1;

/// A set of cards packed into the low 52 bits of a u64, one bit per
/// `Card::index`.
///
/// `CardBitSet::default()` is the full deck, `CardBitSet::new()` is empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// Add a card. Returns false if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let present = self.cards & bit != 0;
        self.cards |= bit;
        !present
    }

    /// Remove a card. Returns true if it was present.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let present = self.cards & bit != 0;
        self.cards &= !bit;
        present
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & (1u64 << card.index()) != 0
    }

    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// Build a set from cards, failing on the first repeated card.
    pub fn try_from_cards<I>(cards: I) -> std::result::Result<Self, Card>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut set = Self::new();
        for card in cards {
            if !set.insert(card) {
                return Err(card);
            }
        }
        Ok(set)
    }
}

/// The full 52 card deck.
impl Default for CardBitSet {
    fn default() -> Self {
        Self { cards: FULL_DECK }
    }
}

impl fmt::Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.into_iter()).finish()
    }
}

impl BitOr for CardBitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitAndAssign for CardBitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.cards &= rhs.cards;
    }
}

impl BitXor for CardBitSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

/// Complement within the 52 card deck.
impl Not for CardBitSet {
    type Output = Self;
    fn not(self) -> Self {
        Self {
            cards: !self.cards & FULL_DECK,
        }
    }
}

impl From<Card> for CardBitSet {
    fn from(card: Card) -> Self {
        let mut set = Self::new();
        set.insert(card);
        set
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Iterates cards lowest index first.
#[derive(Debug, Clone)]
pub struct CardBitSetIter {
    remaining: u64,
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.remaining.trailing_zeros() as u8;
        // Clear the lowest set bit
        self.remaining &= self.remaining - 1;
        Card::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        CardBitSetIter {
            remaining: self.cards,
        }
    }
}

impl IntoIterator for &CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        CardBitSetIter {
            remaining: self.cards,
        }
    }
}
