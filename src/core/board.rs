use std::fmt;
use std::ops::Deref;

use super::card::{Card, parse_cards};
use super::card_bit_set::CardBitSet;
use super::error::{EquityError, Result};

/// Total number of community cards once the river is dealt.
pub const FULL_BOARD: usize = 5;

/// Which betting street a board size corresponds to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "Preflop"),
            Street::Flop => write!(f, "Flop"),
            Street::Turn => write!(f, "Turn"),
            Street::River => write!(f, "River"),
        }
    }
}

/// Community cards shared by every player. Always 0, 3, 4, or 5 distinct
/// cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// The empty preflop board.
    pub fn preflop() -> Self {
        Self::default()
    }

    /// Validate and wrap community cards.
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if !matches!(cards.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::InvalidBoardSize(cards.len()));
        }
        CardBitSet::try_from_cards(cards.iter().copied()).map_err(EquityError::DuplicateCard)?;
        Ok(Self { cards })
    }

    /// Parse a board from a string like `"KhQcJh"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::{Board, Street};
    ///
    /// let board = Board::new_from_str("KhQcJh").unwrap();
    /// assert_eq!(Street::Flop, board.street());
    /// assert!(Board::new_from_str("KhQc").is_err());
    /// ```
    pub fn new_from_str(s: &str) -> Result<Self> {
        Self::new(parse_cards(s)?)
    }

    pub fn street(&self) -> Street {
        match self.cards.len() {
            0 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }

    /// How many cards are still to come before the river.
    pub fn missing(&self) -> usize {
        FULL_BOARD - self.cards.len()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == FULL_BOARD
    }

    pub fn to_bitset(&self) -> CardBitSet {
        self.cards.iter().copied().collect()
    }
}

impl Deref for Board {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = EquityError;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::new(cards)
    }
}

impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        board.cards
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
