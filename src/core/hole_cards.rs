use std::fmt;
use std::str::FromStr;

use super::card::{Card, parse_cards};
use super::card_bit_set::CardBitSet;
use super::error::{EquityError, Result};

/// The two private cards of one player.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoleCards {
    cards: [Card; 2],
}

impl HoleCards {
    /// Create hole cards from two distinct cards.
    pub fn new(first: Card, second: Card) -> Result<Self> {
        if first == second {
            return Err(EquityError::DuplicateCard(first));
        }
        Ok(Self {
            cards: [first, second],
        })
    }

    /// Create hole cards from a slice that must hold exactly 2 cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self> {
        match cards {
            [first, second] => Self::new(*first, *second),
            _ => Err(EquityError::WrongCardCount {
                expected: "2",
                got: cards.len(),
            }),
        }
    }

    /// Parse hole cards from a string like `"AsKd"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::HoleCards;
    ///
    /// let hand = HoleCards::new_from_str("AsKd").unwrap();
    /// assert_eq!("AsKd", hand.to_string());
    /// assert!(HoleCards::new_from_str("AsAs").is_err());
    /// ```
    pub fn new_from_str(s: &str) -> Result<Self> {
        Self::from_slice(&parse_cards(s)?)
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl From<HoleCards> for CardBitSet {
    fn from(hole: HoleCards) -> Self {
        hole.iter().collect()
    }
}

impl TryFrom<Vec<Card>> for HoleCards {
    type Error = EquityError;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::from_slice(&cards)
    }
}

impl From<HoleCards> for Vec<Card> {
    fn from(hole: HoleCards) -> Self {
        hole.cards.to_vec()
    }
}

impl FromStr for HoleCards {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new_from_str(s)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.cards[0], self.cards[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_count() {
        assert_eq!(
            Err(EquityError::WrongCardCount {
                expected: "2",
                got: 3
            }),
            HoleCards::new_from_str("AsKdQh")
        );
        assert_eq!(
            Err(EquityError::WrongCardCount {
                expected: "2",
                got: 1
            }),
            HoleCards::new_from_str("As")
        );
    }

    #[test]
    fn test_duplicate() {
        let ace: Card = "As".parse().unwrap();
        assert_eq!(
            Err(EquityError::DuplicateCard(ace)),
            HoleCards::new_from_str("AsAS")
        );
    }

    #[test]
    fn test_into_bitset() {
        let hole = HoleCards::new_from_str("7c2d").unwrap();
        let set: CardBitSet = hole.into();
        assert_eq!(2, set.count());
        assert!(hole.iter().all(|c| set.contains(c)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let hole = HoleCards::new_from_str("AsKd").unwrap();
        let json = serde_json::to_string(&hole).unwrap();
        assert_eq!(hole, serde_json::from_str::<HoleCards>(&json).unwrap());

        let pair = serde_json::to_string(&parse_cards("AsAs").unwrap()).unwrap();
        assert!(serde_json::from_str::<HoleCards>(&pair).is_err());

        let three = serde_json::to_string(&parse_cards("AsKdQh").unwrap()).unwrap();
        assert!(serde_json::from_str::<HoleCards>(&three).is_err());
    }
}
