use std::cmp::Ordering;
use std::fmt;

use super::card::Card;
use super::card_bit_set::CardBitSet;
use super::card_iter::CardIter;
use super::error::{EquityError, Result};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank. Larger is stronger.
///
/// The u32 packs value bitsets (bit `n` set for `Value` `n`). The defining
/// group sits above bit 13 and the kickers below it, so comparing the
/// integers compares groups first and then kickers highest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence. 0 is the wheel, 9 is broadway.
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
}

impl Rank {
    fn tie_break(&self) -> u32 {
        match *self {
            Rank::HighCard(v)
            | Rank::OnePair(v)
            | Rank::TwoPair(v)
            | Rank::ThreeOfAKind(v)
            | Rank::Straight(v)
            | Rank::Flush(v)
            | Rank::FullHouse(v)
            | Rank::FourOfAKind(v)
            | Rank::StraightFlush(v) => v,
        }
    }
}

/// The hand category without any tie break detail, weakest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum CoreRank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl CoreRank {
    /// Every category, weakest first.
    pub const fn all() -> [CoreRank; 9] {
        [
            CoreRank::HighCard,
            CoreRank::OnePair,
            CoreRank::TwoPair,
            CoreRank::ThreeOfAKind,
            CoreRank::Straight,
            CoreRank::Flush,
            CoreRank::FullHouse,
            CoreRank::FourOfAKind,
            CoreRank::StraightFlush,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoreRank::HighCard => "High Card",
            CoreRank::OnePair => "Pair",
            CoreRank::TwoPair => "Two Pair",
            CoreRank::ThreeOfAKind => "Three of a Kind",
            CoreRank::Straight => "Straight",
            CoreRank::Flush => "Flush",
            CoreRank::FullHouse => "Full House",
            CoreRank::FourOfAKind => "Four of a Kind",
            CoreRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for CoreRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert from Rank to CoreRank by stripping the u32 detail.
impl From<Rank> for CoreRank {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::HighCard(_) => CoreRank::HighCard,
            Rank::OnePair(_) => CoreRank::OnePair,
            Rank::TwoPair(_) => CoreRank::TwoPair,
            Rank::ThreeOfAKind(_) => CoreRank::ThreeOfAKind,
            Rank::Straight(_) => CoreRank::Straight,
            Rank::Flush(_) => CoreRank::Flush,
            Rank::FullHouse(_) => CoreRank::FullHouse,
            Rank::FourOfAKind(_) => CoreRank::FourOfAKind,
            Rank::StraightFlush(_) => CoreRank::StraightFlush,
        }
    }
}

/// The strength of a five card hand, ordered so that a **smaller** value is
/// the **better** hand. Two ranks are equal only when the hands tie
/// exactly.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{classify, parse_cards};
///
/// let quads = classify(&parse_cards("9c9d9h9sAd").unwrap()).unwrap();
/// let boat = classify(&parse_cards("AcAdAh9s9d").unwrap()).unwrap();
/// assert!(quads < boat);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct HandRank(Rank);

/// Bits used by the tie break of any `Rank`.
const TIE_BREAK_BITS: u32 = 26;

impl HandRank {
    /// The structured rank, where larger is stronger.
    pub fn rank(&self) -> Rank {
        self.0
    }

    pub fn core_rank(&self) -> CoreRank {
        self.0.into()
    }

    /// The rank flattened to a single integer with the same ordering as
    /// `HandRank`: smaller is better, equal only on a tie.
    pub fn packed(&self) -> u32 {
        let category = CoreRank::StraightFlush as u32 - self.core_rank() as u32;
        let tie_break = ((1 << TIE_BREAK_BITS) - 1) - self.0.tie_break();
        (category << TIE_BREAK_BITS) | tie_break
    }
}

impl From<Rank> for HandRank {
    fn from(rank: Rank) -> Self {
        Self(rank)
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.core_rank().fmt(f)
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of values, find the straight and give its rank.
/// Wheel is the lowest, broadway is the highest value.
///
/// Returns None if the values don't contain five in a row.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Each shift lines the next lower card up under the top card of a
    // run. Only a run of five leaves a bit standing.
    //
    //       0000111110000
    //       0001111100000
    //       0011111000000
    //       0111110000000
    //       1111100000000
    //       -------------
    //       0000100000000
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        Some(0)
    } else {
        None
    }
}

/// Rank five distinct cards. Callers guarantee the count and uniqueness.
fn rank_five<I>(cards: I) -> Rank
where
    I: IntoIterator<Item = Card>,
{
    let mut suit_set: u32 = 0;
    let mut value_set: u32 = 0;
    let mut value_to_count: [u8; 13] = [0; 13];

    for c in cards {
        suit_set |= 1 << c.suit as u32;
        value_set |= 1 << c.value as u32;
        value_to_count[c.value as usize] += 1;
    }

    // count => bitset of values with that count.
    let mut count_to_value: [u32; 5] = [0; 5];
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[count as usize] |= 1 << value;
    }

    // The number of distinct values decides the family of hands.
    match value_set.count_ones() {
        5 => {
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                (None, false) => Rank::HighCard(value_set),
                (Some(rank), false) => Rank::Straight(rank),
                (None, true) => Rank::Flush(value_set),
                (Some(rank), true) => Rank::StraightFlush(rank),
            }
        }
        4 => {
            let pair = count_to_value[2];
            Rank::OnePair((pair << 13) | (value_set ^ pair))
        }
        3 => {
            let trips = count_to_value[3];
            if trips != 0 {
                Rank::ThreeOfAKind((trips << 13) | (value_set ^ trips))
            } else {
                let pairs = count_to_value[2];
                Rank::TwoPair((pairs << 13) | (value_set ^ pairs))
            }
        }
        _ => {
            let trips = count_to_value[3];
            if trips != 0 {
                Rank::FullHouse((trips << 13) | (value_set ^ trips))
            } else {
                let quads = count_to_value[4];
                Rank::FourOfAKind((quads << 13) | (value_set ^ quads))
            }
        }
    }
}

fn check_distinct(cards: &[Card]) -> Result<()> {
    CardBitSet::try_from_cards(cards.iter().copied())
        .map(|_| ())
        .map_err(EquityError::DuplicateCard)
}

/// Classify exactly five cards.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{classify, parse_cards, CoreRank};
///
/// let rank = classify(&parse_cards("Ad2c3s4h5s").unwrap()).unwrap();
/// assert_eq!(CoreRank::Straight, rank.core_rank());
/// assert!(classify(&parse_cards("Ad2c3s4h").unwrap()).is_err());
/// ```
pub fn classify(cards: &[Card]) -> Result<HandRank> {
    if cards.len() != 5 {
        return Err(EquityError::WrongCardCount {
            expected: "5",
            got: cards.len(),
        });
    }
    check_distinct(cards)?;
    Ok(rank_five(cards.iter().copied()).into())
}

/// The best five card hand out of six or seven cards.
///
/// Every five card subset is classified and the best one wins.
pub fn best_of(cards: &[Card]) -> Result<HandRank> {
    if !matches!(cards.len(), 6 | 7) {
        return Err(EquityError::WrongCardCount {
            expected: "6 or 7",
            got: cards.len(),
        });
    }
    check_distinct(cards)?;
    Ok(best_of_unchecked(cards))
}

/// `best_of` without the count and duplicate checks. The simulation loop
/// validates its inputs once up front and calls this per trial.
///
/// Panics with fewer than five cards; there is no rank to give them.
pub(crate) fn best_of_unchecked(cards: &[Card]) -> HandRank {
    debug_assert!(cards.len() >= 5, "need five cards, got {}", cards.len());
    CardIter::new(cards, 5)
        .map(|subset| HandRank::from(rank_five(subset)))
        .min()
        .expect("five or more cards have a five card subset")
}

/// Rank five, six, or seven cards: `classify` for five, `best_of` for more.
pub fn evaluate(cards: &[Card]) -> Result<HandRank> {
    match cards.len() {
        5 => classify(cards),
        6 | 7 => best_of(cards),
        got => Err(EquityError::WrongCardCount {
            expected: "5 to 7",
            got,
        }),
    }
}

/// Evaluate without validation. Five cards are classified directly, more
/// go through the subset search.
pub(crate) fn evaluate_unchecked(cards: &[Card]) -> HandRank {
    if cards.len() == 5 {
        rank_five(cards.iter().copied()).into()
    } else {
        best_of_unchecked(cards)
    }
}

/// Anything holding cards can be ranked. There are implementations for
/// card slices, `Vec<Card>`, and `CardBitSet`.
pub trait Rankable {
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Classify exactly five cards.
    fn classify(&self) -> Result<HandRank> {
        let cards: Vec<Card> = self.cards().collect();
        classify(&cards)
    }

    /// The best five of six or seven cards.
    ///
    /// # Examples
    /// ```
    /// use holdem_equity::core::{parse_cards, CoreRank, Rankable};
    ///
    /// let cards = parse_cards("2h2d8d8sKd6sTh").unwrap();
    /// assert_eq!(CoreRank::TwoPair, cards.best_of().unwrap().core_rank());
    /// ```
    fn best_of(&self) -> Result<HandRank> {
        let cards: Vec<Card> = self.cards().collect();
        best_of(&cards)
    }

    /// Five, six, or seven cards.
    fn evaluate(&self) -> Result<HandRank> {
        let cards: Vec<Card> = self.cards().collect();
        evaluate(&cards)
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.into_iter()
    }
}
