use std::fmt;
use std::str::FromStr;

use super::error::{EquityError, Result};

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s, lowest first.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Take a u8 and turn it into a `Value`. Anything past 12 is None.
    pub fn from_u8(v: u8) -> Option<Value> {
        VALUES.get(v as usize).copied()
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as well.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// The discriminant order matches the token order `s h d c`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// All the suits.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Translate a u8 into a suit. Anything past 3 is None.
    pub fn from_u8(s: u8) -> Option<Suit> {
        SUITS.get(s as usize).copied()
    }

    /// This Suit from a char. Case is ignored.
    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// This suit as a lower case char.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Dense index of this card in `0..52`.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_equity::core::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert_eq!(51, card.index());
    /// assert_eq!(Some(card), Card::from_index(51));
    /// ```
    pub const fn index(&self) -> u8 {
        (self.value as u8) * 4 + (self.suit as u8)
    }

    /// Inverse of `index`. Anything past 51 is None.
    pub fn from_index(idx: u8) -> Option<Card> {
        if idx >= 52 {
            return None;
        }
        let value = Value::from_u8(idx / 4)?;
        let suit = Suit::from_u8(idx % 4)?;
        Some(Card::new(value, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = EquityError;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let (Some(v), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(EquityError::InvalidCardFormat(token.to_string()));
        };
        match (Value::from_char(v), Suit::from_char(s)) {
            (Some(value), Some(suit)) => Ok(Card::new(value, suit)),
            _ => Err(EquityError::InvalidCardFormat(token.to_string())),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = EquityError;

    fn try_from(token: &str) -> Result<Self> {
        token.parse()
    }
}

/// Parse a single two character token like `"As"` or `"td"`.
pub fn encode(token: &str) -> Result<Card> {
    token.parse()
}

/// The canonical token for a card, e.g. `"Td"`.
pub fn decode(card: Card) -> String {
    card.to_string()
}

/// Parse a run of card tokens.
///
/// Tokens may be written back to back (`"AsKd"`) or separated by
/// whitespace or commas (`"As, Kd"`). Duplicates are not checked here;
/// the containers that need distinct cards do that.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::parse_cards;
///
/// let cards = parse_cards("AsKd 7c").unwrap();
/// assert_eq!(3, cards.len());
/// assert!(parse_cards("AsK").is_err());
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    let compact: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    compact
        .chunks(2)
        .map(|pair| {
            let token: String = pair.iter().collect();
            token.parse()
        })
        .collect()
}
