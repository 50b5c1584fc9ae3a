use thiserror::Error;

use super::card::Card;

/// Everything that can go wrong while parsing cards, ranking hands, or
/// estimating equity. All of these are input validation failures and are
/// reported before any simulation work starts.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum EquityError {
    #[error("Invalid card token {0:?}, expected a value char followed by a suit char")]
    InvalidCardFormat(String),

    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("Expected {expected} cards but got {got}")]
    WrongCardCount { expected: &'static str, got: usize },

    #[error("Candidate pool has {available} usable cards but {required} are needed")]
    InsufficientPoolSize { required: usize, available: usize },

    #[error("A board has 0, 3, 4, or 5 cards, not {0}")]
    InvalidBoardSize(usize),

    #[error("At least one opponent is required")]
    NoOpponents,

    #[error("At least one trial is required")]
    NoTrials,

    #[error("Deck has {available} cards left but the runout needs {required}")]
    InsufficientDeck { required: usize, available: usize },

    #[error("Stopped before a single trial completed")]
    NoTrialsCompleted,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    Json(String),
}

/// Result type for everything in this crate.
pub type Result<T> = std::result::Result<T, EquityError>;
