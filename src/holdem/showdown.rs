use std::cmp::Ordering;

use crate::core::{Board, CardBitSet, EquityError, HandRank, HoleCards, Result, evaluate};

/// How the hero fared against the whole table in one showdown.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Strictly better than every opponent.
    Win,
    /// Level with the best opponent. A three way split is still one tie.
    Tie,
    /// At least one opponent is strictly better.
    Loss,
}

/// Compare the hero against the best of the opponents.
///
/// Smaller `HandRank` is better, so the best opponent is the minimum.
/// With no opponents at all the hero wins.
pub fn showdown<I>(hero: HandRank, opponents: I) -> Outcome
where
    I: IntoIterator<Item = HandRank>,
{
    match opponents.into_iter().min() {
        None => Outcome::Win,
        Some(best) => match hero.cmp(&best) {
            Ordering::Less => Outcome::Win,
            Ordering::Equal => Outcome::Tie,
            Ordering::Greater => Outcome::Loss,
        },
    }
}

/// Showdown with every hand face up on a board with at least the flop.
///
/// # Examples
///
/// ```
/// use holdem_equity::core::{Board, HoleCards};
/// use holdem_equity::holdem::{Outcome, showdown_hands};
///
/// let board = Board::new_from_str("KhQcJh").unwrap();
/// let hero = HoleCards::new_from_str("AsAd").unwrap();
/// let villain = HoleCards::new_from_str("2s3d").unwrap();
/// assert_eq!(Outcome::Win, showdown_hands(&hero, &[villain], &board).unwrap());
/// ```
pub fn showdown_hands(hero: &HoleCards, opponents: &[HoleCards], board: &Board) -> Result<Outcome> {
    if opponents.is_empty() {
        return Err(EquityError::NoOpponents);
    }
    // No card may show up in two places.
    CardBitSet::try_from_cards(
        hero.iter()
            .chain(opponents.iter().flat_map(|h| h.iter()))
            .chain(board.iter().copied()),
    )
    .map_err(EquityError::DuplicateCard)?;

    let rank_with_board = |hole: &HoleCards| {
        let mut cards = board.to_vec();
        cards.extend(hole.iter());
        evaluate(&cards)
    };

    let hero_rank = rank_with_board(hero)?;
    let opponent_ranks = opponents
        .iter()
        .map(rank_with_board)
        .collect::<Result<Vec<HandRank>>>()?;
    Ok(showdown(hero_rank, opponent_ranks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, classify, parse_cards};

    fn rank_of(s: &str) -> HandRank {
        classify(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn test_showdown_outcomes() {
        let aces = rank_of("AsAdKhQcJh");
        let high = rank_of("2s3d4h5c7h");
        assert_eq!(Outcome::Win, showdown(aces, [high]));
        assert_eq!(Outcome::Loss, showdown(high, [aces]));
        assert_eq!(Outcome::Tie, showdown(aces, [aces]));
        assert_eq!(Outcome::Win, showdown(aces, []));
    }

    #[test]
    fn test_multi_way_tie_is_one_tie() {
        let straight = rank_of("9s8d7h6c5h");
        let high = rank_of("2s3d4h5c7h");
        assert_eq!(Outcome::Tie, showdown(straight, [straight, straight, high]));
    }

    #[test]
    fn test_best_opponent_decides() {
        let pair = rank_of("AsAdKhQcJh");
        let high = rank_of("2s3d4h5c7h");
        let trips = rank_of("2s2d2h5c7h");
        assert_eq!(Outcome::Loss, showdown(pair, [high, trips, high]));
    }

    #[test]
    fn test_showdown_hands_split_board() {
        // Broadway on the board plays for everyone.
        let board = Board::new_from_str("AhKdQsJcTh").unwrap();
        let hero = HoleCards::new_from_str("2c3c").unwrap();
        let villains = [
            HoleCards::new_from_str("4d5d").unwrap(),
            HoleCards::new_from_str("6s7s").unwrap(),
        ];
        assert_eq!(Outcome::Tie, showdown_hands(&hero, &villains, &board).unwrap());
    }

    #[test]
    fn test_showdown_hands_rejects_shared_card() {
        let board = Board::new_from_str("KhQcJh").unwrap();
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let villain = HoleCards::new_from_str("AsKd").unwrap();
        let shared: Card = "As".parse().unwrap();
        assert_eq!(
            Err(EquityError::DuplicateCard(shared)),
            showdown_hands(&hero, &[villain], &board)
        );
    }

    #[test]
    fn test_showdown_hands_needs_flop() {
        let hero = HoleCards::new_from_str("AsAd").unwrap();
        let villain = HoleCards::new_from_str("KsKd").unwrap();
        assert_eq!(
            Err(EquityError::WrongCardCount {
                expected: "5 to 7",
                got: 2
            }),
            showdown_hands(&hero, &[villain], &Board::preflop())
        );
        assert_eq!(
            Err(EquityError::NoOpponents),
            showdown_hands(&hero, &[], &Board::preflop())
        );
    }
}
