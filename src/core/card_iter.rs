use super::card::Card;
use super::card_bit_set::CardBitSet;

/// Every `num_cards` sized subset of a slice of cards, in lexicographic
/// order of positions.
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the possible cards that can be chosen from.
    possible_cards: &'a [Card],

    /// Positions into `possible_cards` for the next subset. Strictly
    /// increasing. None once everything has been produced.
    idx: Option<Vec<usize>>,
}

impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` is how many cards each produced set contains. Asking for
    /// more cards than the slice holds yields nothing.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        let idx = (num_cards <= possible_cards.len()).then(|| (0..num_cards).collect());
        CardIter {
            possible_cards,
            idx,
        }
    }

    /// Move `idx` to the next combination, or clear it when exhausted.
    fn advance(&mut self) {
        let n = self.possible_cards.len();
        let Some(idx) = self.idx.as_mut() else {
            return;
        };
        let k = idx.len();
        // Find the right most position that can still move forward.
        let Some(level) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            self.idx = None;
            return;
        };
        idx[level] += 1;
        for i in level + 1..k {
            idx[i] = idx[i - 1] + 1;
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = CardBitSet;

    fn next(&mut self) -> Option<CardBitSet> {
        let result: CardBitSet = self
            .idx
            .as_ref()?
            .iter()
            .map(|&i| self.possible_cards[i])
            .collect();
        self.advance();
        Some(result)
    }
}
