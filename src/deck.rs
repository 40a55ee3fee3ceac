use crate::cards::{Card, Rank, Suit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// A standard 52-card deck dealt from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: usize,
}

impl Deck {
    /// Build the full deck in suit-major, rank-minor order.
    ///
    /// ```
    /// use holdem_sim::cards::{Card, Rank, Suit};
    /// use holdem_sim::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0], Card::new(Rank::Two, Suit::Hearts));
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards, dealt: 0 }
    }

    /// Discard the current state and rebuild the full ordered deck.
    pub fn reset(&mut self) {
        *self = Self::standard();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards handed out since the deck was last built.
    pub fn dealt(&self) -> usize {
        self.dealt
    }

    /// Remaining cards in dealing order.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Fisher-Yates shuffle of the remaining cards using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Remove and return the first `n` cards.
    ///
    /// The deck is left untouched when fewer than `n` cards remain.
    ///
    /// ```
    /// use holdem_sim::deck::{Deck, DeckError};
    ///
    /// let mut deck = Deck::standard();
    /// let hand = deck.deal(50).unwrap();
    /// assert_eq!(hand.len(), 50);
    /// assert_eq!(
    ///     deck.deal(3),
    ///     Err(DeckError::InsufficientCards { requested: 3, remaining: 2 })
    /// );
    /// assert_eq!(deck.len(), 2);
    /// ```
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards { requested: n, remaining: self.cards.len() });
        }
        self.dealt += n;
        Ok(self.cards.drain(..n).collect())
    }

    /// Deal a single card.
    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::InsufficientCards { requested: 1, remaining: 0 });
        }
        self.dealt += 1;
        Ok(self.cards.remove(0))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), DECK_SIZE);
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
    }

    #[test]
    fn standard_order_is_suit_major() {
        let d = Deck::standard();
        assert_eq!(d.as_slice()[12], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(d.as_slice()[13], Card::new(Rank::Two, Suit::Diamonds));
        assert_eq!(d.as_slice()[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn shuffle_preserves_composition() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let mut shuffled = d.cards.clone();
        let mut fresh = Deck::standard().cards;
        shuffled.sort();
        fresh.sort();
        assert_eq!(shuffled, fresh);
    }

    #[test]
    fn deal_reduces_length_and_counts_dealt() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.deal_one().unwrap();
        let c2 = d.deal_one().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.deal(5).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
        assert_eq!(d.dealt(), 7);
    }

    #[test]
    fn deal_takes_from_the_front() {
        let mut d = Deck::standard();
        let first = d.deal(3).unwrap();
        assert_eq!(
            first,
            vec![
                Card::new(Rank::Two, Suit::Hearts),
                Card::new(Rank::Three, Suit::Hearts),
                Card::new(Rank::Four, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn empty_deck_refuses_to_deal() {
        let mut d = Deck::standard();
        d.deal(52).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.deal_one(), Err(DeckError::InsufficientCards { requested: 1, remaining: 0 }));
        assert_eq!(d.deal(0).unwrap(), Vec::<Card>::new());
    }

    #[test]
    fn reset_restores_full_deck() {
        let mut d = Deck::standard();
        d.shuffle_seeded(3);
        d.deal(10).unwrap();
        d.reset();
        assert_eq!(d.len(), DECK_SIZE);
        assert_eq!(d.dealt(), 0);
        assert_eq!(d.as_slice(), Deck::standard().as_slice());
    }
}
