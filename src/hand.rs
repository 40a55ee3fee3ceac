use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Community cards at the river.
pub const FULL_BOARD: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_sim::cards::{Card, Rank, Suit};
/// use holdem_sim::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}, {:#}", self.0, self.1)
        } else {
            write!(f, "{} {}", self.0, self.1)
        }
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards on the board (flop, turn, river).
///
/// ```
/// use holdem_sim::cards::{Card, Rank, Suit};
/// use holdem_sim::hand::Board;
///
/// let board = Board::try_new(vec![
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
/// ]).unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > FULL_BOARD {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == FULL_BOARD
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(if f.alternate() { ", " } else { " " })?;
            }
            if f.alternate() {
                write!(f, "{c:#}")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Validate that a pair of hole cards and board form a valid Hold'em state.
/// Allows 0..=5 board cards. Ensures uniqueness across all cards.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    if board.len() > FULL_BOARD {
        return Err(HandError::TooManyBoardCards(board.len()));
    }
    // board may have been built through `new`
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.first()) || set.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hole_cards_must_be_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(HoleCards::try_new(a, a), Err(HandError::DuplicateHoleCards)));
    }

    #[test]
    fn hole_cards_from_slice_checks_count() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(HoleCards::from_slice(&[a]), Err(HandError::HoleCount(1))));
    }

    #[test]
    fn board_try_new_checks_limits_and_dupes() {
        let cards = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Clubs),
        ];
        assert!(matches!(Board::try_new(cards), Err(HandError::TooManyBoardCards(6))));

        let cards = vec![Card::new(Rank::Two, Suit::Clubs), Card::new(Rank::Two, Suit::Clubs)];
        assert!(matches!(Board::try_new(cards), Err(HandError::DuplicateBoardCards)));
    }

    #[test]
    fn validate_holdem_catches_overlap() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Spades);
        let hole = HoleCards::try_new(a, k).unwrap();
        let board = Board::new(vec![a, Card::new(Rank::Two, Suit::Clubs)]);
        assert!(matches!(validate_holdem(&hole, &board), Err(HandError::Overlap)));
    }

    #[test]
    fn duplicate_hole_cards_never_reach_validation() {
        assert_eq!("As As".parse::<HoleCards>(), Err(HandError::DuplicateHoleCards));
        let hole: HoleCards = "As Kd".parse().unwrap();
        let board: Board = "2c 3c 4c 5d 9h".parse().unwrap();
        assert_eq!(validate_holdem(&hole, &board), Ok(()));
    }

    #[test]
    fn display_short_and_long() {
        let board: Board = "10h Js".parse().unwrap();
        assert_eq!(board.to_string(), "Th Js");
        assert_eq!(format!("{board:#}"), "10 of Hearts, J of Spades");
        let hole: HoleCards = "As Kd".parse().unwrap();
        assert_eq!(hole.to_string(), "As Kd");
    }
}
