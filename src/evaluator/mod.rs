//! Category-only hand evaluation.
//!
//! Every card handed to the evaluator is classified together: a Hold'em hand
//! is judged on all seven cards rather than on its best five. Ties inside a
//! category are not broken here.

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{validate_holdem, Board, HandError, HoleCards, FULL_BOARD};
use std::collections::HashSet;
use std::fmt;

/// Fewest cards the evaluator accepts.
pub const MIN_CARDS: usize = 5;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("not enough cards to evaluate: {0} (need at least {min})", min = MIN_CARDS)]
    NotEnoughCards(usize),
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Classify a set of five or more cards.
///
/// The result depends only on which cards are present, not their order.
///
/// ```
/// use holdem_sim::cards::parse_cards;
/// use holdem_sim::evaluator::{evaluate_hand, Category};
///
/// let royal = parse_cards("10s Js Qs Ks As").unwrap();
/// assert_eq!(evaluate_hand(&royal).unwrap(), Category::RoyalFlush);
///
/// let quads = parse_cards("2h 2d 2c 2s 5h").unwrap();
/// assert_eq!(evaluate_hand(&quads).unwrap(), Category::FourOfAKind);
/// ```
pub fn evaluate_hand(cards: &[Card]) -> Result<Category, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if cards.len() < MIN_CARDS {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(EvalError::DuplicateCard(*dup));
    }

    let analysis = HandAnalysis::new(cards);
    let category = DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map_or(Category::HighCard, |d| d.category());
    log::trace!(
        "groups {:?}, flush suit {:?}, straight top {:?} -> {}",
        analysis.rank_groups.profile(),
        analysis.suit_info.flush_suit,
        analysis.straight_info.top_rank,
        category
    );
    Ok(category)
}

/// Evaluate a Hold'em hand: both hole cards plus a complete board, all seven
/// classified together.
///
/// ```
/// use holdem_sim::evaluator::{evaluate_holdem, Category};
/// use holdem_sim::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Qc Jd 9h 3s 2c".parse().unwrap();
/// assert_eq!(evaluate_holdem(&hole, &board).unwrap(), Category::OnePair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Category, EvalError> {
    validate_holdem(hole, board)?;
    let board_cards = board.as_slice();
    if board_cards.len() < FULL_BOARD {
        return Err(EvalError::NotEnoughCards(board_cards.len() + 2));
    }
    let mut seven = Vec::with_capacity(FULL_BOARD + 2);
    seven.extend_from_slice(&hole.as_array());
    seven.extend_from_slice(board_cards);
    evaluate_hand(&seven)
}
