//! Showdown resolution: evaluate every seat and pick a single winner.
//!
//! The winner is the seat with the strongest category. When several seats
//! share that category the earliest seat wins; the pot is never split.

use crate::evaluator::{evaluate_holdem, Category, EvalError};
use crate::game::Player;
use crate::hand::Board;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("no players at showdown")]
    NoPlayers,
    #[error("seat {0} has no hole cards")]
    MissingHoleCards(usize),
    #[error("hand evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
}

/// Category reached by one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatResult {
    pub seat: usize,
    pub category: Category,
}

/// Every seat's category plus the chosen winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    pub results: Vec<SeatResult>,
    pub winner: usize,
    pub category: Category,
}

/// Scan seats in order, replacing the leader only on a strictly better category.
///
/// ```
/// use holdem_sim::evaluator::Category;
/// use holdem_sim::showdown::{pick_winner, SeatResult};
///
/// let results = [
///     SeatResult { seat: 0, category: Category::OnePair },
///     SeatResult { seat: 1, category: Category::Flush },
///     SeatResult { seat: 2, category: Category::Flush },
/// ];
/// assert_eq!(pick_winner(&results), Some(results[1]));
/// ```
pub fn pick_winner(results: &[SeatResult]) -> Option<SeatResult> {
    results.iter().copied().fold(None, |best, r| match best {
        Some(b) if r.category <= b.category => Some(b),
        _ => Some(r),
    })
}

/// Evaluate each player's hole cards with the board and resolve the winner.
pub fn resolve(players: &[Player], board: &Board) -> Result<Showdown, ShowdownError> {
    let results = players
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            let hole = p.hole().ok_or(ShowdownError::MissingHoleCards(seat))?;
            let category = evaluate_holdem(&hole, board)?;
            log::debug!("{} holds {} -> {}", p.name(), hole, category);
            Ok(SeatResult { seat, category })
        })
        .collect::<Result<Vec<_>, ShowdownError>>()?;

    let best = pick_winner(&results).ok_or(ShowdownError::NoPlayers)?;
    Ok(Showdown { results, winner: best.seat, category: best.category })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(seat: usize, category: Category) -> SeatResult {
        SeatResult { seat, category }
    }

    #[test]
    fn empty_scan_has_no_winner() {
        assert_eq!(pick_winner(&[]), None);
    }

    #[test]
    fn first_seat_keeps_a_tie() {
        let results =
            [seat(0, Category::TwoPair), seat(1, Category::TwoPair), seat(2, Category::OnePair)];
        assert_eq!(pick_winner(&results).map(|r| r.seat), Some(0));
    }

    #[test]
    fn strictly_better_category_wins_from_any_seat() {
        let results =
            [seat(0, Category::HighCard), seat(1, Category::OnePair), seat(2, Category::Straight)];
        assert_eq!(pick_winner(&results).map(|r| r.seat), Some(2));

        let reversed =
            [seat(0, Category::Straight), seat(1, Category::OnePair), seat(2, Category::HighCard)];
        assert_eq!(pick_winner(&reversed).map(|r| r.seat), Some(0));
    }

    #[test]
    fn resolve_requires_players() {
        let board: Board = "2c 3d 9h Js Kc".parse().unwrap();
        assert_eq!(resolve(&[], &board), Err(ShowdownError::NoPlayers));
    }
}
