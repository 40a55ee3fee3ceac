// Table engine API boundary. This trait exposes the hand's stage transitions
// and read-only queries so front ends (CLI, bots, tests) can drive a game
// without naming its RNG type. It is implemented for the core `Game` type.

use crate::agents::BetPolicy;
use crate::evaluator::Category;
use crate::game::{Game, GameError, Outcome, Stage};
use crate::hand::{Board, HoleCards};
use rand::Rng;

pub trait TableEngine {
    // Stage transitions
    fn deal(&mut self) -> Result<(), GameError>;
    fn flop(&mut self) -> Result<&Board, GameError>;
    fn turn(&mut self) -> Result<&Board, GameError>;
    fn river(&mut self) -> Result<&Board, GameError>;
    fn betting_round(&mut self, policy: &mut dyn BetPolicy) -> Result<u64, GameError>;
    fn showdown(&mut self) -> Result<Vec<(usize, Category)>, GameError>;
    fn award_pot(&mut self) -> Result<Outcome, GameError>;

    // Queries
    fn stage(&self) -> Stage;
    fn pot(&self) -> u64;
    fn round(&self) -> u32;
    fn board(&self) -> &Board;
    fn num_players(&self) -> usize;
    fn player_name(&self, seat: usize) -> Option<&str>;
    fn balance(&self, seat: usize) -> Option<u64>;
    fn bet(&self, seat: usize) -> Option<u64>;
    fn hole_cards(&self, seat: usize) -> Option<HoleCards>;
}

impl<R: Rng> TableEngine for Game<R> {
    fn deal(&mut self) -> Result<(), GameError> {
        Game::deal(self)
    }
    fn flop(&mut self) -> Result<&Board, GameError> {
        Game::flop(self)
    }
    fn turn(&mut self) -> Result<&Board, GameError> {
        Game::turn(self)
    }
    fn river(&mut self) -> Result<&Board, GameError> {
        Game::river(self)
    }
    fn betting_round(&mut self, policy: &mut dyn BetPolicy) -> Result<u64, GameError> {
        Game::betting_round(self, policy)
    }
    fn showdown(&mut self) -> Result<Vec<(usize, Category)>, GameError> {
        let result = Game::showdown(self)?;
        Ok(result.results.iter().map(|r| (r.seat, r.category)).collect())
    }
    fn award_pot(&mut self) -> Result<Outcome, GameError> {
        Game::award_pot(self)
    }

    fn stage(&self) -> Stage {
        Game::stage(self)
    }
    fn pot(&self) -> u64 {
        Game::pot(self)
    }
    fn round(&self) -> u32 {
        Game::round(self)
    }
    fn board(&self) -> &Board {
        Game::board(self)
    }
    fn num_players(&self) -> usize {
        self.players().len()
    }
    fn player_name(&self, seat: usize) -> Option<&str> {
        self.players().get(seat).map(|p| p.name())
    }
    fn balance(&self, seat: usize) -> Option<u64> {
        self.players().get(seat).map(|p| p.balance())
    }
    fn bet(&self, seat: usize) -> Option<u64> {
        self.players().get(seat).map(|p| p.bet())
    }
    fn hole_cards(&self, seat: usize) -> Option<HoleCards> {
        self.players().get(seat).and_then(|p| p.hole())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::FixedBetting;
    use crate::config::TableConfig;

    fn drive(engine: &mut dyn TableEngine) -> Outcome {
        engine.deal().unwrap();
        assert_eq!(engine.betting_round(&mut FixedBetting(10)).unwrap(), 30);
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.bet(2), Some(10));
        assert_eq!(engine.pot(), 30);
        engine.flop().unwrap();
        engine.turn().unwrap();
        engine.river().unwrap();
        let results = engine.showdown().unwrap();
        assert_eq!(results.len(), engine.num_players());
        engine.award_pot().unwrap()
    }

    #[test]
    fn engine_drives_a_hand_through_a_trait_object() {
        let mut game = Game::seeded(TableConfig::default(), 21).unwrap();
        let outcome = drive(&mut game);
        assert_eq!(TableEngine::stage(&game), Stage::Complete);
        assert_eq!(TableEngine::board(&game).len(), 5);
        assert_eq!(game.player_name(outcome.winner), Some(outcome.name.as_str()));
        assert!(game.hole_cards(0).is_some());
        assert_eq!(game.player_name(9), None);
        assert_eq!(game.balance(9), None);
        assert_eq!(game.bet(9), None);
        let total: u64 = (0..3).filter_map(|s| game.balance(s)).sum();
        assert_eq!(total, 3000);
        assert_eq!(outcome.pot, 30);
    }
}
