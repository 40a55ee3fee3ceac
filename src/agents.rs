//! Agents: pluggable bet sizing for each seat.
//!
//! The game asks a `BetPolicy` how much each player puts in during a betting
//! round. Policies never fold, call or raise; they only size a bet, and the
//! game refuses any amount the player cannot cover.

use crate::game::Player;
use rand::{Rng, RngCore};

/// Decides a seat's bet for the current round.
pub trait BetPolicy {
    fn bet_amount(&mut self, player: &Player, rng: &mut dyn RngCore) -> u64;
}

/// Bets a uniformly random amount below half the player's balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomBetting;

impl BetPolicy for RandomBetting {
    fn bet_amount(&mut self, player: &Player, rng: &mut dyn RngCore) -> u64 {
        // every whole number strictly below balance / 2
        let cap = player.balance().div_ceil(2);
        if cap == 0 {
            return 0;
        }
        rng.random_range(0..cap)
    }
}

/// Always checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBetting;

impl BetPolicy for NoBetting {
    fn bet_amount(&mut self, _player: &Player, _rng: &mut dyn RngCore) -> u64 {
        0
    }
}

/// Bets the same amount every round.
#[derive(Debug, Clone, Copy)]
pub struct FixedBetting(pub u64);

impl BetPolicy for FixedBetting {
    fn bet_amount(&mut self, _player: &Player, _rng: &mut dyn RngCore) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn random_bets_stay_below_half_balance() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let player = Player::new("Ann", 1000);
        for _ in 0..500 {
            let bet = RandomBetting.bet_amount(&player, &mut rng);
            assert!(bet < 500, "bet {bet} not below half balance");
        }
    }

    #[test]
    fn odd_balance_can_bet_just_under_half() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let player = Player::new("Ann", 3);
        let bets: Vec<u64> = (0..200).map(|_| RandomBetting.bet_amount(&player, &mut rng)).collect();
        assert!(bets.iter().all(|b| *b <= 1));
        assert!(bets.contains(&1));
    }

    #[test]
    fn random_bets_are_zero_when_nearly_broke() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for balance in [0, 1] {
            let player = Player::new("Ann", balance);
            assert_eq!(RandomBetting.bet_amount(&player, &mut rng), 0);
        }
    }

    #[test]
    fn random_bets_are_reproducible() {
        let player = Player::new("Ann", 1000);
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let xs: Vec<u64> = (0..10).map(|_| RandomBetting.bet_amount(&player, &mut a)).collect();
        let ys: Vec<u64> = (0..10).map(|_| RandomBetting.bet_amount(&player, &mut b)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn fixed_and_no_betting() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let player = Player::new("Ann", 10);
        assert_eq!(NoBetting.bet_amount(&player, &mut rng), 0);
        assert_eq!(FixedBetting(7).bet_amount(&player, &mut rng), 7);
    }
}
