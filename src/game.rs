use crate::agents::BetPolicy;
use crate::cards::Card;
use crate::config::{ConfigError, TableConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::Category;
use crate::hand::{Board, HandError, HoleCards};
use crate::showdown::{self, Showdown, ShowdownError};
use core::fmt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Progress of a single hand. Transitions only move forward, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Created,
    Dealt,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Created => "Created",
            Stage::Dealt => "Dealt",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
            Stage::Complete => "Complete",
        }
    }

    /// Betting happens after the deal and after each reveal.
    pub fn accepts_bets(self) -> bool {
        matches!(self, Stage::Dealt | Stage::Flop | Stage::Turn | Stage::River)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BetError {
    #[error("insufficient funds: balance {balance}, bet {requested}")]
    InsufficientFunds { balance: u64, requested: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: Stage, to: Stage },
    #[error("betting is closed during {0}")]
    BettingClosed(Stage),
    #[error("invalid table: {0}")]
    Config(#[from] ConfigError),
    #[error("deck exhausted: {0}")]
    Deck(#[from] DeckError),
    #[error("invalid cards: {0}")]
    Hand(#[from] HandError),
    #[error("showdown failed: {0}")]
    Showdown(#[from] ShowdownError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) balance: u64,
    pub(crate) bet: u64,
    pub(crate) hole: Option<HoleCards>,
}

impl Player {
    pub fn new(name: impl Into<String>, balance: u64) -> Self {
        Self { name: name.into(), balance, bet: 0, hole: None }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current balance
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the player's contribution in the current betting round
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Returns the player's hole cards
    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Take exactly two distinct hole cards, replacing any previous ones.
    pub fn receive_cards(&mut self, cards: &[Card]) -> Result<(), HandError> {
        self.hole = Some(HoleCards::from_slice(cards)?);
        Ok(())
    }

    /// Clear hole cards and the current bet.
    pub fn reset_hand(&mut self) {
        self.hole = None;
        self.bet = 0;
    }

    pub fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// Move `amount` from the balance into this round's bet.
    pub fn place_bet(&mut self, amount: u64) -> Result<(), BetError> {
        if amount > self.balance {
            return Err(BetError::InsufficientFunds { balance: self.balance, requested: amount });
        }
        self.balance -= amount;
        self.bet = amount;
        Ok(())
    }

    /// Pay out chips. A validated table never holds more than `u64::MAX`
    /// chips in total, so a pot won back cannot overflow a balance.
    pub(crate) fn credit(&mut self, amount: u64) {
        self.balance += amount;
    }
}

/// Final result of a completed hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub winner: usize,
    pub name: String,
    pub category: Category,
    pub pot: u64,
}

/// One hand of Hold'em: deck, seats, board and pot, driven stage by stage.
///
/// ```
/// use holdem_sim::agents::NoBetting;
/// use holdem_sim::config::TableConfig;
/// use holdem_sim::game::{Game, Stage};
///
/// let mut game = Game::seeded(TableConfig::default(), 7).unwrap();
/// let outcome = game.play(&mut NoBetting).unwrap();
/// assert_eq!(game.stage(), Stage::Complete);
/// assert_eq!(game.board().len(), 5);
/// assert!(outcome.winner < 3);
/// ```
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    deck: Deck,
    board: Board,
    players: Vec<Player>,
    pot: u64,
    stage: Stage,
    round: u32,
    showdown: Option<Showdown>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Build a game whose shuffle and bets are reproducible from `seed`.
    pub fn seeded(config: TableConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn new(config: TableConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let players = config.players.into_iter().map(|s| Player::new(s.name, s.balance)).collect();
        Ok(Self {
            deck: Deck::standard(),
            board: Board::default(),
            players,
            pot: 0,
            stage: Stage::Created,
            round: 0,
            showdown: None,
            rng,
        })
    }

    /// Returns a reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a reference to the players
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the current pot size
    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the current stage
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the number of betting rounds run so far
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the undealt part of the deck
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the showdown record once the hand reached showdown
    pub fn showdown_result(&self) -> Option<&Showdown> {
        self.showdown.as_ref()
    }

    fn expect_stage(&self, from: Stage, to: Stage) -> Result<(), GameError> {
        if self.stage != from {
            return Err(GameError::InvalidTransition { from: self.stage, to });
        }
        Ok(())
    }

    /// Shuffle and give every seat two cards, in seat order.
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.expect_stage(Stage::Created, Stage::Dealt)?;
        self.deck.shuffle_with(&mut self.rng);
        for p in &mut self.players {
            p.reset_hand();
            let cards = self.deck.deal(2)?;
            p.receive_cards(&cards)?;
            if let Some(hole) = p.hole {
                log::debug!("{} has been dealt {hole:#}", p.name);
            }
        }
        self.stage = Stage::Dealt;
        log::info!("dealt {} players, {} cards left", self.players.len(), self.deck.len());
        Ok(())
    }

    /// Reveal three community cards.
    pub fn flop(&mut self) -> Result<&Board, GameError> {
        self.expect_stage(Stage::Dealt, Stage::Flop)?;
        let cards = self.deck.deal(3)?;
        self.board.replace(cards);
        self.stage = Stage::Flop;
        log::info!("flop: {}", self.board);
        Ok(&self.board)
    }

    /// Reveal the fourth community card.
    pub fn turn(&mut self) -> Result<&Board, GameError> {
        self.expect_stage(Stage::Flop, Stage::Turn)?;
        let card = self.deck.deal_one()?;
        self.board.push(card);
        self.stage = Stage::Turn;
        log::info!("turn: {}", self.board);
        Ok(&self.board)
    }

    /// Reveal the fifth community card.
    pub fn river(&mut self) -> Result<&Board, GameError> {
        self.expect_stage(Stage::Turn, Stage::River)?;
        let card = self.deck.deal_one()?;
        self.board.push(card);
        self.stage = Stage::River;
        log::info!("river: {}", self.board);
        Ok(&self.board)
    }

    /// Evaluate every seat against the full board and choose the winner.
    pub fn showdown(&mut self) -> Result<&Showdown, GameError> {
        self.expect_stage(Stage::River, Stage::Showdown)?;
        let result = showdown::resolve(&self.players, &self.board)?;
        self.stage = Stage::Showdown;
        log::info!(
            "showdown: {} leads with {}",
            self.players[result.winner].name,
            result.category
        );
        Ok(self.showdown.insert(result))
    }

    /// Pay the whole pot to the showdown winner and finish the hand.
    pub fn award_pot(&mut self) -> Result<Outcome, GameError> {
        self.expect_stage(Stage::Showdown, Stage::Complete)?;
        let Some(result) = self.showdown.as_ref() else {
            return Err(GameError::InvalidTransition { from: self.stage, to: Stage::Complete });
        };
        let (winner, category) = (result.winner, result.category);
        let pot = std::mem::take(&mut self.pot);
        let player = &mut self.players[winner];
        player.credit(pot);
        self.stage = Stage::Complete;
        log::info!("{} wins {} with {}, balance now {}", player.name, pot, category, player.balance);
        Ok(Outcome { winner, name: player.name.clone(), category, pot })
    }

    /// Collect one bet from every seat, in seat order.
    ///
    /// A bet the player cannot cover is skipped. Returns the amount added to
    /// the pot.
    pub fn betting_round(&mut self, policy: &mut dyn BetPolicy) -> Result<u64, GameError> {
        if !self.stage.accepts_bets() {
            return Err(GameError::BettingClosed(self.stage));
        }
        self.round += 1;
        let mut collected = 0u64;
        for p in &mut self.players {
            p.reset_bet();
            let amount = policy.bet_amount(p, &mut self.rng);
            match p.place_bet(amount) {
                Ok(()) => {
                    collected += amount;
                    log::debug!("{} places a bet of {}", p.name, amount);
                }
                Err(e) => log::warn!("{} skipped: {}", p.name, e),
            }
        }
        self.pot += collected;
        log::info!("round {} collected {}, pot {}", self.round, collected, self.pot);
        Ok(collected)
    }

    /// Run the whole hand with a betting round after the deal and each reveal.
    pub fn play(&mut self, policy: &mut dyn BetPolicy) -> Result<Outcome, GameError> {
        self.deal()?;
        self.betting_round(policy)?;
        self.flop()?;
        self.betting_round(policy)?;
        self.turn()?;
        self.betting_round(policy)?;
        self.river()?;
        self.betting_round(policy)?;
        self.showdown()?;
        self.award_pot()
    }
}
