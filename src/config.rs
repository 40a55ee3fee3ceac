//! Table configuration: who sits down and with how much.

use crate::deck::DECK_SIZE;
use crate::hand::FULL_BOARD;
use std::collections::HashSet;

/// Fewest players a hand can be dealt to.
pub const MIN_PLAYERS: usize = 2;

/// Most players a single deck can serve: two hole cards each plus the board.
pub const MAX_PLAYERS: usize = (DECK_SIZE - FULL_BOARD) / 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("too few players: {0} (need at least {min})", min = MIN_PLAYERS)]
    TooFewPlayers(usize),
    #[error("too many players for one deck: {0} (at most {max})", max = MAX_PLAYERS)]
    TooManyPlayers(usize),
    #[error("player name must not be empty")]
    EmptyName,
    #[error("duplicate player name: '{0}'")]
    DuplicateName(String),
    #[error("opening balances add up to more than {max} chips", max = u64::MAX)]
    BalanceOverflow,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub balance: u64,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, balance: u64) -> Self {
        Self { name: name.into(), balance }
    }
}

/// Player identities and opening balances, in seat order.
///
/// ```
/// use holdem_sim::config::TableConfig;
///
/// let config = TableConfig::empty()
///     .with_player("Ann", 500)
///     .with_player("Ben", 800);
/// config.validate().unwrap();
/// assert_eq!(config.players.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub players: Vec<SeatConfig>,
}

impl Default for TableConfig {
    /// Alice, Bob and Charlie with 1000 each.
    fn default() -> Self {
        Self::empty().with_player("Alice", 1000).with_player("Bob", 1000).with_player("Charlie", 1000)
    }
}

impl TableConfig {
    pub fn empty() -> Self {
        Self { players: Vec::new() }
    }

    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, balance: u64) -> Self {
        self.players.push(SeatConfig::new(name, balance));
        self
    }

    /// Check seat count against the deck, that names are unique, and that
    /// every chip at the table fits in one pot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.players.len();
        if n < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(n));
        }
        if n > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(n));
        }
        let mut seen = HashSet::with_capacity(n);
        for seat in &self.players {
            if seat.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen.insert(seat.name.as_str()) {
                return Err(ConfigError::DuplicateName(seat.name.clone()));
            }
        }
        self.total_chips().ok_or(ConfigError::BalanceOverflow)?;
        Ok(())
    }

    /// Sum of opening balances, `None` when it does not fit in a `u64`.
    pub fn total_chips(&self) -> Option<u64> {
        self.players.iter().try_fold(0u64, |acc, s| acc.checked_add(s.balance))
    }
}
