//! holdem-sim: one hand of Texas Hold'em, start to showdown.
//!
//! Goals:
//! - Deterministic play from a seed; randomness is always injected
//! - Category-only evaluation: all seven cards are classified together and
//!   ties go to the earliest seat
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a Hold'em hand
//! ```
//! use holdem_sim::evaluator::{evaluate_holdem, Category};
//! use holdem_sim::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "As Ah".parse().unwrap();
//! let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
//! assert_eq!(evaluate_holdem(&hole, &board).unwrap(), Category::OnePair);
//! ```
//!
//! ## Quick start: play a hand
//! ```
//! use holdem_sim::agents::RandomBetting;
//! use holdem_sim::config::TableConfig;
//! use holdem_sim::game::Game;
//!
//! let mut game = Game::seeded(TableConfig::default(), 42).unwrap();
//! let outcome = game.play(&mut RandomBetting).unwrap();
//! assert_eq!(game.pot(), 0);
//! println!("{} wins {} with {}", outcome.name, outcome.pot, outcome.category);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin holdem -- --seed 7 --player Ann:500 --player Ben:500
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
