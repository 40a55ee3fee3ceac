use clap::Parser;
use holdem_sim::agents::{BetPolicy, NoBetting, RandomBetting};
use holdem_sim::config::{SeatConfig, TableConfig};
use holdem_sim::engine::TableEngine;
use holdem_sim::game::{Game, GameError};
use rand::Rng;
use std::process::ExitCode;

const DEFAULT_BALANCE: u64 = 1000;

/// Play one hand of Texas Hold'em and narrate it.
#[derive(Debug, Parser)]
#[command(name = "holdem", version = holdem_sim::VERSION)]
struct Args {
    /// Seat a player as NAME or NAME:BALANCE (repeatable, seat order).
    #[arg(short, long = "player", value_name = "NAME[:BALANCE]", value_parser = parse_seat)]
    players: Vec<SeatConfig>,

    /// Seed for the shuffle and bet sizing.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip betting; every round checks.
    #[arg(long)]
    no_bets: bool,
}

fn parse_seat(s: &str) -> Result<SeatConfig, String> {
    match s.split_once(':') {
        Some((name, balance)) => {
            let balance = balance
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("invalid balance '{balance}': {e}"))?;
            Ok(SeatConfig::new(name.trim(), balance))
        }
        None => Ok(SeatConfig::new(s.trim(), DEFAULT_BALANCE)),
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let config = if args.players.is_empty() {
        TableConfig::default()
    } else {
        TableConfig { players: args.players }
    };
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {seed}");

    let mut policy: Box<dyn BetPolicy> =
        if args.no_bets { Box::new(NoBetting) } else { Box::new(RandomBetting) };
    let mut game = Game::seeded(config, seed)?;
    narrate(&mut game, policy.as_mut())
}

/// Play one hand through the engine boundary, printing each step.
fn narrate(table: &mut dyn TableEngine, policy: &mut dyn BetPolicy) -> Result<(), GameError> {
    println!("Starting a new Poker game...");
    table.deal()?;
    for seat in 0..table.num_players() {
        if let (Some(name), Some(hole)) = (table.player_name(seat), table.hole_cards(seat)) {
            println!("{name} has been dealt: {hole:#}");
        }
    }

    betting(table, policy)?;
    println!("\nThe Flop:\n{:#}", table.flop()?);
    betting(table, policy)?;
    println!("\nThe Turn:\n{:#}", table.turn()?);
    betting(table, policy)?;
    println!("\nThe River:\n{:#}", table.river()?);
    betting(table, policy)?;

    println!("\nShowdown:");
    for (seat, category) in table.showdown()? {
        println!("{} has a {category}", table.player_name(seat).unwrap_or("?"));
    }
    let outcome = table.award_pot()?;
    println!("{} wins the pot of {} with a {}!", outcome.name, outcome.pot, outcome.category);
    if let Some(balance) = table.balance(outcome.winner) {
        println!("{}'s new balance: {balance}", outcome.name);
    }
    Ok(())
}

fn betting(table: &mut dyn TableEngine, policy: &mut dyn BetPolicy) -> Result<(), GameError> {
    table.betting_round(policy)?;
    println!("\nRound {} - Betting starts!", table.round());
    for seat in 0..table.num_players() {
        if let (Some(name), Some(bet)) = (table.player_name(seat), table.bet(seat)) {
            println!("{name} places a bet of {bet}");
        }
    }
    println!("Total Pot: {}", table.pot());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
