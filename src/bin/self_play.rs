//! Random self-play driver.
//!
//! Usage:
//! `cargo run --bin self_play`
//! `cargo run --bin self_play -- --plies 300 --seed 7 --level 3`
//!
//! Set `RUST_LOG=debug` to see every move the executor accepts.

use chess_core::opponent::engine_random::RandomSuggester;
use chess_core::opponent::engine_trait::{play_computer_turn, ComputerConfig};
use chess_core::utils::render_game_state::render_game_state;
use chess_core::{Color, GameState};
use tracing_subscriber::EnvFilter;

fn parse_arg<T: std::str::FromStr>(flag: &str, default: T) -> T {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<T>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let max_plies = parse_arg::<u32>("--plies", 400);
    let seed = parse_arg::<u64>("--seed", 1);
    let level = parse_arg::<u8>("--level", 1);

    let white = ComputerConfig::new(Color::White, level)?;
    let black = ComputerConfig::new(Color::Black, level)?;
    let mut white_engine = RandomSuggester::seeded(seed);
    let mut black_engine = RandomSuggester::seeded(seed.wrapping_add(1));

    let mut game = GameState::new();
    let mut plies = 0u32;
    while !game.is_game_over() && plies < max_plies {
        let played = match game.side_to_move() {
            Color::White => play_computer_turn(&mut game, &mut white_engine, &white)?,
            Color::Black => play_computer_turn(&mut game, &mut black_engine, &black)?,
        };
        if played.is_some() {
            plies += 1;
        }
    }

    println!("{}", render_game_state(&game));
    println!("{}", game.position_notation());
    println!("plies played: {plies}");
    match game.termination() {
        Some(outcome) if outcome.is_draw() => println!("result: draw"),
        Some(outcome) => {
            if let Some(winner) = outcome.winner() {
                println!("result: {winner} wins");
            }
        }
        None => println!("result: unfinished after {max_plies} plies"),
    }
    Ok(())
}
