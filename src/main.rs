//! Terminal front end for the tic-tac-toe arena.
//!
//! All game logic lives in the library; this binary only renders
//! state and forwards keyboard input.

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_arena::cli::Cli;
use tictactoe_arena::{Arena, Controller, Mode, Phase, Player, Position, TurnReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut mode: Mode = cli.mode.into();
    let starting: Player = cli.start.into();
    info!(mode = mode.name(), starting = %starting, "Arena starting");

    let mut arena = Arena::new(mode);
    let report = arena.new_game(mode, starting);
    let delay = Duration::from_millis(cli.delay_ms);

    println!("{} - {}", env!("CARGO_PKG_NAME"), mode.name());
    println!(
        "Enter a cell number (1-9), n = new game, m = switch mode, r = reset scores, j = state as JSON, q = quit."
    );
    show_computer_reply(mode, &report, delay);
    render(&arena);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "q" => break,
            "n" => {
                let report = arena.new_game(mode, starting);
                println!("Round {}", arena.round());
                show_computer_reply(mode, &report, delay);
                render(&arena);
            }
            "m" => {
                // Switching opponents restarts the game; scores and
                // history carry over.
                mode = next_mode(mode);
                println!("{}", mode.name());
                let report = arena.new_game(mode, starting);
                show_computer_reply(mode, &report, delay);
                render(&arena);
            }
            "r" => {
                arena.reset_scores();
                println!("Scores and history cleared.");
                render(&arena);
            }
            "j" => println!("{}", serde_json::to_string_pretty(&arena.snapshot())?),
            _ => match parse_cell(&input) {
                Some(pos) => match arena.apply_human_move(pos) {
                    Ok(report) => {
                        show_computer_reply(mode, &report, delay);
                        render(&arena);
                    }
                    Err(err) => println!("{err}"),
                },
                None => println!("Unrecognized input: {input}"),
            },
        }
    }

    Ok(())
}

/// Cycles through the three modes in the original toggle order.
fn next_mode(mode: Mode) -> Mode {
    match mode {
        Mode::HumanVsHuman => Mode::HumanVsRandom,
        Mode::HumanVsRandom => Mode::HumanVsOptimal,
        Mode::HumanVsOptimal => Mode::HumanVsHuman,
    }
}

/// Parses a 1-based cell number as shown on the board.
fn parse_cell(input: &str) -> Option<Position> {
    let n: usize = input.parse().ok()?;
    Position::from_index(n.checked_sub(1)?)
}

/// Pauses briefly before announcing a computer reply, purely for
/// pacing; the move itself was already made synchronously.
fn show_computer_reply(mode: Mode, report: &TurnReport, delay: Duration) {
    for (player, pos) in &report.placements {
        if matches!(mode.controller(*player), Controller::Computer(_)) {
            std::thread::sleep(delay);
            println!("Computer ({player}) plays {pos}.");
        }
    }
}

fn render(arena: &Arena) {
    let snapshot = arena.snapshot();
    println!("{}", snapshot.board().display());

    match snapshot.phase() {
        Phase::Running => println!("Turn: {}", snapshot.to_move()),
        Phase::Ended(outcome) => println!("{}. Press n for a new round.", outcome.summary()),
        Phase::Idle => println!("Ready."),
    }

    let scores = arena.scores();
    println!(
        "Round {} | X {} / O {} / Draws {}",
        arena.round(),
        scores.x(),
        scores.o(),
        scores.draws()
    );
    for entry in arena.history().iter().take(3) {
        println!("  {} ({})", entry.summary(), entry.recorded_at().format("%H:%M:%S"));
    }
}
