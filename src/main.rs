//! Gomoku GUI
//!
//! Play five in a row against the heuristic opponent, or watch it play
//! itself in the terminal with `--self-play`.

use anyhow::anyhow;
use clap::Parser;
use gomoku::config::Cli;
use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, GameStatus, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::try_from(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)))
        .init();

    if cli.self_play {
        self_play();
        return Ok(());
    }

    info!(delay_ms = config.opponent_delay.as_millis() as u64, "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(gomoku::config::MIN_WINDOW_SIZE)
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow!("{e}"))
}

/// Let the engine play both colors until the game ends
fn self_play() {
    let mut session = Session::new();

    while !session.status().is_over() {
        let color = session.next_to_move();
        let Some(pos) = session.play_engine_move(color) else {
            break;
        };
        println!("{:>3}. {:<5} ({:>2}, {:>2})", session.history().len(), color.name(), pos.row, pos.col);
    }

    println!();
    println!("{}", session.board());
    match session.status() {
        GameStatus::Won(winner) => println!("{} wins after {} moves", winner.name(), session.history().len()),
        GameStatus::Draw => println!("Draw"),
        GameStatus::InProgress => println!("Stopped after {} moves", session.history().len()),
    }
}
