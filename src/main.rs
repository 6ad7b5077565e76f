//! Arc Duel CLI
//!
//! Interactive commit-reveal duel against the computer. The move names
//! come from the command line; the commitment is printed before the menu
//! so the player can check after the reveal that the computer's move
//! never changed.

use anyhow::Result;
use clap::Parser;
use dialoguer::Select;
use tracing_subscriber::EnvFilter;

use arc_duel::{GameSession, MoveCatalog, PlayerChoice};

/// Play one commit-reveal round of generalized rock-paper-scissors.
///
/// Supply an odd number (at least 3) of unique move names; their order
/// defines the dominance cycle, e.g. `arc-duel rock paper scissors
/// lizard spock`.
#[derive(Debug, Parser)]
#[command(name = "arc-duel", version)]
struct Cli {
    /// Move names forming the cycle
    #[arg(required = true, num_args = 1..)]
    moves: Vec<String>,

    /// Print the duel report as JSON after the reveal
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics stay on stderr behind RUST_LOG; play output is plain stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = MoveCatalog::new(cli.moves)?;
    let session = GameSession::start(catalog);

    // Published before the player is asked for anything.
    println!("HMAC: {}", session.commitment());

    let choice = prompt_player(&session)?;
    let Some(report) = session.conclude(choice)? else {
        // Player chose to exit before adjudicating; reveal nothing.
        return Ok(());
    };

    println!("{}", report.outcome);
    println!("Your move: {}", report.player_move);
    println!("Computer move: {}", report.computer_move);
    println!("Key: {}", report.secret_key);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

/// Show the move menu plus a trailing `exit` entry and map the selection.
fn prompt_player(session: &GameSession) -> Result<PlayerChoice> {
    let mut items: Vec<&str> = session
        .catalog()
        .names()
        .iter()
        .map(String::as_str)
        .collect();
    items.push("exit");

    let picked = Select::new()
        .with_prompt("Your move")
        .items(&items)
        .default(0)
        .interact()?;

    if picked == items.len() - 1 {
        Ok(PlayerChoice::Quit)
    } else {
        Ok(PlayerChoice::Move(picked))
    }
}
