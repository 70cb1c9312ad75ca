//! Coursework - unified CLI
//!
//! Console front end for the tic-tac-toe game, the text analyzer, the
//! payment/travel pattern demos and the database connection demo.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::CourseworkConfig;
use console::Console;
use coursework_db::{ConnectionMode, Database, compare_modes};
use coursework_patterns::{PaymentGateway, payment_method, travel_mode};
use coursework_text::TextAnalyzer;
use std::io::{Read, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = CourseworkConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { player_x, player_o } => run_play(&config, player_x, player_o),
        Command::Demo => run_demo(),
        Command::Analyze { text, json } => run_analyze(text, json),
        Command::Pay { method, amount } => run_pay(&config, method, amount),
        Command::Travel { mode, distance } => run_travel(&config, mode, distance),
        Command::Db {
            path,
            user,
            compare,
        } => run_db(&config, path, user, compare),
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,coursework=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive tic-tac-toe session on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: &CourseworkConfig,
    player_x: Option<String>,
    player_o: Option<String>,
) -> Result<()> {
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let summary = session::run_session(&mut console, config.game(), player_x, player_o)?;
    info!(
        rounds = summary.rounds.len(),
        interrupted = summary.interrupted,
        "Session ended"
    );
    Ok(())
}

/// Run the scripted demo game
fn run_demo() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    session::run_demo(&mut stdout)?;
    println!("To play the full interactive game, run: coursework play");
    Ok(())
}

/// Analyze text from the argument or stdin
#[instrument(skip(text))]
fn run_analyze(text: Option<String>, json: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            eprint!("Enter the text to be analyzed: ");
            std::io::stderr().flush().ok();
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let report = TextAnalyzer::new(&text).analyze();
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Analysis Result:");
        println!("Total words: {}", report.word_count());
        println!("Total uppercase words: {}", report.upper_word_count());
    }
    Ok(())
}

/// Process one payment through a gateway built from the factory
#[instrument(skip(config))]
fn run_pay(config: &CourseworkConfig, method: Option<String>, amount: Option<f64>) -> Result<()> {
    let name = method.unwrap_or_else(|| config.payments().method().clone());
    let amount = amount.unwrap_or(*config.payments().amount());

    let mut gateway = PaymentGateway::new(payment_method(&name)?);
    println!("{}", gateway.pay(amount)?);
    Ok(())
}

/// Describe a trip with a travel mode built from the factory
#[instrument(skip(config))]
fn run_travel(config: &CourseworkConfig, mode: Option<String>, distance: Option<f64>) -> Result<()> {
    let name = mode.unwrap_or_else(|| config.payments().travel_mode().clone());
    let distance = distance.unwrap_or(*config.payments().distance());

    println!("{}", travel_mode(&name)?.travel(distance)?);
    Ok(())
}

/// Initialize the demo database and print a user's orders
#[instrument(skip(config))]
fn run_db(config: &CourseworkConfig, path: Option<String>, user: i32, compare: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| config.database().path().clone());

    let mut db = Database::open(&path, ConnectionMode::Shared)?;
    db.initialize()?;

    match db.find_user(user)? {
        Some(found) => println!("User {}: {}", found.id(), found.name()),
        None => println!("User {} not found", user),
    }
    for order in db.orders_for_user(user)? {
        println!("  Order {}: {}", order.id(), order.product());
    }

    if compare {
        let comparison = compare_modes(&path, user)?;
        for report in [comparison.shared(), comparison.per_call()] {
            println!(
                "{:>8}: {} connection(s), {:.6} s",
                report.mode().to_string(),
                report.connections_opened(),
                report.elapsed().as_secs_f64()
            );
        }
    }
    Ok(())
}
