//! Command-line interface for coursework.

use clap::{Parser, Subcommand};

/// Coursework - tic-tac-toe, text statistics and design pattern demos
#[derive(Parser, Debug)]
#[command(name = "coursework")]
#[command(about = "Console coursework exercises", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "coursework.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe against another person at this console
    Play {
        /// Name of the first player (asked for if omitted)
        #[arg(long)]
        player_x: Option<String>,

        /// Name of the second player (asked for if omitted)
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Replay a short scripted game and print each board
    Demo,

    /// Count words and uppercase words
    Analyze {
        /// Text to analyze (read from stdin if omitted)
        text: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Process a payment through the gateway
    Pay {
        /// Payment method: paypal, stripe or creditcard
        #[arg(short, long)]
        method: Option<String>,

        /// Amount to charge
        #[arg(short, long)]
        amount: Option<f64>,
    },

    /// Describe a trip with a travel mode
    Travel {
        /// Travel mode: car, ship or bus
        #[arg(short, long)]
        mode: Option<String>,

        /// Distance in miles
        #[arg(short, long)]
        distance: Option<f64>,
    },

    /// Initialize the demo database and look up a user's orders
    Db {
        /// Path to the SQLite database file
        #[arg(long)]
        path: Option<String>,

        /// User id to look up
        #[arg(long, default_value = "1")]
        user: i32,

        /// Also time shared vs per-call connections
        #[arg(long)]
        compare: bool,
    },
}
