//! Coursework configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Process-wide settings, loaded once in `main` and passed to each command.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct CourseworkConfig {
    /// Tic-tac-toe defaults.
    #[serde(default)]
    game: GameSettings,

    /// Payment and travel defaults.
    #[serde(default)]
    payments: PaymentSettings,

    /// Database location.
    #[serde(default)]
    database: DatabaseSettings,
}

/// `[game]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Default name of the first player; asked for at the console if unset.
    #[serde(default)]
    player_x: Option<String>,

    /// Default name of the second player; asked for at the console if unset.
    #[serde(default)]
    player_o: Option<String>,

    /// Mark of the first player.
    #[serde(default = "default_symbol_x")]
    symbol_x: char,

    /// Mark of the second player.
    #[serde(default = "default_symbol_o")]
    symbol_o: char,
}

#[instrument]
fn default_symbol_x() -> char {
    'X'
}

#[instrument]
fn default_symbol_o() -> char {
    'O'
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            symbol_x: default_symbol_x(),
            symbol_o: default_symbol_o(),
        }
    }
}

/// `[payments]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct PaymentSettings {
    /// Payment method name handed to the factory.
    #[serde(default = "default_method")]
    method: String,

    /// Amount charged when none is given.
    #[serde(default = "default_amount")]
    amount: f64,

    /// Travel mode name handed to the factory.
    #[serde(default = "default_travel_mode")]
    travel_mode: String,

    /// Distance used when none is given.
    #[serde(default = "default_distance")]
    distance: f64,
}

#[instrument]
fn default_method() -> String {
    "paypal".to_string()
}

#[instrument]
fn default_amount() -> f64 {
    100.0
}

#[instrument]
fn default_travel_mode() -> String {
    "car".to_string()
}

#[instrument]
fn default_distance() -> f64 {
    150.0
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            method: default_method(),
            amount: default_amount(),
            travel_mode: default_travel_mode(),
            distance: default_distance(),
        }
    }
}

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file path.
    #[serde(default = "default_db_path")]
    path: String,
}

#[instrument]
fn default_db_path() -> String {
    "app.db".to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl CourseworkConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults are returned instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid config TOML.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(db_path = %config.database.path, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
