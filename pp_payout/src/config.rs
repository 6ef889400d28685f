//! Calculator configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.
//! Command-line flags take precedence over the environment.

use poker_payout::{
    TournamentConfig, WeightSet,
    tournament::{MAX_PLAYERS, MIN_PLAYERS},
};
use std::str::FromStr;

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub players: Option<u32>,
    pub buy_in: Option<f64>,
    pub food_per_player: Option<f64>,
    pub bounty_per_player: Option<f64>,
    /// Comma-separated weights, e.g. "35,20,15"
    pub weights: Option<String>,
}

/// Complete calculator configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayoutConfig {
    /// Player count and per-player amounts
    pub tournament: TournamentConfig,
    /// Payout weights
    pub weights: WeightSet,
}

impl PayoutConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values from CLI args, used instead of the environment when set
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let defaults = TournamentConfig::default();

        let players = match overrides.players {
            Some(v) => v,
            None => parse_env("PAYOUT_PLAYERS")?.unwrap_or(defaults.players),
        };
        let buy_in = match overrides.buy_in {
            Some(v) => v,
            None => parse_env("PAYOUT_BUY_IN")?.unwrap_or(defaults.buy_in),
        };
        let food_per_player = match overrides.food_per_player {
            Some(v) => v,
            None => parse_env("PAYOUT_FOOD")?.unwrap_or(defaults.food_per_player),
        };
        let bounty_per_player = match overrides.bounty_per_player {
            Some(v) => v,
            None => parse_env("PAYOUT_BOUNTY")?.unwrap_or(defaults.bounty_per_player),
        };

        let (weights_var, weights_text) = match overrides.weights {
            Some(text) => ("--weights", Some(text)),
            None => ("PAYOUT_WEIGHTS", std::env::var("PAYOUT_WEIGHTS").ok()),
        };
        let weights = match weights_text {
            Some(text) => text.parse::<WeightSet>().map_err(|e| ConfigError::Invalid {
                var: weights_var.to_string(),
                reason: e.to_string(),
            })?,
            None => WeightSet::default(),
        };

        Ok(PayoutConfig {
            tournament: TournamentConfig::new(players, buy_in, food_per_player, bounty_per_player),
            weights,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tournament;

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&t.players) {
            return Err(ConfigError::Invalid {
                var: "PAYOUT_PLAYERS".to_string(),
                reason: format!(
                    "Must be between {} and {} (got {})",
                    MIN_PLAYERS, MAX_PLAYERS, t.players
                ),
            });
        }

        for (var, amount) in [
            ("PAYOUT_BUY_IN", t.buy_in),
            ("PAYOUT_FOOD", t.food_per_player),
            ("PAYOUT_BOUNTY", t.bounty_per_player),
        ] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(ConfigError::Invalid {
                    var: var.to_string(),
                    reason: format!("Must be a non-negative amount (got {amount})"),
                });
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an environment variable if it is set
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Cannot parse '{raw}'"),
            }),
        Err(_) => Ok(None),
    }
}
