//! A tournament session ties the configuration, the weights and the ledger together.
//!
//! Nothing recomputes implicitly: after a mutation the caller asks for a fresh
//! [`PayoutPlan`] or [`LedgerSummary`].

use super::{
    calculator,
    errors::{PayoutError, PayoutResult},
    models::{Dollars, PayoutPlan, TournamentConfig},
    weights::WeightSet,
};
use crate::ledger::{LedgerError, LedgerSummary, PaymentField, PaymentLedger, PlayerRecord};
use log::info;
use thiserror::Error;

/// Session errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Payout(#[from] PayoutError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// In-memory state for one tournament
#[derive(Debug, Clone)]
pub struct TournamentSession {
    config: TournamentConfig,
    weights: WeightSet,
    ledger: PaymentLedger,
}

impl Default for TournamentSession {
    fn default() -> Self {
        let config = TournamentConfig::default();
        Self {
            ledger: PaymentLedger::new(config.players as usize),
            config,
            weights: WeightSet::default(),
        }
    }
}

impl TournamentSession {
    /// Create a session with default weights
    pub fn new(config: TournamentConfig) -> SessionResult<Self> {
        Self::with_weights(config, WeightSet::default())
    }

    /// Create a session with explicit weights.
    ///
    /// The configuration goes through the same checks as the individual
    /// setters.
    pub fn with_weights(config: TournamentConfig, weights: WeightSet) -> SessionResult<Self> {
        check_players(config.players)?;
        non_negative("Buy-in", config.buy_in)?;
        non_negative("Food per player", config.food_per_player)?;
        non_negative("Bounty per player", config.bounty_per_player)?;

        Ok(Self {
            ledger: PaymentLedger::new(config.players as usize),
            config,
            weights,
        })
    }

    /// Current configuration (copy)
    pub fn config(&self) -> TournamentConfig {
        self.config
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    /// Commit an edited working copy of the weights
    pub fn set_weights(&mut self, weights: WeightSet) {
        self.weights = weights;
    }

    pub fn reset_weights(&mut self) {
        self.weights.reset();
    }

    /// Add a position with weight 1
    pub fn append_weight(&mut self) {
        self.weights.append();
    }

    pub fn append_weight_value(&mut self, value: i64) -> SessionResult<()> {
        Ok(self.weights.append_value(value)?)
    }

    pub fn remove_last_weight(&mut self) -> SessionResult<u32> {
        Ok(self.weights.remove_last()?)
    }

    pub fn set_weight(&mut self, index: usize, value: i64) -> SessionResult<()> {
        Ok(self.weights.set_at(index, value)?)
    }

    pub fn ledger(&self) -> &PaymentLedger {
        &self.ledger
    }

    /// Change the player count and resize the ledger to match
    pub fn set_players(&mut self, players: u32) -> SessionResult<()> {
        check_players(players)?;
        self.config.players = players;
        self.ledger.resize(players as usize);
        info!("Player count set to {}", players);
        Ok(())
    }

    pub fn set_buy_in(&mut self, amount: Dollars) -> SessionResult<()> {
        self.config.buy_in = non_negative("Buy-in", amount)?;
        Ok(())
    }

    pub fn set_food_per_player(&mut self, amount: Dollars) -> SessionResult<()> {
        self.config.food_per_player = non_negative("Food per player", amount)?;
        Ok(())
    }

    pub fn set_bounty_per_player(&mut self, amount: Dollars) -> SessionResult<()> {
        self.config.bounty_per_player = non_negative("Bounty per player", amount)?;
        Ok(())
    }

    pub fn set_payment_flag(
        &mut self,
        index: usize,
        field: PaymentField,
        value: bool,
    ) -> SessionResult<()> {
        Ok(self.ledger.set_payment_flag(index, field, value)?)
    }

    pub fn set_all_flag(&mut self, index: usize, value: bool) -> SessionResult<()> {
        Ok(self.ledger.set_all_flag(index, value)?)
    }

    pub fn set_eliminated(&mut self, index: usize, value: bool) -> SessionResult<()> {
        Ok(self.ledger.set_eliminated(index, value)?)
    }

    pub fn set_payed_out(&mut self, index: usize, value: bool) -> SessionResult<()> {
        Ok(self.ledger.set_payed_out(index, value)?)
    }

    pub fn rename_player(&mut self, index: usize, name: impl Into<String>) -> SessionResult<()> {
        Ok(self.ledger.rename_player(index, name)?)
    }

    pub fn player(&self, index: usize) -> SessionResult<PlayerRecord> {
        Ok(self.ledger.record(index)?)
    }

    /// Recompute the payout plan from the current inputs
    pub fn payout_plan(&self) -> PayoutResult<PayoutPlan> {
        calculator::compute_for(&self.config, self.weights.as_slice())
    }

    /// Recompute the ledger summary against the current pools
    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summarize(
            self.config.buy_in,
            self.config.food_per_player,
            self.config.bounty_per_player,
        )
    }
}

fn check_players(players: u32) -> PayoutResult<()> {
    if players < 1 {
        return Err(PayoutError::InvalidInput(
            "Player count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn non_negative(label: &str, amount: Dollars) -> PayoutResult<Dollars> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(PayoutError::InvalidInput(format!(
            "{label} must be a non-negative amount (got {amount})"
        )));
    }
    Ok(amount)
}
