//! Payment ledger: per-player payment and status tracking.

use super::{
    errors::{LedgerError, LedgerResult},
    models::{LedgerSummary, PaymentField, PlayerRecord},
};
use crate::tournament::models::Dollars;
use log::{debug, info, warn};

/// Payment ledger, one record per player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentLedger {
    records: Vec<PlayerRecord>,
}

impl PaymentLedger {
    /// Create a ledger with `players` fresh records
    pub fn new(players: usize) -> Self {
        let mut ledger = Self::default();
        ledger.resize(players);
        ledger
    }

    /// Number of players tracked
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in seat order
    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Copy of one record
    pub fn record(&self, index: usize) -> LedgerResult<PlayerRecord> {
        self.records
            .get(index)
            .cloned()
            .ok_or(self.not_found(index))
    }

    /// Grow or shrink to exactly `players` records.
    ///
    /// New seats get fresh records; shrinking drops records from the end.
    /// Surviving records are untouched.
    pub fn resize(&mut self, players: usize) {
        let current = self.records.len();
        if players > current {
            self.records.extend((current..players).map(PlayerRecord::new));
        } else {
            self.records.truncate(players);
        }
        if players != current {
            info!("Ledger resized from {} to {} players", current, players);
        }
    }

    /// Set one payment flag; `all` follows the three payment flags
    pub fn set_payment_flag(
        &mut self,
        index: usize,
        field: PaymentField,
        value: bool,
    ) -> LedgerResult<()> {
        let record = self.get_mut(index)?;
        record.set_paid(field, value);
        debug!(
            "{}: {} paid = {} (all = {})",
            record.name, field, value, record.all
        );
        Ok(())
    }

    /// Set buy-in, food, bounty and `all` together
    pub fn set_all_flag(&mut self, index: usize, value: bool) -> LedgerResult<()> {
        let record = self.get_mut(index)?;
        record.apply_all(value);
        debug!("{}: all paid = {}", record.name, value);
        Ok(())
    }

    pub fn set_eliminated(&mut self, index: usize, value: bool) -> LedgerResult<()> {
        let record = self.get_mut(index)?;
        record.eliminated = value;
        debug!("{}: eliminated = {}", record.name, value);
        Ok(())
    }

    pub fn set_payed_out(&mut self, index: usize, value: bool) -> LedgerResult<()> {
        let record = self.get_mut(index)?;
        record.payed_out = value;
        debug!("{}: paid out = {}", record.name, value);
        Ok(())
    }

    /// Change a display name. Names need not be unique.
    pub fn rename_player(&mut self, index: usize, name: impl Into<String>) -> LedgerResult<()> {
        let record = self.get_mut(index)?;
        record.name = name.into();
        Ok(())
    }

    /// Records with at least one unpaid obligation
    pub fn outstanding(&self) -> Vec<&PlayerRecord> {
        self.records.iter().filter(|r| !r.all).collect()
    }

    /// Reconcile payments against the pools.
    ///
    /// Never fails. If an amount or the result is not a finite number, a zeroed
    /// summary is returned instead.
    pub fn summarize(&self, buy_in: Dollars, food: Dollars, bounty: Dollars) -> LedgerSummary {
        if ![buy_in, food, bounty].iter().all(|v| v.is_finite()) {
            warn!(
                "Ledger summary skipped: non-finite amounts (buy-in {}, food {}, bounty {})",
                buy_in, food, bounty
            );
            return LedgerSummary::default();
        }

        let players = self.records.len();
        let total_pool = players as f64 * (buy_in + food + bounty);
        let total_paid: Dollars = self
            .records
            .iter()
            .map(|r| r.amount_paid(buy_in, food, bounty))
            .sum();
        let percent_paid = if total_pool == 0.0 {
            0.0
        } else {
            total_paid / total_pool * 100.0
        };

        if !percent_paid.is_finite() || !total_pool.is_finite() {
            warn!("Ledger summary degraded: pool {} paid {}", total_pool, total_paid);
            return LedgerSummary::default();
        }

        let eliminated = self.records.iter().filter(|r| r.eliminated).count();
        LedgerSummary {
            total_pool,
            total_paid,
            percent_paid,
            active_players: players - eliminated,
            payed_out_count: self.records.iter().filter(|r| r.payed_out).count(),
        }
    }

    fn get_mut(&mut self, index: usize) -> LedgerResult<&mut PlayerRecord> {
        let err = self.not_found(index);
        self.records.get_mut(index).ok_or(err)
    }

    fn not_found(&self, index: usize) -> LedgerError {
        LedgerError::PlayerNotFound {
            index,
            count: self.records.len(),
        }
    }
}
