//! Ledger data models.

use crate::tournament::models::Dollars;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Whether every payment obligation is settled.
pub fn derive_all(buy_in: bool, food: bool, bounty: bool) -> bool {
    buy_in && food && bounty
}

/// One of the three payment obligations a player owes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentField {
    BuyIn,
    Food,
    Bounty,
}

impl PaymentField {
    /// All fields in display order
    pub const ALL: [PaymentField; 3] = [
        PaymentField::BuyIn,
        PaymentField::Food,
        PaymentField::Bounty,
    ];
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentField::BuyIn => write!(f, "buy-in"),
            PaymentField::Food => write!(f, "food"),
            PaymentField::Bounty => write!(f, "bounty"),
        }
    }
}

impl FromStr for PaymentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buyin" | "buy-in" | "buy_in" => Ok(PaymentField::BuyIn),
            "food" => Ok(PaymentField::Food),
            "bounty" => Ok(PaymentField::Bounty),
            other => Err(format!("Unknown payment field '{other}'")),
        }
    }
}

/// Payment and status record for one seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Seat position (0-indexed, stable for the session)
    pub position: usize,
    /// Display name, free text
    pub name: String,
    pub paid_buy_in: bool,
    pub paid_food: bool,
    pub paid_bounty: bool,
    /// True iff all three payment flags are set
    pub all: bool,
    pub eliminated: bool,
    pub payed_out: bool,
}

impl PlayerRecord {
    /// Fresh record: unpaid, in play, named "Player {position+1}"
    pub fn new(position: usize) -> Self {
        Self {
            position,
            name: format!("Player {}", position + 1),
            paid_buy_in: false,
            paid_food: false,
            paid_bounty: false,
            all: false,
            eliminated: false,
            payed_out: false,
        }
    }

    /// Current value of a payment flag
    pub fn paid(&self, field: PaymentField) -> bool {
        match field {
            PaymentField::BuyIn => self.paid_buy_in,
            PaymentField::Food => self.paid_food,
            PaymentField::Bounty => self.paid_bounty,
        }
    }

    /// Set one payment flag and re-derive `all`
    pub fn set_paid(&mut self, field: PaymentField, value: bool) {
        match field {
            PaymentField::BuyIn => self.paid_buy_in = value,
            PaymentField::Food => self.paid_food = value,
            PaymentField::Bounty => self.paid_bounty = value,
        }
        self.all = derive_all(self.paid_buy_in, self.paid_food, self.paid_bounty);
    }

    /// Set all three payment flags and `all` together
    pub fn apply_all(&mut self, value: bool) {
        self.paid_buy_in = value;
        self.paid_food = value;
        self.paid_bounty = value;
        self.all = value;
    }

    /// Dollars this player has paid in
    pub fn amount_paid(&self, buy_in: Dollars, food: Dollars, bounty: Dollars) -> Dollars {
        let mut total = 0.0;
        if self.paid_buy_in {
            total += buy_in;
        }
        if self.paid_food {
            total += food;
        }
        if self.paid_bounty {
            total += bounty;
        }
        total
    }
}

/// Aggregate reconciliation of the ledger against the pools
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Players × (buy-in + food + bounty)
    pub total_pool: Dollars,
    /// Sum of everything marked paid
    pub total_paid: Dollars,
    /// `total_paid / total_pool × 100`, 0 when the pool is empty
    pub percent_paid: f64,
    /// Players not eliminated
    pub active_players: usize,
    /// Players marked as paid out
    pub payed_out_count: usize,
}

impl LedgerSummary {
    /// Amount still to collect
    pub fn outstanding(&self) -> Dollars {
        self.total_pool - self.total_paid
    }
}
