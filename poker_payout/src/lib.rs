//! # Poker Payout
//!
//! Prize distribution and payment tracking for a home poker tournament.
//!
//! Given a player count, a buy-in, side-pool contributions (food and bounty)
//! and a list of payout weights, the library derives the pools and how much
//! each paid position receives. A payment ledger tracks which players have
//! paid, who has been eliminated and who has been paid out.
//!
//! ## Architecture
//!
//! Everything is synchronous and in memory. Nothing recomputes on its own:
//! after changing an input the caller asks for a fresh plan or summary.
//!
//! - **Calculator**: pure function from inputs to a [`PayoutPlan`]
//! - **Weights**: ordered positive weights with add/remove/edit/reset
//! - **Ledger**: per-player payment flags and reconciliation
//! - **Session**: keeps the ledger sized to the player count
//!
//! ## Core Modules
//!
//! - [`tournament`]: configuration, weights, payout calculation, session
//! - [`ledger`]: player payment records and summaries
//! - [`report`]: plain-text rendering
//!
//! ## Example
//!
//! ```
//! use poker_payout::TournamentSession;
//!
//! let mut session = TournamentSession::default();
//! session.set_players(12)?;
//!
//! let plan = session.payout_plan()?;
//! assert_eq!(plan.paying_positions, 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Payment ledger for per-player tracking.
pub mod ledger;
pub use ledger::{LedgerError, LedgerSummary, PaymentField, PaymentLedger, PlayerRecord};

/// Text rendering of plans and ledgers.
pub mod report;

/// Payout calculation, weights and tournament session.
pub mod tournament;
pub use tournament::{
    DEFAULT_WEIGHTS, PayoutError, PayoutPlan, TournamentConfig, TournamentSession, WeightSet,
    compute_payouts,
};
