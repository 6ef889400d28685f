//! Payment ledger tracking which players have paid their buy-in, food and
//! bounty contributions, plus elimination and payout status.
//!
//! The ledger is sized to the player count and reconciled against the pools
//! on demand with [`PaymentLedger::summarize`].
//!
//! ## Example
//!
//! ```
//! use poker_payout::ledger::{PaymentField, PaymentLedger};
//!
//! let mut ledger = PaymentLedger::new(9);
//! ledger.set_all_flag(0, true)?;
//! ledger.set_payment_flag(1, PaymentField::BuyIn, true)?;
//!
//! let summary = ledger.summarize(20.0, 5.0, 2.0);
//! assert_eq!(summary.total_paid, 47.0);
//! assert_eq!(summary.active_players, 9);
//! # Ok::<(), poker_payout::ledger::LedgerError>(())
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{LedgerError, LedgerResult};
pub use manager::PaymentLedger;
pub use models::{LedgerSummary, PaymentField, PlayerRecord, derive_all};
