//! Tournament payout engine.
//!
//! This module provides:
//! - Tournament configuration and pool totals
//! - Customizable payout weights
//! - Payout calculation (prize pool split by weight)
//! - A session type that keeps the ledger sized to the player count
//!
//! ## Example
//!
//! ```
//! use poker_payout::tournament::{compute_payouts, DEFAULT_WEIGHTS};
//!
//! let plan = compute_payouts(9, 20.0, 5.0, 2.0, &DEFAULT_WEIGHTS)?;
//! assert_eq!(plan.paying_positions, 3);
//! assert_eq!(plan.prize_pool, 180.0);
//! assert_eq!(plan.total_pool, 243.0);
//! # Ok::<(), poker_payout::tournament::PayoutError>(())
//! ```

pub mod calculator;
pub mod errors;
pub mod models;
pub mod session;
pub mod weights;

pub use calculator::{compute_for, compute_payouts, paying_positions};
pub use errors::{PayoutError, PayoutResult};
pub use models::{
    Dollars, MAX_PLAYERS, MIN_PLAYERS, PayoutPlan, PositionPayout, TournamentConfig,
};
pub use session::{SessionError, SessionResult, TournamentSession};
pub use weights::{DEFAULT_WEIGHTS, WeightSet};
