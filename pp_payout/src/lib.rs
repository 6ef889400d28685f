//! Internal modules for the payout calculator.
//!
//! This library provides configuration loading, command parsing and the
//! interactive session used by the pp_payout binary.

pub mod commands;
pub mod config;
pub mod repl;
