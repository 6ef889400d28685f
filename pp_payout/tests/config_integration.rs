//! Configuration precedence tests.
//!
//! Environment variables are process-global, so every test that touches them
//! runs serially and clears them first.

use poker_payout::tournament::DEFAULT_WEIGHTS;
use pp_payout::config::{ConfigError, ConfigOverrides, PayoutConfig};
use serial_test::serial;

const VARS: [&str; 5] = [
    "PAYOUT_PLAYERS",
    "PAYOUT_BUY_IN",
    "PAYOUT_FOOD",
    "PAYOUT_BOUNTY",
    "PAYOUT_WEIGHTS",
];

/// Helper to clear all calculator variables
fn clear_env() {
    for var in VARS {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::remove_var(var) };
    }
}

fn set_env(key: &str, value: &str) {
    // SAFETY: tests touching the environment are #[serial]
    unsafe { std::env::set_var(key, value) };
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = PayoutConfig::from_env(ConfigOverrides::default()).unwrap();
    assert_eq!(config.tournament.players, 9);
    assert_eq!(config.tournament.buy_in, 20.0);
    assert_eq!(config.tournament.food_per_player, 5.0);
    assert_eq!(config.tournament.bounty_per_player, 2.0);
    assert_eq!(config.weights.as_slice(), &DEFAULT_WEIGHTS);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_env_values_are_used() {
    clear_env();
    set_env("PAYOUT_PLAYERS", "18");
    set_env("PAYOUT_BUY_IN", "40");
    set_env("PAYOUT_FOOD", "0");
    set_env("PAYOUT_BOUNTY", " 5.5 ");
    set_env("PAYOUT_WEIGHTS", "50,30,20");

    let config = PayoutConfig::from_env(ConfigOverrides::default()).unwrap();
    assert_eq!(config.tournament.players, 18);
    assert_eq!(config.tournament.buy_in, 40.0);
    assert_eq!(config.tournament.food_per_player, 0.0);
    assert_eq!(config.tournament.bounty_per_player, 5.5);
    assert_eq!(config.weights.snapshot(), vec![50, 30, 20]);
    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    set_env("PAYOUT_PLAYERS", "18");
    set_env("PAYOUT_WEIGHTS", "50,30,20");

    let overrides = ConfigOverrides {
        players: Some(12),
        weights: Some("60,40".to_string()),
        ..Default::default()
    };
    let config = PayoutConfig::from_env(overrides).unwrap();
    assert_eq!(config.tournament.players, 12);
    assert_eq!(config.weights.snapshot(), vec![60, 40]);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_env_is_an_error() {
    clear_env();
    set_env("PAYOUT_BUY_IN", "twenty");
    let err = PayoutConfig::from_env(ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "PAYOUT_BUY_IN"));
    clear_env();
}

#[test]
#[serial]
fn test_bad_weights_env_is_an_error() {
    clear_env();
    set_env("PAYOUT_WEIGHTS", "35,0,15");
    let err = PayoutConfig::from_env(ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "PAYOUT_WEIGHTS"));
    clear_env();
}

#[test]
#[serial]
fn test_bad_weights_flag_names_flag() {
    clear_env();
    let overrides = ConfigOverrides {
        weights: Some("".to_string()),
        ..Default::default()
    };
    let err = PayoutConfig::from_env(overrides).unwrap_err();
    assert!(err.to_string().contains("--weights"));
}

#[test]
#[serial]
fn test_out_of_range_players_fail_validation() {
    clear_env();
    set_env("PAYOUT_PLAYERS", "31");
    let config = PayoutConfig::from_env(ConfigOverrides::default()).unwrap();
    assert!(config.validate().is_err());
    clear_env();
}
