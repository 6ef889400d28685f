//! Payout calculator: pools and per-position payouts from weights.

use super::{
    errors::{PayoutError, PayoutResult},
    models::{Dollars, PayoutPlan, PositionPayout, TournamentConfig},
};
use log::debug;

/// One paid position per this many players
pub const PLAYERS_PER_PAID_POSITION: u32 = 3;

/// Number of paid positions for a field of `players`.
///
/// `players / 3` rounded down, at least 1, at most the number of defined weights.
pub fn paying_positions(players: u32, weight_count: usize) -> usize {
    let by_field = (players / PLAYERS_PER_PAID_POSITION) as usize;
    by_field.min(weight_count).max(1)
}

/// Compute pools and payouts.
///
/// Only the prize pool (players × buy-in) is split by weight. Food and bounty
/// pools are reported as-is. Amounts are not rounded.
///
/// # Errors
///
/// `InvalidInput` if `players` is 0, any amount is negative or not finite, or
/// `weights` is empty.
pub fn compute_payouts(
    players: u32,
    buy_in: Dollars,
    food_per_player: Dollars,
    bounty_per_player: Dollars,
    weights: &[u32],
) -> PayoutResult<PayoutPlan> {
    if players < 1 {
        return Err(PayoutError::InvalidInput(
            "Player count must be at least 1".to_string(),
        ));
    }
    check_amount("buy-in", buy_in)?;
    check_amount("food per player", food_per_player)?;
    check_amount("bounty per player", bounty_per_player)?;
    if weights.is_empty() {
        return Err(PayoutError::InvalidInput(
            "At least one payout weight is required".to_string(),
        ));
    }

    let config = TournamentConfig::new(players, buy_in, food_per_player, bounty_per_player);
    let prize_pool = config.prize_pool();

    let paid = paying_positions(players, weights.len());
    let relevant = &weights[..paid];
    let total_weight = match relevant.iter().map(|&w| u64::from(w)).sum::<u64>() {
        0 => 1,
        sum => sum,
    };

    let payouts: Vec<PositionPayout> = relevant
        .iter()
        .enumerate()
        .map(|(i, &weight)| {
            let share = f64::from(weight) / total_weight as f64;
            PositionPayout {
                position: i + 1,
                weight,
                share,
                amount: share * prize_pool,
            }
        })
        .collect();

    debug!(
        "Computed payouts: players={}, prize_pool={:.2}, positions={}, total_weight={}",
        players, prize_pool, paid, total_weight
    );

    Ok(PayoutPlan {
        paying_positions: paid,
        total_weight,
        payouts,
        prize_pool,
        food_pool: config.food_pool(),
        bounty_pool: config.bounty_pool(),
        total_pool: config.total_pool(),
        bounty_per_knockout: bounty_per_player,
    })
}

/// [`compute_payouts`] for a stored configuration
pub fn compute_for(config: &TournamentConfig, weights: &[u32]) -> PayoutResult<PayoutPlan> {
    compute_payouts(
        config.players,
        config.buy_in,
        config.food_per_player,
        config.bounty_per_player,
        weights,
    )
}

fn check_amount(label: &str, amount: Dollars) -> PayoutResult<()> {
    if !amount.is_finite() {
        return Err(PayoutError::InvalidInput(format!("{label} must be a number")));
    }
    if amount < 0.0 {
        return Err(PayoutError::InvalidInput(format!(
            "{label} cannot be negative (got {amount})"
        )));
    }
    Ok(())
}
