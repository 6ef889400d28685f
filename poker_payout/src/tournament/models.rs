//! Tournament data models: configuration inputs and the computed payout plan.

use serde::{Deserialize, Serialize};

/// Dollar amount. Kept unrounded; formatting to cents happens in `report`.
pub type Dollars = f64;

/// Smallest player count the front end offers
pub const MIN_PLAYERS: u32 = 3;

/// Largest player count the front end offers
pub const MAX_PLAYERS: u32 = 30;

/// Tournament configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Number of entrants
    pub players: u32,
    /// Buy-in per player, feeds the prize pool
    pub buy_in: Dollars,
    /// Food contribution per player
    pub food_per_player: Dollars,
    /// Bounty contribution per player
    pub bounty_per_player: Dollars,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            players: 9,
            buy_in: 20.0,
            food_per_player: 5.0,
            bounty_per_player: 2.0,
        }
    }
}

impl TournamentConfig {
    /// Create a configuration
    pub fn new(
        players: u32,
        buy_in: Dollars,
        food_per_player: Dollars,
        bounty_per_player: Dollars,
    ) -> Self {
        Self {
            players,
            buy_in,
            food_per_player,
            bounty_per_player,
        }
    }

    /// Players × buy-in
    pub fn prize_pool(&self) -> Dollars {
        f64::from(self.players) * self.buy_in
    }

    /// Players × food per player
    pub fn food_pool(&self) -> Dollars {
        f64::from(self.players) * self.food_per_player
    }

    /// Players × bounty per player
    pub fn bounty_pool(&self) -> Dollars {
        f64::from(self.players) * self.bounty_per_player
    }

    /// Sum of the prize, food and bounty pools
    pub fn total_pool(&self) -> Dollars {
        self.prize_pool() + self.food_pool() + self.bounty_pool()
    }

    /// Everything one player owes
    pub fn per_player_total(&self) -> Dollars {
        self.buy_in + self.food_per_player + self.bounty_per_player
    }
}

/// Payout for a single paid position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionPayout {
    /// Finishing position (1-indexed)
    pub position: usize,
    /// Weight assigned to this position
    pub weight: u32,
    /// Fraction of the prize pool (0.0..=1.0)
    pub share: f64,
    /// Dollar amount
    pub amount: Dollars,
}

/// Result of a payout computation. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutPlan {
    /// Number of positions that get paid
    pub paying_positions: usize,
    /// Sum of the weights of the paid positions (never 0)
    pub total_weight: u64,
    /// Payouts by position (1st, 2nd, 3rd, ...)
    pub payouts: Vec<PositionPayout>,
    /// Players × buy-in
    pub prize_pool: Dollars,
    /// Players × food per player
    pub food_pool: Dollars,
    /// Players × bounty per player
    pub bounty_pool: Dollars,
    /// Prize + food + bounty
    pub total_pool: Dollars,
    /// What each knockout earns, the configured per-player bounty
    pub bounty_per_knockout: Dollars,
}

impl PayoutPlan {
    /// Sum of all position payouts
    pub fn total_paid(&self) -> Dollars {
        self.payouts.iter().map(|p| p.amount).sum()
    }

    /// Prize pool left after paying every position (rounding residue)
    pub fn remainder(&self) -> Dollars {
        self.prize_pool - self.total_paid()
    }

    /// Get payout for a specific position (1-indexed)
    pub fn payout_for_position(&self, position: usize) -> Option<Dollars> {
        if position == 0 || position > self.payouts.len() {
            None
        } else {
            Some(self.payouts[position - 1].amount)
        }
    }

    /// Payout amounts in position order
    pub fn amounts(&self) -> Vec<Dollars> {
        self.payouts.iter().map(|p| p.amount).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TournamentConfig::default();
        assert_eq!(config.players, 9);
        assert_eq!(config.buy_in, 20.0);
        assert_eq!(config.food_per_player, 5.0);
        assert_eq!(config.bounty_per_player, 2.0);
    }

    #[test]
    fn test_config_pools() {
        let config = TournamentConfig::new(9, 20.0, 5.0, 2.0);
        assert_eq!(config.prize_pool(), 180.0);
        assert_eq!(config.food_pool(), 45.0);
        assert_eq!(config.bounty_pool(), 18.0);
        assert_eq!(config.total_pool(), 243.0);
        assert_eq!(config.per_player_total(), 27.0);
    }

    #[test]
    fn test_payout_for_position() {
        let plan = PayoutPlan {
            paying_positions: 2,
            total_weight: 4,
            payouts: vec![
                PositionPayout {
                    position: 1,
                    weight: 3,
                    share: 0.75,
                    amount: 75.0,
                },
                PositionPayout {
                    position: 2,
                    weight: 1,
                    share: 0.25,
                    amount: 25.0,
                },
            ],
            prize_pool: 100.0,
            food_pool: 0.0,
            bounty_pool: 0.0,
            total_pool: 100.0,
            bounty_per_knockout: 0.0,
        };
        assert_eq!(plan.payout_for_position(1), Some(75.0));
        assert_eq!(plan.payout_for_position(2), Some(25.0));
        assert_eq!(plan.payout_for_position(3), None);
        assert_eq!(plan.payout_for_position(0), None);
        assert_eq!(plan.total_paid(), 100.0);
        assert_eq!(plan.remainder(), 0.0);
    }
}
