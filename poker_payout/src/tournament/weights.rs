//! Payout weights, one per paid position.

use super::errors::{PayoutError, PayoutResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Default weights for the top 9 positions
pub const DEFAULT_WEIGHTS: [u32; 9] = [35, 20, 15, 10, 8, 6, 3, 2, 1];

/// Ordered list of positive weights, index 0 = 1st place.
///
/// The set is never empty and never holds a zero. Readers get either a shared
/// borrow ([`WeightSet::as_slice`]) or an owned copy ([`WeightSet::snapshot`]),
/// so a working copy being edited elsewhere cannot change the weights last
/// used for a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct WeightSet {
    weights: Vec<u32>,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS.to_vec(),
        }
    }
}

impl WeightSet {
    /// Create a weight set holding the default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a weight set from an explicit list
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the list is empty, `InvalidWeight` if any entry is 0.
    pub fn from_weights(weights: Vec<u32>) -> PayoutResult<Self> {
        validate(&weights)?;
        Ok(Self { weights })
    }

    /// Number of defined positions
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Borrow the current weights
    pub fn as_slice(&self) -> &[u32] {
        &self.weights
    }

    /// Owned copy of the current weights
    pub fn snapshot(&self) -> Vec<u32> {
        self.weights.clone()
    }

    /// Weight for a position (0-indexed)
    pub fn get(&self, index: usize) -> Option<u32> {
        self.weights.get(index).copied()
    }

    /// Restore the default weights
    pub fn reset(&mut self) {
        self.weights = DEFAULT_WEIGHTS.to_vec();
        info!("Payout weights reset to defaults");
    }

    /// Replace the weight at `index`
    ///
    /// # Errors
    ///
    /// `InvalidWeight` if `value <= 0`, `InvalidInput` if `index` is past the end.
    pub fn set_at(&mut self, index: usize, value: i64) -> PayoutResult<()> {
        let weight = positive(value)?;
        let len = self.weights.len();
        let slot = self.weights.get_mut(index).ok_or_else(|| {
            PayoutError::InvalidInput(format!(
                "Position {} does not exist ({} positions defined)",
                index + 1,
                len
            ))
        })?;
        *slot = weight;
        debug!("Weight for position {} set to {}", index + 1, weight);
        Ok(())
    }

    /// Add a trailing position with weight 1
    pub fn append(&mut self) {
        self.weights.push(1);
    }

    /// Add a trailing position with the given weight
    ///
    /// # Errors
    ///
    /// `InvalidWeight` if `value <= 0`.
    pub fn append_value(&mut self, value: i64) -> PayoutResult<()> {
        let weight = positive(value)?;
        self.weights.push(weight);
        Ok(())
    }

    /// Drop the last position
    ///
    /// # Errors
    ///
    /// `InvalidOperation` when only one position remains; the set is left unchanged.
    pub fn remove_last(&mut self) -> PayoutResult<u32> {
        if self.weights.len() <= 1 {
            return Err(PayoutError::InvalidOperation(
                "At least one paying position must remain".to_string(),
            ));
        }
        // len > 1 checked above
        Ok(self.weights.pop().unwrap_or_default())
    }

    /// Commit an edited copy of the weights
    ///
    /// # Errors
    ///
    /// Same as [`WeightSet::from_weights`]; on error the current weights are kept.
    pub fn replace(&mut self, weights: Vec<u32>) -> PayoutResult<()> {
        validate(&weights)?;
        self.weights = weights;
        info!("Payout weights replaced: {}", self);
        Ok(())
    }
}

fn positive(value: i64) -> PayoutResult<u32> {
    if value <= 0 {
        return Err(PayoutError::InvalidWeight(value));
    }
    u32::try_from(value)
        .map_err(|_| PayoutError::InvalidInput(format!("Weight {value} is too large")))
}

fn validate(weights: &[u32]) -> PayoutResult<()> {
    if weights.is_empty() {
        return Err(PayoutError::InvalidInput("No weights entered".to_string()));
    }
    if weights.contains(&0) {
        return Err(PayoutError::InvalidWeight(0));
    }
    Ok(())
}

impl TryFrom<Vec<u32>> for WeightSet {
    type Error = PayoutError;

    fn try_from(weights: Vec<u32>) -> Result<Self, Self::Error> {
        Self::from_weights(weights)
    }
}

impl From<WeightSet> for Vec<u32> {
    fn from(set: WeightSet) -> Self {
        set.weights
    }
}

impl fmt::Display for WeightSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.weights.iter().map(u32::to_string).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Parses comma-separated weights such as `"35, 20,15"`. Blank segments are skipped.
impl FromStr for WeightSet {
    type Err = PayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut weights = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let value: i64 = part
                .parse()
                .map_err(|_| PayoutError::InvalidInput(format!("'{part}' is not an integer")))?;
            weights.push(positive(value)?);
        }
        Self::from_weights(weights)
    }
}
