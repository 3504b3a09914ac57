//! Starting loadout planning and capacity validation.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::KNAPSACK_CAPACITY;
use crate::state::ResourceKind;

/// Supplies packed at the trail head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Loadout {
    pub food: i32,
    pub water: i32,
    pub spare_parts: i32,
    pub trade_goods: i32,
}

impl Loadout {
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.food as i64 + self.water as i64 + self.spare_parts as i64 + self.trade_goods as i64
    }
}

/// Reasons a proposed loadout is sent back for re-entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadoutError {
    #[error("'{input}' is not a whole number")]
    NotANumber { input: String },
    #[error("{kind} cannot be negative (got {value})")]
    Negative { kind: ResourceKind, value: i64 },
    #[error("loadout of {total} units exceeds the knapsack capacity of {capacity}")]
    OverCapacity { total: i64, capacity: i64 },
}

/// Parse one quantity as typed by the player.
///
/// # Errors
///
/// Returns [`LoadoutError::NotANumber`] when the trimmed text is not an integer.
pub fn parse_quantity(input: &str) -> Result<i64, LoadoutError> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| LoadoutError::NotANumber {
        input: trimmed.to_string(),
    })
}

/// Accept a loadout only when every quantity is non-negative and the total
/// fits in the knapsack.
///
/// # Errors
///
/// Returns [`LoadoutError::Negative`] for the first negative quantity, or
/// [`LoadoutError::OverCapacity`] when the sum exceeds [`KNAPSACK_CAPACITY`].
pub fn validate_loadout(
    food: i64,
    water: i64,
    spare_parts: i64,
    trade_goods: i64,
) -> Result<Loadout, LoadoutError> {
    let quantities = [food, water, spare_parts, trade_goods];
    for (kind, value) in ResourceKind::ALL.into_iter().zip(quantities) {
        if value < 0 {
            return Err(LoadoutError::Negative { kind, value });
        }
    }

    let total = quantities
        .iter()
        .try_fold(0_i64, |acc, value| acc.checked_add(*value))
        .unwrap_or(i64::MAX);
    if total > KNAPSACK_CAPACITY {
        return Err(LoadoutError::OverCapacity {
            total,
            capacity: KNAPSACK_CAPACITY,
        });
    }

    // Every quantity is within 0..=KNAPSACK_CAPACITY here, so the casts are lossless.
    let narrow = |value: i64| i32::try_from(value).unwrap_or(i32::MAX);
    Ok(Loadout {
        food: narrow(food),
        water: narrow(water),
        spare_parts: narrow(spare_parts),
        trade_goods: narrow(trade_goods),
    })
}
