//! Caravan breakdown system
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{LOG_TARGET_EVENTS, REPAIR_COST_MAX, REPAIR_COST_MIN};
use crate::state::{CauseOfDeath, TravelerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BreakdownOutcome {
    /// Spare parts covered the repair
    Repaired { required: i32 },
    /// Not enough spare parts; the traveler is stranded and dies
    Stranded { required: i32, available: i32 },
}

impl BreakdownOutcome {
    #[must_use]
    pub const fn required(self) -> i32 {
        match self {
            Self::Repaired { required } | Self::Stranded { required, .. } => required,
        }
    }
}

/// Roll the spare parts needed to fix the caravan
pub fn roll_repair_cost<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(REPAIR_COST_MIN..=REPAIR_COST_MAX)
}

/// Repair the caravan for `required` spare parts, or die trying.
pub fn resolve_breakdown(state: &mut TravelerState, required: i32) -> BreakdownOutcome {
    let available = state.spare_parts;
    if available >= required {
        state.spare_parts -= required;
        info!(target: LOG_TARGET_EVENTS, "caravan repaired with {required} spare part(s)");
        BreakdownOutcome::Repaired { required }
    } else {
        state.mark_death(CauseOfDeath::CaravanBreakdown);
        BreakdownOutcome::Stranded {
            required,
            available,
        }
    }
}

pub fn resolve_breakdown_with_rng<R: Rng>(
    state: &mut TravelerState,
    rng: &mut R,
) -> BreakdownOutcome {
    let required = roll_repair_cost(rng);
    resolve_breakdown(state, required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::Loadout;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand_chacha::ChaCha20Rng;

    fn with_spares(spare_parts: i32) -> TravelerState {
        TravelerState::new(Loadout {
            food: 50,
            water: 50,
            spare_parts,
            trade_goods: 0,
        })
    }

    #[test]
    fn exact_stock_is_enough() {
        let mut state = with_spares(3);
        let outcome = resolve_breakdown(&mut state, 3);
        assert_eq!(outcome, BreakdownOutcome::Repaired { required: 3 });
        assert_eq!(state.spare_parts, 0);
        assert!(state.is_alive());
    }

    #[test]
    fn shortfall_is_fatal_and_keeps_parts() {
        let mut state = with_spares(1);
        let outcome = resolve_breakdown(&mut state, 2);
        assert_eq!(
            outcome,
            BreakdownOutcome::Stranded {
                required: 2,
                available: 1
            }
        );
        assert_eq!(state.spare_parts, 1);
        assert_eq!(state.cause_of_death(), Some(CauseOfDeath::CaravanBreakdown));
    }

    #[test]
    fn zero_step_rng_rolls_cheapest_repair() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(roll_repair_cost(&mut rng), REPAIR_COST_MIN);
    }

    #[test]
    fn rolled_costs_stay_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..200 {
            let cost = roll_repair_cost(&mut rng);
            assert!((REPAIR_COST_MIN..=REPAIR_COST_MAX).contains(&cost));
        }
        let mut state = with_spares(10);
        let outcome = resolve_breakdown_with_rng(&mut state, &mut rng);
        assert_eq!(state.spare_parts, 10 - outcome.required());
    }
}
