//! End of run result calculation
use serde::{Deserialize, Serialize};

use crate::state::{CauseOfDeath, TravelerState};

/// Possible ways a run can end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Ending {
    /// Reached the end of the trail alive
    Arrived,
    /// Health reached zero
    Died { cause: CauseOfDeath },
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ending::Arrived => write!(f, "arrived"),
            Ending::Died { cause } => write!(f, "died of {cause}"),
        }
    }
}

/// Summary of a run for the closing screen or a machine-readable report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// `None` while the run is still in progress (e.g. after quitting)
    pub ending: Option<Ending>,
    pub headline: String,
    pub days: i32,
    pub distance_travelled: i32,
    pub distance_remaining: i32,
    pub health: i32,
    pub food: i32,
    pub water: i32,
    pub spare_parts: i32,
    pub trade_goods: i32,
}

/// Generate result summary from traveler state
#[must_use]
pub fn result_summary(state: &TravelerState) -> ResultSummary {
    let ending = state.ending();
    ResultSummary {
        ending,
        headline: headline(ending),
        days: state.day,
        distance_travelled: state.distance_travelled(),
        distance_remaining: state.distance_remaining,
        health: state.health,
        food: state.food,
        water: state.water,
        spare_parts: state.spare_parts,
        trade_goods: state.trade_goods,
    }
}

fn headline(ending: Option<Ending>) -> String {
    match ending {
        Some(Ending::Arrived) => "You reached the end of the trail alive!".to_string(),
        Some(Ending::Died { cause }) => format!("You died of {cause}."),
        None => "Your journey continues.".to_string(),
    }
}
