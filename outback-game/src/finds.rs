//! Supplies and comforts discovered along the trail.
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::LOG_TARGET_EVENTS;
use crate::state::{ResourceKind, Stat, TravelerState};

/// One entry of the found-resources table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindOption {
    pub description: &'static str,
    /// Either [`Stat::Health`] or a [`Stat::Resource`].
    pub stat: Stat,
    pub min: i32,
    pub max: i32,
}

pub static FIND_TABLE: [FindOption; 5] = [
    FindOption {
        description: "an opal mine",
        stat: Stat::Resource(ResourceKind::TradeGoods),
        min: 10,
        max: 30,
    },
    FindOption {
        description: "a bag of canned food",
        stat: Stat::Resource(ResourceKind::Food),
        min: 15,
        max: 40,
    },
    FindOption {
        description: "a freshwater well",
        stat: Stat::Resource(ResourceKind::Water),
        min: 20,
        max: 40,
    },
    FindOption {
        description: "a crate of beer",
        stat: Stat::Health,
        min: 10,
        max: 30,
    },
    FindOption {
        description: "a broken-down caravan stocked with parts",
        stat: Stat::Resource(ResourceKind::SpareParts),
        min: 1,
        max: 5,
    },
];

/// A drawn find: which table entry, and how much of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Find {
    pub option: usize,
    pub amount: i32,
}

impl Find {
    #[must_use]
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let option = rng.gen_range(0..FIND_TABLE.len());
        let entry = &FIND_TABLE[option];
        let amount = rng.gen_range(entry.min..=entry.max);
        Self { option, amount }
    }

    /// Table entry behind this find. Out-of-range indices fall back to the first entry.
    #[must_use]
    pub fn entry(&self) -> &'static FindOption {
        FIND_TABLE.get(self.option).unwrap_or(&FIND_TABLE[0])
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.entry().description
    }

    /// Name of what was gained, as shown to the player.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.entry().stat {
            Stat::Resource(kind) => kind.label(),
            Stat::Health | Stat::Distance => "health",
        }
    }
}

/// Add the find to the traveler. Health is capped and never revives the dead.
pub fn apply_find(state: &mut TravelerState, find: Find) {
    match find.entry().stat {
        Stat::Health => {
            if state.is_alive() {
                state.adjust_health(find.amount);
            }
        }
        stat => state.adjust(stat, find.amount),
    }
    info!(
        target: LOG_TARGET_EVENTS,
        "found {}: +{} {}",
        find.description(),
        find.amount,
        find.label()
    );
}

pub fn resolve_find_with_rng<R: Rng>(state: &mut TravelerState, rng: &mut R) -> Find {
    let find = Find::roll(rng);
    apply_find(state, find);
    find
}
