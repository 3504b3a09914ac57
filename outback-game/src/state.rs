//! Traveler state and the daily consumption and death rules.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    LOG_TARGET_STATE, MAX_HEALTH, REST_FOOD_DECAY, REST_HEAL, REST_WATER_DECAY, STARTING_DAY,
    TRAIL_DISTANCE_KM, TRAVEL_FOOD_DECAY, TRAVEL_HEALTH_DECAY, TRAVEL_WATER_DECAY,
};
use crate::knapsack::Loadout;
use crate::result::Ending;

/// Closed set of consumable and tradeable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Food,
    Water,
    SpareParts,
    TradeGoods,
}

impl ResourceKind {
    pub const ALL: [Self; 4] = [Self::Food, Self::Water, Self::SpareParts, Self::TradeGoods];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
            Self::SpareParts => "spare_parts",
            Self::TradeGoods => "trade_goods",
        }
    }

    /// Player-facing name of the resource.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Water => "water",
            Self::SpareParts => "spare parts",
            Self::TradeGoods => "opal gems",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything a decay table or an event delta can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Health,
    Resource(ResourceKind),
    Distance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseOfDeath {
    Exhaustion,
    Starvation,
    Dehydration,
    CaravanBreakdown,
    Injuries,
}

impl CauseOfDeath {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Exhaustion => "exhaustion",
            Self::Starvation => "starvation",
            Self::Dehydration => "dehydration",
            Self::CaravanBreakdown => "caravan breakdown",
            Self::Injuries => "injuries",
        }
    }
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Amount removed from each listed stat on a given day type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayTable(pub &'static [(Stat, i32)]);

pub const TRAVEL_DECAY: DecayTable = DecayTable(&[
    (Stat::Resource(ResourceKind::Food), TRAVEL_FOOD_DECAY),
    (Stat::Resource(ResourceKind::Water), TRAVEL_WATER_DECAY),
    (Stat::Health, TRAVEL_HEALTH_DECAY),
]);

pub const REST_DECAY: DecayTable = DecayTable(&[
    (Stat::Resource(ResourceKind::Food), REST_FOOD_DECAY),
    (Stat::Resource(ResourceKind::Water), REST_WATER_DECAY),
]);

/// Complete record of one traveler's progress along the trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerState {
    pub health: i32,
    pub food: i32,
    pub water: i32,
    pub spare_parts: i32,
    pub trade_goods: i32,
    pub distance_remaining: i32,
    pub day: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause_of_death: Option<CauseOfDeath>,
}

impl TravelerState {
    /// Fresh traveler at the trail head carrying the given loadout.
    #[must_use]
    pub const fn new(loadout: Loadout) -> Self {
        Self {
            health: MAX_HEALTH,
            food: loadout.food,
            water: loadout.water,
            spare_parts: loadout.spare_parts,
            trade_goods: loadout.trade_goods,
            distance_remaining: TRAIL_DISTANCE_KM,
            day: STARTING_DAY,
            cause_of_death: None,
        }
    }

    #[must_use]
    pub const fn cause_of_death(&self) -> Option<CauseOfDeath> {
        self.cause_of_death
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[must_use]
    pub const fn reached_destination(&self) -> bool {
        self.distance_remaining == 0
    }

    /// True once the run can no longer continue, in either direction.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !self.is_alive() || self.reached_destination()
    }

    #[must_use]
    pub const fn distance_travelled(&self) -> i32 {
        TRAIL_DISTANCE_KM - self.distance_remaining
    }

    /// Terminal outcome, if any. Death takes precedence over arrival.
    #[must_use]
    pub fn ending(&self) -> Option<Ending> {
        if let Some(cause) = self.cause_of_death {
            return Some(Ending::Died { cause });
        }
        self.reached_destination().then_some(Ending::Arrived)
    }

    #[must_use]
    pub const fn resource(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Food => self.food,
            ResourceKind::Water => self.water,
            ResourceKind::SpareParts => self.spare_parts,
            ResourceKind::TradeGoods => self.trade_goods,
        }
    }

    pub const fn resource_mut(&mut self, kind: ResourceKind) -> &mut i32 {
        match kind {
            ResourceKind::Food => &mut self.food,
            ResourceKind::Water => &mut self.water,
            ResourceKind::SpareParts => &mut self.spare_parts,
            ResourceKind::TradeGoods => &mut self.trade_goods,
        }
    }

    /// Add a signed amount to a resource, flooring at zero.
    pub fn adjust_resource(&mut self, kind: ResourceKind, delta: i32) {
        let slot = self.resource_mut(kind);
        *slot = slot.saturating_add(delta).max(0);
    }

    /// Add a signed amount to health, clamped to `0..=MAX_HEALTH`.
    ///
    /// This never records a cause of death on its own; callers decide what
    /// a zeroed health bar means.
    pub fn adjust_health(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta).clamp(0, MAX_HEALTH);
    }

    /// Add a signed amount to the remaining distance, clamped to the trail.
    pub fn adjust_distance(&mut self, delta: i32) {
        self.distance_remaining = self
            .distance_remaining
            .saturating_add(delta)
            .clamp(0, TRAIL_DISTANCE_KM);
    }

    pub fn adjust(&mut self, stat: Stat, delta: i32) {
        match stat {
            Stat::Health => self.adjust_health(delta),
            Stat::Resource(kind) => self.adjust_resource(kind, delta),
            Stat::Distance => self.adjust_distance(delta),
        }
    }

    /// Record death once. Later calls keep the first cause.
    pub fn mark_death(&mut self, cause: CauseOfDeath) {
        if self.cause_of_death.is_some() {
            return;
        }
        info!(target: LOG_TARGET_STATE, "traveler died of {cause} on day {}", self.day);
        self.health = 0;
        self.cause_of_death = Some(cause);
    }

    /// Food is checked before water, so simultaneous depletion reads as starvation.
    pub fn check_starve_thirst(&mut self) {
        if self.food == 0 {
            self.mark_death(CauseOfDeath::Starvation);
        }
        if self.water == 0 && self.is_alive() {
            self.mark_death(CauseOfDeath::Dehydration);
        }
    }

    /// Give a zeroed health bar with no recorded cause the given cause.
    pub(crate) fn settle_health(&mut self, cause: CauseOfDeath) {
        if self.health == 0 && self.cause_of_death.is_none() {
            self.mark_death(cause);
        }
    }

    pub fn apply_decay(&mut self, table: DecayTable) {
        for &(stat, amount) in table.0 {
            self.adjust(stat, -amount);
        }
        self.settle_health(CauseOfDeath::Exhaustion);
        self.check_starve_thirst();
    }

    /// Cover `distance_delta` kilometres and pay the travel day's upkeep.
    pub fn travel_day(&mut self, distance_delta: i32) {
        let covered = distance_delta.max(0).min(self.distance_remaining);
        self.distance_remaining -= covered;
        self.apply_decay(TRAVEL_DECAY);
        self.day = self.day.saturating_add(1);
        debug!(
            target: LOG_TARGET_STATE,
            "day {} travel: covered {covered} km, {} km left", self.day, self.distance_remaining
        );
    }

    pub fn rest_day(&mut self) {
        self.adjust_health(REST_HEAL);
        self.apply_decay(REST_DECAY);
        self.day = self.day.saturating_add(1);
        debug!(target: LOG_TARGET_STATE, "day {} rest: health {}", self.day, self.health);
    }

    /// Multi-line status block shown before every turn.
    #[must_use]
    pub fn describe(&self) -> String {
        let rule = "-".repeat(32);
        format!(
            "\n{rule} Day {} {rule}\n\
             Health: {:3} | Food: {:3} | Water: {:3} | Spare parts: {:3} | opal: {:3}\n\
             Distance left: {} km\n\
             {}\n",
            self.day,
            self.health,
            self.food,
            self.water,
            self.spare_parts,
            self.trade_goods,
            self.distance_remaining,
            "-".repeat(71),
        )
    }

    /// Rebuild a state from persisted counters. The cause of death is not
    /// persisted, so it is re-derived from the counters themselves.
    pub(crate) fn restore(counters: [i32; 7]) -> Self {
        let [health, food, water, spare_parts, trade_goods, distance_remaining, day] = counters;
        let mut state = Self {
            health,
            food,
            water,
            spare_parts,
            trade_goods,
            distance_remaining,
            day,
            cause_of_death: None,
        };
        state.settle_health(CauseOfDeath::Injuries);
        state.check_starve_thirst();
        state
    }
}
