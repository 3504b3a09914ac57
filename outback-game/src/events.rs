//! Random trail events: the fixed event table, weighted selection, and resolution.
//!
//! Selection takes an explicit uniform draw so boundary behavior can be
//! tested without an RNG. Resolution applies an event's flat deltas first and
//! then hands off to the bespoke breakdown, trade, or find resolver.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BREAKDOWN_WEIGHT, BUSHFIRE_DETOUR_KM, BUSHFIRE_HEALTH, BUSHFIRE_WEIGHT, DUST_STORM_FOOD,
    DUST_STORM_WATER, DUST_STORM_WEIGHT, FOUND_RESOURCES_WEIGHT, LOG_TARGET_EVENTS,
    MERCHANT_WEIGHT, PROBABILITY_SCALE, SNAKE_BITE_HEALTH, SNAKE_BITE_WEIGHT,
};
use crate::finds::{Find, resolve_find_with_rng};
use crate::state::{CauseOfDeath, ResourceKind, Stat, TravelerState};
use crate::trade::{TradeDecider, TradeOutcome, resolve_trade_with_rng};
use crate::vehicle::{BreakdownOutcome, resolve_breakdown_with_rng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SnakeBite,
    DustStorm,
    Bushfire,
    CaravanBreakdown,
    TravellingMerchant,
    FoundResources,
}

/// Bespoke logic run after an event's flat deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubResolver {
    Breakdown,
    Trade,
    FoundResources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailEvent {
    pub kind: EventKind,
    pub name: &'static str,
    pub message: &'static str,
    /// Weight in basis points of [`PROBABILITY_SCALE`].
    pub weight: u32,
    pub effect: &'static [(Stat, i32)],
    pub resolver: Option<SubResolver>,
}

impl TrailEvent {
    #[must_use]
    pub fn probability(&self) -> f64 {
        f64::from(self.weight) / f64::from(PROBABILITY_SCALE)
    }
}

pub static EVENTS: [TrailEvent; 6] = [
    TrailEvent {
        kind: EventKind::SnakeBite,
        name: "Snake Bite",
        message: "A desert taipan snake sinks its fangs into your leg!",
        weight: SNAKE_BITE_WEIGHT,
        effect: &[(Stat::Health, SNAKE_BITE_HEALTH)],
        resolver: None,
    },
    TrailEvent {
        kind: EventKind::DustStorm,
        name: "Dust Storm",
        message: "A huge storm blows up sand and dust, blowing away a few of your supplies.",
        weight: DUST_STORM_WEIGHT,
        effect: &[
            (Stat::Resource(ResourceKind::Water), DUST_STORM_WATER),
            (Stat::Resource(ResourceKind::Food), DUST_STORM_FOOD),
        ],
        resolver: None,
    },
    TrailEvent {
        kind: EventKind::Bushfire,
        name: "Bushfire",
        message: "Flames close in, forcing you to detour.",
        weight: BUSHFIRE_WEIGHT,
        effect: &[
            (Stat::Health, BUSHFIRE_HEALTH),
            (Stat::Distance, BUSHFIRE_DETOUR_KM),
        ],
        resolver: None,
    },
    TrailEvent {
        kind: EventKind::CaravanBreakdown,
        name: "Caravan Breakdown",
        message: "Your caravan axle snaps on a rocky outcrop!",
        weight: BREAKDOWN_WEIGHT,
        effect: &[],
        resolver: Some(SubResolver::Breakdown),
    },
    TrailEvent {
        kind: EventKind::TravellingMerchant,
        name: "Travelling Merchant",
        message: "A travelling merchant appears in your path, offering you a trade.",
        weight: MERCHANT_WEIGHT,
        effect: &[],
        resolver: Some(SubResolver::Trade),
    },
    TrailEvent {
        kind: EventKind::FoundResources,
        name: "Found Resources",
        message: "You discover something useful along the trail.",
        weight: FOUND_RESOURCES_WEIGHT,
        effect: &[],
        resolver: Some(SubResolver::FoundResources),
    },
];

/// Look up a table entry by kind.
#[must_use]
pub fn event(kind: EventKind) -> &'static TrailEvent {
    match kind {
        EventKind::SnakeBite => &EVENTS[0],
        EventKind::DustStorm => &EVENTS[1],
        EventKind::Bushfire => &EVENTS[2],
        EventKind::CaravanBreakdown => &EVENTS[3],
        EventKind::TravellingMerchant => &EVENTS[4],
        EventKind::FoundResources => &EVENTS[5],
    }
}

/// Pick the event for a uniform draw in `[0, 1)`.
///
/// Walks the table accumulating probabilities and returns the first event
/// whose running total exceeds the draw. Draws at or past the table total
/// mean a quiet day.
#[must_use]
pub fn choose_event(draw: f64) -> Option<&'static TrailEvent> {
    let mut cumulative = 0_u32;
    EVENTS.iter().find(|event| {
        cumulative += event.weight;
        draw < f64::from(cumulative) / f64::from(PROBABILITY_SCALE)
    })
}

pub fn roll_event<R: Rng>(rng: &mut R) -> Option<&'static TrailEvent> {
    choose_event(rng.r#gen::<f64>())
}

/// What a sub-resolver did, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubOutcome {
    DeltasOnly,
    Breakdown(BreakdownOutcome),
    Trade(TradeOutcome),
    Found(Find),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReport {
    pub kind: EventKind,
    pub outcome: SubOutcome,
}

impl EventReport {
    #[must_use]
    pub fn event(&self) -> &'static TrailEvent {
        event(self.kind)
    }
}

/// Apply an event to the traveler.
pub fn resolve_event<R, D>(
    state: &mut TravelerState,
    event: &TrailEvent,
    rng: &mut R,
    decider: &mut D,
) -> EventReport
where
    R: Rng,
    D: TradeDecider + ?Sized,
{
    debug!(target: LOG_TARGET_EVENTS, "day {}: {}", state.day, event.name);
    for &(stat, delta) in event.effect {
        state.adjust(stat, delta);
    }
    state.settle_health(CauseOfDeath::Injuries);

    let outcome = match event.resolver {
        Some(SubResolver::Breakdown) => {
            SubOutcome::Breakdown(resolve_breakdown_with_rng(state, rng))
        }
        Some(SubResolver::Trade) => SubOutcome::Trade(resolve_trade_with_rng(state, rng, decider)),
        Some(SubResolver::FoundResources) => SubOutcome::Found(resolve_find_with_rng(state, rng)),
        None => SubOutcome::DeltasOnly,
    };
    state.check_starve_thirst();

    EventReport {
        kind: event.kind,
        outcome,
    }
}
