//! High-level session binding a seeded RNG to one traveler's state.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{LOG_TARGET_EVENTS, TRAVEL_KM_MAX, TRAVEL_KM_MIN};
use crate::events::{EventReport, resolve_event, roll_event};
use crate::result::Ending;
use crate::state::TravelerState;
use crate::trade::TradeDecider;

/// Which day-consuming action was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DayKind {
    Travel { km: i32 },
    Rest,
}

/// Everything that happened during one resolved action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOutcome {
    pub kind: DayKind,
    pub event: Option<EventReport>,
    pub ending: Option<Ending>,
}

/// One traveler's run. Sessions are independent, so several can live in
/// the same process.
#[derive(Debug, Clone)]
pub struct TrailSession {
    state: TravelerState,
    seed: u64,
    rng: ChaCha20Rng,
}

impl TrailSession {
    #[must_use]
    pub fn new(state: TravelerState, seed: u64) -> Self {
        Self {
            state,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Travel one day: cover 20 to 50 km, pay the upkeep, and, if the
    /// traveler survived the day, roll for a trail event.
    pub fn travel<D>(&mut self, decider: &mut D) -> DayOutcome
    where
        D: TradeDecider + ?Sized,
    {
        let km = self.travel_leg();
        let event = self.trail_event(decider);
        self.day_outcome(DayKind::Travel { km }, event)
    }

    /// Travel with an explicit distance draw; only the event roll uses the
    /// session RNG.
    pub fn travel_with_draws<D>(&mut self, km: i32, decider: &mut D) -> DayOutcome
    where
        D: TradeDecider + ?Sized,
    {
        self.state.travel_day(km);
        let event = self.trail_event(decider);
        self.day_outcome(DayKind::Travel { km }, event)
    }

    /// First half of a travel day: draw the distance and pay the upkeep.
    /// Returns the kilometres drawn for the day.
    pub fn travel_leg(&mut self) -> i32 {
        let km = self.rng.gen_range(TRAVEL_KM_MIN..=TRAVEL_KM_MAX);
        self.state.travel_day(km);
        km
    }

    /// Second half of a travel day: roll and resolve a trail event.
    /// Nothing happens to a traveler who died on the road.
    pub fn trail_event<D>(&mut self, decider: &mut D) -> Option<EventReport>
    where
        D: TradeDecider + ?Sized,
    {
        if !self.state.is_alive() {
            debug!(
                target: LOG_TARGET_EVENTS,
                "no event roll for a traveler who died on the road"
            );
            return None;
        }
        let event = roll_event(&mut self.rng)?;
        Some(resolve_event(&mut self.state, event, &mut self.rng, decider))
    }

    pub fn rest(&mut self) -> DayOutcome {
        self.state.rest_day();
        self.day_outcome(DayKind::Rest, None)
    }

    fn day_outcome(&self, kind: DayKind, event: Option<EventReport>) -> DayOutcome {
        DayOutcome {
            kind,
            event,
            ending: self.state.ending(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &TravelerState {
        &self.state
    }

    /// Status block for the current turn.
    #[must_use]
    pub fn describe(&self) -> String {
        self.state.describe()
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Consume the session, returning the underlying traveler state.
    #[must_use]
    pub fn into_state(self) -> TravelerState {
        self.state
    }
}
