//! Trade offer generation and resolution.

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    LOG_TARGET_EVENTS, TRADE_FACTOR_MAX, TRADE_FACTOR_MIN, TRADE_GOODS_GIVE_MAX,
    TRADE_GOODS_GIVE_MIN, TRADE_PROVISIONS_GIVE_MAX, TRADE_PROVISIONS_GIVE_MIN,
    TRADE_SPARES_GIVE_MAX, TRADE_SPARES_GIVE_MIN,
};
use crate::numbers::scale_i32;
use crate::state::{ResourceKind, TravelerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeGood {
    pub kind: ResourceKind,
    pub amount: i32,
}

/// A merchant's offer, seen from the traveler's side: `give` leaves the
/// caravan, `receive` joins it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    pub give: TradeGood,
    pub receive: TradeGood,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeResolution {
    Accepted,
    Declined,
    Unaffordable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOutcome {
    pub offer: TradeOffer,
    pub resolution: TradeResolution,
}

/// Decides whether the traveler takes a merchant's offer.
pub trait TradeDecider {
    fn decide(&mut self, offer: &TradeOffer) -> bool;
}

impl<F> TradeDecider for F
where
    F: FnMut(&TradeOffer) -> bool,
{
    fn decide(&mut self, offer: &TradeOffer) -> bool {
        self(offer)
    }
}

impl TradeOffer {
    /// Build an offer from explicit draws. Returns `None` when both sides
    /// name the same resource.
    #[must_use]
    pub fn priced(
        give: ResourceKind,
        give_amount: i32,
        receive: ResourceKind,
        factor: f64,
    ) -> Option<Self> {
        if give == receive {
            return None;
        }
        Some(Self {
            give: TradeGood {
                kind: give,
                amount: give_amount,
            },
            receive: TradeGood {
                kind: receive,
                amount: scale_i32(give_amount, factor),
            },
        })
    }

    /// Draw a fresh offer: two distinct resources, a give amount from the
    /// give side's range, and a markup factor for the receive side.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let kinds = ResourceKind::ALL.len();
        let give_index = rng.gen_range(0..kinds);
        // A non-zero offset never lands back on the give side.
        let receive_index = (give_index + rng.gen_range(1..kinds)) % kinds;
        let give_kind = ResourceKind::ALL[give_index];
        let receive_kind = ResourceKind::ALL[receive_index];

        let (min, max) = give_bounds(give_kind);
        let give_amount = rng.gen_range(min..=max);
        let factor = rng.gen_range(TRADE_FACTOR_MIN..=TRADE_FACTOR_MAX);

        Self {
            give: TradeGood {
                kind: give_kind,
                amount: give_amount,
            },
            receive: TradeGood {
                kind: receive_kind,
                amount: scale_i32(give_amount, factor),
            },
        }
    }
}

#[must_use]
pub const fn give_bounds(kind: ResourceKind) -> (i32, i32) {
    match kind {
        ResourceKind::TradeGoods => (TRADE_GOODS_GIVE_MIN, TRADE_GOODS_GIVE_MAX),
        ResourceKind::SpareParts => (TRADE_SPARES_GIVE_MIN, TRADE_SPARES_GIVE_MAX),
        ResourceKind::Food | ResourceKind::Water => {
            (TRADE_PROVISIONS_GIVE_MIN, TRADE_PROVISIONS_GIVE_MAX)
        }
    }
}

/// Settle an offer once the traveler has answered it.
pub fn apply_trade(state: &mut TravelerState, offer: TradeOffer, accepted: bool) -> TradeOutcome {
    let resolution = if !accepted {
        TradeResolution::Declined
    } else if state.resource(offer.give.kind) < offer.give.amount {
        TradeResolution::Unaffordable
    } else {
        state.adjust_resource(offer.give.kind, -offer.give.amount);
        state.adjust_resource(offer.receive.kind, offer.receive.amount);
        info!(
            target: LOG_TARGET_EVENTS,
            "traded {} {} for {} {}",
            offer.give.amount,
            offer.give.kind,
            offer.receive.amount,
            offer.receive.kind
        );
        state.check_starve_thirst();
        TradeResolution::Accepted
    };
    TradeOutcome { offer, resolution }
}

/// Roll an offer, ask the decider, and settle it.
pub fn resolve_trade_with_rng<R, D>(
    state: &mut TravelerState,
    rng: &mut R,
    decider: &mut D,
) -> TradeOutcome
where
    R: Rng,
    D: TradeDecider + ?Sized,
{
    let offer = TradeOffer::roll(rng);
    let accepted = decider.decide(&offer);
    apply_trade(state, offer, accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::Loadout;
    use crate::state::CauseOfDeath;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand_chacha::ChaCha20Rng;

    fn stocked() -> TravelerState {
        TravelerState::new(Loadout {
            food: 20,
            water: 30,
            spare_parts: 4,
            trade_goods: 40,
        })
    }

    #[test]
    fn priced_rejects_same_kind() {
        assert!(TradeOffer::priced(ResourceKind::Food, 5, ResourceKind::Food, 1.5).is_none());
    }

    #[test]
    fn declined_offer_changes_nothing() {
        let mut state = stocked();
        let offer =
            TradeOffer::priced(ResourceKind::Food, 10, ResourceKind::Water, 1.5).unwrap();
        let outcome = apply_trade(&mut state, offer, false);
        assert_eq!(outcome.resolution, TradeResolution::Declined);
        assert_eq!(state, stocked());
    }

    #[test]
    fn unaffordable_offer_changes_nothing() {
        let mut state = stocked();
        let offer =
            TradeOffer::priced(ResourceKind::SpareParts, 5, ResourceKind::Food, 1.2).unwrap();
        let outcome = apply_trade(&mut state, offer, true);
        assert_eq!(outcome.resolution, TradeResolution::Unaffordable);
        assert_eq!(state, stocked());
    }

    #[test]
    fn trading_away_all_water_is_fatal() {
        let mut state = stocked();
        let offer =
            TradeOffer::priced(ResourceKind::Water, 30, ResourceKind::TradeGoods, 1.4).unwrap();
        let outcome = apply_trade(&mut state, offer, true);
        assert_eq!(outcome.resolution, TradeResolution::Accepted);
        assert_eq!(state.trade_goods, 82);
        assert_eq!(state.cause_of_death(), Some(CauseOfDeath::Dehydration));
    }

    #[test]
    fn rolled_offers_respect_ranges() {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        for _ in 0..500 {
            let offer = TradeOffer::roll(&mut rng);
            assert_ne!(offer.give.kind, offer.receive.kind);
            let (min, max) = give_bounds(offer.give.kind);
            assert!((min..=max).contains(&offer.give.amount));
            let low = scale_i32(offer.give.amount, TRADE_FACTOR_MIN);
            let high = scale_i32(offer.give.amount, TRADE_FACTOR_MAX);
            assert!((low..=high).contains(&offer.receive.amount));
        }
    }

    #[test]
    fn rolled_offers_reach_every_pairing() {
        let mut rng = ChaCha20Rng::seed_from_u64(77);
        let mut pairs = std::collections::HashSet::new();
        for _ in 0..1_000 {
            let offer = TradeOffer::roll(&mut rng);
            pairs.insert((offer.give.kind, offer.receive.kind));
        }
        assert_eq!(pairs.len(), 12);
    }

    #[test]
    fn lowest_draws_trade_food_for_water() {
        let offer = TradeOffer::roll(&mut StepRng::new(0, 0));
        assert_eq!(offer.give.kind, ResourceKind::Food);
        assert_eq!(offer.receive.kind, ResourceKind::Water);
        assert_eq!(offer.give.amount, TRADE_PROVISIONS_GIVE_MIN);
    }

    #[test]
    fn decider_sees_the_offer_it_settles() {
        let mut state = stocked();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let mut seen = None;
        let outcome = resolve_trade_with_rng(&mut state, &mut rng, &mut |offer: &TradeOffer| {
            seen = Some(*offer);
            false
        });
        assert_eq!(seen, Some(outcome.offer));
        assert_eq!(outcome.resolution, TradeResolution::Declined);
    }
}
