use outback_game::constants::{MAX_HEALTH, TRAIL_DISTANCE_KM};
use outback_game::{
    DayKind, Ending, Loadout, TradeOffer, TrailSession, TravelerState, decode_save_line,
    encode_save_line,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SEEDS: u64 = 200;
const MAX_TURNS: usize = 400;

fn random_loadout(rng: &mut ChaCha20Rng) -> Loadout {
    let food = rng.gen_range(0..=250);
    let water = rng.gen_range(0..=(500 - food));
    let spare_parts = rng.gen_range(0..=(500 - food - water).min(20));
    let trade_goods = 500 - food - water - spare_parts;
    Loadout {
        food,
        water,
        spare_parts,
        trade_goods,
    }
}

fn assert_invariants(state: &TravelerState, context: &str) {
    assert!(
        (0..=MAX_HEALTH).contains(&state.health),
        "{context}: health {}",
        state.health
    );
    for value in [state.food, state.water, state.spare_parts, state.trade_goods] {
        assert!(value >= 0, "{context}: negative resource in {state:?}");
    }
    assert!(
        (0..=TRAIL_DISTANCE_KM).contains(&state.distance_remaining),
        "{context}: distance {}",
        state.distance_remaining
    );
    assert_eq!(
        state.cause_of_death().is_some(),
        state.health == 0,
        "{context}: cause/health mismatch in {state:?}"
    );
}

#[test]
fn random_runs_preserve_state_invariants() {
    for seed in 0..SEEDS {
        let mut policy = ChaCha20Rng::seed_from_u64(seed ^ 0x5EED);
        let loadout = random_loadout(&mut policy);
        let mut session = TrailSession::new(TravelerState::new(loadout), seed);
        let mut accept = |_: &TradeOffer| true;

        let mut first_cause = None;
        for turn in 0..MAX_TURNS {
            if session.is_over() {
                break;
            }
            let day_before = session.state().day;
            let distance_before = session.state().distance_remaining;

            let outcome = if policy.gen_bool(0.8) {
                session.travel(&mut accept)
            } else {
                session.rest()
            };

            let context = format!("seed {seed} turn {turn}");
            let state = session.state();
            assert_invariants(state, &context);
            assert_eq!(state.day, day_before + 1, "{context}: day must advance by one");

            if let DayKind::Travel { km } = outcome.kind {
                assert!((20..=50).contains(&km), "{context}: km {km}");
                if outcome.event.is_none() {
                    assert_eq!(
                        state.distance_remaining,
                        distance_before - km.min(distance_before),
                        "{context}: quiet travel day distance"
                    );
                }
            }

            if let Some(cause) = first_cause {
                assert_eq!(state.cause_of_death(), Some(cause), "{context}: cause changed");
            }
            first_cause = state.cause_of_death();
            assert_eq!(outcome.ending, state.ending(), "{context}: ending mismatch");
        }
    }
}

#[test]
fn every_reachable_state_survives_the_save_line() {
    for seed in 0..50 {
        let mut policy = ChaCha20Rng::seed_from_u64(seed);
        let loadout = random_loadout(&mut policy);
        let mut session = TrailSession::new(TravelerState::new(loadout), seed);
        let mut decline = |_: &TradeOffer| false;

        while !session.is_over() && session.state().day < 60 {
            session.travel(&mut decline);
            let state = session.state();
            let restored = decode_save_line(&encode_save_line(state)).unwrap();
            assert_eq!(restored.health, state.health, "seed {seed}");
            assert_eq!(restored.day, state.day, "seed {seed}");
            assert_eq!(restored.is_alive(), state.is_alive(), "seed {seed}");
            if state.is_alive() {
                assert_eq!(&restored, state, "seed {seed}");
            }
        }
    }
}

#[test]
fn well_supplied_travelers_can_finish_the_trail() {
    let mut arrivals = 0;
    for seed in 0..100 {
        let loadout = Loadout {
            food: 180,
            water: 280,
            spare_parts: 20,
            trade_goods: 20,
        };
        let mut session = TrailSession::new(TravelerState::new(loadout), seed);
        let mut decline = |_: &TradeOffer| false;
        while !session.is_over() {
            if session.state().health <= 30 {
                session.rest();
            } else {
                session.travel(&mut decline);
            }
        }
        if session.state().ending() == Some(Ending::Arrived) {
            arrivals += 1;
        }
    }
    assert!(arrivals > 0, "no traveler out of 100 reached the end");
}
