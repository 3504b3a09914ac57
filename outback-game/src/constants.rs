//! Centralized balance and tuning constants for Outback Trail game logic.
//!
//! These values define the deterministic math for the core simulation.
//! Keeping them together ensures that gameplay can only be adjusted via
//! code changes reviewed in version control.

// Trail ---------------------------------------------------------------------
/// Total length of the trail in kilometres; also the starting distance.
pub const TRAIL_DISTANCE_KM: i32 = 850;
pub const TRAVEL_KM_MIN: i32 = 20;
pub const TRAVEL_KM_MAX: i32 = 50;

// Traveler ------------------------------------------------------------------
pub const MAX_HEALTH: i32 = 100;
pub const STARTING_DAY: i32 = 1;
pub const REST_HEAL: i32 = 10;

// Daily consumption ---------------------------------------------------------
pub const TRAVEL_FOOD_DECAY: i32 = 5;
pub const TRAVEL_WATER_DECAY: i32 = 8;
pub const TRAVEL_HEALTH_DECAY: i32 = 5;
pub const REST_FOOD_DECAY: i32 = 3;
pub const REST_WATER_DECAY: i32 = 4;

// Loadout -------------------------------------------------------------------
pub const KNAPSACK_CAPACITY: i64 = 500;

// Events --------------------------------------------------------------------
/// Event weights are stored in basis points so boundary draws compare exactly.
pub const PROBABILITY_SCALE: u32 = 10_000;
pub const SNAKE_BITE_WEIGHT: u32 = 1_000;
pub const DUST_STORM_WEIGHT: u32 = 1_200;
pub const BUSHFIRE_WEIGHT: u32 = 500;
pub const BREAKDOWN_WEIGHT: u32 = 800;
pub const MERCHANT_WEIGHT: u32 = 1_500;
pub const FOUND_RESOURCES_WEIGHT: u32 = 1_500;

pub const SNAKE_BITE_HEALTH: i32 = -25;
pub const DUST_STORM_WATER: i32 = -12;
pub const DUST_STORM_FOOD: i32 = -6;
pub const BUSHFIRE_HEALTH: i32 = -10;
pub const BUSHFIRE_DETOUR_KM: i32 = 30;

// Breakdown -----------------------------------------------------------------
pub const REPAIR_COST_MIN: i32 = 1;
pub const REPAIR_COST_MAX: i32 = 3;

// Trade ---------------------------------------------------------------------
pub const TRADE_GOODS_GIVE_MIN: i32 = 10;
pub const TRADE_GOODS_GIVE_MAX: i32 = 50;
pub const TRADE_SPARES_GIVE_MIN: i32 = 2;
pub const TRADE_SPARES_GIVE_MAX: i32 = 10;
pub const TRADE_PROVISIONS_GIVE_MIN: i32 = 5;
pub const TRADE_PROVISIONS_GIVE_MAX: i32 = 20;
pub const TRADE_FACTOR_MIN: f64 = 1.2;
pub const TRADE_FACTOR_MAX: f64 = 1.6;

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_TARGET_STATE: &str = "outback::state";
pub(crate) const LOG_TARGET_EVENTS: &str = "outback::events";
pub(crate) const LOG_TARGET_SAVE: &str = "outback::save";

/// Static help screen shown for the `I`/`H` commands.
pub const HELP_TEXT: &str = "\n================= GAME INFORMATION ========================\n\
GOAL: Travel 1000 km across the outback without dying.\n\n\
RESOURCES\n  \
Food     : consumed daily (5 when travelling, 3 when resting).\n  \
Water    : consumed daily (8 when travelling, 4 when resting).\n  \
Spare parts : used to fix caravan breakdowns and they are tradeable.\n  \
opal     : used in trades; no daily decay.\n  \
Health   : decays by 5 each travel day, lost from events; rest restores 10.\n\n\
ACTIONS\n  \
Travel (T)  : move 20 to 50 km, consume daily food & water, random event possible.\n  \
Rest (R)    : +10 health, lesser food & water loss.\n  \
Save (S)    : save game progress.\n  \
Quit (Q)    : save and exit.\n  \
Info/Help (I/H) : show this help screen.\n\n\
EVENTS\n  \
Snake Bite / Bushfire  : lose health.\n  \
Dust Storm             : lose food & water.\n  \
Caravan Breakdown      : costs 1 to 3 spare parts or death.\n  \
Travelling Merchant    : random trades involving any resource.\n  \
Found Resources        : randomly gain supplies or health.\n\
===============================================================\n";
