//! Outback Trail Game Engine
//!
//! Platform-agnostic core game logic for the Outback Trail survival crossing.
//! Every random choice is either an explicit parameter or drawn from an RNG
//! handed in by the caller, so the rules can be replayed exactly.

pub mod constants;
pub mod events;
pub mod finds;
pub mod knapsack;
pub mod numbers;
pub mod result;
pub mod save;
pub mod session;
pub mod state;
pub mod trade;
pub mod vehicle;

// Re-export commonly used types
pub use constants::HELP_TEXT;
pub use events::{
    EVENTS, EventKind, EventReport, SubOutcome, TrailEvent, choose_event, resolve_event,
    roll_event,
};
pub use finds::{FIND_TABLE, Find, FindOption, apply_find};
pub use knapsack::{Loadout, LoadoutError, parse_quantity, validate_loadout};
pub use result::{Ending, ResultSummary, result_summary};
pub use save::{FileStorage, SaveError, decode_save_line, encode_save_line, is_valid_traveler_name};
pub use session::{DayKind, DayOutcome, TrailSession};
pub use state::{
    CauseOfDeath, DecayTable, REST_DECAY, ResourceKind, Stat, TRAVEL_DECAY, TravelerState,
};
pub use trade::{TradeDecider, TradeGood, TradeOffer, TradeOutcome, TradeResolution, apply_trade};
pub use vehicle::{BreakdownOutcome, resolve_breakdown};

/// Trait for abstracting save/load operations.
/// Platform-specific implementations should provide this.
pub trait GameStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save traveler state
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be saved.
    fn save_game(&self, save_name: &str, state: &TravelerState) -> Result<(), Self::Error>;

    /// Load traveler state, `None` when no save exists under that name
    ///
    /// # Errors
    ///
    /// Returns an error if the save exists but cannot be read or parsed.
    fn load_game(&self, save_name: &str) -> Result<Option<TravelerState>, Self::Error>;

    /// Delete saved game
    ///
    /// # Errors
    ///
    /// Returns an error if the save cannot be deleted.
    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error>;
}

/// Main game engine for starting, resuming and saving sessions
pub struct GameEngine<S>
where
    S: GameStorage,
{
    storage: S,
}

impl<S> GameEngine<S>
where
    S: GameStorage,
{
    /// Create a new game engine with the provided storage
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Start a fresh run at the trail head
    #[must_use]
    pub fn create_session(&self, loadout: Loadout, seed: u64) -> TrailSession {
        TrailSession::new(TravelerState::new(loadout), seed)
    }

    /// Resume the run saved under `save_name`, if there is one
    ///
    /// # Errors
    ///
    /// Returns an error if the save exists but cannot be loaded.
    pub fn resume_session(
        &self,
        save_name: &str,
        seed: u64,
    ) -> Result<Option<TrailSession>, S::Error> {
        Ok(self
            .storage
            .load_game(save_name)?
            .map(|state| TrailSession::new(state, seed)))
    }

    /// Save a session's traveler state
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be saved.
    pub fn save_session(&self, save_name: &str, session: &TrailSession) -> Result<(), S::Error> {
        self.storage.save_game(save_name, session.state())
    }
}
