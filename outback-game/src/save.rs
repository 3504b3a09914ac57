//! Save-line codec and file-backed storage.
//!
//! A save is one line of seven comma-separated integers:
//! `health,food,water,spare_parts,trade_goods,distance_remaining,day`.
//! The cause of death is not stored; loading re-derives it from the counters.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::GameStorage;
use crate::constants::{LOG_TARGET_SAVE, MAX_HEALTH, STARTING_DAY, TRAIL_DISTANCE_KM};
use crate::state::TravelerState;

const SAVE_FIELDS: [&str; 7] = [
    "health",
    "food",
    "water",
    "spare_parts",
    "trade_goods",
    "distance_remaining",
    "day",
];
const SAVE_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not access save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed save data: {reason}")]
    Malformed { reason: String },
    #[error("traveler name '{name}' must be non-empty and alphanumeric")]
    InvalidName { name: String },
}

impl SaveError {
    fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Render the state as a save line, trailing newline included.
#[must_use]
pub fn encode_save_line(state: &TravelerState) -> String {
    format!(
        "{},{},{},{},{},{},{}\n",
        state.health,
        state.food,
        state.water,
        state.spare_parts,
        state.trade_goods,
        state.distance_remaining,
        state.day
    )
}

/// Parse the first line of a save and rebuild the traveler.
///
/// # Errors
///
/// Returns [`SaveError::Malformed`] when the line does not hold exactly seven
/// integers or a counter lies outside the range the game can produce.
pub fn decode_save_line(content: &str) -> Result<TravelerState, SaveError> {
    let line = content.lines().next().unwrap_or_default().trim();
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != SAVE_FIELDS.len() {
        return Err(SaveError::malformed(format!(
            "expected {} fields, found {}",
            SAVE_FIELDS.len(),
            parts.len()
        )));
    }

    let mut counters = [0_i32; 7];
    for ((slot, raw), field) in counters.iter_mut().zip(&parts).zip(SAVE_FIELDS) {
        let raw = raw.trim();
        *slot = raw
            .parse()
            .map_err(|_| SaveError::malformed(format!("{field} '{raw}' is not an integer")))?;
        if *slot < 0 {
            return Err(SaveError::malformed(format!("{field} cannot be negative")));
        }
    }

    let [health, .., distance_remaining, day] = counters;
    if health > MAX_HEALTH {
        return Err(SaveError::malformed(format!(
            "health {health} exceeds {MAX_HEALTH}"
        )));
    }
    if distance_remaining > TRAIL_DISTANCE_KM {
        return Err(SaveError::malformed(format!(
            "distance_remaining {distance_remaining} exceeds {TRAIL_DISTANCE_KM}"
        )));
    }
    if day < STARTING_DAY {
        return Err(SaveError::malformed(format!("day {day} precedes day {STARTING_DAY}")));
    }

    Ok(TravelerState::restore(counters))
}

/// Save slots are named after the traveler, so only plain alphanumeric
/// names are accepted.
#[must_use]
pub fn is_valid_traveler_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_alphanumeric)
}

/// Stores one `<name>.txt` save file per traveler inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the save file for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::InvalidName`] for names that are empty or not alphanumeric.
    pub fn save_path(&self, name: &str) -> Result<PathBuf, SaveError> {
        if !is_valid_traveler_name(name) {
            warn!(target: LOG_TARGET_SAVE, "rejected save name {name:?}");
            return Err(SaveError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(format!("{name}.{SAVE_EXTENSION}")))
    }
}

impl GameStorage for FileStorage {
    type Error = SaveError;

    fn save_game(&self, save_name: &str, state: &TravelerState) -> Result<(), Self::Error> {
        let path = self.save_path(save_name)?;
        fs::write(&path, encode_save_line(state)).map_err(|source| SaveError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(target: LOG_TARGET_SAVE, "saved day {} to {}", state.day, path.display());
        Ok(())
    }

    fn load_game(&self, save_name: &str) -> Result<Option<TravelerState>, Self::Error> {
        let path = self.save_path(save_name)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SaveError::Io { path, source }),
        };
        let state = decode_save_line(&content)?;
        debug!(target: LOG_TARGET_SAVE, "loaded day {} from {}", state.day, path.display());
        Ok(Some(state))
    }

    fn delete_save(&self, save_name: &str) -> Result<(), Self::Error> {
        let path = self.save_path(save_name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SaveError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::Loadout;
    use crate::state::CauseOfDeath;

    #[test]
    fn encodes_fields_in_fixed_order() {
        let mut state = TravelerState::new(Loadout {
            food: 120,
            water: 200,
            spare_parts: 6,
            trade_goods: 30,
        });
        state.health = 75;
        state.distance_remaining = 612;
        state.day = 8;
        assert_eq!(encode_save_line(&state), "75,120,200,6,30,612,8\n");
    }

    #[test]
    fn decode_tolerates_padding_and_extra_lines() {
        let state = decode_save_line(" 75, 120,200 ,6,30,612,8\r\nignored\n").unwrap();
        assert_eq!(state.health, 75);
        assert_eq!(state.water, 200);
        assert_eq!(state.day, 8);
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        let err = decode_save_line("75,120,200,6,30,612\n").unwrap_err();
        assert!(matches!(err, SaveError::Malformed { .. }));
        assert!(err.to_string().contains("expected 7 fields, found 6"));
    }

    #[test]
    fn decode_rejects_non_integers_and_out_of_range() {
        assert!(decode_save_line("75,lots,200,6,30,612,8").is_err());
        assert!(decode_save_line("75,-1,200,6,30,612,8").is_err());
        assert!(decode_save_line("101,1,200,6,30,612,8").is_err());
        assert!(decode_save_line("75,1,200,6,30,851,8").is_err());
        assert!(decode_save_line("75,1,200,6,30,612,0").is_err());
        assert!(decode_save_line("").is_err());
    }

    #[test]
    fn day_counter_saturates_after_loading_the_last_day() {
        let mut state = decode_save_line("50,100,100,0,0,500,2147483647\n").unwrap();
        state.rest_day();
        assert_eq!(state.day, i32::MAX);
        state.travel_day(20);
        assert_eq!(state.day, i32::MAX);
        assert_eq!(state.distance_remaining, 480);
    }

    #[test]
    fn decode_rechecks_starvation() {
        let state = decode_save_line("80,0,10,0,0,300,12\n").unwrap();
        assert_eq!(state.health, 0);
        assert_eq!(state.cause_of_death(), Some(CauseOfDeath::Starvation));
    }

    #[test]
    fn names_must_be_alphanumeric() {
        assert!(is_valid_traveler_name("Matilda2"));
        assert!(!is_valid_traveler_name(""));
        assert!(!is_valid_traveler_name("../etc"));
        assert!(!is_valid_traveler_name("two words"));

        let storage = FileStorage::new("saves");
        assert_eq!(
            storage.save_path("Matilda").unwrap(),
            PathBuf::from("saves").join("Matilda.txt")
        );
        assert!(matches!(
            storage.save_path("a/b"),
            Err(SaveError::InvalidName { .. })
        ));
    }
}
