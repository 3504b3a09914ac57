use std::fs;
use std::path::PathBuf;

use outback_game::{
    CauseOfDeath, FileStorage, GameEngine, GameStorage, Loadout, SaveError, TradeOffer,
};

fn temp_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "outback-save-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn loadout() -> Loadout {
    Loadout {
        food: 120,
        water: 180,
        spare_parts: 10,
        trade_goods: 40,
    }
}

#[test]
fn file_storage_writes_the_single_line_format() {
    let dir = temp_dir("format");
    let engine = GameEngine::new(FileStorage::new(&dir));
    let mut session = engine.create_session(loadout(), 42);
    session.rest();
    engine.save_session("Banjo", &session).unwrap();

    let content = fs::read_to_string(dir.join("Banjo.txt")).unwrap();
    assert_eq!(content, "100,117,176,10,40,850,2\n");
}

#[test]
fn file_storage_round_trips_a_played_session() {
    let dir = temp_dir("roundtrip");
    let engine = GameEngine::new(FileStorage::new(&dir));
    let mut session = engine.create_session(loadout(), 7);
    let mut decline = |_: &TradeOffer| false;
    for _ in 0..4 {
        if session.is_over() {
            break;
        }
        session.travel(&mut decline);
    }
    engine.save_session("Clancy", &session).unwrap();

    let resumed = engine
        .resume_session("Clancy", 8)
        .unwrap()
        .expect("save exists");
    if session.state().is_alive() {
        assert_eq!(resumed.state(), session.state());
    } else {
        assert_eq!(resumed.state().health, 0);
    }
}

#[test]
fn missing_save_means_new_game() {
    let dir = temp_dir("missing");
    let storage = FileStorage::new(&dir);
    assert!(storage.load_game("Nobody").unwrap().is_none());
    storage.delete_save("Nobody").unwrap();
}

#[test]
fn malformed_save_is_a_fatal_read_error() {
    let dir = temp_dir("malformed");
    fs::write(dir.join("Broken.txt"), "100,50,50\n").unwrap();
    let storage = FileStorage::new(&dir);
    let err = storage.load_game("Broken").unwrap_err();
    assert!(matches!(err, SaveError::Malformed { .. }));
}

#[test]
fn loading_a_dry_save_records_dehydration() {
    let dir = temp_dir("dry");
    fs::write(dir.join("Dusty.txt"), "70,25,0,1,0,500,14\n").unwrap();
    let state = FileStorage::new(&dir)
        .load_game("Dusty")
        .unwrap()
        .expect("save exists");
    assert_eq!(state.health, 0);
    assert_eq!(state.cause_of_death(), Some(CauseOfDeath::Dehydration));
}

#[test]
fn unwritable_directory_surfaces_io_error() {
    let dir = temp_dir("io").join("does-not-exist");
    let engine = GameEngine::new(FileStorage::new(&dir));
    let session = engine.create_session(loadout(), 1);
    let err = engine.save_session("Ghost", &session).unwrap_err();
    assert!(matches!(err, SaveError::Io { .. }));
    assert_eq!(session.state().day, 1);
}

#[test]
fn invalid_names_never_touch_the_disk() {
    let dir = temp_dir("names");
    let storage = FileStorage::new(&dir);
    let engine = GameEngine::new(storage.clone());
    let session = engine.create_session(loadout(), 1);
    assert!(matches!(
        engine.save_session("../escape", &session),
        Err(SaveError::InvalidName { .. })
    ));
    assert_eq!(fs::read_dir(storage.dir()).unwrap().count(), 0);
}
