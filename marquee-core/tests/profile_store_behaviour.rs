//! Behavioural coverage for the JSON profile store's degrade contract.

#![expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use marquee_core::{AffinityProfile, JsonProfileStore, MediaKind, ProfileStore};

#[fixture]
fn slot() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path =
        Utf8PathBuf::from_path_buf(dir.path().join("ai_prefs.json")).expect("utf8 slot path");
    (dir, path)
}

#[rstest]
fn profile_persists_across_store_instances(#[from(slot)] (_dir, path): (TempDir, Utf8PathBuf)) {
    let first_session = JsonProfileStore::open(path.clone());
    let mut profile = first_session.load();
    profile.record(MediaKind::Tv, &[18]);
    first_session.save(&profile);

    // A later session binds a new store to the same slot.
    let second_session = JsonProfileStore::open(path);
    let restored = second_session.load();
    assert_eq!(restored.media_count(MediaKind::Tv), 1);
    assert_eq!(restored.genre_count(18), 1);
}

#[rstest]
fn load_modify_save_loop_accumulates(#[from(slot)] (_dir, path): (TempDir, Utf8PathBuf)) {
    let store = JsonProfileStore::open(path);
    for _ in 0..3 {
        let mut profile = store.load();
        profile.record(MediaKind::Movie, &[28]);
        store.save(&profile);
    }
    assert_eq!(store.load().media_count(MediaKind::Movie), 3);
    assert_eq!(store.load().genre_count(28), 3);
}

#[rstest]
fn corrupt_slot_never_reaches_the_caller(#[from(slot)] (_dir, path): (TempDir, Utf8PathBuf)) {
    std::fs::write(path.as_std_path(), "{\"media\":42}").expect("write corrupt slot");
    let store = JsonProfileStore::open(path);

    // The trait surface degrades to an empty profile and stays writable.
    let profile = store.load();
    assert!(profile.is_empty());
    store.save(&AffinityProfile::new().with_genre(18, 1));
    assert_eq!(store.load().genre_count(18), 1);
}
