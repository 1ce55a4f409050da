//! Behaviour tests verifying affinity profile counts and round-trips.

use std::str::FromStr;

use rstest::rstest;
use marquee_core::{AffinityProfile, MediaKind};

#[rstest]
#[case(r#"{"media":{"tv":3},"genres":{}}"#, "tv", 3)]
#[case(r#"{"media":{"tv":3},"genres":{}}"#, "movie", 0)]
#[case(r#"{"media":{"movie":1,"tv":2},"genres":{}}"#, "movie", 1)]
#[case(r#"{"media":{},"genres":{}}"#, "tv", 0)]
fn query_media_counts(#[case] payload: &str, #[case] kind: &str, #[case] expected: u64) {
    let profile: AffinityProfile = serde_json::from_str(payload).expect("valid profile payload");
    let kind = MediaKind::from_str(kind).expect("valid media kind under test");
    assert_eq!(profile.media_count(kind), expected);
}

#[rstest]
#[case(r#"{"media":{},"genres":{"18":2,"80":5}}"#, 18, 2)]
#[case(r#"{"media":{},"genres":{"18":2,"80":5}}"#, 80, 5)]
#[case(r#"{"media":{},"genres":{"18":2}}"#, 99, 0)]
fn query_genre_counts(#[case] payload: &str, #[case] genre: u32, #[case] expected: u64) {
    let profile: AffinityProfile = serde_json::from_str(payload).expect("valid profile payload");
    assert_eq!(profile.genre_count(genre), expected);
}

#[test]
fn recorded_interactions_survive_a_round_trip() {
    let mut profile = AffinityProfile::new();
    profile.record(MediaKind::Tv, &[18, 80]);
    profile.record(MediaKind::Tv, &[18]);
    profile.record(MediaKind::Movie, &[]);

    let json = serde_json::to_string(&profile).expect("serialise profile");
    let restored: AffinityProfile = serde_json::from_str(&json).expect("parse profile");

    assert_eq!(restored, profile);
    assert_eq!(restored.media_count(MediaKind::Tv), 2);
    assert_eq!(restored.genre_count(18), 2);
    assert_eq!(restored.genre_count(80), 1);
}

#[test]
fn malformed_profile_payload_is_rejected() {
    assert!(serde_json::from_str::<AffinityProfile>(r#"{"media":[1,2]}"#).is_err());
}
