//! Facade crate for the Marquee personalisation engine.
//!
//! This crate re-exports the core domain types, the ranking and tracking
//! components, and the optional JSON-backed profile store behind feature
//! flags.

#![forbid(unsafe_code)]

pub use marquee_core::{
    AffinityProfile, CatalogItem, GenreId, MediaKind, ParseMediaKindError, ProfileStore,
};

pub use marquee_ranker::{
    DEFAULT_SHORTLIST_LEN, InteractionTracker, RECENCY_WINDOW_DAYS, RankError, RankWeights,
    Ranker, ScoredItem,
};

#[cfg(feature = "store-json")]
pub use marquee_core::{JsonProfileStore, JsonProfileStoreError};
