//! Persistence seam for the affinity profile.
//!
//! The `ProfileStore` trait defines the whole-object read/write contract
//! the rest of the engine depends on: `load` is total and `save` is
//! best-effort, so callers never handle storage errors. Concrete stores
//! keep a fallible inner API for diagnostics and wrap it here.

use crate::AffinityProfile;

#[cfg(feature = "store-json")]
mod json;

#[cfg(feature = "store-json")]
pub use json::{JsonProfileStore, JsonProfileStoreError};

/// Whole-object persistence for the affinity profile.
///
/// The profile has a single logical owner on one execution context, so
/// implementations perform a plain read or write with no locking. Failures
/// degrade: `load` answers an empty profile, `save` drops the write. Both
/// directions must round-trip a saved profile exactly.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use marquee_core::{AffinityProfile, MediaKind, ProfileStore};
///
/// struct SlotStore {
///     slot: RefCell<Option<AffinityProfile>>,
/// }
///
/// impl ProfileStore for SlotStore {
///     fn load(&self) -> AffinityProfile {
///         self.slot.borrow().clone().unwrap_or_default()
///     }
///
///     fn save(&self, profile: &AffinityProfile) {
///         *self.slot.borrow_mut() = Some(profile.clone());
///     }
/// }
///
/// let store = SlotStore { slot: RefCell::new(None) };
/// assert!(store.load().is_empty());
///
/// let mut profile = store.load();
/// profile.record(MediaKind::Tv, &[18]);
/// store.save(&profile);
/// assert_eq!(store.load().media_count(MediaKind::Tv), 1);
/// ```
pub trait ProfileStore {
    /// Read the persisted profile.
    ///
    /// Empty, unavailable, or corrupt storage yields a fresh empty
    /// profile; this method never fails.
    fn load(&self) -> AffinityProfile;

    /// Serialise and write the profile.
    ///
    /// Write failures are absorbed; the caller's in-memory profile remains
    /// authoritative for the rest of the session.
    fn save(&self, profile: &AffinityProfile);
}
