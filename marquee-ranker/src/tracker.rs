//! Interaction tracking that feeds the ranking feedback loop.

use marquee_core::{CatalogItem, ProfileStore};

/// Folds "visitor opened this item" events into the affinity profile.
///
/// The tracker owns an injected [`ProfileStore`] and performs one
/// synchronous load → increment → save cycle per event. Because the store
/// degrades rather than fails, recording is non-failing from the caller's
/// perspective; at worst the update lives only for the session.
///
/// The presentation layer reports an item exactly once per committed
/// "open details" action, not on hover or impression.
///
/// # Examples
/// ```
/// use marquee_core::{test_support::MemoryProfileStore, CatalogItem, MediaKind, ProfileStore};
/// use marquee_ranker::InteractionTracker;
///
/// let tracker = InteractionTracker::new(MemoryProfileStore::default());
/// tracker.record(&CatalogItem::new(1).with_name("Dark").with_genre_ids([18, 80]));
///
/// let profile = tracker.store().load();
/// assert_eq!(profile.media_count(MediaKind::Tv), 1);
/// assert_eq!(profile.genre_count(18), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InteractionTracker<S> {
    store: S,
}

impl<S: ProfileStore> InteractionTracker<S> {
    /// Construct a tracker over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the tracker and return its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Record one opened item: its media kind once and each listed genre
    /// once.
    pub fn record(&self, item: &CatalogItem) {
        let mut profile = self.store.load();
        profile.record(item.media_kind(), &item.genre_ids);
        self.store.save(&profile);
    }
}
