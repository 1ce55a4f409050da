//! Affinity profiles: per-visitor interaction counts keyed by media kind
//! and genre.
//!
//! Counts only ever grow; there is no decay or reset. The profile is the
//! single persisted entity in the engine and round-trips exactly through
//! the store.

use std::collections::BTreeMap;

use crate::{GenreId, MediaKind};

/// Accumulated interaction counts used as relevance signals.
///
/// # Examples
/// ```
/// use marquee_core::{AffinityProfile, MediaKind};
///
/// let mut profile = AffinityProfile::new();
/// profile.record(MediaKind::Tv, &[18, 80]);
/// assert_eq!(profile.media_count(MediaKind::Tv), 1);
/// assert_eq!(profile.genre_count(18), 1);
/// assert_eq!(profile.genre_count(99), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffinityProfile {
    /// Interaction counts per media kind.
    media: BTreeMap<MediaKind, u64>,
    /// Interaction counts per genre identifier.
    genres: BTreeMap<GenreId, u64>,
}

impl AffinityProfile {
    /// Construct an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the interaction count for a media kind, zero when absent.
    #[must_use]
    pub fn media_count(&self, kind: MediaKind) -> u64 {
        self.media.get(&kind).copied().unwrap_or(0)
    }

    /// Return the interaction count for a genre, zero when absent.
    #[must_use]
    pub fn genre_count(&self, genre: GenreId) -> u64 {
        self.genres.get(&genre).copied().unwrap_or(0)
    }

    /// Report whether any interaction has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.media.is_empty() && self.genres.is_empty()
    }

    /// Count one interaction with the given media kind.
    pub fn record_media(&mut self, kind: MediaKind) {
        let count = self.media.entry(kind).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Count one interaction with the given genre.
    pub fn record_genre(&mut self, genre: GenreId) {
        let count = self.genres.entry(genre).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Count one opened item: its media kind once and each genre once.
    pub fn record(&mut self, kind: MediaKind, genres: &[GenreId]) {
        self.record_media(kind);
        for genre in genres {
            self.record_genre(*genre);
        }
    }

    /// Set a media kind count while returning `self` for chaining.
    #[must_use]
    pub fn with_media(mut self, kind: MediaKind, count: u64) -> Self {
        self.media.insert(kind, count);
        self
    }

    /// Set a genre count while returning `self` for chaining.
    #[must_use]
    pub fn with_genre(mut self, genre: GenreId, count: u64) -> Self {
        self.genres.insert(genre, count);
        self
    }
}
