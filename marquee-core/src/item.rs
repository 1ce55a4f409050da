//! Candidate items supplied by the catalog collaborator.

use crate::MediaKind;

/// Genre identifier as assigned by the catalog.
pub type GenreId = u32;

/// A candidate item eligible for personalised ranking.
///
/// Fields mirror the catalog payload: movies carry `title` and
/// `release_date`, TV shows carry `name` and `first_air_date`, and every
/// field beyond `id` may be absent. The item is owned by the caller; the
/// engine only reads it and returns new values.
///
/// # Examples
/// ```
/// use marquee_core::{CatalogItem, MediaKind};
///
/// let item = CatalogItem::new(603)
///     .with_title("The Matrix")
///     .with_genre_ids([28, 878])
///     .with_popularity(83.2);
/// assert_eq!(item.media_kind(), MediaKind::Movie);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    /// Catalog identifier, unique within a media kind.
    pub id: u64,
    /// Explicit media kind tag, when the catalog provides one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub media_type: Option<MediaKind>,
    /// Movie title; its presence marks an untagged item as a movie.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    /// TV show name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Genre identifiers in catalog order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub genre_ids: Vec<GenreId>,
    /// Catalog popularity signal, non-negative.
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: Option<f64>,
    /// Average vote on the 0–10 scale.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: Option<f64>,
    /// Movie release date as an ISO `YYYY-MM-DD` string.
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<String>,
    /// TV first-air date as an ISO `YYYY-MM-DD` string.
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_air_date: Option<String>,
}

impl CatalogItem {
    /// Construct an item with only an identifier; every other field is
    /// absent.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            media_type: None,
            title: None,
            name: None,
            genre_ids: Vec::new(),
            popularity: None,
            vote_average: None,
            release_date: None,
            first_air_date: None,
        }
    }

    /// Set the explicit media kind tag.
    #[must_use]
    pub const fn with_media_type(mut self, kind: MediaKind) -> Self {
        self.media_type = Some(kind);
        self
    }

    /// Set the movie title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the TV show name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the genre identifiers.
    #[must_use]
    pub fn with_genre_ids(mut self, genre_ids: impl IntoIterator<Item = GenreId>) -> Self {
        self.genre_ids = genre_ids.into_iter().collect();
        self
    }

    /// Set the popularity signal.
    #[must_use]
    pub const fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Set the average vote.
    #[must_use]
    pub const fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = Some(vote_average);
        self
    }

    /// Set the release date string.
    #[must_use]
    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    /// Set the first-air date string.
    #[must_use]
    pub fn with_first_air_date(mut self, date: impl Into<String>) -> Self {
        self.first_air_date = Some(date.into());
        self
    }

    /// Normalise the item's media kind.
    ///
    /// An explicit `media_type` tag wins. Untagged items carrying a `title`
    /// are movies; everything else is TV. Downstream code relies on this
    /// single derivation and never re-infers the kind.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::{CatalogItem, MediaKind};
    ///
    /// assert_eq!(
    ///     CatalogItem::new(1).with_name("Dark").media_kind(),
    ///     MediaKind::Tv,
    /// );
    /// ```
    #[must_use]
    pub const fn media_kind(&self) -> MediaKind {
        match self.media_type {
            Some(kind) => kind,
            None => {
                if self.title.is_some() {
                    MediaKind::Movie
                } else {
                    MediaKind::Tv
                }
            }
        }
    }

    /// Key identifying the item within a candidate pool.
    ///
    /// Identifiers are only unique within a media kind, so the key pairs
    /// the id with the normalised kind.
    #[must_use]
    pub const fn dedup_key(&self) -> (u64, MediaKind) {
        (self.id, self.media_kind())
    }

    /// The date string used for recency, when one is present.
    ///
    /// Prefers `release_date` over `first_air_date`, matching the order the
    /// catalog populates them.
    #[must_use]
    pub fn date_hint(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .or(self.first_air_date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CatalogItem::new(1).with_media_type(MediaKind::Tv).with_title("X"), MediaKind::Tv)]
    #[case(CatalogItem::new(1).with_title("X"), MediaKind::Movie)]
    #[case(CatalogItem::new(1).with_name("X"), MediaKind::Tv)]
    #[case(CatalogItem::new(1), MediaKind::Tv)]
    fn media_kind_prefers_explicit_tag(#[case] item: CatalogItem, #[case] expected: MediaKind) {
        assert_eq!(item.media_kind(), expected);
    }

    #[test]
    fn date_hint_prefers_release_date() {
        let item = CatalogItem::new(1)
            .with_release_date("2024-05-01")
            .with_first_air_date("2020-01-01");
        assert_eq!(item.date_hint(), Some("2024-05-01"));

        let item = CatalogItem::new(2).with_first_air_date("2020-01-01");
        assert_eq!(item.date_hint(), Some("2020-01-01"));

        assert_eq!(CatalogItem::new(3).date_hint(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_payload_deserialises_with_defaults() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":42,"name":"A","genre_ids":[18]}"#).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.media_kind(), MediaKind::Tv);
        assert_eq!(item.genre_ids, vec![18]);
        assert!(item.popularity.is_none());
    }
}
