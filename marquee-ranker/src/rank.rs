//! Shortlist ranking over a candidate pool.
//!
//! The pipeline is fixed: normalise each candidate's media kind once,
//! collapse duplicate `(id, kind)` keys keeping the first occurrence,
//! score the survivors, sort stably by descending score, and truncate.
//! The function is total: any slice of candidates and any profile produce
//! a shortlist without error.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use marquee_core::{AffinityProfile, CatalogItem, MediaKind};

use crate::types::{RankError, RankWeights, ScoredItem};

/// Number of items a shortlist holds unless configured otherwise.
pub const DEFAULT_SHORTLIST_LEN: usize = 8;

/// Items dated fewer than this many days before the evaluation instant
/// earn the recency bonus.
pub const RECENCY_WINDOW_DAYS: i64 = 90;

/// Date assumed for candidates whose date string is absent or malformed.
///
/// Far enough in the past that such candidates never earn the recency
/// bonus; an unreadable date must not look like a new release.
fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parse a candidate's effective date, degrading to [`fallback_date`].
fn effective_date(item: &CatalogItem) -> NaiveDate {
    item.date_hint()
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .unwrap_or_else(fallback_date)
}

/// Rank candidate pools into personalised shortlists.
///
/// The ranker reads candidates and the profile; it never mutates either.
/// Construct with [`Ranker::default`] for the production weights and
/// shortlist length, or inject custom [`RankWeights`] via [`Ranker::new`].
///
/// # Examples
/// ```
/// use marquee_core::{AffinityProfile, CatalogItem, MediaKind};
/// use marquee_ranker::Ranker;
///
/// let profile = AffinityProfile::new().with_media(MediaKind::Tv, 3);
/// let pool = vec![
///     CatalogItem::new(1).with_name("Dark").with_genre_ids([18]),
///     CatalogItem::new(2).with_title("Heat").with_popularity(40.0),
/// ];
///
/// let shortlist = Ranker::default().rank(&pool, &profile);
///
/// assert_eq!(shortlist.len(), 2);
/// assert_eq!(shortlist.first().map(|scored| scored.item.id), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: RankWeights,
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            weights: RankWeights::default(),
            limit: DEFAULT_SHORTLIST_LEN,
        }
    }
}

impl Ranker {
    /// Construct a ranker with custom weights and the default shortlist
    /// length.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidWeights`] when the weights fail
    /// [`RankWeights::validate`].
    pub fn new(weights: RankWeights) -> Result<Self, RankError> {
        Ok(Self {
            weights: weights.validate()?,
            limit: DEFAULT_SHORTLIST_LEN,
        })
    }

    /// Set the shortlist length while returning `self` for chaining.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The configured shortlist length.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Rank candidates against the profile at the current instant.
    #[must_use]
    pub fn rank(&self, items: &[CatalogItem], profile: &AffinityProfile) -> Vec<ScoredItem> {
        self.rank_at(items, profile, Utc::now())
    }

    /// Rank candidates against the profile at an explicit evaluation
    /// instant.
    ///
    /// Deterministic core of [`Ranker::rank`]; the instant only feeds the
    /// recency signal.
    #[must_use]
    pub fn rank_at(
        &self,
        items: &[CatalogItem],
        profile: &AffinityProfile,
        now: DateTime<Utc>,
    ) -> Vec<ScoredItem> {
        let today = now.date_naive();
        let mut seen = HashSet::with_capacity(items.len());
        let mut shortlist = Vec::with_capacity(items.len());
        let mut duplicates = 0_usize;

        for item in items {
            let kind = item.media_kind();
            if !seen.insert((item.id, kind)) {
                duplicates = duplicates.saturating_add(1);
                continue;
            }
            shortlist.push(ScoredItem {
                item: item.clone(),
                ai_score: self.score_with_kind(item, kind, profile, today),
            });
        }
        if duplicates > 0 {
            debug!("dropped {duplicates} duplicate candidates before scoring");
        }

        // Stable sort: candidates tied on score keep their post-dedup order.
        shortlist.sort_by(|a, b| b.ai_score.total_cmp(&a.ai_score));
        shortlist.truncate(self.limit);
        shortlist
    }

    /// Score a single candidate against the profile at an explicit
    /// evaluation instant.
    #[must_use]
    pub fn score_at(
        &self,
        item: &CatalogItem,
        profile: &AffinityProfile,
        now: DateTime<Utc>,
    ) -> f64 {
        self.score_with_kind(item, item.media_kind(), profile, now.date_naive())
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "relevance scoring sums weighted floating-point signals over bounded counts"
    )]
    fn score_with_kind(
        &self,
        item: &CatalogItem,
        kind: MediaKind,
        profile: &AffinityProfile,
        today: NaiveDate,
    ) -> f64 {
        let mut score = self.weights.popularity * item.popularity.unwrap_or(0.0);
        score += self.weights.rating * item.vote_average.unwrap_or(0.0);
        score += self.weights.media_affinity * profile.media_count(kind) as f64;

        let genre_hits = item
            .genre_ids
            .iter()
            .map(|genre| profile.genre_count(*genre))
            .fold(0_u64, u64::saturating_add);
        score += self.weights.genre_affinity * genre_hits as f64;

        let days_old = today.signed_duration_since(effective_date(item)).num_days();
        if days_old < RECENCY_WINDOW_DAYS {
            score += self.weights.recency_bonus;
        }
        score
    }
}
