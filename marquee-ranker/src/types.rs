//! Public configuration and output types for shortlist ranking.
#![forbid(unsafe_code)]

use marquee_core::CatalogItem;
use serde::Serialize;
use thiserror::Error;

/// Errors raised when configuring the ranker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    /// Provided weights were unusable.
    #[error("rank weights must be finite and non-negative")]
    InvalidWeights,
}

/// Tunable multipliers applied to the ranking signals.
///
/// The defaults reproduce the production blend: popularity dampened to a
/// third, the 0–10 vote scale stretched by 2.5, five points per recorded
/// media-kind interaction, four per recorded genre interaction, and a flat
/// twenty-point bonus for recent releases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankWeights {
    /// Multiplier applied to the catalog popularity signal.
    pub popularity: f64,
    /// Multiplier applied to the average vote.
    pub rating: f64,
    /// Points per recorded interaction with the item's media kind.
    pub media_affinity: f64,
    /// Points per recorded interaction with each of the item's genres.
    pub genre_affinity: f64,
    /// Flat bonus for items inside the recency window.
    pub recency_bonus: f64,
}

impl RankWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidWeights`] when any multiplier is not
    /// finite or is negative.
    pub fn validate(self) -> Result<Self, RankError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(RankError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values()
    }

    const fn has_finite_values(self) -> bool {
        self.popularity.is_finite()
            && self.rating.is_finite()
            && self.media_affinity.is_finite()
            && self.genre_affinity.is_finite()
            && self.recency_bonus.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.popularity >= 0.0_f64
            && self.rating >= 0.0_f64
            && self.media_affinity >= 0.0_f64
            && self.genre_affinity >= 0.0_f64
            && self.recency_bonus >= 0.0_f64
    }
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            popularity: 0.3_f64,
            rating: 2.5_f64,
            media_affinity: 5.0_f64,
            genre_affinity: 4.0_f64,
            recency_bonus: 20.0_f64,
        }
    }
}

/// A candidate item together with its derived ranking score.
///
/// Serialises with the item's fields flattened next to `ai_score`, so the
/// presentation layer receives the familiar catalog shape plus the score.
/// Exists only as ranking output and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    /// The unmodified candidate.
    #[serde(flatten)]
    pub item: CatalogItem,
    /// Derived relevance score; higher sorts earlier.
    pub ai_score: f64,
}
