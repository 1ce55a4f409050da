//! Personalisation for the Marquee discovery front end.
//!
//! The crate provides two complementary capabilities:
//! - **Interaction tracking** folds each "visitor opened this item" event
//!   into the persisted [`AffinityProfile`](marquee_core::AffinityProfile)
//!   through an injected [`ProfileStore`](marquee_core::ProfileStore),
//!   closing the feedback loop for future rankings.
//! - **Shortlist ranking** scores a candidate pool against the profile —
//!   popularity, rating, media-kind affinity, genre affinity, and a
//!   recency bonus — then returns a deduplicated, stably sorted shortlist
//!   truncated for the hero carousel.
//!
//! # Examples
//! ```
//! use marquee_core::{AffinityProfile, CatalogItem, MediaKind};
//! use marquee_ranker::Ranker;
//!
//! let profile = AffinityProfile::new().with_media(MediaKind::Tv, 3);
//! let pool = vec![
//!     CatalogItem::new(1).with_name("Dark").with_genre_ids([18]),
//!     CatalogItem::new(2).with_title("Heat").with_popularity(40.0),
//! ];
//!
//! let shortlist = Ranker::default().rank(&pool, &profile);
//! assert_eq!(shortlist.first().map(|scored| scored.item.id), Some(1));
//! ```

#![forbid(unsafe_code)]

mod rank;
mod tracker;
mod types;

pub use rank::{DEFAULT_SHORTLIST_LEN, RECENCY_WINDOW_DAYS, Ranker};
pub use tracker::InteractionTracker;
pub use types::{RankError, RankWeights, ScoredItem};
