//! Core domain types for the Marquee personalisation engine.
//!
//! The crate models the three nouns the engine revolves around: the
//! [`CatalogItem`] candidates handed over by the catalog collaborator, the
//! [`MediaKind`] tag classifying them, and the persisted
//! [`AffinityProfile`] of per-visitor interaction counts. The
//! [`ProfileStore`] trait is the persistence seam; the JSON-file-backed
//! store lives behind the `store-json` feature.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod item;
mod media;
mod profile;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use item::{CatalogItem, GenreId};
pub use media::{MediaKind, ParseMediaKindError};
pub use profile::AffinityProfile;
pub use store::ProfileStore;

#[cfg(feature = "store-json")]
pub use store::{JsonProfileStore, JsonProfileStoreError};
