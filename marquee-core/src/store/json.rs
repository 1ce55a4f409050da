//! JSON-file-backed profile store.
//!
//! One named slot: a UTF-8 path holding the serde_json serialisation of
//! the profile. The stand-in for the browser original's local-storage key.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use log::warn;
use thiserror::Error;

use crate::{AffinityProfile, ProfileStore};

/// Errors raised by the fallible half of [`JsonProfileStore`].
///
/// These never cross the [`ProfileStore`] surface; the trait impl absorbs
/// them and degrades.
#[derive(Debug, Error)]
pub enum JsonProfileStoreError {
    /// Reading the slot file failed for a reason other than absence.
    #[error("failed to read profile slot at {path}")]
    Read {
        /// Slot file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// The slot file held malformed JSON or an unexpected shape.
    #[error("failed to parse profile slot at {path}")]
    Parse {
        /// Slot file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the profile failed.
    #[error("failed to serialise profile for slot at {path}")]
    Serialise {
        /// Slot file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Creating the slot's parent directory failed.
    #[error("failed to create parent directory {path}")]
    CreateParent {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
    /// Writing the slot file failed.
    #[error("failed to write profile slot at {path}")]
    Write {
        /// Slot file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: io::Error,
    },
}

/// Profile store persisting to a single JSON file.
///
/// `open` performs no I/O; the slot is read on every `load` and replaced
/// on every `save`, mirroring the whole-object discipline of the trait.
///
/// # Examples
/// ```no_run
/// use marquee_core::{JsonProfileStore, MediaKind, ProfileStore};
///
/// let store = JsonProfileStore::open("state/ai_prefs.json");
/// let mut profile = store.load();
/// profile.record(MediaKind::Movie, &[28]);
/// store.save(&profile);
/// ```
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: Utf8PathBuf,
}

impl JsonProfileStore {
    /// Create a store bound to the given slot path.
    #[must_use]
    pub fn open(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Read the slot, distinguishing an absent slot from a broken one.
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    ///
    /// # Errors
    /// Returns [`JsonProfileStoreError`] when the file cannot be read or
    /// its payload does not parse as a profile.
    pub fn try_load(&self) -> Result<Option<AffinityProfile>, JsonProfileStoreError> {
        let contents = match std::fs::read_to_string(self.path.as_std_path()) {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(JsonProfileStoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let profile =
            serde_json::from_str(&contents).map_err(|source| JsonProfileStoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(profile))
    }

    /// Serialise the profile and replace the slot, creating missing parent
    /// directories.
    ///
    /// # Errors
    /// Returns [`JsonProfileStoreError`] when serialisation or any
    /// filesystem step fails.
    pub fn try_save(&self, profile: &AffinityProfile) -> Result<(), JsonProfileStoreError> {
        let payload =
            serde_json::to_string(profile).map_err(|source| JsonProfileStoreError::Serialise {
                path: self.path.clone(),
                source,
            })?;
        marquee_fs::ensure_parent_dir(&self.path).map_err(|source| {
            JsonProfileStoreError::CreateParent {
                path: self
                    .path
                    .parent()
                    .map_or_else(|| Utf8Path::new(".").to_path_buf(), Utf8Path::to_path_buf),
                source,
            }
        })?;
        std::fs::write(self.path.as_std_path(), payload).map_err(|source| {
            JsonProfileStoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> AffinityProfile {
        match self.try_load() {
            Ok(Some(profile)) => profile,
            Ok(None) => AffinityProfile::new(),
            Err(error) => {
                warn!("falling back to an empty affinity profile: {error}");
                AffinityProfile::new()
            }
        }
    }

    fn save(&self, profile: &AffinityProfile) {
        if let Err(error) = self.try_save(profile) {
            warn!("dropping affinity profile write: {error}");
        }
    }
}
