//! Media kinds classifying catalog items.
//!
//! The enum offers compile-time safety for affinity lookups.
//!
//! # Examples
//! ```
//! use marquee_core::MediaKind;
//!
//! assert_eq!(MediaKind::Movie.as_str(), "movie");
//! assert_eq!(MediaKind::Tv.to_string(), "tv");
//! ```

use thiserror::Error;

/// The movie/TV classification tag attached to or inferred for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// Feature films.
    Movie,
    /// Television series.
    Tv,
}

impl MediaKind {
    /// Return the kind as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use marquee_core::MediaKind;
    ///
    /// assert_eq!(MediaKind::Tv.as_str(), "tv");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown media kind tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown media kind '{0}'")]
pub struct ParseMediaKindError(String);

impl std::str::FromStr for MediaKind {
    type Err = ParseMediaKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" => Ok(Self::Movie),
            "tv" => Ok(Self::Tv),
            _ => Err(ParseMediaKindError(s.to_owned())),
        }
    }
}
