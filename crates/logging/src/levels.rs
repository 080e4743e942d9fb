//! crates/logging/src/levels.rs
//! Severity levels and the compile-time active threshold.

use std::fmt;
use std::str::FromStr;

/// Severity of a log call, and the threshold a build is compiled with.
///
/// Levels are totally ordered `None < Error < Info < Debug`. A call at level
/// `L` is emitted when the build's [`ACTIVE_LEVEL`] is at least `L`.
/// [`Level::None`] only makes sense as a threshold: calls made at it are never
/// emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Nothing is logged.
    None = 0,
    /// Failures that need attention.
    Error = 1,
    /// Progress and state changes.
    Info = 2,
    /// Developer diagnostics.
    Debug = 3,
}

impl Level {
    /// Every level, from least to most verbose.
    pub const ALL: [Self; 4] = [Self::None, Self::Error, Self::Info, Self::Debug];

    /// Returns the lowercase label of the level.
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Error.as_str(), "error");
    /// assert_eq!(Level::Debug.as_str(), "debug");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Reports whether a call at this level is emitted under `threshold`.
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert!(Level::Error.enabled_under(Level::Info));
    /// assert!(Level::Info.enabled_under(Level::Info));
    /// assert!(!Level::Debug.enabled_under(Level::Info));
    /// assert!(!Level::None.enabled_under(Level::Debug));
    /// ```
    #[must_use]
    pub const fn enabled_under(self, threshold: Self) -> bool {
        !matches!(self, Self::None) && (self as u8) <= (threshold as u8)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised log level `{input}` (expected none, error, info or debug)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "error" | "err" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "debug" | "dbg" => Ok(Self::Debug),
            _ => Err(ParseLevelError {
                input: input.to_owned(),
            }),
        }
    }
}

/// Threshold this build was compiled with.
///
/// Selected through the `level-none`, `level-error`, `level-info` and
/// `level-debug` features. The most restrictive selected level wins; with no
/// level selected every call is emitted.
pub const ACTIVE_LEVEL: Level = if cfg!(feature = "level-none") {
    Level::None
} else if cfg!(feature = "level-error") {
    Level::Error
} else if cfg!(feature = "level-info") {
    Level::Info
} else {
    Level::Debug
};

/// Reports whether a call at `level` is emitted in this build.
///
/// The log macros evaluate this in a `const` item, so disabled calls are
/// removed before code generation.
#[must_use]
pub const fn enabled(level: Level) -> bool {
    level.enabled_under(ACTIVE_LEVEL)
}
