//! Document index load status.
//!
//! The status only decides which empty-state message the list shows and what
//! the header says about freshness. A failed load is never reported to the
//! user as an error: the list simply stays empty, or keeps showing the index
//! from an earlier successful load.

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Where the document index currently comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No response has arrived yet.
    #[default]
    Pending,
    /// An index was loaded successfully.
    Loaded {
        /// Unix timestamp of the load.
        at: i64,
    },
    /// The only load attempt so far failed.
    Failed,
}

impl LoadStatus {
    /// Status after a failed load: an earlier successful load still stands.
    #[must_use]
    pub const fn after_failure(self) -> Self {
        match self {
            Self::Loaded { .. } => self,
            Self::Pending | Self::Failed => Self::Failed,
        }
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Human readable age of the loaded index, relative to `now`.
    #[must_use]
    pub fn loaded_ago(self, now: i64) -> Option<String> {
        match self {
            Self::Loaded { at } => Some(time_ago(at, now)),
            Self::Pending | Self::Failed => None,
        }
    }
}

/// Formats the time between `then` and `now` as `just now`, `5m ago`, `3h ago`
/// or `2d ago`.
#[must_use]
pub fn time_ago(then: i64, now: i64) -> String {
    let diff = now - then;

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}
