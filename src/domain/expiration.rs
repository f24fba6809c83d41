//! Expiration policy: symbolic durations to absolute instants.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a new mapping stays resolvable.
///
/// Months are exactly 30 days and years exactly 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpirationOption {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    OneWeek,
    #[serde(rename = "30d")]
    OneMonth,
    #[serde(rename = "365d")]
    OneYear,
    #[serde(rename = "never")]
    Indefinite,
}

impl ExpirationOption {
    pub const ALL: [ExpirationOption; 7] = [
        Self::OneHour,
        Self::SixHours,
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::OneYear,
        Self::Indefinite,
    ];

    /// The window length, or `None` for [`ExpirationOption::Indefinite`].
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::OneHour => Some(Duration::hours(1)),
            Self::SixHours => Some(Duration::hours(6)),
            Self::OneDay => Some(Duration::days(1)),
            Self::OneWeek => Some(Duration::weeks(1)),
            Self::OneMonth => Some(Duration::days(30)),
            Self::OneYear => Some(Duration::days(365)),
            Self::Indefinite => None,
        }
    }

    /// Wire name as accepted in request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::SixHours => "6h",
            Self::OneDay => "24h",
            Self::OneWeek => "7d",
            Self::OneMonth => "30d",
            Self::OneYear => "365d",
            Self::Indefinite => "never",
        }
    }
}

impl fmt::Display for ExpirationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts an option into the absolute expiry instant, relative to `now`.
///
/// Returns `None` for "never expires".
pub fn resolve_expiration(option: ExpirationOption, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    option.duration().map(|window| now + window)
}
