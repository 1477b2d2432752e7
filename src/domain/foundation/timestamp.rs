//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Milliseconds elapsed from this timestamp until now, floored at zero.
    pub fn elapsed_millis(&self) -> u64 {
        let millis = Utc::now().signed_duration_since(self.0).num_milliseconds();
        u64::try_from(millis).unwrap_or(0)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn elapsed_counts_from_the_past() {
        let past = Timestamp::from_datetime(Utc::now() - chrono::Duration::seconds(2));
        assert!(past.elapsed_millis() >= 2000);
    }

    #[test]
    fn elapsed_is_never_negative() {
        let future = Timestamp::from_datetime(Utc::now() + chrono::Duration::hours(1));
        assert_eq!(future.elapsed_millis(), 0);
    }

    #[test]
    fn timestamps_order_chronologically() {
        let earlier = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let later = Timestamp::now();
        assert!(earlier < later);
    }
}
