//! Registration record stored per user.

use chrono::{DateTime, Utc};
use nexus_common::format_timestamp;
use serde::{Deserialize, Serialize};

/// A single user's registration entry.
///
/// Records are created on registration and only ever replaced wholesale by
/// a re-registration; nothing mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    /// Display name chosen at registration time.
    pub username: String,
    /// Registration timestamp, `YYYY-MM-DD HH:MM:SS UTC`.
    pub registered_at: String,
}

impl RegistrationRecord {
    /// Builds a record for `username` registered at `now`.
    #[must_use]
    pub fn new(username: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            registered_at: format_timestamp(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_formats_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let record = RegistrationRecord::new("Ada", now);
        assert_eq!(record.username, "Ada");
        assert_eq!(record.registered_at, "2024-06-01 09:30:00 UTC");
    }

    #[test]
    fn record_serializes_with_expected_keys() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let json = serde_json::to_value(RegistrationRecord::new("Ada", now)).unwrap();
        assert_eq!(json["username"], "Ada");
        assert_eq!(json["registered_at"], "2024-06-01 09:30:00 UTC");
    }
}
