//! Records mirrored from the backend.
//!
//! Every type here crosses the server/browser boundary through server functions, so
//! all of them are `Serialize + Deserialize` and carry no server-only types. Backend
//! payloads use GORM casing for the bookkeeping columns (`ID`, `CreatedAt`, ...);
//! those names are accepted as aliases when decoding.

mod impact;
mod item;
mod seed;
mod user;

pub use impact::{AffectedUser, DeleteImpact, ImpactCounts};
pub use item::Item;
pub use seed::{SeedResult, SeedSource, ValidationResult};
pub use user::{AdminUser, RoleChange, User, UserSummary};

use chrono::{DateTime, Utc};

/// `2024-03-01 15:00 UTC`, or `-` when unset.
pub fn display_timestamp(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_timestamp() {
        let ts = DateTime::parse_from_rfc3339("2024-03-01T10:00:00-05:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(display_timestamp(Some(ts)), "2024-03-01 15:00 UTC");
        assert_eq!(display_timestamp(None), "-");
    }
}
