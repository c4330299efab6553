use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constant::{AVATAR_BIGGER_TOKEN, AVATAR_NORMAL_TOKEN, DAYS_PER_MONTH, DAYS_PER_YEAR};

// The wire format also carries a legacy timestamp form alongside RFC 3339.
const LEGACY_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Most recent post of a candidate. Absent when the account never posted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LastStatus {
    pub created_at: String,
}

/// A social account under review, exactly as `/remove_candidates` returns it.
///
/// `id` is the removal key; `screen_name` and `name` are display-only and not
/// guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoveCandidate {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub screen_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub friends_count: u64,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub statuses_count: u64,
    #[serde(default)]
    pub status: Option<LastStatus>,
    #[serde(default)]
    pub protected: bool,
}

impl RemoveCandidate {
    /// Time of the most recent post. Missing status or an unparseable
    /// timestamp both read as "never posted".
    pub fn last_post_time(&self) -> Option<DateTime<Utc>> {
        parse_post_time(&self.status.as_ref()?.created_at)
    }

    /// Avatar reference upgraded from the "normal" to the "bigger" size
    /// rendition. Only the first size token is rewritten.
    pub fn bigger_profile_image(&self) -> String {
        self.profile_image_url.replacen(AVATAR_NORMAL_TOKEN, AVATAR_BIGGER_TOKEN, 1)
    }

    /// Coarse age of the last post: whole years past 365 days, whole months
    /// past 30 days, whole days otherwise. `None` when there is no last post;
    /// callers omit the field entirely rather than showing zero.
    pub fn recency_label(&self, now: DateTime<Utc>) -> Option<String> {
        let last_post = self.last_post_time()?;
        let days = (now - last_post).num_days();

        let label = if days > DAYS_PER_YEAR {
            format!("{} years", days / DAYS_PER_YEAR)
        } else if days > DAYS_PER_MONTH {
            format!("{} months", days / DAYS_PER_MONTH)
        } else {
            format!("{} days", days.max(0))
        };
        Some(label)
    }
}

fn parse_post_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, LEGACY_TIMESTAMP_FORMAT))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
