// War type value object

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Preparation lengths, in seconds, a clan can pick for a friendly war.
/// Compared against the length modulo one day, so a full-day preparation
/// reads as zero and is never friendly.
const FRIENDLY_PREPARATION_SECONDS: [i64; 11] = [
    5 * 60,
    15 * 60,
    30 * 60,
    60 * 60,
    2 * 60 * 60,
    4 * 60 * 60,
    6 * 60 * 60,
    8 * 60 * 60,
    12 * 60 * 60,
    16 * 60 * 60,
    20 * 60 * 60,
];

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarType {
    /// Regular matchmade war.
    Random,
    Friendly,
    Cwl,
}

impl WarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarType::Random => "random",
            WarType::Friendly => "friendly",
            WarType::Cwl => "cwl",
        }
    }

    /// Returns `None` when the war carries no start time to measure the
    /// preparation length from.
    pub fn classify(
        war_tag: Option<&str>,
        preparation_start: DateTime<Utc>,
        start: Option<DateTime<Utc>>,
    ) -> Option<Self> {
        if war_tag.is_some_and(|tag| !tag.trim().is_empty()) {
            return Some(WarType::Cwl);
        }
        let start = start?;
        let preparation = (start - preparation_start)
            .num_seconds()
            .rem_euclid(SECONDS_PER_DAY);
        if FRIENDLY_PREPARATION_SECONDS.contains(&preparation) {
            Some(WarType::Friendly)
        } else {
            Some(WarType::Random)
        }
    }
}
