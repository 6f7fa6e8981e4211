// Identifier value objects

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player tag in canonical form: `#` followed by uppercase alphanumerics,
/// with the letter `O` folded into the digit `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTag(String);

impl PlayerTag {
    pub fn parse(raw: &str) -> Option<Self> {
        let body: String = raw
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| if c == 'O' { '0' } else { c })
            .collect();
        if body.is_empty() {
            return None;
        }
        Some(Self(format!("#{}", body)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deduplication key for one real-world war.
///
/// Built from the participant tags in sorted order and the preparation start
/// truncated to whole seconds, so the same war stored from either side, or
/// re-ingested later, maps to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WarIdentity(String);

impl WarIdentity {
    pub fn new(clan_tag: &str, opponent_tag: &str, preparation_start: DateTime<Utc>) -> Self {
        let (first, second) = if clan_tag <= opponent_tag {
            (clan_tag, opponent_tag)
        } else {
            (opponent_tag, clan_tag)
        };
        Self(format!(
            "{}-{}-{}",
            first,
            second,
            preparation_start.timestamp()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WarIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
