use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WarHitError;
use crate::utils::parse_war_timestamp;

/// A game API timestamp that keeps its original text for output while
/// exposing the parsed instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WarTimestamp {
    raw: String,
    instant: DateTime<Utc>,
}

impl WarTimestamp {
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<String> for WarTimestamp {
    type Error = WarHitError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        let instant = parse_war_timestamp(&raw)?;
        Ok(Self { raw, instant })
    }
}

impl From<WarTimestamp> for String {
    fn from(value: WarTimestamp) -> Self {
        value.raw
    }
}
