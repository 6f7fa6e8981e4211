// War-hit output entities
// Redacted shapes emitted by the war-hit endpoint, built fresh per request

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::WarHitError;
use crate::value_objects::{WarIdentity, WarType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanClan {
    pub tag: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanWar {
    pub clan: CleanClan,
    pub opponent: CleanClan,
    pub preparation_start_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(rename = "tag", skip_serializing_if = "Option::is_none")]
    pub war_tag: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(rename = "type")]
    pub war_type: Option<WarType>,
}

/// A member's descriptive stats without any nested attack data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanMember {
    pub tag: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanEvent {
    #[serde(rename = "attackerTag")]
    pub attacker_tag: String,
    #[serde(rename = "defenderTag")]
    pub defender_tag: String,
    pub order: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub fresh: bool,
    pub attack_order: u32,
    pub defender: CleanMember,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarHit {
    pub war_data: CleanWar,
    pub member_data: CleanMember,
    pub attacks: Vec<CleanEvent>,
    pub defenses: Vec<CleanEvent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExtractionResult {
    pub items: Vec<WarHit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedWar {
    pub war_id: WarIdentity,
    pub reason: WarHitError,
}

/// Pipeline output plus what was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct WarHitReport {
    pub result: ExtractionResult,
    pub duplicates: usize,
    pub rejected: Vec<WarHitError>,
    pub skipped: Vec<SkippedWar>,
}
