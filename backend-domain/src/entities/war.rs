// War document entity
// Typed view over a stored war; unknown fields ride along in `extra`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::WarHitError;
use crate::value_objects::{WarIdentity, WarTimestamp, WarType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarSide {
    Clan,
    Opponent,
}

impl WarSide {
    pub fn opposite(self) -> Self {
        match self {
            WarSide::Clan => WarSide::Opponent,
            WarSide::Opponent => WarSide::Clan,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct War {
    pub clan: WarClan,
    pub opponent: WarClan,
    pub preparation_start_time: WarTimestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<WarTimestamp>,
    /// League wars carry their round tag at the top level.
    #[serde(rename = "tag", default, skip_serializing_if = "Option::is_none")]
    pub war_tag: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarClan {
    pub tag: String,
    #[serde(default)]
    pub members: Vec<WarMember>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarMember {
    pub tag: String,
    #[serde(default)]
    pub attacks: Vec<WarAttack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_opponent_attack: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarAttack {
    pub attacker_tag: String,
    pub defender_tag: String,
    pub order: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl War {
    /// Decodes a stored document, rejecting it when required fields are
    /// missing or unparsable.
    pub fn from_document(document: Value) -> Result<Self, WarHitError> {
        let war: War = serde_json::from_value(document)
            .map_err(|err| WarHitError::MalformedDocument(err.to_string()))?;
        if war.clan.tag.trim().is_empty() || war.opponent.tag.trim().is_empty() {
            return Err(WarHitError::MalformedDocument(
                "clan and opponent tags must not be empty".to_string(),
            ));
        }
        Ok(war)
    }

    pub fn identity(&self) -> WarIdentity {
        WarIdentity::new(
            &self.clan.tag,
            &self.opponent.tag,
            self.preparation_start_time.instant(),
        )
    }

    pub fn war_type(&self) -> Option<WarType> {
        WarType::classify(
            self.war_tag.as_deref(),
            self.preparation_start_time.instant(),
            self.start_time.as_ref().map(WarTimestamp::instant),
        )
    }

    pub fn roster(&self, side: WarSide) -> &[WarMember] {
        match side {
            WarSide::Clan => &self.clan.members,
            WarSide::Opponent => &self.opponent.members,
        }
    }

    pub fn find_member(&self, tag: &str) -> Option<(WarSide, &WarMember)> {
        [WarSide::Clan, WarSide::Opponent]
            .into_iter()
            .find_map(|side| {
                self.roster(side)
                    .iter()
                    .find(|member| member.tag == tag)
                    .map(|member| (side, member))
            })
    }

    /// Attacks made by `attacking_side` against `defender_tag`, oldest first.
    pub fn attacks_against(&self, attacking_side: WarSide, defender_tag: &str) -> Vec<&WarAttack> {
        let mut attacks: Vec<&WarAttack> = self
            .roster(attacking_side)
            .iter()
            .flat_map(|member| member.attacks.iter())
            .filter(|attack| attack.defender_tag == defender_tag)
            .collect();
        attacks.sort_by_key(|attack| attack.order);
        attacks
    }

    /// An attack is fresh when nobody hit the same defender earlier in the war.
    pub fn is_fresh_attack(&self, attack: &WarAttack) -> bool {
        !self
            .clan
            .members
            .iter()
            .chain(self.opponent.members.iter())
            .flat_map(|member| member.attacks.iter())
            .any(|other| other.defender_tag == attack.defender_tag && other.order < attack.order)
    }
}
