use thiserror::Error;

/// Reasons a single war document or war cannot contribute to a war-hit result.
///
/// None of these abort a pipeline run; the offending candidate is dropped and
/// reported alongside the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarHitError {
    #[error("malformed war document: {0}")]
    MalformedDocument(String),
    #[error("invalid war timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("player {player_tag} not found in war {war_id}")]
    PlayerNotInWar { player_tag: String, war_id: String },
    #[error("defender {defender_tag} not found in war {war_id}")]
    DefenderNotInWar { defender_tag: String, war_id: String },
}
