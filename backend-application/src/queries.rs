pub mod player_queries;
pub mod war_hit_queries;

use backend_domain::PlayerTag;

use crate::AppError;

pub(crate) fn parse_player_tag(raw: &str) -> Result<PlayerTag, AppError> {
    PlayerTag::parse(raw).ok_or_else(|| AppError::BadRequest("invalid player tag".to_string()))
}

#[cfg(test)]
pub(crate) mod fakes;
