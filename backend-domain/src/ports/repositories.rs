use async_trait::async_trait;
use serde_json::Value;

use crate::entities::{LeaderboardSpot, WarTimerRow, WarWindow};
use crate::value_objects::PlayerTag;

#[async_trait]
pub trait WarRepository: Send + Sync {
    /// Raw war documents the player took part in, within `window`, newest
    /// preparation start first. May contain duplicates of the same war.
    async fn fetch_player_wars(
        &self,
        player_tag: &PlayerTag,
        window: WarWindow,
    ) -> anyhow::Result<Vec<Value>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn fetch_player_stats(&self, player_tag: &PlayerTag) -> anyhow::Result<Option<Value>>;
    async fn fetch_leaderboard_spot(
        &self,
        player_tag: &PlayerTag,
    ) -> anyhow::Result<Option<LeaderboardSpot>>;
    async fn fetch_legend_history(
        &self,
        player_tag: &PlayerTag,
        limit: usize,
    ) -> anyhow::Result<Vec<Value>>;
    async fn fetch_war_timer(&self, player_tag: &PlayerTag) -> anyhow::Result<Option<WarTimerRow>>;
}
