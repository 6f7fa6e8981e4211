use anyhow::Result;
use async_trait::async_trait;
use clickhouse::{Client, Row};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use backend_domain::ports::{PlayerRepository, WarRepository};
use backend_domain::{LeaderboardSpot, PlayerTag, WarTimerRow, WarWindow};

#[derive(Debug, Deserialize, Row)]
struct DocumentRow {
    data: String,
}

#[derive(Debug, Deserialize, Row)]
struct LegendHistoryRow {
    tag: String,
    season: String,
    data: String,
}

#[derive(Clone)]
pub struct ClickhouseRepo {
    client: Client,
    database: String,
}

impl ClickhouseRepo {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        let create_db = format!("CREATE DATABASE IF NOT EXISTS {}", self.database);
        self.client.query(&create_db).execute().await?;

        let create_wars = r#"
CREATE TABLE IF NOT EXISTS clan_wars (
    preparation_start_time DateTime,
    clan_tag String,
    opponent_tag String,
    member_tags Array(String),
    data String
) ENGINE = MergeTree
PARTITION BY toYYYYMM(preparation_start_time)
ORDER BY (preparation_start_time, clan_tag, opponent_tag)
"#;
        self.client.query(create_wars).execute().await?;

        let create_stats = r#"
CREATE TABLE IF NOT EXISTS player_stats (
    tag String,
    data String
) ENGINE = ReplacingMergeTree
ORDER BY tag
"#;
        self.client.query(create_stats).execute().await?;

        let create_leaderboard = r#"
CREATE TABLE IF NOT EXISTS player_leaderboard (
    tag String,
    global_rank Nullable(UInt32),
    local_rank Nullable(UInt32),
    country_code Nullable(String),
    country_name Nullable(String)
) ENGINE = ReplacingMergeTree
ORDER BY tag
"#;
        self.client.query(create_leaderboard).execute().await?;

        let create_legend_history = r#"
CREATE TABLE IF NOT EXISTS legend_history (
    tag String,
    season String,
    data String
) ENGINE = ReplacingMergeTree
ORDER BY (tag, season)
"#;
        self.client.query(create_legend_history).execute().await?;

        let create_war_timer = r#"
CREATE TABLE IF NOT EXISTS war_timer (
    tag String,
    time DateTime64(3),
    clans Array(String)
) ENGINE = ReplacingMergeTree
ORDER BY tag
"#;
        self.client.query(create_war_timer).execute().await?;
        Ok(())
    }
}

#[async_trait]
impl WarRepository for ClickhouseRepo {
    async fn fetch_player_wars(
        &self,
        player_tag: &PlayerTag,
        window: WarWindow,
    ) -> Result<Vec<Value>> {
        let rows = self
            .client
            .query(
                "SELECT ?fields FROM clan_wars \
                 WHERE has(member_tags, ?) \
                 AND preparation_start_time >= toDateTime(?) \
                 AND preparation_start_time <= toDateTime(?) \
                 ORDER BY preparation_start_time DESC",
            )
            .bind(player_tag.as_str())
            .bind(window.start)
            .bind(window.end)
            .fetch_all::<DocumentRow>()
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| parse_document(&row.data, "clan_wars"))
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        self.client.query("SELECT 1").execute().await?;
        Ok(())
    }
}

#[async_trait]
impl PlayerRepository for ClickhouseRepo {
    async fn fetch_player_stats(&self, player_tag: &PlayerTag) -> Result<Option<Value>> {
        let row = self
            .client
            .query("SELECT ?fields FROM player_stats FINAL WHERE tag = ? LIMIT 1")
            .bind(player_tag.as_str())
            .fetch_optional::<DocumentRow>()
            .await?;
        Ok(row.and_then(|row| parse_document(&row.data, "player_stats")))
    }

    async fn fetch_leaderboard_spot(&self, player_tag: &PlayerTag) -> Result<Option<LeaderboardSpot>> {
        let spot = self
            .client
            .query("SELECT ?fields FROM player_leaderboard FINAL WHERE tag = ? LIMIT 1")
            .bind(player_tag.as_str())
            .fetch_optional::<LeaderboardSpot>()
            .await?;
        Ok(spot)
    }

    async fn fetch_legend_history(&self, player_tag: &PlayerTag, limit: usize) -> Result<Vec<Value>> {
        let rows = self
            .client
            .query(
                "SELECT ?fields FROM legend_history FINAL \
                 WHERE tag = ? ORDER BY season DESC LIMIT ?",
            )
            .bind(player_tag.as_str())
            .bind(limit as u64)
            .fetch_all::<LegendHistoryRow>()
            .await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let mut document = parse_document(&row.data, "legend_history")?;
                if let Some(object) = document.as_object_mut() {
                    object.insert("tag".to_string(), json!(row.tag));
                    object.insert("season".to_string(), json!(row.season));
                }
                Some(document)
            })
            .collect())
    }

    async fn fetch_war_timer(&self, player_tag: &PlayerTag) -> Result<Option<WarTimerRow>> {
        let row = self
            .client
            .query("SELECT ?fields FROM war_timer FINAL WHERE tag = ? LIMIT 1")
            .bind(player_tag.as_str())
            .fetch_optional::<WarTimerRow>()
            .await?;
        Ok(row)
    }
}

fn parse_document(data: &str, table: &str) -> Option<Value> {
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("dropping unreadable {} document: {}", table, err);
            None
        }
    }
}
