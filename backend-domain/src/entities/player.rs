// Player record entities

use clickhouse::Row;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use time::OffsetDateTime;

use crate::utils::millis_to_rfc3339;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Row)]
pub struct LeaderboardSpot {
    pub tag: String,
    pub global_rank: Option<u32>,
    pub local_rank: Option<u32>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Looted {
    pub gold: Value,
    pub elixir: Value,
    pub dark_elixir: Value,
}

/// Public projection of a stored player stats document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub name: Value,
    pub tag: Value,
    pub townhall: Value,
    pub legends: Map<String, Value>,
    pub last_online: Value,
    pub looted: Looted,
    pub trophies: Value,
    #[serde(rename = "warStars")]
    pub war_stars: Value,
    #[serde(rename = "clanCapitalContributions")]
    pub clan_capital_contributions: Value,
    pub donations: Value,
    pub capital: Value,
    pub clan_games: Value,
    pub season_pass: Value,
    pub attack_wins: Value,
    pub activity: Value,
    pub clan_tag: Value,
    pub league: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl PlayerStats {
    pub fn from_document(document: &Value, spot: Option<&LeaderboardSpot>) -> Self {
        let field = |key: &str| document.get(key).cloned().unwrap_or(Value::Null);
        let object_or_empty = |key: &str| document.get(key).cloned().unwrap_or_else(|| json!({}));

        let mut legends = document
            .get("legends")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        legends.remove("streak");

        let mut location = None;
        if let Some(spot) = spot {
            legends.insert("global_rank".to_string(), json!(spot.global_rank));
            legends.insert("local_rank".to_string(), json!(spot.local_rank));
            location = spot.country_name.clone();
        }

        Self {
            name: field("name"),
            tag: field("tag"),
            townhall: field("townhall"),
            legends,
            last_online: field("last_online"),
            looted: Looted {
                gold: object_or_empty("gold"),
                elixir: object_or_empty("elixir"),
                dark_elixir: object_or_empty("dark_elixir"),
            },
            trophies: document.get("trophies").cloned().unwrap_or_else(|| json!(0)),
            war_stars: field("warStars"),
            clan_capital_contributions: field("aggressive_capitalism"),
            donations: object_or_empty("donations"),
            capital: object_or_empty("capital_gold"),
            clan_games: object_or_empty("clan_games"),
            season_pass: object_or_empty("season_pass"),
            attack_wins: object_or_empty("attack_wins"),
            activity: object_or_empty("activity"),
            clan_tag: field("clan_tag"),
            league: field("league"),
            location,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Row)]
pub struct WarTimerRow {
    pub tag: String,
    #[serde(with = "clickhouse::serde::time::datetime64::millis")]
    pub time: OffsetDateTime,
    pub clans: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarTimer {
    pub tag: String,
    pub time: String,
    pub unix_time: f64,
    pub clans: Vec<String>,
}

impl From<WarTimerRow> for WarTimer {
    fn from(row: WarTimerRow) -> Self {
        let millis = (row.time.unix_timestamp_nanos() / 1_000_000) as i64;
        Self {
            tag: row.tag,
            time: millis_to_rfc3339(millis).unwrap_or_default(),
            unix_time: millis as f64 / 1000.0,
            clans: row.clans,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_document() -> Value {
        json!({
            "name": "Chief",
            "tag": "#2PP",
            "townhall": 16,
            "legends": {"streak": 4, "2024-03-01": {"attacks": [40]}},
            "gold": {"2024-03": 1000},
            "trophies": 5400,
            "warStars": 1200,
            "aggressive_capitalism": {"2024-03": 300},
            "clan_tag": "#CLAN",
            "league": "Legend League"
        })
    }

    #[test]
    fn projection_drops_streak_and_fills_defaults() {
        let stats = PlayerStats::from_document(&stats_document(), None);
        assert!(!stats.legends.contains_key("streak"));
        assert!(stats.legends.contains_key("2024-03-01"));
        assert_eq!(stats.looted.gold, json!({"2024-03": 1000}));
        assert_eq!(stats.looted.elixir, json!({}));
        assert_eq!(stats.clan_capital_contributions, json!({"2024-03": 300}));
        assert_eq!(stats.donations, json!({}));
        assert_eq!(stats.last_online, Value::Null);
        assert!(stats.location.is_none());
        assert!(!stats.legends.contains_key("global_rank"));
    }

    #[test]
    fn explicit_null_is_kept_while_missing_defaults_to_empty() {
        let document = json!({"tag": "#2PP", "gold": null, "donations": null});
        let stats = PlayerStats::from_document(&document, None);
        assert_eq!(stats.looted.gold, Value::Null);
        assert_eq!(stats.donations, Value::Null);
        assert_eq!(stats.looted.elixir, json!({}));
        assert_eq!(stats.capital, json!({}));
    }

    #[test]
    fn trophies_default_to_zero() {
        let stats = PlayerStats::from_document(&json!({"tag": "#2PP"}), None);
        assert_eq!(stats.trophies, json!(0));
        assert!(stats.legends.is_empty());
    }

    #[test]
    fn leaderboard_spot_adds_ranks_and_location() {
        let spot = LeaderboardSpot {
            tag: "#2PP".to_string(),
            global_rank: Some(12),
            local_rank: None,
            country_code: Some("FR".to_string()),
            country_name: Some("France".to_string()),
        };
        let stats = PlayerStats::from_document(&stats_document(), Some(&spot));
        assert_eq!(stats.legends.get("global_rank"), Some(&json!(12)));
        assert_eq!(stats.legends.get("local_rank"), Some(&Value::Null));
        assert_eq!(stats.location.as_deref(), Some("France"));

        let body = serde_json::to_value(&stats).expect("serialize");
        assert_eq!(body["warStars"], json!(1200));
        assert_eq!(body["location"], json!("France"));
    }

    #[test]
    fn war_timer_reports_rfc3339_and_unix_time() {
        let row = WarTimerRow {
            tag: "#2PP".to_string(),
            time: OffsetDateTime::from_unix_timestamp(1_704_442_503).expect("time"),
            clans: vec!["#CLAN".to_string()],
        };
        let timer = WarTimer::from(row);
        assert_eq!(timer.time, "2024-01-05T08:15:03+00:00");
        assert_eq!(timer.unix_time, 1_704_442_503.0);
    }
}
