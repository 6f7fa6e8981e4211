use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{json, Value};

use backend_domain::ports::{PlayerRepository, WarRepository};
use backend_domain::{LeaderboardSpot, PlayerTag, RuntimeConfig, WarTimerRow, WarWindow};

use crate::{AppState, Metrics};

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: None,
        max_body_bytes: 1024,
        request_timeout_seconds: 5,
        default_warhit_limit: 5,
        max_warhit_limit: 8,
    }
}

pub fn state_with(wars: FakeWars, players: FakePlayers) -> AppState {
    AppState {
        config: runtime_config(),
        war_repo: Arc::new(wars),
        player_repo: Arc::new(players),
        metrics: Arc::new(Metrics::default()),
    }
}

/// War between `clan` and `opponent` where `player` sits on the clan side
/// and attacks the only opponent once.
pub fn war_document(clan: &str, opponent: &str, preparation_start: &str, player: &str) -> Value {
    json!({
        "state": "warEnded",
        "preparationStartTime": preparation_start,
        "clan": {"tag": clan, "members": [
            {"tag": player, "attacks": [
                {"attackerTag": player, "defenderTag": "#E1", "stars": 3, "destructionPercentage": 100, "order": 1}
            ]}
        ]},
        "opponent": {"tag": opponent, "members": [{"tag": "#E1", "attacks": []}]}
    })
}

#[derive(Clone, Default)]
pub struct FakeWars {
    documents: Vec<Value>,
    fail: bool,
    calls: Arc<Mutex<Vec<(String, WarWindow)>>>,
}

impl FakeWars {
    pub fn new(documents: Vec<Value>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, WarWindow)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WarRepository for FakeWars {
    async fn fetch_player_wars(
        &self,
        player_tag: &PlayerTag,
        window: WarWindow,
    ) -> anyhow::Result<Vec<Value>> {
        self.calls
            .lock()
            .unwrap()
            .push((player_tag.to_string(), window));
        if self.fail {
            return Err(anyhow!("clickhouse unavailable"));
        }
        Ok(self.documents.clone())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow!("clickhouse unavailable"));
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakePlayers {
    pub stats: Option<Value>,
    pub spot: Option<LeaderboardSpot>,
    pub history: Vec<Value>,
    pub timer: Option<WarTimerRow>,
}

#[async_trait]
impl PlayerRepository for FakePlayers {
    async fn fetch_player_stats(&self, _player_tag: &PlayerTag) -> anyhow::Result<Option<Value>> {
        Ok(self.stats.clone())
    }

    async fn fetch_leaderboard_spot(
        &self,
        _player_tag: &PlayerTag,
    ) -> anyhow::Result<Option<LeaderboardSpot>> {
        Ok(self.spot.clone())
    }

    async fn fetch_legend_history(
        &self,
        _player_tag: &PlayerTag,
        limit: usize,
    ) -> anyhow::Result<Vec<Value>> {
        Ok(self.history.iter().take(limit).cloned().collect())
    }

    async fn fetch_war_timer(&self, _player_tag: &PlayerTag) -> anyhow::Result<Option<WarTimerRow>> {
        Ok(self.timer.clone())
    }
}
