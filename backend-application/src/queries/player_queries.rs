use serde_json::Value;
use tracing::error;

use crate::queries::parse_player_tag;
use crate::AppError;
use crate::AppState;
use backend_domain::{LegendRankingsQuery, PlayerStats, WarTimer};

pub async fn get_player_stats(state: &AppState, player_tag: &str) -> Result<PlayerStats, AppError> {
    let player_tag = parse_player_tag(player_tag)?;
    let document = state
        .player_repo
        .fetch_player_stats(&player_tag)
        .await
        .map_err(|err| {
            error!("failed to fetch player stats: {}", err);
            AppError::Internal(err)
        })?;
    let Some(document) = document else {
        state.metrics.record_player_not_found();
        return Err(AppError::NotFound("no player found".to_string()));
    };

    let spot = state
        .player_repo
        .fetch_leaderboard_spot(&player_tag)
        .await
        .map_err(|err| {
            error!("failed to fetch leaderboard spot: {}", err);
            AppError::Internal(err)
        })?;

    Ok(PlayerStats::from_document(&document, spot.as_ref()))
}

pub async fn list_legend_rankings(
    state: &AppState,
    player_tag: &str,
    query: LegendRankingsQuery,
) -> Result<Vec<Value>, AppError> {
    let player_tag = parse_player_tag(player_tag)?;
    let limit = query.limit.unwrap_or(10).clamp(1, 100);
    let rows = state
        .player_repo
        .fetch_legend_history(&player_tag, limit)
        .await
        .map_err(|err| {
            error!("failed to fetch legend history: {}", err);
            AppError::Internal(err)
        })?;
    Ok(rows)
}

pub async fn get_war_timer(state: &AppState, player_tag: &str) -> Result<Option<WarTimer>, AppError> {
    let player_tag = parse_player_tag(player_tag)?;
    let row = state
        .player_repo
        .fetch_war_timer(&player_tag)
        .await
        .map_err(|err| {
            error!("failed to fetch war timer: {}", err);
            AppError::Internal(err)
        })?;
    Ok(row.map(WarTimer::from))
}
