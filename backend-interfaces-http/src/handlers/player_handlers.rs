use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use backend_application::queries::{player_queries, war_hit_queries};
use backend_application::AppState;
use backend_domain::{ExtractionResult, LegendRankingsQuery, PlayerStats, WarHitsQuery, WarTimer};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_war_hits(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_tag): Path<String>,
    Query(query): Query<WarHitsQuery>,
) -> Result<Json<ExtractionResult>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let result = war_hit_queries::list_war_hits(&state, &player_tag, query).await?;
    Ok(Json(result))
}

pub async fn get_player_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_tag): Path<String>,
) -> Result<Json<PlayerStats>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let stats = player_queries::get_player_stats(&state, &player_tag).await?;
    Ok(Json(stats))
}

pub async fn list_legend_rankings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_tag): Path<String>,
    Query(query): Query<LegendRankingsQuery>,
) -> Result<Json<Vec<Value>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let rows = player_queries::list_legend_rankings(&state, &player_tag, query).await?;
    Ok(Json(rows))
}

pub async fn get_war_timer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_tag): Path<String>,
) -> Result<Json<Option<WarTimer>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let timer = player_queries::get_war_timer(&state, &player_tag).await?;
    Ok(Json(timer))
}
