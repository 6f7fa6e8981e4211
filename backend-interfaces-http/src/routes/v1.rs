use axum::routing::get;
use axum::Router;

use backend_application::AppState;

use crate::handlers::{ops_handlers, player_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/player/:player_tag/warhits",
            get(player_handlers::list_war_hits),
        )
        .route(
            "/v1/player/:player_tag/stats",
            get(player_handlers::get_player_stats),
        )
        .route(
            "/v1/player/:player_tag/legend_rankings",
            get(player_handlers::list_legend_rankings),
        )
        .route(
            "/v1/player/:player_tag/wartimer",
            get(player_handlers::get_war_timer),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
