use tracing::{debug, error, warn};

use crate::queries::parse_player_tag;
use crate::AppError;
use crate::AppState;
use backend_domain::{ExtractionResult, WarHitPipeline, WarHitsQuery, WarWindow};

/// Upper bound used by clients that do not pass `timestamp_end`.
pub const DEFAULT_TIMESTAMP_END: i64 = 2_527_625_513;

pub async fn list_war_hits(
    state: &AppState,
    player_tag: &str,
    query: WarHitsQuery,
) -> Result<ExtractionResult, AppError> {
    let player_tag = parse_player_tag(player_tag)?;
    let window = WarWindow {
        start: query.timestamp_start.unwrap_or(0),
        end: query.timestamp_end.unwrap_or(DEFAULT_TIMESTAMP_END),
    };
    if window.start > window.end {
        return Err(AppError::BadRequest(
            "timestamp_start must not be after timestamp_end".to_string(),
        ));
    }
    let limit = query
        .limit
        .unwrap_or(state.config.default_warhit_limit)
        .min(state.config.max_warhit_limit);

    let documents = state
        .war_repo
        .fetch_player_wars(&player_tag, window)
        .await
        .map_err(|err| {
            error!("failed to fetch wars for {}: {}", player_tag, err);
            AppError::Internal(err)
        })?;
    let candidates = documents.len();

    let report = WarHitPipeline::new(limit).run_documents(documents, &player_tag);
    for rejected in &report.rejected {
        warn!(player_tag = %player_tag, error = %rejected, "rejected malformed war document");
    }
    for skipped in &report.skipped {
        warn!(
            player_tag = %player_tag,
            war_id = %skipped.war_id,
            reason = %skipped.reason,
            "skipped inconsistent war"
        );
    }
    state.metrics.record_war_hits(&report);
    debug!(
        player_tag = %player_tag,
        candidates,
        items = report.result.items.len(),
        duplicates = report.duplicates,
        "war hits extracted"
    );

    Ok(report.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::fakes::{state_with, war_document, FakePlayers, FakeWars};
    use serde_json::json;

    #[tokio::test]
    async fn returns_deduplicated_hits_for_normalized_tag() {
        let doc = war_document("#A", "#B", "20240105T081503.000Z", "#2PP0");
        let wars = FakeWars::new(vec![doc.clone(), doc]);
        let state = state_with(wars.clone(), FakePlayers::default());

        let result = list_war_hits(&state, "2ppo", WarHitsQuery::default())
            .await
            .expect("hits");
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].member_data.tag, "#2PP0");

        let calls = wars.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "#2PP0");
        assert_eq!(
            calls[0].1,
            WarWindow {
                start: 0,
                end: DEFAULT_TIMESTAMP_END
            }
        );
    }

    #[tokio::test]
    async fn limit_defaults_and_clamps_to_config() {
        let documents: Vec<_> = (1..=9)
            .rev()
            .map(|day| war_document("#A", "#B", &format!("202402{:02}T081503.000Z", day), "#P"))
            .collect();
        let state = state_with(FakeWars::new(documents), FakePlayers::default());

        let default = list_war_hits(&state, "#P", WarHitsQuery::default())
            .await
            .expect("hits");
        assert_eq!(default.items.len(), 5);

        let clamped = list_war_hits(
            &state,
            "#P",
            WarHitsQuery {
                limit: Some(100),
                ..WarHitsQuery::default()
            },
        )
        .await
        .expect("hits");
        assert_eq!(clamped.items.len(), 8);

        let none = list_war_hits(
            &state,
            "#P",
            WarHitsQuery {
                limit: Some(0),
                ..WarHitsQuery::default()
            },
        )
        .await
        .expect("hits");
        assert!(none.items.is_empty());
    }

    #[tokio::test]
    async fn inverted_window_is_bad_request() {
        let state = state_with(FakeWars::new(Vec::new()), FakePlayers::default());
        let err = list_war_hits(
            &state,
            "#P",
            WarHitsQuery {
                timestamp_start: Some(10),
                timestamp_end: Some(5),
                limit: None,
            },
        )
        .await
        .expect_err("reject");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn blank_tag_is_bad_request() {
        let state = state_with(FakeWars::new(Vec::new()), FakePlayers::default());
        let err = list_war_hits(&state, "#", WarHitsQuery::default())
            .await
            .expect_err("reject");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn inconsistent_and_malformed_documents_are_counted() {
        let documents = vec![
            json!({"clan": {"tag": "#A"}}),
            war_document("#X", "#Y", "20240301T081503.000Z", "#SOMEONE"),
            war_document("#A", "#B", "20240210T081503.000Z", "#P"),
        ];
        let state = state_with(FakeWars::new(documents), FakePlayers::default());
        let result = list_war_hits(&state, "#P", WarHitsQuery::default())
            .await
            .expect("hits");
        assert_eq!(result.items.len(), 1);
        let rendered = state.metrics.render_prometheus();
        assert!(rendered.contains("warlog_skipped_wars_total 1\n"));
        assert!(rendered.contains("warlog_rejected_documents_total 1\n"));
    }

    #[tokio::test]
    async fn repository_failure_is_internal() {
        let state = state_with(FakeWars::failing(), FakePlayers::default());
        let err = list_war_hits(&state, "#P", WarHitsQuery::default())
            .await
            .expect_err("fail");
        assert!(matches!(err, AppError::Internal(_)));
    }
}
