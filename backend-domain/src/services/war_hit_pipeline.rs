use std::collections::HashSet;

use serde_json::Value;

use crate::entities::{SkippedWar, War, WarHitReport};
use crate::error::WarHitError;
use crate::services::attack_extractor::extract_war_hit;
use crate::value_objects::{PlayerTag, WarIdentity};

pub const DEFAULT_WAR_HIT_LIMIT: usize = 50;

/// Deduplicates candidate wars and extracts a player's hits from each, newest
/// first, until `limit` wars have been emitted.
///
/// Candidates must already be sorted by preparation start, descending. The
/// first copy of each war wins. Malformed documents and wars that do not
/// contain the player are dropped and listed in the report; they never end
/// the run early.
#[derive(Debug, Clone, Copy)]
pub struct WarHitPipeline {
    limit: usize,
}

impl Default for WarHitPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_WAR_HIT_LIMIT)
    }
}

impl WarHitPipeline {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn run<I>(&self, candidates: I, player_tag: &PlayerTag) -> WarHitReport
    where
        I: IntoIterator<Item = War>,
    {
        self.run_candidates(candidates.into_iter().map(Ok), player_tag)
    }

    /// Same as [`run`](Self::run), decoding each raw document lazily so that
    /// nothing past the bound is parsed.
    pub fn run_documents<I>(&self, documents: I, player_tag: &PlayerTag) -> WarHitReport
    where
        I: IntoIterator<Item = Value>,
    {
        self.run_candidates(documents.into_iter().map(War::from_document), player_tag)
    }

    fn run_candidates<I>(&self, candidates: I, player_tag: &PlayerTag) -> WarHitReport
    where
        I: Iterator<Item = Result<War, WarHitError>>,
    {
        let mut report = WarHitReport::default();
        let mut seen: HashSet<WarIdentity> = HashSet::new();

        for candidate in candidates {
            let war = match candidate {
                Ok(war) => war,
                Err(err) => {
                    report.rejected.push(err);
                    continue;
                }
            };

            let war_id = war.identity();
            if !seen.insert(war_id.clone()) {
                report.duplicates += 1;
                continue;
            }
            // Checked after the identity is recorded and before extraction,
            // so the war that hits the bound is never extracted.
            if report.result.items.len() == self.limit {
                break;
            }

            match extract_war_hit(&war, player_tag) {
                Ok(hit) => report.result.items.push(hit),
                Err(reason) => report.skipped.push(SkippedWar { war_id, reason }),
            }
        }

        report
    }
}
