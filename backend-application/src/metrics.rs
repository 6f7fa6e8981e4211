use std::sync::atomic::{AtomicU64, Ordering};

use backend_domain::WarHitReport;

#[derive(Debug, Default)]
pub struct Metrics {
    warhit_requests: AtomicU64,
    wars_extracted: AtomicU64,
    duplicate_wars: AtomicU64,
    skipped_wars: AtomicU64,
    rejected_documents: AtomicU64,
    player_not_found: AtomicU64,
}

impl Metrics {
    pub fn record_war_hits(&self, report: &WarHitReport) {
        self.warhit_requests.fetch_add(1, Ordering::Relaxed);
        self.wars_extracted
            .fetch_add(report.result.items.len() as u64, Ordering::Relaxed);
        self.duplicate_wars
            .fetch_add(report.duplicates as u64, Ordering::Relaxed);
        self.skipped_wars
            .fetch_add(report.skipped.len() as u64, Ordering::Relaxed);
        self.rejected_documents
            .fetch_add(report.rejected.len() as u64, Ordering::Relaxed);
    }

    pub fn record_player_not_found(&self) {
        self.player_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.warhit_requests.load(Ordering::Relaxed);
        let extracted = self.wars_extracted.load(Ordering::Relaxed);
        let duplicates = self.duplicate_wars.load(Ordering::Relaxed);
        let skipped = self.skipped_wars.load(Ordering::Relaxed);
        let rejected = self.rejected_documents.load(Ordering::Relaxed);
        let not_found = self.player_not_found.load(Ordering::Relaxed);

        format!(
            "# TYPE warlog_warhit_requests_total counter\n\
warlog_warhit_requests_total {}\n\
# TYPE warlog_wars_extracted_total counter\n\
warlog_wars_extracted_total {}\n\
# TYPE warlog_duplicate_wars_total counter\n\
warlog_duplicate_wars_total {}\n\
# TYPE warlog_skipped_wars_total counter\n\
warlog_skipped_wars_total {}\n\
# TYPE warlog_rejected_documents_total counter\n\
warlog_rejected_documents_total {}\n\
# TYPE warlog_player_not_found_total counter\n\
warlog_player_not_found_total {}\n",
            requests, extracted, duplicates, skipped, rejected, not_found
        )
    }
}
