use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct WarHitsQuery {
    pub timestamp_start: Option<i64>,
    pub timestamp_end: Option<i64>,
    pub limit: Option<usize>,
}

/// Inclusive preparation-start window, in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarWindow {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct LegendRankingsQuery {
    pub limit: Option<usize>,
}
