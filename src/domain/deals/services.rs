use std::collections::HashSet;

use crate::domain::deals::entities::Deal;
use crate::domain::deals::value_objects::{DealStats, FilterCriteria};

/// Domain service for screening the catalog: pure, deterministic, no
/// suspension. Owns nothing - it reads a deal sequence and projects it.
pub struct DealAnalysisService;

impl DealAnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Stable filter: the ordered subsequence matching the criteria.
    ///
    /// A deal survives when its name contains the query case-insensitively
    /// AND its score is at least the parsed threshold. Empty criteria
    /// return the input unchanged.
    pub fn filter_deals(&self, deals: &[Deal], criteria: &FilterCriteria) -> Vec<Deal> {
        let min_score = criteria.min_score_threshold();
        deals
            .iter()
            .filter(|deal| deal.matches_name(&criteria.name) && deal.meets_min_score(min_score))
            .cloned()
            .collect()
    }

    /// Aggregate stats for an arbitrary deal sequence, the empty one included
    pub fn compute_stats(&self, deals: &[Deal]) -> DealStats {
        if deals.is_empty() {
            return DealStats::default();
        }

        let count = deals.len();
        let total_amount: u64 = deals.iter().map(|deal| deal.amount.value()).sum();
        let score_sum: f64 = deals.iter().map(|deal| deal.score.value()).sum();
        let avg_score = round_to_tenth(score_sum / count as f64);
        let sector_count =
            deals.iter().map(|deal| deal.sector.as_str()).collect::<HashSet<_>>().len();

        DealStats { count, total_amount, avg_score, sector_count }
    }
}

impl Default for DealAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

/// Round in decimal space: scores carry one decimal, so a mean sitting on a
/// .x5 boundary must round up even when the binary double lands a hair
/// below it (48.9 / 6 is 8.149999... in IEEE 754, displayed as 8.2).
fn round_to_tenth(value: f64) -> f64 {
    ((value * 10.0) + 1e-9).round() / 10.0
}
