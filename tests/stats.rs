#![cfg(not(target_arch = "wasm32"))]

use deal_catalog_wasm::domain::deals::{DealAnalysisService, DealStats};
use deal_catalog_wasm::infrastructure::api::seed::seed_deals;

#[test]
fn empty_sequence_yields_all_zero_stats() {
    let stats = DealAnalysisService::new().compute_stats(&[]);
    assert_eq!(
        stats,
        DealStats { count: 0, total_amount: 0, avg_score: 0.0, sector_count: 0 }
    );
}

#[test]
fn full_catalog_stats() {
    let deals = seed_deals();
    let stats = DealAnalysisService::new().compute_stats(&deals);
    assert_eq!(stats.count, 6);
    assert_eq!(stats.total_amount, 105_500_000);
    // mean of [8.5, 7.2, 9.1, 6.8, 8.0, 9.3] is 8.15, shown as 8.2
    assert_eq!(stats.avg_score, 8.2);
    // six deals, six distinct sectors
    assert_eq!(stats.sector_count, 6);
}

#[test]
fn sector_count_is_order_independent() {
    let mut deals = seed_deals();
    let service = DealAnalysisService::new();
    let forward = service.compute_stats(&deals).sector_count;
    deals.reverse();
    assert_eq!(service.compute_stats(&deals).sector_count, forward);
}

#[test]
fn stats_over_a_subset() {
    let deals = seed_deals();
    let subset: Vec<_> = deals.into_iter().filter(|d| d.score.value() >= 9.0).collect();
    let stats = DealAnalysisService::new().compute_stats(&subset);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_amount, 70_000_000);
    assert_eq!(stats.avg_score, 9.2);
    assert_eq!(stats.sector_count, 2);
}
