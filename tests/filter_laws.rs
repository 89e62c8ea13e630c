#![cfg(not(target_arch = "wasm32"))]

use deal_catalog_wasm::domain::deals::{DealAnalysisService, FilterCriteria};
use deal_catalog_wasm::infrastructure::api::seed::seed_deals;

#[test]
fn empty_criteria_returns_the_full_catalog() {
    let deals = seed_deals();
    let service = DealAnalysisService::new();
    assert_eq!(service.filter_deals(&deals, &FilterCriteria::default()), deals);
    // empty-string minimum behaves the same as an absent one
    assert_eq!(service.filter_deals(&deals, &FilterCriteria::new("", "")), deals);
}

#[test]
fn membership_matches_name_and_threshold() {
    let deals = seed_deals();
    let service = DealAnalysisService::new();
    let criteria = FilterCriteria::new("series", "8");
    let filtered = service.filter_deals(&deals, &criteria);

    let threshold = criteria.min_score_threshold();
    for deal in &deals {
        let expected = deal.matches_name(&criteria.name) && deal.score.value() >= threshold;
        assert_eq!(filtered.contains(deal), expected, "membership law broken for {}", deal.name);
    }
}

#[test]
fn name_query_is_case_insensitive() {
    let deals = seed_deals();
    let service = DealAnalysisService::new();
    let lower = service.filter_deals(&deals, &FilterCriteria::new("healthtech", ""));
    let upper = service.filter_deals(&deals, &FilterCriteria::new("HEALTHTECH", ""));
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].id.value(), 3);
}

#[test]
fn filter_preserves_catalog_order() {
    let deals = seed_deals();
    let filtered =
        DealAnalysisService::new().filter_deals(&deals, &FilterCriteria::new("", "8"));
    let ids: Vec<u32> = filtered.iter().map(|d| d.id.value()).collect();
    assert_eq!(ids, vec![1, 3, 5, 6]);
}

#[test]
fn invalid_threshold_input_means_no_threshold() {
    let deals = seed_deals();
    let service = DealAnalysisService::new();
    for raw in ["", "  ", "not-a-number", "NaN", "1.2.3"] {
        let filtered = service.filter_deals(&deals, &FilterCriteria::new("", raw));
        assert_eq!(filtered.len(), deals.len(), "input {raw:?} should not filter anything");
    }
}

#[test]
fn combined_criteria_intersect() {
    let deals = seed_deals();
    let filtered =
        DealAnalysisService::new().filter_deals(&deals, &FilterCriteria::new("seed", "7"));
    let ids: Vec<u32> = filtered.iter().map(|d| d.id.value()).collect();
    // both Seed-named deals match the name, only GreenEnergy clears 7.0
    assert_eq!(ids, vec![2]);
}
