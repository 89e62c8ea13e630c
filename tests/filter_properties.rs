#![cfg(not(target_arch = "wasm32"))]

use deal_catalog_wasm::domain::deals::{
    Amount, Deal, DealAnalysisService, DealId, DealMetrics, FilterCriteria, FundingStage, Score,
};
use quickcheck_macros::quickcheck;

fn build_deals(names: Vec<String>) -> Vec<Deal> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Deal {
            id: DealId::new(i as u32),
            name,
            company: format!("Company {i}"),
            sector: ["SaaS", "FinTech", "HealthTech"][i % 3].to_string(),
            stage: FundingStage::Seed,
            amount: Amount::new((i as u64) * 1_000),
            score: Score::new((i % 11) as f64),
            description: String::new(),
            metrics: DealMetrics::new("$1M ARR", "100% YoY", 1, 1),
            investors: Vec::new(),
            founded: 2020,
            location: "Remote".to_string(),
        })
        .collect()
}

fn is_ordered_subsequence(subset: &[Deal], full: &[Deal]) -> bool {
    let mut cursor = full.iter();
    subset.iter().all(|needle| cursor.any(|deal| deal == needle))
}

#[quickcheck]
fn empty_criteria_is_the_identity(names: Vec<String>) -> bool {
    let deals = build_deals(names);
    DealAnalysisService::new().filter_deals(&deals, &FilterCriteria::default()) == deals
}

#[quickcheck]
fn filtered_set_is_an_ordered_subsequence(names: Vec<String>, query: String, raw: u8) -> bool {
    let deals = build_deals(names);
    let criteria = FilterCriteria::new(query, (raw % 11).to_string());
    let filtered = DealAnalysisService::new().filter_deals(&deals, &criteria);
    is_ordered_subsequence(&filtered, &deals)
}

#[quickcheck]
fn every_survivor_satisfies_the_criteria(names: Vec<String>, query: String, raw: u8) -> bool {
    let deals = build_deals(names);
    let criteria = FilterCriteria::new(query, (raw % 11).to_string());
    let threshold = criteria.min_score_threshold();
    DealAnalysisService::new()
        .filter_deals(&deals, &criteria)
        .iter()
        .all(|deal| deal.matches_name(&criteria.name) && deal.score.value() >= threshold)
}
