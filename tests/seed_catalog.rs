#![cfg(not(target_arch = "wasm32"))]

use std::collections::HashSet;

use deal_catalog_wasm::domain::deals::{Deal, FundingStage};
use deal_catalog_wasm::infrastructure::api::seed::seed_deals;

#[test]
fn catalog_has_six_unique_deals() {
    let deals = seed_deals();
    assert_eq!(deals.len(), 6);

    let ids: HashSet<u32> = deals.iter().map(|d| d.id.value()).collect();
    assert_eq!(ids, (1..=6).collect::<HashSet<u32>>());
}

#[test]
fn catalog_invariants_hold() {
    for deal in seed_deals() {
        assert!(deal.is_valid(), "score out of range for {}", deal.name);
        assert!(!deal.name.is_empty());
        assert!(!deal.sector.is_empty());
        assert!(deal.founded >= 2018);
    }
}

#[test]
fn known_records_match_the_catalog() {
    let deals = seed_deals();

    let healthtech = deals.iter().find(|d| d.id.value() == 3).unwrap();
    assert_eq!(healthtech.name, "HealthTech Analytics Series B");
    assert_eq!(healthtech.score.value(), 9.1);
    assert_eq!(healthtech.amount.value(), 25_000_000);
    assert_eq!(healthtech.stage, FundingStage::SeriesB);
    assert_eq!(healthtech.investors.len(), 3);

    let seed_round = deals.iter().find(|d| d.id.value() == 2).unwrap();
    assert_eq!(seed_round.stage, FundingStage::Seed);
    assert_eq!(seed_round.metrics.customers, 12);
    assert_eq!(seed_round.metrics.team_size, 15);
    assert_eq!(seed_round.investors, vec!["Breakthrough Energy Ventures"]);
}

#[test]
fn deal_serializes_with_the_upstream_wire_shape() {
    let deals = seed_deals();
    let json = serde_json::to_value(&deals[0]).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["stage"], "Series A");
    assert_eq!(json["amount"], 15_000_000);
    assert_eq!(json["metrics"]["teamSize"], 28);
    assert_eq!(json["investors"][1], "Index Ventures");

    let round_trip: Deal = serde_json::from_value(json).unwrap();
    assert_eq!(round_trip, deals[0]);
}
