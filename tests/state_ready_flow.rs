#![cfg(not(target_arch = "wasm32"))]

use deal_catalog_wasm::application::{CatalogController, CatalogState};
use deal_catalog_wasm::global_state::{
    catalog_state, fetch_in_flight, min_score_input, name_filter, selected_deal,
};
use deal_catalog_wasm::infrastructure::api::MockDealApi;
use deal_catalog_wasm::infrastructure::api::seed::seed_deals;
use leptos::{SignalGetUntracked, SignalWithUntracked};

#[test]
fn fetch_lifecycle_reaches_ready_with_default_criteria() {
    let controller = CatalogController::new(MockDealApi::new());

    // start -> Loading
    assert!(controller.begin_fetch());
    assert!(catalog_state().with_untracked(CatalogState::is_loading));
    assert!(fetch_in_flight().get_untracked());
    assert!(selected_deal().get_untracked().is_none());

    // a resolved fetch lands in Ready with the returned set
    controller.finish_fetch(Ok(seed_deals()));
    assert!(!fetch_in_flight().get_untracked());
    catalog_state().with_untracked(|state| {
        let deals = state.deals().expect("state should be Ready");
        assert_eq!(deals.len(), 6);
    });

    // criteria stay at their defaults
    assert_eq!(name_filter().get_untracked(), "");
    assert_eq!(min_score_input().get_untracked(), "");
    assert_eq!(controller.filtered_deals().len(), 6);
}
