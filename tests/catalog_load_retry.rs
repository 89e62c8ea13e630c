#![cfg(target_arch = "wasm32")]

use deal_catalog_wasm::application::{CatalogController, CatalogState};
use deal_catalog_wasm::global_state::{catalog_state, selected_deal};
use deal_catalog_wasm::infrastructure::api::MockDealApi;
use leptos::{SignalGetUntracked, SignalWithUntracked};
use wasm_bindgen_test::*;
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn instant_api(failure_rate: f64) -> MockDealApi {
    MockDealApi::new().with_failure_rate(failure_rate).with_latency((0, 0), (0, 0))
}

#[wasm_bindgen_test]
async fn load_then_retry_recovers_from_a_failure() {
    // a guaranteed failure leaves the controller in Error
    let failing = CatalogController::new(instant_api(1.0));
    failing.load_catalog().await;
    catalog_state().with_untracked(|state| {
        assert_eq!(state.error_message(), Some("Failed to fetch deals. Please try again."));
    });
    assert!(selected_deal().get_untracked().is_none());

    // the user-triggered retry re-runs the fetch; a deterministic success
    // transitions to Ready with the fresh dataset
    let recovering = CatalogController::new(instant_api(0.0));
    recovering.load_catalog().await;
    catalog_state().with_untracked(|state| {
        assert!(state.is_ready());
        assert_eq!(state.deals().map(|deals| deals.len()), Some(6));
    });
    assert_eq!(recovering.filtered_deals().len(), 6);
}

#[wasm_bindgen_test]
async fn loading_never_coexists_with_a_selection() {
    let controller = CatalogController::new(instant_api(0.0));
    controller.load_catalog().await;

    let deal = catalog_state().with_untracked(|state| state.deals().unwrap()[0].clone());
    assert!(controller.select_deal(deal));
    assert!(selected_deal().get_untracked().is_some());

    // entering Loading for a re-fetch drops the selection before anything else
    assert!(controller.begin_fetch());
    assert!(catalog_state().with_untracked(CatalogState::is_loading));
    assert!(selected_deal().get_untracked().is_none());

    controller.finish_fetch(Ok(Vec::new()));
}
