#![cfg(not(target_arch = "wasm32"))]

use deal_catalog_wasm::application::{CatalogController, CatalogState};
use deal_catalog_wasm::domain::errors::FetchError;
use deal_catalog_wasm::global_state::catalog_state;
use deal_catalog_wasm::infrastructure::api::MockDealApi;
use deal_catalog_wasm::infrastructure::api::seed::seed_deals;
use leptos::SignalWithUntracked;

#[test]
fn failed_fetch_is_terminal_until_the_user_retries() {
    let controller = CatalogController::new(MockDealApi::new());

    assert!(controller.begin_fetch());
    controller.finish_fetch(Err(FetchError::new("Failed to fetch deals. Please try again.")));

    // the failure message is held for the error view, prior data discarded
    catalog_state().with_untracked(|state| {
        assert_eq!(state.error_message(), Some("Failed to fetch deals. Please try again."));
        assert!(state.deals().is_none());
    });
    assert!(controller.filtered_deals().is_empty());

    // the only recovery path: an explicit retry re-enters Loading
    assert!(controller.begin_fetch());
    assert!(catalog_state().with_untracked(CatalogState::is_loading));

    controller.finish_fetch(Ok(seed_deals()));
    catalog_state().with_untracked(|state| {
        assert_eq!(state.deals().map(|deals| deals.len()), Some(6));
    });
}
