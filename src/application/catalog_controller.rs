use std::rc::Rc;

use leptos::{SignalGet, SignalGetUntracked, SignalSet, SignalWith, SignalWithUntracked,
    spawn_local};

use crate::domain::deals::{Deal, DealAnalysisService, DealStats, FilterCriteria};
use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::global_state::{
    catalog_state, fetch_in_flight, min_score_input, name_filter, selected_deal,
};
use crate::{log_debug, log_error, log_info, log_warn};

/// View-controller state. Selection is an orthogonal overlay on `Ready`,
/// held in its own signal; it is cleared before the state can leave
/// `Ready`, so `Loading` never coexists with a selected deal.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Error(String),
    Ready(Vec<Deal>),
}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogState::Ready(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            CatalogState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn deals(&self) -> Option<&[Deal]> {
        match self {
            CatalogState::Ready(deals) => Some(deals),
            _ => None,
        }
    }
}

/// Orchestrates the repository and the global signals: fetch lifecycle,
/// filter criteria, selection overlay. Presentation components call into
/// this and render whatever the signals derive.
#[derive(Clone)]
pub struct CatalogController {
    api: Rc<crate::infrastructure::api::MockDealApi>,
    analysis: Rc<DealAnalysisService>,
}

impl CatalogController {
    pub fn new(api: crate::infrastructure::api::MockDealApi) -> Self {
        Self { api: Rc::new(api), analysis: Rc::new(DealAnalysisService::new()) }
    }

    /// Enter `Loading` for a fresh fetch. Returns `false` without touching
    /// any state when a fetch is already outstanding - at most one
    /// `list_deals` request is ever in flight.
    pub fn begin_fetch(&self) -> bool {
        if fetch_in_flight().get_untracked() {
            log_debug!(
                LogComponent::Application("CatalogController"),
                "fetch already in flight, ignoring"
            );
            return false;
        }
        fetch_in_flight().set(true);
        selected_deal().set(None);
        catalog_state().set(CatalogState::Loading);
        log_info!(LogComponent::Application("CatalogController"), "📡 Fetching deal catalog...");
        true
    }

    /// Settle the in-flight fetch: `Ready` with the fresh dataset, or
    /// `Error` with the user-facing message. A failure discards any prior
    /// dataset - the UI never shows partial data next to an error.
    pub fn finish_fetch(&self, result: FetchResult<Vec<Deal>>) {
        fetch_in_flight().set(false);
        match result {
            Ok(deals) => {
                log_info!(
                    LogComponent::Application("CatalogController"),
                    "✅ Catalog ready: {} deals",
                    deals.len()
                );
                catalog_state().set(CatalogState::Ready(deals));
            }
            Err(error) => {
                log_error!(
                    LogComponent::Application("CatalogController"),
                    "❌ Catalog fetch failed: {error}"
                );
                catalog_state().set(CatalogState::Error(error.message().to_string()));
            }
        }
    }

    /// The initial fetch and the retry action both run through here.
    pub async fn load_catalog(&self) {
        if !self.begin_fetch() {
            return;
        }
        let result = self.api.list_deals().await;
        self.finish_fetch(result);
    }

    /// User-triggered recovery from the error view.
    pub fn retry(&self) {
        let controller = self.clone();
        spawn_local(async move {
            controller.load_catalog().await;
        });
    }

    /// Select a deal from the visible list. Only honored in `Ready`.
    pub fn select_deal(&self, deal: Deal) -> bool {
        let ready = catalog_state().with_untracked(CatalogState::is_ready);
        if !ready {
            log_warn!(
                LogComponent::Application("CatalogController"),
                "selection ignored outside Ready state"
            );
            return false;
        }
        log_debug!(
            LogComponent::Application("CatalogController"),
            "selected deal {}",
            deal.id.value()
        );
        selected_deal().set(Some(deal));
        true
    }

    /// Back to the list view; dataset and criteria stay as they are.
    pub fn clear_selection(&self) {
        if selected_deal().get_untracked().is_some() {
            selected_deal().set(None);
        }
    }

    pub fn set_name_filter(&self, value: String) {
        name_filter().set(value);
    }

    pub fn set_min_score_input(&self, value: String) {
        min_score_input().set(value);
    }

    pub fn clear_filters(&self) {
        name_filter().set(String::new());
        min_score_input().set(String::new());
    }

    /// Current criteria snapshot (reactive read).
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(name_filter().get(), min_score_input().get())
    }

    /// The filtered view of the loaded catalog; empty outside `Ready`.
    pub fn filtered_deals(&self) -> Vec<Deal> {
        let criteria = self.criteria();
        catalog_state().with(|state| match state {
            CatalogState::Ready(deals) => self.analysis.filter_deals(deals, &criteria),
            _ => Vec::new(),
        })
    }

    /// Stats over a deal sequence (the UI feeds it the filtered view).
    pub fn stats(&self, deals: &[Deal]) -> DealStats {
        self.analysis.compute_stats(deals)
    }

    /// Total size of the loaded catalog, for the "n of m" results summary.
    pub fn catalog_len(&self) -> usize {
        catalog_state().with(|state| state.deals().map_or(0, |deals| deals.len()))
    }
}
