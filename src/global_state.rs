use leptos::*;
use once_cell::sync::OnceCell;

use crate::application::catalog_controller::CatalogState;
use crate::domain::deals::Deal;

/// Generate accessor functions returning global signals.
///
/// Usage:
/// `global_signals! {
///     pub catalog_state => catalog: CatalogState,
///     pub name_filter => name_filter: String,
/// }`
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                globals().$field
            }
        )+
    };
}

pub struct Globals {
    pub catalog: RwSignal<CatalogState>,
    pub selected_deal: RwSignal<Option<Deal>>,
    pub name_filter: RwSignal<String>,
    pub min_score_input: RwSignal<String>,
    pub fetch_in_flight: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        catalog: create_rw_signal(CatalogState::Loading),
        selected_deal: create_rw_signal(None),
        name_filter: create_rw_signal(String::new()),
        min_score_input: create_rw_signal(String::new()),
        fetch_in_flight: create_rw_signal(false),
    })
}

global_signals! {
    pub catalog_state => catalog: CatalogState,
    pub selected_deal => selected_deal: Option<Deal>,
    pub name_filter => name_filter: String,
    pub min_score_input => min_score_input: String,
    pub fetch_in_flight => fetch_in_flight: bool,
}
