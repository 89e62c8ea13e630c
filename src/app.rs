use leptos::*;

use crate::application::catalog_controller::{CatalogController, CatalogState};
use crate::domain::deals::{Amount, Deal, DealStats, FundingStage};
use crate::global_state::{catalog_state, min_score_input, name_filter, selected_deal};
use crate::infrastructure::api::MockDealApi;

/// Badge class for a deal score: green from 9, neutral from 8, amber from 7
fn score_badge_class(score: f64) -> &'static str {
    if score >= 9.0 {
        "score-success"
    } else if score >= 8.0 {
        "score-default"
    } else if score >= 7.0 {
        "score-warning"
    } else {
        "score-secondary"
    }
}

/// Per-stage badge tint
fn stage_class(stage: FundingStage) -> &'static str {
    match stage {
        FundingStage::Seed => "stage-seed",
        FundingStage::SeriesA => "stage-series-a",
        FundingStage::SeriesB => "stage-series-b",
        FundingStage::SeriesC => "stage-series-c",
    }
}

/// 🦀 Root component: wires the controller to the global signals, fires the
/// initial catalog fetch and switches between the four screens.
#[component]
pub fn App() -> impl IntoView {
    let controller = CatalogController::new(MockDealApi::new());

    // fetch-on-mount; retries re-enter through the same path
    {
        let controller = controller.clone();
        spawn_local(async move {
            controller.load_catalog().await;
        });
    }

    // Escape closes the detail view
    {
        let controller = controller.clone();
        let _ = window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" {
                controller.clear_selection();
            }
        });
    }

    let view_controller = controller.clone();

    view! {
        <style>
            {r#"
            .deal-catalog-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #f6f7fb;
                min-height: 100vh;
                color: #1d2433;
            }

            .header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 24px 32px;
                background: white;
                border-bottom: 1px solid #e3e7ef;
                position: sticky;
                top: 0;
                z-index: 10;
            }

            .header h1 {
                margin: 0;
                font-size: 28px;
                font-weight: 700;
            }

            .subtitle {
                margin: 4px 0 0;
                color: #6b7280;
            }

            .back-btn {
                border: none;
                background: #eef2ff;
                color: #4338ca;
                padding: 10px 16px;
                border-radius: 6px;
                font-size: 14px;
                font-weight: 500;
                cursor: pointer;
            }

            .back-btn:hover {
                background: #e0e7ff;
            }

            .content {
                max-width: 1100px;
                margin: 0 auto;
                padding: 32px 24px;
            }

            .loading-view, .error-view, .empty-state {
                display: flex;
                flex-direction: column;
                align-items: center;
                padding: 64px 0;
                text-align: center;
            }

            .spinner {
                width: 48px;
                height: 48px;
                border: 3px solid #e3e7ef;
                border-bottom-color: #4338ca;
                border-radius: 50%;
                animation: spin 0.9s linear infinite;
                margin-bottom: 16px;
            }

            @keyframes spin {
                to { transform: rotate(360deg); }
            }

            .error-title {
                font-size: 18px;
                font-weight: 600;
                margin: 0 0 8px;
            }

            .error-message {
                color: #6b7280;
                margin: 0 0 16px;
            }

            .retry-btn, .primary-btn {
                background: #4338ca;
                color: white;
                border: none;
                padding: 10px 18px;
                border-radius: 6px;
                font-size: 14px;
                cursor: pointer;
            }

            .retry-btn:hover, .primary-btn:hover {
                background: #3730a3;
            }

            .stats-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                gap: 16px;
                margin-bottom: 24px;
            }

            .stat-card {
                background: white;
                border: 1px solid #e3e7ef;
                border-radius: 10px;
                padding: 20px;
            }

            .stat-card.stat-deals { border-left: 4px solid #3b82f6; }
            .stat-card.stat-capital { border-left: 4px solid #22c55e; }
            .stat-card.stat-score { border-left: 4px solid #a855f7; }
            .stat-card.stat-sectors { border-left: 4px solid #f97316; }

            .stat-label {
                margin: 0;
                font-size: 13px;
                color: #6b7280;
                font-weight: 500;
            }

            .stat-value {
                margin: 6px 0 0;
                font-size: 30px;
                font-weight: 700;
            }

            .filter-bar {
                display: flex;
                gap: 16px;
                align-items: flex-end;
                background: white;
                border: 1px solid #e3e7ef;
                border-radius: 10px;
                padding: 20px;
                margin-bottom: 24px;
            }

            .filter-field {
                display: flex;
                flex-direction: column;
            }

            .filter-name { flex: 1; }
            .filter-score { width: 220px; }

            .filter-field label {
                font-size: 13px;
                font-weight: 500;
                margin-bottom: 6px;
            }

            .filter-field input {
                border: 1px solid #d6dbe6;
                border-radius: 6px;
                padding: 9px 12px;
                font-size: 14px;
            }

            .filter-hint {
                margin: 6px 0 0;
                font-size: 12px;
                color: #6b7280;
            }

            .filter-clear button {
                border: 1px solid #d6dbe6;
                background: white;
                color: #6b7280;
                padding: 9px 14px;
                border-radius: 6px;
                font-size: 13px;
                cursor: pointer;
            }

            .results-summary h2 {
                margin: 0 0 4px;
                font-size: 20px;
            }

            .results-count {
                color: #6b7280;
                font-weight: 400;
                margin-left: 6px;
            }

            .results-hint {
                margin: 0 0 20px;
                color: #6b7280;
            }

            .deal-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                gap: 20px;
            }

            .deal-card {
                background: white;
                border: 1px solid #e3e7ef;
                border-radius: 10px;
                padding: 20px;
                cursor: pointer;
                transition: box-shadow 0.15s ease, transform 0.15s ease;
            }

            .deal-card:hover {
                box-shadow: 0 8px 20px rgba(29, 36, 51, 0.08);
                transform: translateY(-2px);
            }

            .card-badges {
                display: flex;
                justify-content: space-between;
                margin-bottom: 12px;
            }

            .badge {
                display: inline-block;
                font-size: 12px;
                font-weight: 600;
                padding: 3px 10px;
                border-radius: 999px;
            }

            .stage-seed { background: #dbeafe; color: #1e40af; }
            .stage-series-a { background: #dcfce7; color: #166534; }
            .stage-series-b { background: #f3e8ff; color: #6b21a8; }
            .stage-series-c { background: #ffedd5; color: #9a3412; }

            .score-success { background: #16a34a; color: white; }
            .score-default { background: #1d2433; color: white; }
            .score-warning { background: #f59e0b; color: white; }
            .score-secondary { background: #e5e7eb; color: #374151; }

            .sector-badge { background: #eef1f6; color: #374151; }

            .card-title {
                margin: 0 0 2px;
                font-size: 17px;
            }

            .card-company {
                margin: 0 0 14px;
                font-size: 13px;
                color: #6b7280;
                font-weight: 500;
            }

            .card-amount-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 14px;
            }

            .card-amount {
                margin: 0;
                font-size: 22px;
                font-weight: 700;
            }

            .card-amount-label {
                margin: 0;
                font-size: 11px;
                color: #6b7280;
            }

            .card-metrics {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 10px;
                margin-bottom: 12px;
            }

            .metric-value {
                margin: 0;
                font-weight: 600;
                font-size: 14px;
            }

            .metric-label {
                margin: 0;
                font-size: 12px;
                color: #6b7280;
            }

            .card-description {
                margin: 0 0 12px;
                font-size: 13px;
                color: #6b7280;
                line-height: 1.5;
            }

            .card-footer {
                display: flex;
                justify-content: space-between;
                padding-top: 10px;
                border-top: 1px solid #eef1f6;
                font-size: 12px;
                color: #6b7280;
            }

            .detail-view {
                max-width: 860px;
                margin: 0 auto;
                display: flex;
                flex-direction: column;
                gap: 20px;
            }

            .detail-card {
                background: white;
                border: 1px solid #e3e7ef;
                border-radius: 10px;
                padding: 24px;
            }

            .detail-card h2 {
                margin: 0 0 8px;
                font-size: 26px;
            }

            .detail-card h3 {
                margin: 0 0 14px;
                font-size: 18px;
            }

            .detail-badges {
                display: flex;
                justify-content: space-between;
                margin-bottom: 14px;
            }

            .detail-badges .badge-group {
                display: flex;
                gap: 10px;
            }

            .detail-meta {
                color: #6b7280;
                margin: 0 0 18px;
            }

            .detail-tiles {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 14px;
                margin-bottom: 18px;
            }

            .detail-tile {
                text-align: center;
                background: #f6f7fb;
                border-radius: 8px;
                padding: 16px;
            }

            .detail-tile .tile-value {
                margin: 0 0 4px;
                font-size: 22px;
                font-weight: 700;
            }

            .detail-tile .tile-label {
                margin: 0;
                font-size: 12px;
                color: #6b7280;
            }

            .detail-description {
                margin: 0;
                line-height: 1.6;
            }

            .detail-columns {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 20px;
            }

            .metrics-grid {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 12px;
            }

            .metrics-grid .metric-cell {
                background: #f6f7fb;
                border-radius: 8px;
                padding: 12px;
            }

            .detail-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 9px 0;
                border-bottom: 1px solid #eef1f6;
            }

            .detail-row:last-child { border-bottom: none; }

            .detail-row .row-label { color: #6b7280; }
            .detail-row .row-value { font-weight: 600; }

            .investor-list {
                display: flex;
                flex-wrap: wrap;
                gap: 8px;
            }

            .investor-badge {
                border: 1px solid #d6dbe6;
                background: white;
                color: #374151;
                font-size: 13px;
                padding: 5px 12px;
                border-radius: 999px;
            }

            .detail-actions {
                display: flex;
                justify-content: center;
                gap: 14px;
                padding-top: 8px;
            }

            .secondary-btn {
                border: 1px solid #d6dbe6;
                background: white;
                color: #1d2433;
                padding: 10px 20px;
                border-radius: 6px;
                font-size: 14px;
                cursor: pointer;
            }
            "#}
        </style>
        <div class="deal-catalog-app">
            <Header controller=controller.clone()/>
            <main class="content">
                {move || {
                    let controller = view_controller.clone();
                    match catalog_state().get() {
                        CatalogState::Error(message) => {
                            view! { <ErrorView message=message controller=controller/> }
                                .into_view()
                        }
                        CatalogState::Loading => view! { <LoadingView/> }.into_view(),
                        CatalogState::Ready(_) => match selected_deal().get() {
                            Some(deal) => {
                                view! { <DealDetail deal=deal controller=controller/> }.into_view()
                            }
                            None => view! { <CatalogView controller=controller/> }.into_view(),
                        },
                    }
                }}
            </main>
        </div>
    }
}

/// Top bar; shows the back action only while a deal is open
#[component]
fn Header(controller: CatalogController) -> impl IntoView {
    let back = move |_| controller.clear_selection();

    view! {
        <header class="header">
            <div>
                <h1>"Investment Deals"</h1>
                <p class="subtitle">"Discover and analyze investment opportunities"</p>
            </div>
            {move || {
                selected_deal().get().map(|_| {
                    view! {
                        <button class="back-btn" on:click=back.clone()>"← Back to List"</button>
                    }
                })
            }}
        </header>
    }
}

#[component]
fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-view">
            <div class="spinner"></div>
            <p>"Loading investment deals..."</p>
        </div>
    }
}

/// Terminal state for one fetch attempt; the only way out is the retry
#[component]
fn ErrorView(message: String, controller: CatalogController) -> impl IntoView {
    let retry = move |_| controller.retry();

    view! {
        <div class="error-view">
            <h3 class="error-title">"Something went wrong"</h3>
            <p class="error-message">{message}</p>
            <button class="retry-btn" on:click=retry>"Try Again"</button>
        </div>
    }
}

/// List screen: stats over the filtered set, filter inputs, card grid
#[component]
fn CatalogView(controller: CatalogController) -> impl IntoView {
    let filter_controller = controller.clone();
    let filtered = create_memo(move |_| filter_controller.filtered_deals());
    let stats_controller = controller.clone();
    let stats = create_memo(move |_| stats_controller.stats(&filtered.get()));
    let total_controller = controller.clone();
    let catalog_total = create_memo(move |_| total_controller.catalog_len());

    view! {
        <div class="catalog-view">
            <StatsBar stats=stats/>
            <FilterBar controller=controller.clone()/>
            <div class="results-summary">
                <h2>
                    "Available Deals"
                    <span class="results-count">
                        {move || {
                            let shown = filtered.get().len();
                            let total = catalog_total.get();
                            if shown == total {
                                format!("({shown})")
                            } else {
                                format!("({shown} of {total})")
                            }
                        }}
                    </span>
                </h2>
                <p class="results-hint">
                    {move || {
                        if filtered.get().is_empty() {
                            "No deals match your filter criteria. Try adjusting your filters."
                        } else {
                            "Click on any deal to view detailed information"
                        }
                    }}
                </p>
            </div>
            <DealList deals=filtered controller=controller/>
        </div>
    }
}

/// 📊 Aggregate stat tiles over the filtered set
#[component]
fn StatsBar(stats: Memo<DealStats>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <div class="stat-card stat-deals">
                <p class="stat-label">"Total Deals"</p>
                <p class="stat-value">{move || stats.get().count}</p>
            </div>
            <div class="stat-card stat-capital">
                <p class="stat-label">"Total Capital"</p>
                <p class="stat-value">
                    {move || Amount::new(stats.get().total_amount).format_compact()}
                </p>
            </div>
            <div class="stat-card stat-score">
                <p class="stat-label">"Avg Score"</p>
                <p class="stat-value">{move || format!("{}/10", stats.get().avg_score)}</p>
            </div>
            <div class="stat-card stat-sectors">
                <p class="stat-label">"Sectors"</p>
                <p class="stat-value">{move || stats.get().sector_count}</p>
            </div>
        </div>
    }
}

/// Name and minimum-score inputs; criteria live in global signals so the
/// filtered view and stats recompute reactively
#[component]
fn FilterBar(controller: CatalogController) -> impl IntoView {
    let name = name_filter();
    let min_score = min_score_input();

    let on_name = {
        let controller = controller.clone();
        move |ev| controller.set_name_filter(event_target_value(&ev))
    };
    let on_score = {
        let controller = controller.clone();
        move |ev| controller.set_min_score_input(event_target_value(&ev))
    };
    let on_clear = {
        let controller = controller.clone();
        move |_| controller.clear_filters()
    };

    view! {
        <div class="filter-bar">
            <div class="filter-field filter-name">
                <label for="name-search">"Search by Name"</label>
                <input
                    id="name-search"
                    type="text"
                    placeholder="Search deals by name..."
                    prop:value=move || name.get()
                    on:input=on_name
                />
            </div>
            <div class="filter-field filter-score">
                <label for="score-filter">"Minimum Score"</label>
                <input
                    id="score-filter"
                    type="number"
                    min="0"
                    max="10"
                    step="0.1"
                    placeholder="0.0"
                    prop:value=move || min_score.get()
                    on:input=on_score
                />
                <p class="filter-hint">
                    {move || {
                        let raw = min_score.get();
                        let shown = if raw.is_empty() { "0".to_string() } else { raw };
                        format!("Filter deals with score ≥ {shown}")
                    }}
                </p>
            </div>
            {move || {
                let on_clear = on_clear.clone();
                let active = !(name.get().is_empty() && min_score.get().is_empty());
                active.then(|| {
                    view! {
                        <div class="filter-clear">
                            <button on:click=on_clear>"Clear Filters"</button>
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// Card grid for the filtered deals, or the empty state
#[component]
fn DealList(deals: Memo<Vec<Deal>>, controller: CatalogController) -> impl IntoView {
    let list_controller = controller.clone();

    view! {
        <div class="deal-list">
            {move || {
                let items = deals.get();
                if items.is_empty() {
                    view! {
                        <div class="empty-state">
                            <h3>"No deals available"</h3>
                            <p>"Check back later for new investment opportunities."</p>
                        </div>
                    }
                    .into_view()
                } else {
                    let controller = list_controller.clone();
                    items
                        .into_iter()
                        .map(|deal| {
                            view! { <DealCard deal=deal controller=controller.clone()/> }
                        })
                        .collect_view()
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn DealCard(deal: Deal, controller: CatalogController) -> impl IntoView {
    let select = {
        let deal = deal.clone();
        move |_| {
            controller.select_deal(deal.clone());
        }
    };

    view! {
        <article class="deal-card" on:click=select>
            <div class="card-badges">
                <span class=format!("badge {}", stage_class(deal.stage))>
                    {deal.stage.label().to_string()}
                </span>
                <span class=format!("badge {}", score_badge_class(deal.score.value()))>
                    {format!("{}/10", deal.score)}
                </span>
            </div>
            <h3 class="card-title">{deal.name}</h3>
            <p class="card-company">{deal.company}</p>
            <div class="card-amount-row">
                <div>
                    <p class="card-amount">{deal.amount.format_full()}</p>
                    <p class="card-amount-label">"Investment Amount"</p>
                </div>
                <span class="badge sector-badge">{deal.sector}</span>
            </div>
            <div class="card-metrics">
                <div>
                    <p class="metric-value">{deal.metrics.revenue}</p>
                    <p class="metric-label">"Revenue"</p>
                </div>
                <div>
                    <p class="metric-value">{deal.metrics.growth}</p>
                    <p class="metric-label">"Growth"</p>
                </div>
            </div>
            <p class="card-description">{deal.description}</p>
            <div class="card-footer">
                <span>{deal.location}</span>
                <span>{format!("Founded {}", deal.founded)}</span>
            </div>
        </article>
    }
}

/// Full-record screen; a pure overlay on `Ready`, no re-fetch involved
#[component]
fn DealDetail(deal: Deal, controller: CatalogController) -> impl IntoView {
    let back = move |_| controller.clear_selection();

    let investors = deal
        .investors
        .iter()
        .map(|investor| view! { <span class="investor-badge">{investor.clone()}</span> })
        .collect_view();

    view! {
        <div class="detail-view">
            <div class="detail-card">
                <div class="detail-badges">
                    <div class="badge-group">
                        <span class=format!("badge {}", stage_class(deal.stage))>
                            {deal.stage.label().to_string()}
                        </span>
                        <span class=format!("badge {}", score_badge_class(deal.score.value()))>
                            {format!("{}/10", deal.score)}
                        </span>
                    </div>
                    <span class="badge sector-badge">{deal.sector.clone()}</span>
                </div>
                <h2>{deal.name.clone()}</h2>
                <p class="detail-meta">
                    {format!("{} • {} • Founded {}", deal.company, deal.location, deal.founded)}
                </p>
                <div class="detail-tiles">
                    <div class="detail-tile">
                        <p class="tile-value">{deal.amount.format_full()}</p>
                        <p class="tile-label">"Investment Amount"</p>
                    </div>
                    <div class="detail-tile">
                        <p class="tile-value">{deal.metrics.revenue.clone()}</p>
                        <p class="tile-label">"Annual Revenue"</p>
                    </div>
                    <div class="detail-tile">
                        <p class="tile-value">{deal.metrics.growth.clone()}</p>
                        <p class="tile-label">"Growth Rate"</p>
                    </div>
                </div>
                <p class="detail-description">{deal.description.clone()}</p>
            </div>

            <div class="detail-columns">
                <div class="detail-card">
                    <h3>"Key Metrics"</h3>
                    <div class="metrics-grid">
                        <div class="metric-cell">
                            <p class="metric-value">{deal.metrics.revenue.clone()}</p>
                            <p class="metric-label">"Annual Recurring Revenue"</p>
                        </div>
                        <div class="metric-cell">
                            <p class="metric-value">{deal.metrics.growth.clone()}</p>
                            <p class="metric-label">"Year-over-Year Growth"</p>
                        </div>
                        <div class="metric-cell">
                            <p class="metric-value">{deal.metrics.customers}</p>
                            <p class="metric-label">"Active Customers"</p>
                        </div>
                        <div class="metric-cell">
                            <p class="metric-value">{deal.metrics.team_size}</p>
                            <p class="metric-label">"Team Members"</p>
                        </div>
                    </div>
                </div>
                <div class="detail-card">
                    <h3>"Investment Details"</h3>
                    <div class="detail-row">
                        <span class="row-label">"Funding Stage"</span>
                        <span class=format!("badge {}", stage_class(deal.stage))>
                            {deal.stage.label().to_string()}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="row-label">"Investment Amount"</span>
                        <span class="row-value">{deal.amount.format_full()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="row-label">"Sector"</span>
                        <span class="badge sector-badge">{deal.sector.clone()}</span>
                    </div>
                    <div class="detail-row">
                        <span class="row-label">"Deal Score"</span>
                        <span class=format!("badge {}", score_badge_class(deal.score.value()))>
                            {format!("{}/10", deal.score)}
                        </span>
                    </div>
                    <div class="detail-row">
                        <span class="row-label">"Founded"</span>
                        <span class="row-value">{deal.founded}</span>
                    </div>
                </div>
            </div>

            <div class="detail-card">
                <h3>"Lead Investors"</h3>
                <div class="investor-list">{investors}</div>
            </div>

            <div class="detail-actions">
                <button class="secondary-btn" on:click=back.clone()>"← Back to List"</button>
                <button class="primary-btn">"Express Interest"</button>
            </div>
        </div>
    }
}
