//! Income / Expense Summary Card

use leptos::prelude::*;
use wallet_flow::catalog::SummaryTile;

#[component]
pub fn SummaryCard(tile: SummaryTile) -> impl IntoView {
    let class = format!("summary-card {}", tile.tone.css_class());
    view! {
        <div class=class>
            <div class="summary-text">
                <span class="summary-title">{tile.title}</span>
                <span class="summary-amount">{tile.amount}</span>
            </div>
            <span class="summary-trend" aria-label=tile.title>{tile.trend.icon().glyph()}</span>
        </div>
    }
}
