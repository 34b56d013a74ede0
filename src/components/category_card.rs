//! Category Card Component

use leptos::prelude::*;
use wallet_flow::catalog::CategorySummary;

#[component]
pub fn CategoryCard(category: CategorySummary) -> impl IntoView {
    view! {
        <div class="category-card">
            <span class="icon-box" aria-label=category.name>{category.icon.glyph()}</span>
            <span class="category-name">{category.name}</span>
            <span class="category-amount">{category.amount}</span>
        </div>
    }
}
