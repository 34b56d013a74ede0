//! Activity Screen
//!
//! Spending summary reached from the home screen's Activity action.

use leptos::prelude::*;
use wallet_flow::catalog::{self, Icon};
use wallet_flow::Event;

use crate::components::{CategoryCard, SpendingChart, SummaryCard};
use crate::context::use_app_context;

#[component]
pub fn ActivityScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="screen activity-screen">
            <header class="activity-header">
                <button
                    class="icon-btn"
                    aria-label="Back"
                    on:click=move |_| ctx.dispatch(Event::Back)
                >
                    {Icon::Back.glyph()}
                </button>
                <h1 class="activity-title">"Activity"</h1>
                <span class="icon-btn" aria-label="More Options">{Icon::More.glyph()}</span>
            </header>

            <div class="total-spending">
                <span class="muted">"Total Spending"</span>
                <span class="total-amount">{catalog::TOTAL_SPENDING}</span>
            </div>

            <SpendingChart />

            <div class="summary-row">
                {catalog::SUMMARY
                    .iter()
                    .map(|tile| view! { <SummaryCard tile=*tile /> })
                    .collect_view()}
            </div>

            <div class="section-header">
                <h2 class="section-title">"Categories"</h2>
                <span class="muted">
                    {catalog::CATEGORY_FILTER} " " {Icon::ChevronDown.glyph()}
                </span>
            </div>

            <div class="category-row">
                {catalog::CATEGORIES
                    .iter()
                    .map(|category| view! { <CategoryCard category=*category /> })
                    .collect_view()}
            </div>
        </section>
    }
}
