//! Home Screen
//!
//! Payment dashboard. Only the Activity action navigates; the other three
//! actions are inert.

use leptos::prelude::*;
use wallet_flow::catalog::{self, Icon};
use wallet_flow::{Event, HomeAction};

use crate::components::{ActionButton, CardStack, TransactionItem};
use crate::context::use_app_context;

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_app_context();
    let on_select = Callback::new(move |action: HomeAction| {
        ctx.dispatch(Event::SelectAction(action));
    });

    view! {
        <section class="screen home-screen">
            <header class="home-header">
                <div>
                    <p class="muted">{catalog::GREETING}</p>
                    <h1 class="home-title">{catalog::WELCOME_BACK}</h1>
                </div>
                <div class="avatar"></div>
            </header>

            <CardStack />

            <nav class="action-row">
                {HomeAction::ALL
                    .into_iter()
                    .map(|action| view! { <ActionButton action=action on_select=on_select /> })
                    .collect_view()}
            </nav>

            <div class="section-header">
                <h2 class="section-title">"All Transactions"</h2>
                <span class="muted">
                    {catalog::TRANSACTIONS_PERIOD} " " {Icon::ChevronDown.glyph()}
                </span>
            </div>

            <ul class="transaction-list">
                {catalog::TRANSACTIONS
                    .iter()
                    .map(|record| view! { <TransactionItem record=*record /> })
                    .collect_view()}
            </ul>
        </section>
    }
}
