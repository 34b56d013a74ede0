//! Card Stack Component
//!
//! Overlapping payment cards on the home screen; the last card sits on top.

use leptos::prelude::*;
use wallet_flow::catalog::{self, Icon, PaymentCard};

#[component]
pub fn CardStack() -> impl IntoView {
    view! {
        <div class="card-stack">
            {catalog::CARDS
                .iter()
                .enumerate()
                .map(|(depth, card)| view! { <StackedCard card=*card depth=depth /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn StackedCard(card: PaymentCard, depth: usize) -> impl IntoView {
    let class = format!("payment-card depth-{} {}", depth, card.tone.css_class());

    match (card.number, card.holder, card.expiry) {
        (Some(number), Some(holder), Some(expiry)) => view! {
            <div class=class>
                <div class="card-row">
                    <span class="card-brand">{card.brand}</span>
                    <span class="card-chip"></span>
                </div>
                <div class="card-number">{number}</div>
                <div class="card-row">
                    <div class="card-field">
                        <span class="card-caption">"Holder"</span>
                        <span class="card-value">{holder}</span>
                    </div>
                    <div class="card-field align-end">
                        <span class="card-caption">"Exp Date"</span>
                        <span class="card-value">{expiry}</span>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        // "Add new card" placeholder carries a plus badge, wallets just a name
        _ if card.tone == catalog::Tone::Dark => view! {
            <div class=class>
                <div class="card-row">
                    <span class="card-title">{card.brand}</span>
                    <span class="card-add" aria-label="Add Card">{Icon::Add.glyph()}</span>
                </div>
            </div>
        }
        .into_any(),
        _ => view! {
            <div class=class>
                <span class="card-brand">{card.brand}</span>
            </div>
        }
        .into_any(),
    }
}
