//! Transaction Item Component

use leptos::prelude::*;
use wallet_flow::catalog::TransactionRecord;

#[component]
pub fn TransactionItem(record: TransactionRecord) -> impl IntoView {
    view! {
        <li class="transaction-item">
            <span class="icon-box" aria-hidden="true">{record.icon.glyph()}</span>
            <div class="transaction-text">
                <span class="transaction-description">{record.description}</span>
                <span class="transaction-kind">{record.kind.label()}</span>
            </div>
            <span class="transaction-amount">{record.amount}</span>
        </li>
    }
}
