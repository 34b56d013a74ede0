//! Home Action Button

use leptos::prelude::*;
use wallet_flow::catalog::Icon;
use wallet_flow::HomeAction;

fn action_icon(action: HomeAction) -> Icon {
    match action {
        HomeAction::Deposit => Icon::Deposit,
        HomeAction::Transfer => Icon::Transfer,
        HomeAction::Withdraw => Icon::Withdraw,
        HomeAction::Activity => Icon::Activity,
    }
}

/// Square icon tile with a caption underneath
#[component]
pub fn ActionButton(
    action: HomeAction,
    #[prop(into)] on_select: Callback<HomeAction>,
) -> impl IntoView {
    view! {
        <button class="action-button" on:click=move |_| on_select.run(action)>
            <span class="action-icon" aria-hidden="true">{action_icon(action).glyph()}</span>
            <span class="action-label">{action.label()}</span>
        </button>
    }
}
