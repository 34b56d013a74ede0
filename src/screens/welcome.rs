//! Welcome Screen
//!
//! Shown on first launch only. "Get Started" clears the first-launch flag
//! and replaces this screen with profile setup.

use leptos::prelude::*;
use wallet_flow::catalog::{self, Icon};
use wallet_flow::Event;

use crate::context::use_app_context;

#[component]
pub fn WelcomeScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="screen welcome-screen">
            <div class="welcome-badge">
                <span class="welcome-coin">{Icon::Coin.glyph()}</span>
            </div>
            <h1 class="welcome-title">{catalog::WELCOME_TITLE}</h1>
            <p class="welcome-tagline">{catalog::WELCOME_TAGLINE}</p>
            <button class="primary-btn" on:click=move |_| ctx.dispatch(Event::GetStarted)>
                "Get Started"
            </button>
        </section>
    }
}
