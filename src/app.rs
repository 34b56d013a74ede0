//! E-wallet Frontend App
//!
//! Reads the first-launch flag, then renders whichever screen is on top of
//! the navigator.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wallet_flow::Screen;

use crate::context::AppContext;
use crate::screens::{ActivityScreen, HomeScreen, ProfileSetupScreen, WelcomeScreen};
use crate::session::Session;
use crate::store::{store_start, AppState, AppStateStoreFields, LaunchPhase};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let session = Session::detect();

    provide_context(AppContext::new(store, session));

    // Load launch state on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let launch = session.load_launch_state().await;
            web_sys::console::log_1(
                &format!("[APP] {:?} session, first launch = {}", session, launch.is_first_launch).into(),
            );
            store_start(&store, launch);
        });
    });

    let current = Memo::new(move |_| store.navigator().read().current());

    view! {
        <div class="phone-frame">
            {move || match store.phase().get() {
                LaunchPhase::Loading => view! { <div class="splash-loading">"🪙"</div> }.into_any(),
                LaunchPhase::Ready => match current.get() {
                    Screen::Welcome => view! { <WelcomeScreen /> }.into_any(),
                    Screen::ProfileSetup => view! { <ProfileSetupScreen /> }.into_any(),
                    Screen::Home => view! { <HomeScreen /> }.into_any(),
                    Screen::ActivityDetail => view! { <ActivityScreen /> }.into_any(),
                },
            }}
        </div>
    }
}
