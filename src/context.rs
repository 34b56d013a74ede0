//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wallet_flow::{Event, FlowError, Transition};

use crate::session::Session;
use crate::store::{AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub session: Session,
}

impl AppContext {
    pub fn new(store: AppStore, session: Session) -> Self {
        Self { store, session }
    }

    /// Feed a user event into the navigator. The transition's side effect is
    /// persisted before the screen changes.
    pub fn dispatch(&self, event: Event) {
        let store = self.store;
        let resolved = store.navigator().read_untracked().resolve(&event);
        let transition = match resolved {
            Ok(transition) => transition,
            Err(FlowError::NoTransition { from, event }) => {
                web_sys::console::log_1(
                    &format!("[NAV] {} has no effect on {}", event, from.route()).into(),
                );
                return;
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[NAV] {}", e).into());
                return;
            }
        };

        let session = self.session;
        spawn_local(async move {
            if let Err(e) = session.commit(transition).await {
                web_sys::console::error_1(
                    &format!("[NAV] Failed to persist transition: {}", e).into(),
                );
            }
            apply(store, transition);
        });
    }
}

fn apply(store: AppStore, transition: Transition) {
    if let Err(e) = store.navigator().write().apply(&transition) {
        web_sys::console::warn_1(&format!("[NAV] {}", e).into());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
