//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use wallet_flow::{LaunchState, Navigator};

/// Whether the first-launch flag has been read yet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaunchPhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub phase: LaunchPhase,
    /// Screen history; its top is the visible screen
    pub navigator: Navigator,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Position the flow on the initial screen for `launch`
pub fn store_start(store: &AppStore, launch: LaunchState) {
    store.navigator().set(launch.navigator());
    store.phase().set(LaunchPhase::Ready);
}
