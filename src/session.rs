//! Session Bridge
//!
//! Where the first-launch flag lives: the Tauri backend when running in the
//! shell, `localStorage` otherwise. Failures fall back to first launch.

use wallet_flow::{LaunchRouter, LaunchState, StoreError, Transition};

use crate::commands;
use crate::local_prefs::LocalStoragePreferences;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Session {
    Tauri,
    Browser,
}

impl Session {
    pub fn detect() -> Self {
        if commands::tauri_available() {
            Session::Tauri
        } else {
            Session::Browser
        }
    }

    pub async fn load_launch_state(self) -> LaunchState {
        let loaded = match self {
            Session::Tauri => commands::load_launch_state().await,
            Session::Browser => browser_router()
                .and_then(|router| router.try_launch_state())
                .map_err(|e| e.to_string()),
        };

        loaded.unwrap_or_else(|e| {
            web_sys::console::warn_1(
                &format!("[SESSION] Failed to load launch state: {}, assuming first launch", e).into(),
            );
            LaunchState::default()
        })
    }

    /// Persist whatever `transition` changes about the launch state.
    /// The backend owns its router, so in the shell this maps to a command.
    pub async fn commit(self, transition: Transition) -> Result<(), String> {
        match self {
            Session::Tauri if transition.completes_onboarding => commands::complete_onboarding().await,
            Session::Tauri => Ok(()),
            Session::Browser => browser_router()
                .and_then(|mut router| router.commit(&transition))
                .map_err(|e| e.to_string()),
        }
    }
}

fn browser_router() -> Result<LaunchRouter<LocalStoragePreferences>, StoreError> {
    LocalStoragePreferences::open().map(LaunchRouter::new)
}
