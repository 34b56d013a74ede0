//! Launch Commands
//!
//! First-launch flag access for the frontend's launch router.

use tauri::State;
use tokio::sync::Mutex;
use wallet_flow::{LaunchRouter, LaunchState, PreferenceStore};

use crate::AppState;

/// Current first-launch flag. Never fails: an unreadable flag reads as first launch.
#[tauri::command]
pub async fn load_launch_state(state: State<'_, AppState>) -> Result<LaunchState, String> {
    Ok(read_launch_state(&state.router).await)
}

/// Clear the first-launch flag after the welcome screen
#[tauri::command]
pub async fn complete_onboarding(state: State<'_, AppState>) -> Result<(), String> {
    finish_onboarding(&state.router).await
}

pub(crate) async fn read_launch_state<S: PreferenceStore>(router: &Mutex<LaunchRouter<S>>) -> LaunchState {
    let router = router.lock().await;
    let launch = router.launch_state();
    log::info!("Launch state: first launch = {}", launch.is_first_launch);
    launch
}

pub(crate) async fn finish_onboarding<S: PreferenceStore>(router: &Mutex<LaunchRouter<S>>) -> Result<(), String> {
    let mut router = router.lock().await;
    router.complete_onboarding().map_err(|e| {
        let _ = rolling_logger::error(&format!("Failed to complete onboarding: {}", e));
        e.to_string()
    })?;
    let _ = rolling_logger::info("Onboarding flag cleared");
    Ok(())
}
