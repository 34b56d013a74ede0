//! E-wallet Backend
//!
//! Layered architecture:
//! - domain: error types and the stored preference record
//! - repository: SQLite connection, migrations and the preference store
//! - commands: Tauri command handlers for the launch flow

use std::path::PathBuf;

use tauri::Manager;
use tokio::sync::Mutex;
use wallet_flow::LaunchRouter;

mod domain;
mod repository;
mod commands;

use domain::{DomainError, DomainResult};
use repository::AppPreferences;

/// Application state shared across commands
pub struct AppState {
    pub router: Mutex<LaunchRouter<AppPreferences>>,
}

impl AppState {
    pub fn new(preferences: AppPreferences) -> Self {
        Self {
            router: Mutex::new(LaunchRouter::new(preferences)),
        }
    }
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> DomainResult<PathBuf> {
    let app_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| DomainError::Internal(format!("No app data dir: {}", e)))?;
    std::fs::create_dir_all(&app_dir)
        .map_err(|e| DomainError::Internal(format!("Failed to create {}: {}", app_dir.display(), e)))?;
    Ok(app_dir.join("ewallet.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle().clone();

            // Initialize logging; the app still runs without a log file
            match app_handle.path().app_log_dir() {
                Ok(log_dir) => {
                    if let Err(e) = rolling_logger::init_logger(log_dir, "EWallet") {
                        eprintln!("Failed to init rolling logger: {}", e);
                    }
                }
                Err(e) => eprintln!("No log dir: {}", e),
            }

            // The frontend asks for the launch state right after mount, so the
            // store has to be ready before the window loads.
            let preferences = AppPreferences::open(get_db_path(&app_handle));
            let persistent = preferences.is_persistent();
            app.manage(AppState::new(preferences));

            let _ = rolling_logger::info(&format!("App setup complete (persistent = {})", persistent));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::load_launch_state,
            commands::complete_onboarding,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
