//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod launch_cmd;

pub use launch_cmd::*;
