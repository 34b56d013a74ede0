//! Wallet Flow
//!
//! UI-free core of the E-wallet app:
//! - screen: the four screens of the navigation graph
//! - navigation: transition table and history-keeping navigator
//! - launch: first-launch flag and the router that picks the initial screen
//! - profile: profile-setup form state and its submit guard
//! - catalog: hardcoded sample data rendered by the screens

mod error;
mod screen;
mod navigation;
mod launch;
mod profile;
pub mod catalog;

pub use error::{FlowError, StoreError};
pub use screen::Screen;
pub use navigation::{
    Edge, Event, HistoryOp, HomeAction, Navigator, Transition, Trigger, TRANSITIONS,
};
pub use launch::{
    LaunchRouter, LaunchState, MemoryPreferences, PreferenceStore, KEY_FIRST_LAUNCH,
    PREFS_NAMESPACE,
};
pub use profile::{ProfileField, ProfileForm};
