//! Launch Router
//!
//! Reads the persisted first-launch flag through an injected
//! [`PreferenceStore`] and picks the initial screen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::navigation::{Navigator, Transition};
use crate::screen::Screen;

pub const PREFS_NAMESPACE: &str = "MyPaymentAppPrefs";
pub const KEY_FIRST_LAUNCH: &str = "is_first_launch";

/// Durable per-installation key-value storage for booleans
pub trait PreferenceStore {
    /// Stored value, or `None` if the key was never written
    fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, StoreError>;

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) -> Result<(), StoreError>;
}

/// In-process store, used in tests and when no durable backend exists
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<(String, String), bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.values.get(&(namespace.to_string(), key.to_string())).copied())
    }

    fn put_bool(&mut self, namespace: &str, key: &str, value: bool) -> Result<(), StoreError> {
        self.values.insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}

/// Snapshot of the first-launch flag, as sent to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchState {
    pub is_first_launch: bool,
}

impl Default for LaunchState {
    fn default() -> Self {
        Self { is_first_launch: true }
    }
}

impl LaunchState {
    pub fn initial_screen(self) -> Screen {
        if self.is_first_launch {
            Screen::Welcome
        } else {
            Screen::Home
        }
    }

    /// Navigator positioned on the initial screen with no history below it
    pub fn navigator(self) -> Navigator {
        Navigator::new(self.initial_screen())
    }
}

pub struct LaunchRouter<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> LaunchRouter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current flag, surfacing read failures. A missing flag is a first launch.
    pub fn try_launch_state(&self) -> Result<LaunchState, StoreError> {
        let flag = self.store.get_bool(PREFS_NAMESPACE, KEY_FIRST_LAUNCH)?;
        Ok(flag.map_or_else(LaunchState::default, |is_first_launch| LaunchState { is_first_launch }))
    }

    /// Current flag. A failed read counts as first launch so onboarding is
    /// shown again rather than skipped.
    pub fn launch_state(&self) -> LaunchState {
        self.try_launch_state().unwrap_or_else(|e| {
            log::warn!("Failed to read {}: {}, assuming first launch", KEY_FIRST_LAUNCH, e);
            LaunchState::default()
        })
    }

    pub fn initial_screen(&self) -> Screen {
        self.launch_state().initial_screen()
    }

    pub fn start(&self) -> Navigator {
        self.launch_state().navigator()
    }

    /// Clear the first-launch flag
    pub fn complete_onboarding(&mut self) -> Result<(), StoreError> {
        self.store.put_bool(PREFS_NAMESPACE, KEY_FIRST_LAUNCH, false)?;
        log::info!("Onboarding completed, {} cleared", KEY_FIRST_LAUNCH);
        Ok(())
    }

    /// Run the durable side effect of `transition`, if it has one. Call before
    /// applying the transition to the navigator.
    pub fn commit(&mut self, transition: &Transition) -> Result<(), StoreError> {
        if transition.completes_onboarding {
            self.complete_onboarding()?;
        }
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Event, HomeAction};
    use crate::profile::{ProfileField, ProfileForm};

    /// Store whose reads always fail
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get_bool(&self, _namespace: &str, _key: &str) -> Result<Option<bool>, StoreError> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }

        fn put_bool(&mut self, _namespace: &str, _key: &str, _value: bool) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk gone".to_string()))
        }
    }

    #[test]
    fn test_first_run_starts_on_welcome() {
        let router = LaunchRouter::new(MemoryPreferences::new());
        assert!(router.launch_state().is_first_launch);
        assert_eq!(router.initial_screen(), Screen::Welcome);
        assert_eq!(router.start().history(), &[Screen::Welcome]);
    }

    #[test]
    fn test_returning_user_starts_on_home() {
        let mut prefs = MemoryPreferences::new();
        prefs.put_bool(PREFS_NAMESPACE, KEY_FIRST_LAUNCH, false).unwrap();

        let router = LaunchRouter::new(prefs);
        let nav = router.start();
        assert_eq!(nav.current(), Screen::Home);
        assert!(nav.history().iter().all(|screen| !screen.is_onboarding()));
    }

    #[test]
    fn test_get_started_persists_flag_and_restart_skips_onboarding() {
        let mut router = LaunchRouter::new(MemoryPreferences::new());
        let mut nav = router.start();

        let transition = nav.resolve(&Event::GetStarted).unwrap();
        router.commit(&transition).unwrap();
        nav.apply(&transition).unwrap();

        assert_eq!(nav.current(), Screen::ProfileSetup);
        assert!(!router.launch_state().is_first_launch);

        // restart with the same storage
        let restarted = LaunchRouter::new(router.into_store());
        assert_eq!(restarted.initial_screen(), Screen::Home);
    }

    #[test]
    fn test_commit_ignores_other_transitions() {
        let mut router = LaunchRouter::new(MemoryPreferences::new());
        let nav = Navigator::new(Screen::Home);
        let transition = nav.resolve(&Event::SelectAction(HomeAction::Activity)).unwrap();

        router.commit(&transition).unwrap();
        assert!(router.launch_state().is_first_launch);
        assert_eq!(router.store().get_bool(PREFS_NAMESPACE, KEY_FIRST_LAUNCH), Ok(None));
    }

    #[test]
    fn test_profile_done_does_not_touch_flag() {
        let mut prefs = MemoryPreferences::new();
        prefs.put_bool(PREFS_NAMESPACE, KEY_FIRST_LAUNCH, true).unwrap();
        let mut router = LaunchRouter::new(prefs);

        let nav = Navigator::new(Screen::ProfileSetup);
        let form = ProfileForm::new()
            .with(ProfileField::Name, "a")
            .with(ProfileField::Contact, "b")
            .with(ProfileField::Password, "c");
        let transition = nav.resolve(&Event::Done(form)).unwrap();
        router.commit(&transition).unwrap();

        assert!(router.launch_state().is_first_launch);
    }

    #[test]
    fn test_complete_onboarding_is_idempotent() {
        let mut router = LaunchRouter::new(MemoryPreferences::new());
        router.complete_onboarding().unwrap();
        router.complete_onboarding().unwrap();
        assert_eq!(router.initial_screen(), Screen::Home);
    }

    #[test]
    fn test_read_failure_falls_back_to_first_launch() {
        let mut router = LaunchRouter::new(BrokenStore);
        assert_eq!(router.initial_screen(), Screen::Welcome);
        assert!(router.complete_onboarding().is_err());
    }

    #[test]
    fn test_try_launch_state_reports_read_failure() {
        let router = LaunchRouter::new(BrokenStore);
        assert_eq!(
            router.try_launch_state(),
            Err(StoreError::Unavailable("disk gone".to_string()))
        );

        let fresh = LaunchRouter::new(MemoryPreferences::new());
        assert_eq!(fresh.try_launch_state(), Ok(LaunchState { is_first_launch: true }));
    }

    #[test]
    fn test_launch_state_wire_format() {
        let json = serde_json::to_string(&LaunchState { is_first_launch: false }).unwrap();
        assert_eq!(json, r#"{"is_first_launch":false}"#);
    }
}
