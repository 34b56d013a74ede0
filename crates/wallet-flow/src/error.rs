//! Flow and storage errors

use crate::profile::ProfileField;
use crate::screen::Screen;

/// Errors raised while resolving a navigation event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The current screen has no edge for this event
    NoTransition { from: Screen, event: String },
    /// Done was requested while required profile fields are blank
    GuardRejected { missing: Vec<ProfileField> },
    /// Back would remove the only history entry
    EmptyHistory,
    /// A resolved transition was applied after the flow had already moved
    Stale { expected: Screen, current: Screen },
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::NoTransition { from, event } => {
                write!(f, "No transition from {} on {}", from.route(), event)
            }
            FlowError::GuardRejected { missing } => {
                let names: Vec<&str> = missing.iter().map(|field| field.label()).collect();
                write!(f, "Profile incomplete: {}", names.join(", "))
            }
            FlowError::EmptyHistory => write!(f, "Navigation history would become empty"),
            FlowError::Stale { expected, current } => write!(
                f,
                "Transition resolved on {} but current screen is {}",
                expected.route(),
                current.route()
            ),
        }
    }
}

impl std::error::Error for FlowError {}

/// Preference storage errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached
    Unavailable(String),
    /// A stored value could not be read as a boolean
    Corrupt { key: String, value: String },
    /// Backend-specific failure
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Preference store unavailable: {}", msg),
            StoreError::Corrupt { key, value } => {
                write!(f, "Preference {} holds non-boolean value {:?}", key, value)
            }
            StoreError::Backend(msg) => write!(f, "Preference store error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
