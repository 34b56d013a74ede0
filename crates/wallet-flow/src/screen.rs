//! Screens of the navigation graph.
//!
//! - [`Screen::Welcome`]: splash with the "Get Started" action, first launch only
//! - [`Screen::ProfileSetup`]: profile and optional card entry form
//! - [`Screen::Home`]: payment dashboard with cards, actions and transactions
//! - [`Screen::ActivityDetail`]: spending summary, chart and categories

use serde::{Deserialize, Serialize};

/// One full-viewport state of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    ProfileSetup,
    Home,
    ActivityDetail,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Welcome,
        Screen::ProfileSetup,
        Screen::Home,
        Screen::ActivityDetail,
    ];

    /// Stable route name, also used as the wire name
    pub const fn route(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::ProfileSetup => "profile_setup",
            Screen::Home => "home",
            Screen::ActivityDetail => "activity_detail",
        }
    }

    /// Onboarding screens are shown only before the first-launch flag is cleared.
    pub const fn is_onboarding(self) -> bool {
        matches!(self, Screen::Welcome | Screen::ProfileSetup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_matches_wire_name() {
        for screen in Screen::ALL {
            let json = serde_json::to_string(&screen).unwrap();
            assert_eq!(json, format!("\"{}\"", screen.route()));
        }
    }

    #[test]
    fn test_onboarding_screens() {
        assert!(Screen::Welcome.is_onboarding());
        assert!(Screen::ProfileSetup.is_onboarding());
        assert!(!Screen::Home.is_onboarding());
        assert!(!Screen::ActivityDetail.is_onboarding());
    }
}
