//! Screens
//!
//! One component per node of the navigation graph.

mod welcome;
mod profile_setup;
mod home;
mod activity;

pub use welcome::WelcomeScreen;
pub use profile_setup::ProfileSetupScreen;
pub use home::HomeScreen;
pub use activity::ActivityScreen;
