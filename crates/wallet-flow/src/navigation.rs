//! Navigation State Machine
//!
//! The screen graph is a static transition table. [`Navigator`] keeps the
//! history stack and resolves events against the table, so the whole flow
//! can be exercised without rendering anything.

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::profile::ProfileForm;
use crate::screen::Screen;

/// The four action buttons on the home screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeAction {
    Deposit,
    Transfer,
    Withdraw,
    Activity,
}

impl HomeAction {
    pub const ALL: [HomeAction; 4] = [
        HomeAction::Deposit,
        HomeAction::Transfer,
        HomeAction::Withdraw,
        HomeAction::Activity,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HomeAction::Deposit => "Deposit",
            HomeAction::Transfer => "Transfer",
            HomeAction::Withdraw => "Withdraw",
            HomeAction::Activity => "Activity",
        }
    }
}

/// User input that may move the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// "Get Started" on the welcome screen
    GetStarted,
    /// "Done" on the profile screen, carrying the form it was pressed with
    Done(ProfileForm),
    /// One of the home action buttons
    SelectAction(HomeAction),
    /// Back button on a pushed screen
    Back,
}

impl Event {
    fn trigger(&self) -> Trigger {
        match self {
            Event::GetStarted => Trigger::GetStarted,
            Event::Done(_) => Trigger::Done,
            Event::SelectAction(action) => Trigger::Select(*action),
            Event::Back => Trigger::Back,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Event::GetStarted => "get_started".to_string(),
            Event::Done(_) => "done".to_string(),
            Event::SelectAction(action) => format!("select({})", action.label().to_lowercase()),
            Event::Back => "back".to_string(),
        }
    }
}

/// Table key: an event stripped of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    GetStarted,
    Done,
    Select(HomeAction),
    Back,
}

/// What a transition does to the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOp {
    /// Drop the current entry; the target becomes the only way back
    Replace,
    /// Keep the current entry below the target
    Push,
    /// Return to the entry below the current one
    Pop,
}

/// One row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Screen,
    pub trigger: Trigger,
    pub to: Screen,
    pub op: HistoryOp,
    pub completes_onboarding: bool,
}

pub const TRANSITIONS: &[Edge] = &[
    Edge {
        from: Screen::Welcome,
        trigger: Trigger::GetStarted,
        to: Screen::ProfileSetup,
        op: HistoryOp::Replace,
        completes_onboarding: true,
    },
    Edge {
        from: Screen::ProfileSetup,
        trigger: Trigger::Done,
        to: Screen::Home,
        op: HistoryOp::Replace,
        completes_onboarding: false,
    },
    Edge {
        from: Screen::Home,
        trigger: Trigger::Select(HomeAction::Activity),
        to: Screen::ActivityDetail,
        op: HistoryOp::Push,
        completes_onboarding: false,
    },
    Edge {
        from: Screen::ActivityDetail,
        trigger: Trigger::Back,
        to: Screen::Home,
        op: HistoryOp::Pop,
        completes_onboarding: false,
    },
];

/// A resolved, not yet applied, move between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    pub op: HistoryOp,
    /// The first-launch flag must be cleared when this transition is taken
    pub completes_onboarding: bool,
}

/// History stack over [`Screen`]. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    history: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

impl Navigator {
    pub fn new(initial: Screen) -> Self {
        Self { history: vec![initial] }
    }

    pub fn current(&self) -> Screen {
        // history is never empty
        self.history.last().copied().unwrap_or_default()
    }

    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Look up the transition for `event` without moving.
    pub fn resolve(&self, event: &Event) -> Result<Transition, FlowError> {
        let from = self.current();
        let trigger = event.trigger();
        let edge = TRANSITIONS
            .iter()
            .find(|edge| edge.from == from && edge.trigger == trigger)
            .ok_or_else(|| FlowError::NoTransition { from, event: event.name() })?;

        if let Event::Done(form) = event {
            let missing = form.missing_required();
            if !missing.is_empty() {
                return Err(FlowError::GuardRejected { missing });
            }
        }

        let to = match edge.op {
            HistoryOp::Pop => {
                if !self.can_go_back() {
                    return Err(FlowError::EmptyHistory);
                }
                self.history[self.history.len() - 2]
            }
            HistoryOp::Replace | HistoryOp::Push => edge.to,
        };

        Ok(Transition {
            from,
            to,
            op: edge.op,
            completes_onboarding: edge.completes_onboarding,
        })
    }

    /// Commit a transition produced by [`Navigator::resolve`].
    ///
    /// Rejects transitions resolved against a screen that is no longer current,
    /// e.g. a second tap on a button that already navigated away.
    pub fn apply(&mut self, transition: &Transition) -> Result<Screen, FlowError> {
        let current = self.current();
        if transition.from != current {
            return Err(FlowError::Stale { expected: transition.from, current });
        }

        match transition.op {
            HistoryOp::Replace => {
                self.history.pop();
                self.history.push(transition.to);
            }
            HistoryOp::Push => self.history.push(transition.to),
            HistoryOp::Pop => {
                if !self.can_go_back() {
                    return Err(FlowError::EmptyHistory);
                }
                self.history.pop();
            }
        }

        log::debug!(
            "navigate {} -> {} ({:?})",
            transition.from.route(),
            transition.to.route(),
            transition.op
        );
        Ok(self.current())
    }

    pub fn dispatch(&mut self, event: &Event) -> Result<Screen, FlowError> {
        let transition = self.resolve(event)?;
        self.apply(&transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileField;

    fn complete_form() -> ProfileForm {
        ProfileForm::new()
            .with(ProfileField::Name, "Yusuf")
            .with(ProfileField::Contact, "555-0100")
            .with(ProfileField::Password, "secret")
    }

    #[test]
    fn test_onboarding_path_discards_history() {
        let mut nav = Navigator::new(Screen::Welcome);

        assert_eq!(nav.dispatch(&Event::GetStarted), Ok(Screen::ProfileSetup));
        assert_eq!(nav.history(), &[Screen::ProfileSetup]);
        assert!(!nav.can_go_back());

        assert_eq!(nav.dispatch(&Event::Done(complete_form())), Ok(Screen::Home));
        assert_eq!(nav.history(), &[Screen::Home]);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_get_started_completes_onboarding() {
        let nav = Navigator::new(Screen::Welcome);
        let transition = nav.resolve(&Event::GetStarted).unwrap();
        assert!(transition.completes_onboarding);
        assert_eq!(transition.op, HistoryOp::Replace);

        let only_flag_writer: Vec<_> =
            TRANSITIONS.iter().filter(|edge| edge.completes_onboarding).collect();
        assert_eq!(only_flag_writer.len(), 1);
        assert_eq!(only_flag_writer[0].from, Screen::Welcome);
    }

    #[test]
    fn test_done_guard_rejects_incomplete_form() {
        let mut nav = Navigator::new(Screen::ProfileSetup);
        let form = complete_form().with(ProfileField::Password, "");

        let err = nav.dispatch(&Event::Done(form)).unwrap_err();
        assert_eq!(err, FlowError::GuardRejected { missing: vec![ProfileField::Password] });
        assert_eq!(nav.current(), Screen::ProfileSetup);
    }

    #[test]
    fn test_activity_round_trip() {
        let mut nav = Navigator::new(Screen::Home);
        let before = nav.clone();

        assert_eq!(
            nav.dispatch(&Event::SelectAction(HomeAction::Activity)),
            Ok(Screen::ActivityDetail)
        );
        assert_eq!(nav.history(), &[Screen::Home, Screen::ActivityDetail]);

        assert_eq!(nav.dispatch(&Event::Back), Ok(Screen::Home));
        assert_eq!(nav, before);
    }

    #[test]
    fn test_other_home_actions_are_inert() {
        let mut nav = Navigator::new(Screen::Home);
        for action in [HomeAction::Deposit, HomeAction::Transfer, HomeAction::Withdraw] {
            let err = nav.dispatch(&Event::SelectAction(action)).unwrap_err();
            assert!(matches!(err, FlowError::NoTransition { from: Screen::Home, .. }));
        }
        assert_eq!(nav.history(), &[Screen::Home]);
    }

    #[test]
    fn test_back_without_history_is_rejected() {
        let mut nav = Navigator::new(Screen::Home);
        assert!(matches!(nav.dispatch(&Event::Back), Err(FlowError::NoTransition { .. })));

        let mut nav = Navigator::new(Screen::ActivityDetail);
        assert_eq!(nav.dispatch(&Event::Back), Err(FlowError::EmptyHistory));
    }

    #[test]
    fn test_no_way_back_to_welcome() {
        let mut nav = Navigator::new(Screen::Welcome);
        nav.dispatch(&Event::GetStarted).unwrap();
        nav.dispatch(&Event::Done(complete_form())).unwrap();
        nav.dispatch(&Event::SelectAction(HomeAction::Activity)).unwrap();
        nav.dispatch(&Event::Back).unwrap();

        assert!(nav.history().iter().all(|screen| !screen.is_onboarding()));
    }

    #[test]
    fn test_stale_transition_is_rejected() {
        let mut nav = Navigator::new(Screen::Welcome);
        let transition = nav.resolve(&Event::GetStarted).unwrap();
        nav.apply(&transition).unwrap();

        let err = nav.apply(&transition).unwrap_err();
        assert_eq!(
            err,
            FlowError::Stale { expected: Screen::Welcome, current: Screen::ProfileSetup }
        );
        assert_eq!(nav.history(), &[Screen::ProfileSetup]);
    }

    #[test]
    fn test_every_edge_starts_from_distinct_trigger() {
        for (i, a) in TRANSITIONS.iter().enumerate() {
            for b in &TRANSITIONS[i + 1..] {
                assert!(!(a.from == b.from && a.trigger == b.trigger));
            }
        }
    }

    #[test]
    fn test_event_names() {
        assert_eq!(Event::GetStarted.name(), "get_started");
        assert_eq!(Event::SelectAction(HomeAction::Withdraw).name(), "select(withdraw)");
    }
}
