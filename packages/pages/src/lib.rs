#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Page-level UI state machines and the route table.
//!
//! Each page owns independent, unshared state; nothing here is
//! persisted across pages or sessions. The login and contact flows are
//! modeled as always-succeeding: a submission enters `Submitting`
//! immediately and completes after a fixed delay with no failure state.
//! The delays simulate network latency for a demo without a backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use school_map_map::FilterState;

/// Simulated network latency for the login flow.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Simulated network latency for the contact form.
pub const CONTACT_DELAY: Duration = Duration::from_millis(1500);

/// Confirmation notice shown after a contact submission completes.
pub const CONTACT_CONFIRMATION: &str =
    "Thank you for your feedback! We will get back to you soon.";

/// The application's static route table, fixed at startup.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Route {
    /// Login screen at `/`.
    Login,
    /// Dashboard overview.
    Dashboard,
    /// Interactive map.
    Map,
    /// Analytics and reports.
    Analytics,
    /// Application settings.
    Settings,
    /// Contact and feedback.
    Contact,
}

impl Route {
    /// Returns the URL path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::Map => "/map",
            Self::Analytics => "/analytics",
            Self::Settings => "/settings",
            Self::Contact => "/contact",
        }
    }

    /// Returns all routes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Login,
            Self::Dashboard,
            Self::Map,
            Self::Analytics,
            Self::Settings,
            Self::Contact,
        ]
    }
}

/// Login flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum LoginState {
    /// Waiting for the user to submit.
    Idle,
    /// Submission in flight (fixed delay).
    Submitting,
    /// Login completed, navigation to the dashboard issued.
    Redirected,
}

/// The login page state machine: `Idle → Submitting → Redirected`.
///
/// Login cannot fail in this design; no field validation is enforced
/// beyond the form's required-field hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginFlow {
    state: LoginState,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    /// Creates a flow in the `Idle` state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoginState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Submits the form, entering `Submitting` immediately.
    ///
    /// Returns `false` if a submission is already in flight or done.
    pub const fn submit(&mut self) -> bool {
        if matches!(self.state, LoginState::Idle) {
            self.state = LoginState::Submitting;
            true
        } else {
            false
        }
    }

    /// Completes the in-flight submission after [`LOGIN_DELAY`].
    ///
    /// Returns the route to navigate to, or `None` if no submission was
    /// in flight.
    pub const fn complete(&mut self) -> Option<Route> {
        if matches!(self.state, LoginState::Submitting) {
            self.state = LoginState::Redirected;
            Some(Route::Dashboard)
        } else {
            None
        }
    }
}

/// Contact form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ContactState {
    /// Waiting for input.
    Idle,
    /// Submission in flight (fixed delay).
    Submitting,
    /// Confirmation notice shown.
    Done,
}

/// The contact page state machine: `Idle → Submitting → Done → Idle`.
///
/// Submissions are accepted unconditionally and nothing is persisted;
/// after the confirmation notice the form is enterable again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactForm {
    state: ContactState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Creates a form in the `Idle` state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ContactState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ContactState {
        self.state
    }

    /// Submits the form, entering `Submitting` immediately.
    ///
    /// Returns `false` if a submission is already in flight or awaiting
    /// acknowledgement.
    pub const fn submit(&mut self) -> bool {
        if matches!(self.state, ContactState::Idle) {
            self.state = ContactState::Submitting;
            true
        } else {
            false
        }
    }

    /// Completes the in-flight submission after [`CONTACT_DELAY`].
    ///
    /// Returns the confirmation notice, or `None` if no submission was
    /// in flight.
    pub const fn complete(&mut self) -> Option<&'static str> {
        if matches!(self.state, ContactState::Submitting) {
            self.state = ContactState::Done;
            Some(CONTACT_CONFIRMATION)
        } else {
            None
        }
    }

    /// Dismisses the confirmation notice, returning the form to `Idle`.
    pub const fn acknowledge(&mut self) -> bool {
        if matches!(self.state, ContactState::Done) {
            self.state = ContactState::Idle;
            true
        } else {
            false
        }
    }
}

/// The map page's filter panel: the filter values plus a
/// collapsed/expanded display flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPanel {
    /// The three filter values bound to the toggles and slider.
    pub filters: FilterState,
    /// Whether the panel body is expanded.
    pub expanded: bool,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            expanded: true,
        }
    }
}

impl FilterPanel {
    /// Toggles the collapsed/expanded display flag.
    pub const fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Restores all three filter values to defaults atomically; the
    /// display flag is untouched.
    pub fn reset(&mut self) {
        self.filters.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths() {
        assert_eq!(Route::Login.path(), "/");
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::all().len(), 6);
    }

    #[test]
    fn login_happy_path() {
        let mut flow = LoginFlow::new();
        assert_eq!(flow.state(), LoginState::Idle);
        assert!(flow.submit());
        assert_eq!(flow.state(), LoginState::Submitting);
        assert_eq!(flow.complete(), Some(Route::Dashboard));
        assert_eq!(flow.state(), LoginState::Redirected);
    }

    #[test]
    fn login_ignores_out_of_order_events() {
        let mut flow = LoginFlow::new();
        assert_eq!(flow.complete(), None);
        assert!(flow.submit());
        assert!(!flow.submit());
        flow.complete();
        assert!(!flow.submit());
        assert_eq!(flow.complete(), None);
    }

    #[test]
    fn contact_round_trip_allows_reentry() {
        let mut form = ContactForm::new();
        assert!(form.submit());
        assert_eq!(form.complete(), Some(CONTACT_CONFIRMATION));
        assert_eq!(form.state(), ContactState::Done);
        assert!(form.acknowledge());
        assert_eq!(form.state(), ContactState::Idle);
        // The form is enterable again.
        assert!(form.submit());
    }

    #[test]
    fn contact_single_confirmation_per_submission() {
        let mut form = ContactForm::new();
        form.submit();
        assert!(form.complete().is_some());
        assert_eq!(form.complete(), None);
        assert!(form.acknowledge());
        assert!(!form.acknowledge());
    }

    #[test]
    fn filter_panel_reset_is_atomic_and_keeps_display_flag() {
        let mut panel = FilterPanel::default();
        panel.toggle_expanded();
        panel.filters.show_schools = false;
        panel.filters.show_factories = false;
        panel.filters.set_range(17.0);

        panel.reset();
        assert_eq!(panel.filters, FilterState::default());
        assert!(!panel.expanded);
    }

    #[test]
    fn delays_match_the_design() {
        assert_eq!(LOGIN_DELAY, Duration::from_millis(1000));
        assert_eq!(CONTACT_DELAY, Duration::from_millis(1500));
    }
}
