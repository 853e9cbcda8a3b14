//! Top-level UI state for the dashboard page. One serializable value owned by
//! the `App` component, updated only through the named transitions below.

use serde::{Deserialize, Serialize};

use crate::shared::types::FetchError;
use crate::viewmodel::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Where the single outstanding fetch currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPhase {
    Loading,
    Ready,
    Failed(FetchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub theme: Theme,
    pub direction: Direction,
    pub fetch: FetchPhase,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            theme: Theme::Dark,
            direction: Direction::Departures,
            fetch: FetchPhase::Loading,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn select_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn data_fetched(&mut self) {
        self.fetch = FetchPhase::Ready;
    }

    pub fn data_fetch_failed(&mut self, error: FetchError) {
        self.fetch = FetchPhase::Failed(error);
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark_departures_loading() {
        let state = ViewState::new();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.direction, Direction::Departures);
        assert_eq!(state.fetch, FetchPhase::Loading);
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut state = ViewState::new();
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Light);
        state.toggle_theme();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn fetch_transitions() {
        let mut state = ViewState::new();
        state.data_fetched();
        assert_eq!(state.fetch, FetchPhase::Ready);
        state.data_fetch_failed(FetchError::FetchFailed);
        assert_eq!(state.fetch, FetchPhase::Failed(FetchError::FetchFailed));
        // failure leaves the rest of the state interactive
        state.select_direction(Direction::Arrivals);
        state.toggle_theme();
        assert_eq!(state.direction, Direction::Arrivals);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn failed_phase_carries_the_error_kind() {
        let mut state = ViewState::new();
        state.data_fetch_failed(FetchError::DataUnavailable);
        assert_eq!(state.fetch, FetchPhase::Failed(FetchError::DataUnavailable));
        let json = serde_json::to_string(&state).unwrap();
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn view_state_serializes() {
        let state = ViewState::new();
        let json = serde_json::to_string(&state).unwrap();
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
