//! Serializable summary of a controller for debug logging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::controller::ViewStateController;
use super::state::ViewStateKind;

/// Point-in-time view of a [`ViewStateController`] and its derived queries.
///
/// Payloads are not captured; errors are kept as their display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
    /// Kinds of the recorded states, oldest first
    pub history: Vec<ViewStateKind>,
    pub is_loading: bool,
    pub is_initial_loading: bool,
    /// Whether `latest_valid_info` is present
    pub has_valid_info: bool,
    /// Whether `latest_info` is present
    pub has_info: bool,
    pub latest_valid_error: Option<String>,
    pub latest_error: Option<String>,
    pub modifying_ids: Option<Vec<String>>,
}

impl ControllerSnapshot {
    /// Capture the controller as of now.
    pub fn capture<Info>(controller: &ViewStateController<Info>) -> Self {
        Self {
            captured_at: Utc::now(),
            history: controller.history().iter().map(|s| s.kind()).collect(),
            is_loading: controller.is_loading(),
            is_initial_loading: controller.is_initial_loading(),
            has_valid_info: controller.latest_valid_info().is_some(),
            has_info: controller.latest_info().is_some(),
            latest_valid_error: controller.latest_valid_error().map(|e| e.to_string()),
            latest_error: controller.latest_error().map(|e| e.to_string()),
            modifying_ids: controller.modifying_ids().map(<[String]>::to_vec),
        }
    }

    /// Kind of the most recent state, if any.
    pub fn current(&self) -> Option<ViewStateKind> {
        self.history.last().copied()
    }
}

impl<Info> From<&ViewStateController<Info>> for ControllerSnapshot {
    fn from(controller: &ViewStateController<Info>) -> Self {
        Self::capture(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::ViewState;

    #[test]
    fn test_snapshot_of_new_controller() {
        let controller = ViewStateController::<u32>::new();
        let snapshot = ControllerSnapshot::capture(&controller);

        assert_eq!(snapshot.history, vec![ViewStateKind::Initial]);
        assert_eq!(snapshot.current(), Some(ViewStateKind::Initial));
        assert!(!snapshot.is_loading);
        assert!(!snapshot.has_valid_info);
        assert!(snapshot.latest_error.is_none());
        assert!(snapshot.modifying_ids.is_none());
    }

    #[test]
    fn test_snapshot_tracks_stale_info() {
        let mut controller = ViewStateController::new();
        controller.set_state(ViewState::Loading);
        controller.set_state(ViewState::Loaded(42));
        controller.set_state(ViewState::errored("net-fail"));
        controller.set_modifying_ids(Some(vec!["row-1".to_string()]));

        let snapshot = ControllerSnapshot::from(&controller);

        assert_eq!(snapshot.current(), Some(ViewStateKind::Errored));
        assert!(!snapshot.has_valid_info);
        assert!(snapshot.has_info);
        assert_eq!(snapshot.latest_valid_error.as_deref(), Some("net-fail"));
        assert_eq!(snapshot.modifying_ids, Some(vec!["row-1".to_string()]));
    }

    #[test]
    fn test_snapshot_after_reset_has_no_current() {
        let mut controller = ViewStateController::<u32>::new();
        controller.reset();
        let snapshot = ControllerSnapshot::capture(&controller);
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.current(), None);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut controller = ViewStateController::<u32>::new();
        controller.set_state(ViewState::Loading);

        let snapshot = ControllerSnapshot::capture(&controller);
        let json = serde_json::to_string(&snapshot).expect("Failed to serialize");
        assert!(json.contains("\"history\":[\"initial\",\"loading\"]"));
        assert!(json.contains("\"is_initial_loading\":true"));

        let parsed: ControllerSnapshot = serde_json::from_str(&json).expect("Failed to parse");
        assert_eq!(parsed, snapshot);
    }
}
