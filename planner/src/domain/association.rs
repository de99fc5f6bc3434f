//! Checkbox-driven association toggling.
//!
//! A checkbox flips the moment the user clicks it; the request that makes the
//! server agree is sent afterwards. [`ToggleControl`] tracks one checkbox
//! through `Idle → Pending → Confirmed | RolledBack`.
//!
//! Each toggle takes a fresh token. Only the response to the latest token
//! decides what the checkbox shows; earlier responses are reported as stale,
//! though a stale success still counts as server-confirmed. On failure the
//! control goes back to the last value the server confirmed.

use std::collections::BTreeMap;

use log::{debug, info};
use shared::{AssociationResponse, DayId, ExerciseId, WorkoutId};

use super::notifications::{Notification, Notifier};
use crate::api::{ApiClient, HttpTransport};
use crate::error::ClientError;

/// A many-to-many link that a checkbox can create or remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Association {
    /// A workout scheduled on a day
    WorkoutToDay { day_id: DayId, workout_id: WorkoutId },
    /// An exercise in a workout, edited from the workout's exercise picker
    ExerciseToWorkout {
        workout_id: WorkoutId,
        exercise_id: ExerciseId,
    },
    /// An exercise in a workout, edited while building the workout with
    /// per-exercise details
    ExerciseSelection {
        workout_id: WorkoutId,
        exercise_id: ExerciseId,
    },
}

impl Association {
    /// Alert text when the server gives no message of its own
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Association::WorkoutToDay { .. } => "Failed to update workout status.",
            Association::ExerciseToWorkout { .. } | Association::ExerciseSelection { .. } => {
                "Failed to update exercise status."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationAction {
    Add,
    Remove,
}

impl AssociationAction {
    /// Checked creates the association, unchecked removes it
    pub fn for_checked(checked: bool) -> Self {
        if checked {
            AssociationAction::Add
        } else {
            AssociationAction::Remove
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Idle,
    Pending { token: u64 },
    Confirmed,
    RolledBack,
}

/// Request a control needs sent after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToggle {
    pub association: Association,
    pub action: AssociationAction,
    pub token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleResolution {
    Confirmed,
    RolledBack { message: String },
    /// A newer toggle superseded this response
    Stale,
}

/// State of one association checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    association: Association,
    checked: bool,
    /// Last value the server is known to hold
    confirmed: bool,
    state: ToggleState,
    last_token: u64,
    /// Requested value of every toggle still awaiting an answer
    in_flight: BTreeMap<u64, bool>,
}

impl ToggleControl {
    pub fn new(association: Association, checked: bool) -> Self {
        Self {
            association,
            checked,
            confirmed: checked,
            state: ToggleState::Idle,
            last_token: 0,
            in_flight: BTreeMap::new(),
        }
    }

    pub fn association(&self) -> Association {
        self.association
    }

    /// The value the checkbox should display
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// The value the server last acknowledged
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ToggleState::Pending { .. })
    }

    /// Apply the user's click optimistically and describe the request to send
    pub fn begin(&mut self, checked: bool) -> PendingToggle {
        self.last_token += 1;
        let token = self.last_token;
        self.state = ToggleState::Pending { token };
        self.in_flight.insert(token, checked);
        self.checked = checked;

        PendingToggle {
            association: self.association,
            action: AssociationAction::for_checked(checked),
            token,
        }
    }

    /// Reconcile with the server's answer to the toggle identified by `token`.
    ///
    /// Any successful answer moves the confirmed value, since the server
    /// applied it. Only the latest toggle decides what the checkbox shows;
    /// a rollback falls back to the confirmed value.
    pub fn resolve(
        &mut self,
        token: u64,
        outcome: &Result<AssociationResponse, ClientError>,
    ) -> ToggleResolution {
        let Some(requested) = self.in_flight.remove(&token) else {
            return ToggleResolution::Stale;
        };

        let failure = match outcome {
            Ok(response) if response.success => None,
            Ok(response) => Some(
                response
                    .message
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| self.association.fallback_message().to_string()),
            ),
            Err(err) => Some(
                err.server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.association.fallback_message().to_string()),
            ),
        };
        if failure.is_none() {
            self.confirmed = requested;
        }

        let latest = matches!(self.state, ToggleState::Pending { token: pending } if pending == token);
        if !latest {
            // A late success after the latest toggle already settled
            if failure.is_none() && !self.is_pending() {
                self.checked = self.confirmed;
            }
            return ToggleResolution::Stale;
        }

        match failure {
            None => {
                self.state = ToggleState::Confirmed;
                ToggleResolution::Confirmed
            }
            Some(message) => {
                self.checked = self.confirmed;
                self.state = ToggleState::RolledBack;
                ToggleResolution::RolledBack { message }
            }
        }
    }
}

/// Resolve a toggle and alert the user if it was rolled back
pub fn settle<N: Notifier>(
    control: &mut ToggleControl,
    token: u64,
    outcome: &Result<AssociationResponse, ClientError>,
    notifier: &N,
) -> ToggleResolution {
    let resolution = control.resolve(token, outcome);
    match &resolution {
        ToggleResolution::RolledBack { message } => {
            notifier.notify(Notification::error(message.clone()));
        }
        ToggleResolution::Stale => {
            debug!("Dropped stale response for {:?}", control.association());
        }
        ToggleResolution::Confirmed => {}
    }
    resolution
}

/// Sends association requests and reports rollbacks to the user
#[derive(Clone)]
pub struct AssociationService<T, N> {
    api: ApiClient<T>,
    notifier: N,
}

impl<T: HttpTransport, N: Notifier> AssociationService<T, N> {
    pub fn new(api: ApiClient<T>, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Send the request for a toggle that has already been applied locally
    pub async fn submit(&self, pending: &PendingToggle) -> Result<AssociationResponse, ClientError> {
        let outcome = self
            .api
            .set_association(pending.association, pending.action)
            .await;
        match &outcome {
            Ok(response) => {
                if let Some(message) = &response.message {
                    info!("{}", message);
                }
            }
            Err(e) => debug!("Association request failed: {}", e),
        }
        outcome
    }

    /// Where rollbacks are reported
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::domain::notifications::Severity;
    use crate::test_utils::{RecordingNotifier, ScriptedTransport};

    fn workout_on_day() -> Association {
        Association::WorkoutToDay {
            day_id: DayId(700001),
            workout_id: WorkoutId(4),
        }
    }

    /// Flip, send and settle one control
    async fn toggle(
        service: &AssociationService<ScriptedTransport, RecordingNotifier>,
        control: &mut ToggleControl,
        checked: bool,
    ) -> ToggleResolution {
        let pending = control.begin(checked);
        let outcome = service.submit(&pending).await;
        settle(control, pending.token, &outcome, service.notifier())
    }

    fn service(
        transport: &ScriptedTransport,
        notifier: &RecordingNotifier,
    ) -> AssociationService<ScriptedTransport, RecordingNotifier> {
        AssociationService::new(ApiClient::new(transport.clone()), notifier.clone())
    }

    #[tokio::test]
    async fn test_check_sends_one_create_request() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success": true, "message": "Workout added to day successfully"}"#);
        let notifier = RecordingNotifier::new();
        let mut control = ToggleControl::new(workout_on_day(), false);

        let resolution = toggle(&service(&transport, &notifier), &mut control, true).await;

        assert_eq!(resolution, ToggleResolution::Confirmed);
        assert!(control.checked());
        assert_eq!(control.state(), ToggleState::Confirmed);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "/api/workout-to-day/700001/4");
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_check_rolls_back_with_server_message() {
        let transport = ScriptedTransport::new();
        transport.respond(400, r#"{"success": false, "message": "UNIQUE constraint failed"}"#);
        let notifier = RecordingNotifier::new();
        let mut control = ToggleControl::new(workout_on_day(), false);

        let resolution = toggle(&service(&transport, &notifier), &mut control, true).await;

        assert_eq!(
            resolution,
            ToggleResolution::RolledBack {
                message: "UNIQUE constraint failed".to_string()
            }
        );
        assert!(!control.checked());
        assert_eq!(control.state(), ToggleState::RolledBack);
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("UNIQUE constraint failed")]
        );
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success": false}"#);
        let notifier = RecordingNotifier::new();
        let link = Association::ExerciseToWorkout {
            workout_id: WorkoutId(1),
            exercise_id: ExerciseId(2),
        };
        let mut control = ToggleControl::new(link, false);

        toggle(&service(&transport, &notifier), &mut control, true).await;

        assert!(!control.checked());
        let notifications = notifier.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, Severity::Error);
        assert_eq!(notifications[0].message, "Failed to update exercise status.");
    }

    #[tokio::test]
    async fn test_network_error_rolls_back_with_generic_message() {
        let transport = ScriptedTransport::new();
        transport.fail("offline");
        let notifier = RecordingNotifier::new();
        let mut control = ToggleControl::new(workout_on_day(), true);

        let resolution = toggle(&service(&transport, &notifier), &mut control, false).await;

        assert_eq!(
            resolution,
            ToggleResolution::RolledBack {
                message: "Failed to update workout status.".to_string()
            }
        );
        assert!(control.checked());
    }

    #[tokio::test]
    async fn test_uncheck_sends_one_remove_request() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success": true, "message": "Workout removed from day successfully"}"#);
        let notifier = RecordingNotifier::new();
        let mut control = ToggleControl::new(workout_on_day(), true);

        let resolution = toggle(&service(&transport, &notifier), &mut control, false).await;

        assert_eq!(resolution, ToggleResolution::Confirmed);
        assert!(!control.checked());
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Delete);
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut control = ToggleControl::new(workout_on_day(), false);

        let first = control.begin(true);
        let second = control.begin(false);
        assert!(control.is_pending());

        let failed = Ok(AssociationResponse {
            success: false,
            message: Some("late failure".to_string()),
        });
        assert_eq!(control.resolve(first.token, &failed), ToggleResolution::Stale);
        assert!(!control.checked());

        let ok = Ok(AssociationResponse {
            success: true,
            message: None,
        });
        assert_eq!(control.resolve(second.token, &ok), ToggleResolution::Confirmed);
        assert!(!control.checked());
        assert_eq!(first.action, AssociationAction::Add);
        assert_eq!(second.action, AssociationAction::Remove);
    }

    #[test]
    fn test_rollback_restores_server_confirmed_value() {
        let mut control = ToggleControl::new(workout_on_day(), false);

        let first = control.begin(true);
        let latest = control.begin(false);

        let outcome = Err(ClientError::Network("offline".to_string()));
        control.resolve(latest.token, &outcome);
        assert!(!control.checked());
        assert_eq!(control.state(), ToggleState::RolledBack);

        // The earlier add landed after all
        let ok = Ok(AssociationResponse {
            success: true,
            message: None,
        });
        assert_eq!(control.resolve(first.token, &ok), ToggleResolution::Stale);
        assert!(control.checked());
        assert!(control.confirmed());
    }

    #[test]
    fn test_overlapping_failures_leave_checkbox_unchecked() {
        let mut control = ToggleControl::new(workout_on_day(), false);

        let first = control.begin(true);
        let second = control.begin(false);
        let offline = Err(ClientError::Network("offline".to_string()));

        assert!(matches!(
            control.resolve(second.token, &offline),
            ToggleResolution::RolledBack { .. }
        ));
        assert_eq!(control.resolve(first.token, &offline), ToggleResolution::Stale);
        assert!(!control.checked());
        assert!(!control.confirmed());

        // Same outcome when the answers arrive in request order
        let mut control = ToggleControl::new(workout_on_day(), false);
        let first = control.begin(true);
        let second = control.begin(false);
        assert_eq!(control.resolve(first.token, &offline), ToggleResolution::Stale);
        control.resolve(second.token, &offline);
        assert!(!control.checked());
    }

    #[test]
    fn test_stale_success_moves_rollback_target() {
        let mut control = ToggleControl::new(workout_on_day(), false);

        let first = control.begin(true);
        let second = control.begin(false);
        let ok = Ok(AssociationResponse {
            success: true,
            message: None,
        });
        assert_eq!(control.resolve(first.token, &ok), ToggleResolution::Stale);
        assert!(!control.checked());

        let failed = Err(ClientError::Network("offline".to_string()));
        control.resolve(second.token, &failed);
        assert!(control.checked());
    }

    #[test]
    fn test_resolve_without_pending_toggle_is_stale() {
        let mut control = ToggleControl::new(workout_on_day(), true);
        let outcome = Ok(AssociationResponse {
            success: true,
            message: None,
        });
        assert_eq!(control.resolve(1, &outcome), ToggleResolution::Stale);
        assert_eq!(control.state(), ToggleState::Idle);
    }
}
