//! Pick the exercises that make up a workout.
//!
//! The same page serves two routes. From the workout editor's edit flow
//! (`/edit-select-exercise/{id}`) it only toggles membership. While a
//! workout is being built (`/select-exercise/{id}`) each exercise can also
//! carry a detail record (description, equipment, load and volume).

use std::collections::HashMap;

use log::{info, warn};
use shared::{ExerciseDetailRequest, ExerciseId, ExerciseSelection, MessageResponse, WorkoutId};

use super::checkbox_list::{CheckboxList, CheckboxRow};
use super::{PageContent, PageHandle};
use crate::api::{ApiClient, HttpTransport};
use crate::domain::association::Association;
use crate::domain::notifications::{Notification, Notifier};
use crate::domain::routes::Route;
use crate::error::{ClientError, IdKind};

pub const NO_EXERCISES_MESSAGE: &str = "No exercises available to display.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load exercises.";
pub const MISSING_DESCRIPTION_MESSAGE: &str =
    "Please provide a description for the exercise detail.";
pub const DETAIL_FAILED_MESSAGE: &str = "Failed to add exercise detail.";

pub const INTENSITY_OPTIONS: [&str; 3] = ["Light", "Moderate", "Vigorous"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// `/edit-select-exercise/{id}`
    EditExisting,
    /// `/select-exercise/{id}`
    BuildNew,
}

impl SelectionMode {
    fn label(self, exercise: &ExerciseSelection) -> String {
        let intensity = exercise.intensity.as_deref().unwrap_or_default();
        let muscle_group = exercise.muscle_group.as_deref().unwrap_or_default();
        match self {
            SelectionMode::EditExisting => format!(
                "{} - Intensity: {}, Muscle Group: {}",
                exercise.exercise_name, intensity, muscle_group
            ),
            SelectionMode::BuildNew => {
                format!("{} - {} - {}", exercise.exercise_name, intensity, muscle_group)
            }
        }
    }

    fn association(self, workout_id: WorkoutId, exercise_id: ExerciseId) -> Association {
        match self {
            SelectionMode::EditExisting => Association::ExerciseToWorkout {
                workout_id,
                exercise_id,
            },
            SelectionMode::BuildNew => Association::ExerciseSelection {
                workout_id,
                exercise_id,
            },
        }
    }
}

/// Unsubmitted detail form for one exercise, as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailDraft {
    pub expanded: bool,
    pub description: String,
    pub equipment_needed: String,
    pub weight: String,
    pub intensity: String,
    pub rating: String,
    pub sets: String,
    pub reps: String,
}

impl Default for DetailDraft {
    fn default() -> Self {
        Self {
            expanded: false,
            description: String::new(),
            equipment_needed: String::new(),
            weight: String::new(),
            intensity: INTENSITY_OPTIONS[0].to_string(),
            rating: String::new(),
            sets: String::new(),
            reps: String::new(),
        }
    }
}

impl DetailDraft {
    /// The request body, or `None` when the description is blank
    pub fn to_request(&self) -> Option<ExerciseDetailRequest> {
        let description = self.description.trim();
        if description.is_empty() {
            return None;
        }

        // Extra fields only go out once the detail form has been opened
        if !self.expanded {
            return Some(ExerciseDetailRequest {
                description: description.to_string(),
                ..Default::default()
            });
        }

        Some(ExerciseDetailRequest {
            description: description.to_string(),
            equipment_needed: non_blank(&self.equipment_needed),
            weight: parse_number(&self.weight, "weight").filter(|w: &f64| *w >= 0.0),
            intensity: non_blank(&self.intensity),
            rating: parse_number(&self.rating, "rating").filter(|r| (1..=10).contains(r)),
            sets: parse_number(&self.sets, "sets"),
            reps: parse_number(&self.reps, "reps"),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_number<V: std::str::FromStr>(value: &str, field: &str) -> Option<V> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring unreadable {} '{}'", field, value);
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSelectionPage {
    mode: SelectionMode,
    workout_id: Option<WorkoutId>,
    content: PageContent<CheckboxList>,
    drafts: HashMap<ExerciseId, DetailDraft>,
}

impl ExerciseSelectionPage {
    pub fn new(mode: SelectionMode, workout_id: Option<WorkoutId>) -> Self {
        let content = match workout_id {
            Some(_) => PageContent::Loading,
            None => PageContent::Message(IdKind::Workout.missing_message()),
        };
        Self {
            mode,
            workout_id,
            content,
            drafts: HashMap::new(),
        }
    }

    /// Build the page for a route, if the route is one of its two
    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::EditSelectExercise(id) => Some(Self::new(SelectionMode::EditExisting, id)),
            Route::SelectExercise(id) => Some(Self::new(SelectionMode::BuildNew, id)),
            _ => None,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn workout_id(&self) -> Option<WorkoutId> {
        self.workout_id
    }

    pub fn content(&self) -> &PageContent<CheckboxList> {
        &self.content
    }

    pub fn checkboxes_mut(&mut self) -> Option<&mut CheckboxList> {
        self.content.ready_mut()
    }

    /// Whether rows offer a detail form
    pub fn accepts_details(&self) -> bool {
        self.mode == SelectionMode::BuildNew
    }

    /// Where "Done" leads
    pub fn done_route(&self) -> Option<Route> {
        let workout_id = self.workout_id?;
        Some(match self.mode {
            SelectionMode::EditExisting => Route::EditWorkout(Some(workout_id)),
            SelectionMode::BuildNew => Route::AddOrEditWorkout(Some(workout_id)),
        })
    }

    pub fn loaded<N: Notifier>(
        &mut self,
        result: Result<Vec<ExerciseSelection>, ClientError>,
        notifier: &N,
    ) {
        let Some(workout_id) = self.workout_id else {
            return;
        };
        let mode = self.mode;

        self.content = match result {
            Ok(exercises) if exercises.is_empty() => PageContent::Message(NO_EXERCISES_MESSAGE),
            Ok(exercises) => {
                info!("Loaded {} exercises for workout {}", exercises.len(), workout_id);
                let rows = exercises
                    .iter()
                    .map(|exercise| {
                        CheckboxRow::new(
                            mode.label(exercise),
                            mode.association(workout_id, exercise.exercise_id),
                            exercise.is_selected,
                        )
                    })
                    .collect();
                PageContent::Ready(CheckboxList::new(rows))
            }
            Err(e) => {
                notifier.notify(Notification::warning(format!("Error loading the exercises: {}", e)));
                PageContent::Message(LOAD_FAILED_MESSAGE)
            }
        };
    }

    pub async fn load<H, T, N>(page: &H, api: &ApiClient<T>, notifier: &N)
    where
        H: PageHandle<Self> + ?Sized,
        T: HttpTransport,
        N: Notifier,
    {
        let Some(workout_id) = page.with(|page| page.workout_id) else {
            return;
        };
        let result = api.exercises_in_workout(workout_id).await;
        page.with(|page| page.loaded(result, notifier));
    }

    pub fn draft(&self, exercise_id: ExerciseId) -> Option<&DetailDraft> {
        self.drafts.get(&exercise_id)
    }

    pub fn draft_mut(&mut self, exercise_id: ExerciseId) -> &mut DetailDraft {
        self.drafts.entry(exercise_id).or_default()
    }

    /// "Add Detail": reveal the extra fields for one exercise
    pub fn expand_detail(&mut self, exercise_id: ExerciseId) {
        self.draft_mut(exercise_id).expanded = true;
    }

    /// Validate a draft; alerts and returns `None` when it cannot be sent
    pub fn prepare_detail<N: Notifier>(
        &self,
        exercise_id: ExerciseId,
        notifier: &N,
    ) -> Option<(WorkoutId, ExerciseDetailRequest)> {
        if !self.accepts_details() {
            return None;
        }
        let workout_id = self.workout_id?;
        match self.draft(exercise_id).and_then(DetailDraft::to_request) {
            Some(request) => Some((workout_id, request)),
            None => {
                notifier.notify(Notification::error(MISSING_DESCRIPTION_MESSAGE));
                None
            }
        }
    }

    /// Apply the server's answer to a detail submission
    pub fn detail_submitted<N: Notifier>(
        &mut self,
        exercise_id: ExerciseId,
        result: Result<MessageResponse, ClientError>,
        notifier: &N,
    ) -> bool {
        match result {
            Ok(response) => {
                if let Some(message) = response.message {
                    notifier.notify(Notification::info(message));
                }
                self.drafts.remove(&exercise_id);
                true
            }
            Err(e) => {
                let message = e.server_message().unwrap_or(DETAIL_FAILED_MESSAGE).to_string();
                warn!("Error adding exercise detail: {}", e);
                notifier.notify(Notification::error(message));
                false
            }
        }
    }

    pub async fn submit_detail<H, T, N>(
        page: &H,
        api: &ApiClient<T>,
        notifier: &N,
        exercise_id: ExerciseId,
    ) -> bool
    where
        H: PageHandle<Self> + ?Sized,
        T: HttpTransport,
        N: Notifier,
    {
        let Some((workout_id, request)) =
            page.with(|page| page.prepare_detail(exercise_id, notifier))
        else {
            return false;
        };
        let result = api.add_exercise_detail(workout_id, exercise_id, &request).await;
        page.with(|page| page.detail_submitted(exercise_id, result, notifier))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::Method;
    use crate::domain::association::AssociationService;
    use crate::pages::toggle_row;
    use crate::domain::notifications::Severity;
    use crate::test_utils::{RecordingNotifier, ScriptedTransport};

    const EXERCISES: &str = r#"[
        {"exercise_id": 1, "exercise_name": "Squat", "intensity": "High", "muscle_group": "Legs", "is_selected": true},
        {"exercise_id": 2, "exercise_name": "Plank", "intensity": "Low", "muscle_group": "Core", "is_selected": false}
    ]"#;

    #[test]
    fn test_for_route_and_done_route() {
        let edit = ExerciseSelectionPage::for_route(Route::EditSelectExercise(Some(WorkoutId(4)))).unwrap();
        assert_eq!(edit.done_route(), Some(Route::EditWorkout(Some(WorkoutId(4)))));
        assert!(!edit.accepts_details());

        let build = ExerciseSelectionPage::for_route(Route::SelectExercise(Some(WorkoutId(4)))).unwrap();
        assert_eq!(build.done_route().unwrap().to_path(), "/add-or-edit-workout/4");

        let missing = ExerciseSelectionPage::for_route(Route::SelectExercise(None)).unwrap();
        assert_eq!(missing.content().message(), Some("Workout ID is missing from the URL."));
        assert_eq!(missing.done_route(), None);

        assert!(ExerciseSelectionPage::for_route(Route::Schedule).is_none());
    }

    #[tokio::test]
    async fn test_labels_depend_on_mode() {
        let transport = ScriptedTransport::new();
        transport.respond(200, EXERCISES);
        transport.respond(200, EXERCISES);
        let api = ApiClient::new(transport.clone());
        let notifier = RecordingNotifier::new();

        let edit = RefCell::new(ExerciseSelectionPage::new(SelectionMode::EditExisting, Some(WorkoutId(4))));
        ExerciseSelectionPage::load(&edit, &api, &notifier).await;
        let edit = edit.into_inner();
        let rows = edit.content().ready().unwrap().rows();
        assert_eq!(rows[0].label, "Squat - Intensity: High, Muscle Group: Legs");
        assert!(rows[0].control.checked());
        assert!(!rows[1].control.checked());

        let build = RefCell::new(ExerciseSelectionPage::new(SelectionMode::BuildNew, Some(WorkoutId(4))));
        ExerciseSelectionPage::load(&build, &api, &notifier).await;
        assert_eq!(build.borrow().content().ready().unwrap().rows()[1].label, "Plank - Low - Core");

        assert_eq!(transport.requests()[0].url, "/api/exercises-in-workouts/4");
    }

    #[tokio::test]
    async fn test_empty_and_failed_loads() {
        let notifier = RecordingNotifier::new();

        let mut page = ExerciseSelectionPage::new(SelectionMode::EditExisting, Some(WorkoutId(1)));
        page.loaded(Ok(vec![]), &notifier);
        assert_eq!(page.content().message(), Some(NO_EXERCISES_MESSAGE));

        page.loaded(Err(ClientError::Parse("eof".into())), &notifier);
        assert_eq!(page.content().message(), Some(LOAD_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_build_mode_removes_through_remove_endpoint() {
        let transport = ScriptedTransport::new();
        transport.respond(200, EXERCISES);
        transport.respond(200, r#"{"success": true, "message": "Exercise removed from workout"}"#);
        let api = ApiClient::new(transport.clone());
        let notifier = RecordingNotifier::new();
        let service = AssociationService::new(api.clone(), notifier.clone());
        let page = RefCell::new(ExerciseSelectionPage::new(SelectionMode::BuildNew, Some(WorkoutId(4))));
        ExerciseSelectionPage::load(&page, &api, &notifier).await;

        let link = Association::ExerciseSelection {
            workout_id: WorkoutId(4),
            exercise_id: ExerciseId(1),
        };
        toggle_row(&page, ExerciseSelectionPage::checkboxes_mut, &service, link, false).await;

        let request = &transport.requests()[1];
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "/api/exercise-to-workout/remove/4/1");
    }

    #[tokio::test]
    async fn test_blank_description_alerts_without_request() {
        let transport = ScriptedTransport::new();
        let notifier = RecordingNotifier::new();
        let mut page = ExerciseSelectionPage::new(SelectionMode::BuildNew, Some(WorkoutId(4)));
        page.draft_mut(ExerciseId(1)).description = "   ".to_string();
        let page = RefCell::new(page);

        let sent = ExerciseSelectionPage::submit_detail(
            &page,
            &ApiClient::new(transport.clone()),
            &notifier,
            ExerciseId(1),
        )
        .await;

        assert!(!sent);
        assert!(transport.requests().is_empty());
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error(MISSING_DESCRIPTION_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_detail_submission_sends_filled_fields() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"message": "Exercise detail added successfully"}"#);
        let notifier = RecordingNotifier::new();
        let mut page = ExerciseSelectionPage::new(SelectionMode::BuildNew, Some(WorkoutId(4)));
        page.expand_detail(ExerciseId(2));
        {
            let draft = page.draft_mut(ExerciseId(2));
            draft.description = " Slow tempo ".to_string();
            draft.weight = "12.5".to_string();
            draft.sets = "3".to_string();
            draft.reps = "ten".to_string();
        }
        let page = RefCell::new(page);

        let sent = ExerciseSelectionPage::submit_detail(
            &page,
            &ApiClient::new(transport.clone()),
            &notifier,
            ExerciseId(2),
        )
        .await;

        assert!(sent);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/api/add-exercise-detail/4/2");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["description"], "Slow tempo");
        assert_eq!(body["weight"], 12.5);
        assert_eq!(body["sets"], 3);
        assert_eq!(body["intensity"], "Light");
        assert!(body.get("reps").is_none());
        assert!(page.borrow().draft(ExerciseId(2)).is_none());
        assert_eq!(notifier.notifications()[0].severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_detail_failure_alerts() {
        let transport = ScriptedTransport::new();
        transport.respond(500, r#"{"error": "Exercise not found"}"#);
        let notifier = RecordingNotifier::new();
        let mut page = ExerciseSelectionPage::new(SelectionMode::BuildNew, Some(WorkoutId(4)));
        page.draft_mut(ExerciseId(2)).description = "Slow".to_string();
        let page = RefCell::new(page);

        let sent = ExerciseSelectionPage::submit_detail(
            &page,
            &ApiClient::new(transport.clone()),
            &notifier,
            ExerciseId(2),
        )
        .await;

        assert!(!sent);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error("Exercise not found")]
        );
        assert!(page.borrow().draft(ExerciseId(2)).is_some());
    }

    #[test]
    fn test_collapsed_draft_sends_description_only() {
        let draft = DetailDraft {
            description: "Hold".to_string(),
            sets: "3".to_string(),
            ..Default::default()
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.description, "Hold");
        assert_eq!(request.sets, None);
        assert_eq!(request.intensity, None);
    }
}
