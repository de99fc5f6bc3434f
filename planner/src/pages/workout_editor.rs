//! Create or edit a workout.
//!
//! A new workout gets its identifier from the server before anything else
//! happens; the page then replaces its URL so a reload keeps the same id.

use log::{info, warn};
use shared::{ExerciseSelection, UpdateWorkoutRequest, Workout, WorkoutId};

use super::PageHandle;
use crate::api::{ApiClient, HttpTransport};
use crate::domain::notifications::{Notification, Notifier};
use crate::domain::routes::Route;
use crate::error::{ClientError, IdKind};

pub const MISSING_NAME_MESSAGE: &str = "Please provide a name for the workout.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update workout.";
pub const GENERATE_ID_FAILED_MESSAGE: &str = "Failed to create a new workout.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// `/add-or-edit-workout/{id?}`
    Create,
    /// `/edit-workout/{id}`
    Edit,
}

/// Form fields as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutForm {
    pub name: String,
    pub description: String,
    pub rating: String,
    pub focus: String,
    pub intensity: String,
}

impl WorkoutForm {
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            name: workout.name.clone(),
            description: workout.description.clone().unwrap_or_default(),
            rating: String::new(),
            focus: workout.focus.clone().unwrap_or_default(),
            intensity: workout.intensity.clone().unwrap_or_default(),
        }
    }

    /// The request body, or `None` when the name is blank
    pub fn to_request(&self) -> Option<UpdateWorkoutRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let rating = self
            .rating
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|r| (1..=10).contains(r));

        Some(UpdateWorkoutRequest {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            rating,
            focus: self.focus.trim().to_string(),
            intensity: self.intensity.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEditorPage {
    mode: EditorMode,
    workout_id: Option<WorkoutId>,
    pub form: WorkoutForm,
    exercises: Vec<String>,
}

impl WorkoutEditorPage {
    pub fn new(mode: EditorMode, workout_id: Option<WorkoutId>) -> Self {
        Self {
            mode,
            workout_id,
            form: WorkoutForm::default(),
            exercises: Vec::new(),
        }
    }

    pub fn for_route(route: Route) -> Option<Self> {
        match route {
            Route::AddOrEditWorkout(id) => Some(Self::new(EditorMode::Create, id)),
            Route::EditWorkout(id) => Some(Self::new(EditorMode::Edit, id)),
            _ => None,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn workout_id(&self) -> Option<WorkoutId> {
        self.workout_id
    }

    /// Selected exercises, one display line each
    pub fn exercises(&self) -> &[String] {
        &self.exercises
    }

    /// A new workout without an id must ask the server for one first
    pub fn needs_generated_id(&self) -> bool {
        self.mode == EditorMode::Create && self.workout_id.is_none()
    }

    /// Adopt a generated id; returns the route the URL should be replaced with
    pub fn id_generated<N: Notifier>(
        &mut self,
        result: Result<WorkoutId, ClientError>,
        notifier: &N,
    ) -> Option<Route> {
        match result {
            Ok(workout_id) => {
                info!("Generated workout id {}", workout_id);
                self.workout_id = Some(workout_id);
                Some(Route::AddOrEditWorkout(Some(workout_id)))
            }
            Err(e) => {
                warn!("Error generating workout id: {}", e);
                notifier.notify(Notification::error(GENERATE_ID_FAILED_MESSAGE));
                None
            }
        }
    }

    pub fn exercises_loaded<N: Notifier>(
        &mut self,
        result: Result<Vec<ExerciseSelection>, ClientError>,
        notifier: &N,
    ) {
        match result {
            Ok(exercises) => {
                self.exercises = exercises
                    .iter()
                    .filter(|exercise| exercise.is_selected)
                    .map(|exercise| {
                        format!(
                            "Name: {}, Intensity: {}, Muscle Group: {}",
                            exercise.exercise_name,
                            exercise.intensity.as_deref().unwrap_or_default(),
                            exercise.muscle_group.as_deref().unwrap_or_default()
                        )
                    })
                    .collect();
                if self.exercises.is_empty() {
                    info!("No exercises found for this workout.");
                }
            }
            Err(e) => {
                notifier.notify(Notification::warning(format!("Error fetching exercises: {}", e)));
            }
        }
    }

    /// Fill the form from the stored workout when editing
    pub fn workouts_loaded<N: Notifier>(
        &mut self,
        result: Result<Vec<Workout>, ClientError>,
        notifier: &N,
    ) {
        let Some(workout_id) = self.workout_id else {
            return;
        };
        match result {
            Ok(workouts) => match workouts.iter().find(|w| w.workout_id == workout_id) {
                Some(workout) => self.form = WorkoutForm::from_workout(workout),
                None => warn!("Workout {} not found", workout_id),
            },
            Err(e) => {
                notifier.notify(Notification::warning(format!("Error loading workout: {}", e)));
            }
        }
    }

    /// Obtain an id if needed, then load what the page shows.
    ///
    /// Returns the route to replace the URL with when an id was generated.
    pub async fn load<H, T, N>(page: &H, api: &ApiClient<T>, notifier: &N) -> Option<Route>
    where
        H: PageHandle<Self> + ?Sized,
        T: HttpTransport,
        N: Notifier,
    {
        let mut replace_with = None;
        if page.with(|page| page.needs_generated_id()) {
            let result = api.generate_workout_id().await;
            replace_with = page.with(|page| page.id_generated(result, notifier));
        }

        let (workout_id, mode) = page.with(|page| (page.workout_id, page.mode));
        let workout_id = workout_id?;
        if mode == EditorMode::Edit {
            let result = api.list_workouts().await;
            page.with(|page| page.workouts_loaded(result, notifier));
        }
        let result = api.exercises_in_workout(workout_id).await;
        page.with(|page| page.exercises_loaded(result, notifier));
        replace_with
    }

    /// Where "Select exercises" leads; alerts when there is no id yet
    pub fn select_exercises_route<N: Notifier>(&self, notifier: &N) -> Option<Route> {
        let Some(workout_id) = self.workout_id else {
            notifier.notify(Notification::error(IdKind::Workout.missing_message()));
            return None;
        };
        Some(match self.mode {
            EditorMode::Create => Route::SelectExercise(Some(workout_id)),
            EditorMode::Edit => Route::EditSelectExercise(Some(workout_id)),
        })
    }

    /// Validate the form; alerts and returns `None` when it cannot be sent
    pub fn prepare_submit<N: Notifier>(
        &self,
        notifier: &N,
    ) -> Option<(WorkoutId, UpdateWorkoutRequest)> {
        let Some(workout_id) = self.workout_id else {
            notifier.notify(Notification::error(IdKind::Workout.missing_message()));
            return None;
        };
        match self.form.to_request() {
            Some(request) => Some((workout_id, request)),
            None => {
                notifier.notify(Notification::error(MISSING_NAME_MESSAGE));
                None
            }
        }
    }

    /// Where to go after the server answered the save
    pub fn submitted<N: Notifier>(&self, result: Result<(), ClientError>, notifier: &N) -> Option<Route> {
        match result {
            Ok(()) => {
                info!("Workout updated successfully");
                Some(Route::WorkoutList)
            }
            Err(e) => {
                warn!("Error updating workout: {}", e);
                let message = e.server_message().unwrap_or(UPDATE_FAILED_MESSAGE).to_string();
                notifier.notify(Notification::error(message));
                None
            }
        }
    }

    /// Save the form; returns where to go next on success
    pub async fn submit<H, T, N>(page: &H, api: &ApiClient<T>, notifier: &N) -> Option<Route>
    where
        H: PageHandle<Self> + ?Sized,
        T: HttpTransport,
        N: Notifier,
    {
        let (workout_id, request) = page.with(|page| page.prepare_submit(notifier))?;
        let result = api.update_workout(workout_id, &request).await;
        page.with(|page| page.submitted(result, notifier))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::Method;
    use crate::domain::notifications::Severity;
    use crate::test_utils::{RecordingNotifier, ScriptedTransport};

    #[tokio::test]
    async fn test_new_workout_gets_generated_id() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"workout_id": 77}"#);
        transport.respond(200, "[]");
        let notifier = RecordingNotifier::new();
        let page = WorkoutEditorPage::for_route(Route::parse("/add-or-edit-workout/")).unwrap();
        assert!(page.needs_generated_id());
        let page = RefCell::new(page);

        let replace = WorkoutEditorPage::load(&page, &ApiClient::new(transport.clone()), &notifier).await;

        assert_eq!(replace.unwrap().to_path(), "/add-or-edit-workout/77");
        let page = page.into_inner();
        assert_eq!(page.workout_id(), Some(WorkoutId(77)));
        assert!(!page.needs_generated_id());
        assert!(page.exercises().is_empty());
        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, ["/api/generate-workout-id", "/api/exercises-in-workouts/77"]);
    }

    #[tokio::test]
    async fn test_failed_id_generation_alerts() {
        let transport = ScriptedTransport::new();
        transport.fail("offline");
        let notifier = RecordingNotifier::new();
        let page = RefCell::new(WorkoutEditorPage::new(EditorMode::Create, None));

        let replace = WorkoutEditorPage::load(&page, &ApiClient::new(transport.clone()), &notifier).await;

        assert_eq!(replace, None);
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            notifier.notifications(),
            vec![Notification::error(GENERATE_ID_FAILED_MESSAGE)]
        );
        assert_eq!(page.borrow().select_exercises_route(&notifier), None);
    }

    #[tokio::test]
    async fn test_edit_prefills_form_and_lists_selected_exercises() {
        let transport = ScriptedTransport::new();
        transport.respond(
            200,
            r#"[{"workout_id": 5, "name": "Pull", "description": "Back work", "focus": "Back", "intensity": "Moderate"}]"#,
        );
        transport.respond(
            200,
            r#"[{"exercise_id": 1, "exercise_name": "Row", "intensity": "High", "muscle_group": "Back", "is_selected": true},
                {"exercise_id": 2, "exercise_name": "Squat", "intensity": "High", "muscle_group": "Legs", "is_selected": false}]"#,
        );
        let notifier = RecordingNotifier::new();
        let page = RefCell::new(WorkoutEditorPage::for_route(Route::EditWorkout(Some(WorkoutId(5)))).unwrap());

        let replace = WorkoutEditorPage::load(&page, &ApiClient::new(transport.clone()), &notifier).await;

        assert_eq!(replace, None);
        let page = page.into_inner();
        assert_eq!(page.form.name, "Pull");
        assert_eq!(page.form.focus, "Back");
        assert_eq!(page.exercises(), ["Name: Row, Intensity: High, Muscle Group: Back"]);
        assert_eq!(
            page.select_exercises_route(&notifier),
            Some(Route::EditSelectExercise(Some(WorkoutId(5))))
        );
    }

    #[tokio::test]
    async fn test_submit_puts_workout_and_returns_to_list() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success": true}"#);
        let notifier = RecordingNotifier::new();
        let mut page = WorkoutEditorPage::new(EditorMode::Create, Some(WorkoutId(8)));
        page.form = WorkoutForm {
            name: "Full Body".to_string(),
            description: "Everything".to_string(),
            rating: "7".to_string(),
            focus: "General".to_string(),
            intensity: "Vigorous".to_string(),
        };
        let page = RefCell::new(page);

        let next = WorkoutEditorPage::submit(&page, &ApiClient::new(transport.clone()), &notifier).await;

        assert_eq!(next, Some(Route::WorkoutList));
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "/api/workouts/8");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["rating"], 7);
        assert_eq!(
            page.borrow().select_exercises_route(&notifier),
            Some(Route::SelectExercise(Some(WorkoutId(8))))
        );
    }

    #[tokio::test]
    async fn test_submit_failures_alert() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success": false, "error": "Workout name already exists"}"#);
        let notifier = RecordingNotifier::new();
        let page = RefCell::new(WorkoutEditorPage::new(EditorMode::Edit, Some(WorkoutId(8))));
        let api = ApiClient::new(transport.clone());

        assert_eq!(WorkoutEditorPage::submit(&page, &api, &notifier).await, None);
        assert!(transport.requests().is_empty());

        page.borrow_mut().form.name = "Legs".to_string();
        assert_eq!(WorkoutEditorPage::submit(&page, &api, &notifier).await, None);

        let messages: Vec<String> = notifier
            .notifications()
            .into_iter()
            .inspect(|n| assert_eq!(n.severity, Severity::Error))
            .map(|n| n.message)
            .collect();
        assert_eq!(messages, vec![MISSING_NAME_MESSAGE, "Workout name already exists"]);
    }

    #[test]
    fn test_out_of_range_rating_is_dropped() {
        let form = WorkoutForm {
            name: "A".to_string(),
            rating: "11".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_request().unwrap().rating, None);
    }
}
