use log::info;
use shared::{Workout, WorkoutExerciseSummary, WorkoutId};

use super::{PageContent, PageHandle};
use crate::api::{ApiClient, HttpTransport};
use crate::domain::notifications::{Notification, Notifier};
use crate::domain::routes::Route;
use crate::error::ClientError;

pub const NO_WORKOUTS_MESSAGE: &str = "No workouts available.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load workouts.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete workout.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutCard {
    pub workout_id: WorkoutId,
    pub name: String,
    pub details: String,
    /// One line per selected exercise; empty hides the section
    pub exercises: Vec<String>,
}

impl WorkoutCard {
    pub fn edit_route(&self) -> Route {
        Route::EditWorkout(Some(self.workout_id))
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn exercise_line(exercise: &WorkoutExerciseSummary) -> String {
    format!(
        "{} - Intensity: {}, Muscle Group: {}, Description: {}",
        exercise.name,
        text(&exercise.intensity),
        text(&exercise.muscle_group),
        text(&exercise.description)
    )
}

impl From<&Workout> for WorkoutCard {
    fn from(workout: &Workout) -> Self {
        Self {
            workout_id: workout.workout_id,
            name: workout.name.clone(),
            details: format!(
                "Description: {}, Intensity: {}, Focus: {}",
                text(&workout.description),
                text(&workout.intensity),
                text(&workout.focus)
            ),
            exercises: workout.exercises.iter().map(exercise_line).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutListPage {
    content: PageContent<Vec<WorkoutCard>>,
}

impl Default for WorkoutListPage {
    fn default() -> Self {
        Self {
            content: PageContent::Loading,
        }
    }
}

impl WorkoutListPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &PageContent<Vec<WorkoutCard>> {
        &self.content
    }

    pub fn loaded<N: Notifier>(&mut self, result: Result<Vec<Workout>, ClientError>, notifier: &N) {
        self.content = match result {
            Ok(workouts) if workouts.is_empty() => PageContent::Message(NO_WORKOUTS_MESSAGE),
            Ok(workouts) => {
                info!("Workouts fetched: {}", workouts.len());
                PageContent::Ready(workouts.iter().map(WorkoutCard::from).collect())
            }
            Err(e) => {
                notifier.notify(Notification::warning(format!("Error loading the workouts: {}", e)));
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
        let result = api.list_workouts().await;
        page.with(|page| page.loaded(result, notifier));
    }

    /// Drop the card once the server confirms; alert otherwise
    pub fn deleted<N: Notifier>(
        &mut self,
        workout_id: WorkoutId,
        result: Result<(), ClientError>,
        notifier: &N,
    ) -> bool {
        match result {
            Ok(()) => {
                if let Some(cards) = self.content.ready_mut() {
                    cards.retain(|card| card.workout_id != workout_id);
                }
                info!("Workout {} deleted successfully", workout_id);
                true
            }
            Err(e) => {
                log::error!("Error deleting workout {}: {}", workout_id, e);
                notifier.notify(Notification::error(DELETE_FAILED_MESSAGE));
                false
            }
        }
    }

    pub async fn delete<H, T, N>(
        page: &H,
        api: &ApiClient<T>,
        notifier: &N,
        workout_id: WorkoutId,
    ) -> bool
    where
        H: PageHandle<Self> + ?Sized,
        T: HttpTransport,
        N: Notifier,
    {
        let result = api.delete_workout(workout_id).await;
        page.with(|page| page.deleted(workout_id, result, notifier))
    }
}
