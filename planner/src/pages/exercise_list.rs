//! Exercise catalogue shown at `/`.

use log::{debug, info};
use serde_json::Value;
use shared::{Exercise, ExerciseId};

use super::{PageContent, PageHandle};
use crate::api::{ApiClient, HttpTransport};
use crate::domain::notifications::{Notification, Notifier};
use crate::domain::routes::Route;
use crate::error::ClientError;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load exercises.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete exercise.";

/// Columns that are shown elsewhere on the card or not at all
const HIDDEN_COLUMNS: [&str; 3] = ["exercise_id", "exercise_detail_id", "name"];

/// Display title for an exercise column; unknown columns keep their name
pub fn column_title(column: &str) -> &str {
    match column {
        "description" => "Description",
        "exercise_type" => "Type",
        "intensity" => "Intensity",
        "muscle_group" => "Muscle Group",
        "rating" => "Rating",
        "sets" => "Sets",
        "reps" => "Reps",
        other => other,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseCard {
    pub exercise_id: ExerciseId,
    pub name: String,
    pub details: Vec<String>,
}

impl ExerciseCard {
    pub fn edit_route(&self) -> Route {
        Route::EditExercise(Some(self.exercise_id))
    }
}

impl From<&Exercise> for ExerciseCard {
    fn from(exercise: &Exercise) -> Self {
        let details = exercise
            .attributes
            .iter()
            .filter(|(column, _)| !HIDDEN_COLUMNS.contains(&column.as_str()))
            .map(|(column, value)| format!("{}: {}", column_title(column), display_value(value)))
            .collect();

        Self {
            exercise_id: exercise.exercise_id,
            name: exercise.name.clone(),
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseListPage {
    filter: Option<String>,
    content: PageContent<Vec<ExerciseCard>>,
}

impl ExerciseListPage {
    pub fn new(filter: Option<String>) -> Self {
        Self {
            filter: filter.filter(|f| !f.trim().is_empty()),
            content: PageContent::Loading,
        }
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Change the filter; the list must be loaded again
    pub fn set_filter(&mut self, filter: Option<String>) {
        *self = Self::new(filter);
    }

    pub fn content(&self) -> &PageContent<Vec<ExerciseCard>> {
        &self.content
    }

    /// Apply a list fetched with `filter`.
    ///
    /// Returns `false` and leaves the page alone when the filter has changed
    /// since that request was sent.
    pub fn loaded<N: Notifier>(
        &mut self,
        filter: Option<&str>,
        result: Result<Vec<Exercise>, ClientError>,
        notifier: &N,
    ) -> bool {
        let filter = filter.map(str::trim).filter(|f| !f.is_empty());
        if filter != self.filter().map(str::trim) {
            debug!("Dropped exercises fetched for filter {:?}", filter);
            return false;
        }

        self.content = match result {
            Ok(exercises) => {
                info!("Loaded {} exercises", exercises.len());
                PageContent::Ready(exercises.iter().map(ExerciseCard::from).collect())
            }
            Err(e) => {
                notifier.notify(Notification::warning(format!("Error loading the exercises: {}", e)));
                PageContent::Message(LOAD_FAILED_MESSAGE)
            }
        };
        true
    }

    /// Fetch the list for the filter the page holds right now
    pub async fn load<H, T, N>(page: &H, api: &ApiClient<T>, notifier: &N) -> bool
    where
        H: PageHandle<Self> + ?Sized,
        T: HttpTransport,
        N: Notifier,
    {
        let filter = page.with(|page| page.filter.clone());
        let result = api.list_exercises(filter.as_deref()).await;
        page.with(|page| page.loaded(filter.as_deref(), result, notifier))
    }

    pub fn deleted<N: Notifier>(
        &mut self,
        exercise_id: ExerciseId,
        result: Result<(), ClientError>,
        notifier: &N,
    ) -> bool {
        match result {
            Ok(()) => {
                if let Some(cards) = self.content.ready_mut() {
                    cards.retain(|card| card.exercise_id != exercise_id);
                }
                info!("Exercise {} deleted successfully", exercise_id);
                true
            }
            Err(e) => {
                let message = e.server_message().unwrap_or(DELETE_FAILED_MESSAGE).to_string();
                notifier.notify(Notification::error(message));
                false
            }
        }
    }

    pub async fn delete<H, T, N>(
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
        let result = api.delete_exercise(exercise_id).await;
        page.with(|page| page.deleted(exercise_id, result, notifier))
    }
}
