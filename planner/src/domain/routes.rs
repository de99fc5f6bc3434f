//! Client-side routes and URL identifier parsing.

use std::str::FromStr;

use shared::{DayId, ExerciseId, WorkoutId};

/// A page of the planner.
///
/// Routes that carry an identifier hold `None` when the URL had no usable
/// one; the page then shows its "missing" text instead of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ExerciseList,
    Schedule,
    WorkoutList,
    SelectWorkout(Option<DayId>),
    SelectExercise(Option<WorkoutId>),
    EditSelectExercise(Option<WorkoutId>),
    AddOrEditWorkout(Option<WorkoutId>),
    EditWorkout(Option<WorkoutId>),
    /// Served by the backend, not rendered by this client
    AddExercise,
    EditExercise(Option<ExerciseId>),
    NotFound,
}

impl Route {
    /// Resolve a location pathname. Any query string or fragment is ignored.
    pub fn parse(path: &str) -> Route {
        let path = strip_query(path);
        let first = path.split('/').find(|segment| !segment.is_empty());

        match first {
            None => Route::ExerciseList,
            Some("schedule") => Route::Schedule,
            Some("workout-list") => Route::WorkoutList,
            Some("select-workout") => Route::SelectWorkout(trailing_id(path)),
            Some("select-exercise") => Route::SelectExercise(trailing_id(path)),
            Some("edit-select-exercise") => Route::EditSelectExercise(trailing_id(path)),
            Some("add-or-edit-workout") => Route::AddOrEditWorkout(trailing_id(path)),
            Some("edit-workout") => Route::EditWorkout(trailing_id(path)),
            Some("add-exercise") => Route::AddExercise,
            Some("edit-exercise") => Route::EditExercise(trailing_id(path)),
            Some(_) => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        fn with_id<I: ToString>(base: &str, id: &Option<I>) -> String {
            match id {
                Some(id) => format!("{}/{}", base, id.to_string()),
                None => base.to_string(),
            }
        }

        match self {
            Route::ExerciseList => "/".to_string(),
            Route::Schedule => "/schedule".to_string(),
            Route::WorkoutList => "/workout-list".to_string(),
            Route::SelectWorkout(id) => with_id("/select-workout", id),
            Route::SelectExercise(id) => with_id("/select-exercise", id),
            Route::EditSelectExercise(id) => with_id("/edit-select-exercise", id),
            Route::AddOrEditWorkout(id) => with_id("/add-or-edit-workout", id),
            Route::EditWorkout(id) => with_id("/edit-workout", id),
            Route::AddExercise => "/add-exercise".to_string(),
            Route::EditExercise(id) => with_id("/edit-exercise", id),
            Route::NotFound => "/404".to_string(),
        }
    }
}

/// Identifier in the last non-empty path segment.
///
/// A trailing slash is ignored. The segment must be all ASCII digits;
/// anything else (including an out-of-range number) counts as missing.
pub fn trailing_id<T: FromStr>(path: &str) -> Option<T> {
    let segment = strip_query(path)
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}
