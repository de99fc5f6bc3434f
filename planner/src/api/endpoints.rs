//! Paths of the server endpoints the client consumes.

use shared::{DayId, ExerciseId, WorkoutId};

use super::transport::Method;
use crate::domain::association::{Association, AssociationAction};

pub fn workouts_by_day(day_id: DayId) -> String {
    format!("/api/workouts-by-day/{}", day_id)
}

pub fn workouts() -> String {
    "/api/workouts".to_string()
}

pub fn workout(workout_id: WorkoutId) -> String {
    format!("/api/workouts/{}", workout_id)
}

pub fn generate_workout_id() -> String {
    "/api/generate-workout-id".to_string()
}

/// `/api/exercises`, optionally narrowed with `?filter=`
pub fn exercises(filter: Option<&str>) -> String {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(filter) => format!("/api/exercises?filter={}", urlencoding::encode(filter)),
        None => "/api/exercises".to_string(),
    }
}

pub fn exercise(exercise_id: ExerciseId) -> String {
    format!("/api/exercises/{}", exercise_id)
}

pub fn exercises_in_workout(workout_id: WorkoutId) -> String {
    format!("/api/exercises-in-workouts/{}", workout_id)
}

pub fn add_exercise_detail(workout_id: WorkoutId, exercise_id: ExerciseId) -> String {
    format!("/api/add-exercise-detail/{}/{}", workout_id, exercise_id)
}

/// Method and path that create or remove an association
pub fn association(association: Association, action: AssociationAction) -> (Method, String) {
    let method = match action {
        AssociationAction::Add => Method::Post,
        AssociationAction::Remove => Method::Delete,
    };

    let path = match association {
        Association::WorkoutToDay { day_id, workout_id } => {
            format!("/api/workout-to-day/{}/{}", day_id, workout_id)
        }
        Association::ExerciseToWorkout { workout_id, exercise_id } => {
            format!("/api/exercise-to-workout/add/{}/{}", workout_id, exercise_id)
        }
        Association::ExerciseSelection { workout_id, exercise_id } => match action {
            AssociationAction::Add => {
                format!("/api/exercise-to-workout/add/{}/{}", workout_id, exercise_id)
            }
            AssociationAction::Remove => {
                format!("/api/exercise-to-workout/remove/{}/{}", workout_id, exercise_id)
            }
        },
    };

    (method, path)
}
