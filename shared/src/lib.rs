use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of week rows in a rendered schedule month
pub const SCHEDULE_ROWS: usize = 6;

/// Number of weekday columns in a rendered schedule month (Sunday first)
pub const SCHEDULE_COLUMNS: usize = 7;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            pub fn value(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<$inner>().map($name)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                $name(value)
            }
        }
    };
}

numeric_id!(
    /// Client-generated tag for one day of the displayed month
    DayId(u32)
);

numeric_id!(
    /// Server-assigned workout identifier
    WorkoutId(u64)
);

numeric_id!(
    /// Server-assigned exercise identifier
    ExerciseId(u64)
);

/// A single position in the schedule grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleCell {
    /// Empty padding before the first day of the month
    PaddingBefore,
    /// Actual day within the month, bound to its day identifier
    MonthDay { day: u32, day_id: DayId },
    /// Empty padding after the last day of the month
    PaddingAfter,
}

impl ScheduleCell {
    pub fn is_blank(&self) -> bool {
        !matches!(self, ScheduleCell::MonthDay { .. })
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            ScheduleCell::MonthDay { day, .. } => Some(*day),
            _ => None,
        }
    }

    pub fn day_id(&self) -> Option<DayId> {
        match self {
            ScheduleCell::MonthDay { day_id, .. } => Some(*day_id),
            _ => None,
        }
    }
}

/// A month laid out as 6 week rows of 7 weekday columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
    pub rows: Vec<[ScheduleCell; SCHEDULE_COLUMNS]>,
}

impl ScheduleGrid {
    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &ScheduleCell> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Populated cells in day order
    pub fn month_days(&self) -> impl Iterator<Item = (u32, DayId)> + '_ {
        self.cells().filter_map(|cell| match cell {
            ScheduleCell::MonthDay { day, day_id } => Some((*day, *day_id)),
            _ => None,
        })
    }

    pub fn day_id_for(&self, day: u32) -> Option<DayId> {
        self.month_days().find(|(d, _)| *d == day).map(|(_, id)| id)
    }
}

/// Exercise summary embedded in a workout listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExerciseSummary {
    pub name: String,
    #[serde(default)]
    pub intensity: Option<String>,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Workout as returned by `/api/workouts` and `/api/workouts-by-day/{dayId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub workout_id: WorkoutId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub intensity: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExerciseSummary>,
    /// Only present when the listing is scoped to a day
    #[serde(default)]
    pub is_selected: bool,
}

/// Exercise as returned by `/api/exercises`
///
/// The server returns whatever columns the exercise row has, so everything
/// besides the id and name is kept as free-form attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub exercise_id: ExerciseId,
    pub name: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

/// Exercise row scoped to one workout, from `/api/exercises-in-workouts/{workoutId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSelection {
    pub exercise_id: ExerciseId,
    pub exercise_name: String,
    #[serde(default)]
    pub intensity: Option<String>,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub is_selected: bool,
}

/// Response to an association add/remove request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `PUT /api/workouts/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub focus: String,
    pub intensity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateWorkoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateWorkoutIdResponse {
    pub workout_id: WorkoutId,
}

/// Body of `POST /api/add-exercise-detail/{workoutId}/{exerciseId}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseDetailRequest {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_needed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
}

/// Generic `{message}` / `{error}` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
