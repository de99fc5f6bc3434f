//! Detail panel for one day of the schedule.
//!
//! Opening a day replaces whatever panel was open before. Workouts for the
//! day are fetched afterwards; a result that arrives for a day that is no
//! longer open is dropped.

use std::fmt;

use log::{debug, info};
use shared::{DayId, Workout, WorkoutId};

use super::notifications::{Notification, Notifier};
use super::routes::Route;
use crate::api::{ApiClient, HttpTransport};
use crate::pages::PageHandle;

pub const NO_WORKOUTS_MESSAGE: &str = "No workouts scheduled for this day.";
pub const SCHEDULE_WORKOUT_LABEL: &str = "Schedule Workout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutLine {
    pub workout_id: WorkoutId,
    pub name: String,
    pub focus: String,
}

impl From<Workout> for WorkoutLine {
    fn from(workout: Workout) -> Self {
        Self {
            workout_id: workout.workout_id,
            name: workout.name,
            focus: workout.focus.unwrap_or_default(),
        }
    }
}

impl fmt::Display for WorkoutLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Workout: {}, Focus: {}", self.name, self.focus)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayWorkouts {
    Loading,
    Empty,
    Scheduled(Vec<WorkoutLine>),
    /// The fetch failed; the panel shows no entries
    Unavailable,
}

impl DayWorkouts {
    pub fn from_workouts(workouts: Vec<Workout>) -> Self {
        if workouts.is_empty() {
            DayWorkouts::Empty
        } else {
            DayWorkouts::Scheduled(workouts.into_iter().map(WorkoutLine::from).collect())
        }
    }

    pub fn lines(&self) -> &[WorkoutLine] {
        match self {
            DayWorkouts::Scheduled(lines) => lines,
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            DayWorkouts::Empty => Some(NO_WORKOUTS_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDetail {
    pub day_id: DayId,
    pub workouts: DayWorkouts,
}

impl DayDetail {
    pub fn heading(&self) -> String {
        format!("Day ID: {}", self.day_id)
    }

    /// Where "Schedule Workout" leads
    pub fn schedule_route(&self) -> Route {
        Route::SelectWorkout(Some(self.day_id))
    }
}

/// The single open day panel, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySchedulePanel {
    current: Option<DayDetail>,
}

impl DaySchedulePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `day_id`, replacing any open panel
    pub fn open(&mut self, day_id: DayId) {
        if let Some(previous) = &self.current {
            debug!("Replacing panel for day {} with day {}", previous.day_id, day_id);
        }
        self.current = Some(DayDetail {
            day_id,
            workouts: DayWorkouts::Loading,
        });
    }

    /// Fill in workouts for `day_id`; `false` if that day is no longer open
    pub fn apply(&mut self, day_id: DayId, workouts: DayWorkouts) -> bool {
        match &mut self.current {
            Some(detail) if detail.day_id == day_id => {
                detail.workouts = workouts;
                true
            }
            _ => {
                debug!("Dropping workouts for day {}, panel has moved on", day_id);
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&DayDetail> {
        self.current.as_ref()
    }
}

/// Loads the workouts scheduled on a day
#[derive(Clone)]
pub struct DayDetailService<T, N> {
    api: ApiClient<T>,
    notifier: N,
}

impl<T: HttpTransport, N: Notifier> DayDetailService<T, N> {
    pub fn new(api: ApiClient<T>, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// A failed fetch is reported as a warning and yields `Unavailable`
    pub async fn fetch_workouts(&self, day_id: DayId) -> DayWorkouts {
        match self.api.workouts_by_day(day_id).await {
            Ok(workouts) => {
                info!("Loaded {} workouts for day {}", workouts.len(), day_id);
                DayWorkouts::from_workouts(workouts)
            }
            Err(e) => {
                self.notifier.notify(Notification::warning(format!(
                    "Error fetching workouts for the day: {}",
                    e
                )));
                DayWorkouts::Unavailable
            }
        }
    }

    /// Open the panel for `day_id` and fill it in.
    ///
    /// Returns `false` when another day was opened while the fetch ran.
    pub async fn show_day<H>(&self, panel: &H, day_id: DayId) -> bool
    where
        H: PageHandle<DaySchedulePanel> + ?Sized,
    {
        panel.with(|panel| panel.open(day_id));
        let workouts = self.fetch_workouts(day_id).await;
        panel.with(|panel| panel.apply(day_id, workouts))
    }
}
