//! Schedule workouts on a day by ticking them.

use log::{info, warn};
use shared::{DayId, Workout};

use super::checkbox_list::{CheckboxList, CheckboxRow};
use super::{PageContent, PageHandle};
use crate::api::{ApiClient, HttpTransport};
use crate::domain::association::Association;
use crate::domain::notifications::{Notification, Notifier};
use crate::error::{ClientError, IdKind};

pub const NO_WORKOUTS_MESSAGE: &str = "No workouts available to display.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load workouts.";

pub fn workout_label(workout: &Workout) -> String {
    format!(
        "Name: {}, Focus: {}, Intensity: {}",
        workout.name,
        workout.focus.as_deref().unwrap_or_default(),
        workout.intensity.as_deref().unwrap_or_default()
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectWorkoutPage {
    day_id: Option<DayId>,
    content: PageContent<CheckboxList>,
}

impl SelectWorkoutPage {
    pub fn new(day_id: Option<DayId>) -> Self {
        let content = match day_id {
            Some(_) => PageContent::Loading,
            None => PageContent::Message(IdKind::Day.missing_message()),
        };
        Self { day_id, content }
    }

    pub fn day_id(&self) -> Option<DayId> {
        self.day_id
    }

    pub fn content(&self) -> &PageContent<CheckboxList> {
        &self.content
    }

    pub fn checkboxes_mut(&mut self) -> Option<&mut CheckboxList> {
        self.content.ready_mut()
    }

    /// Fill the page from a `/api/workouts` response
    pub fn loaded<N: Notifier>(&mut self, result: Result<Vec<Workout>, ClientError>, notifier: &N) {
        let Some(day_id) = self.day_id else {
            return;
        };

        self.content = match result {
            Ok(workouts) if workouts.is_empty() => PageContent::Message(NO_WORKOUTS_MESSAGE),
            Ok(workouts) => {
                info!("Loaded {} workouts to schedule on day {}", workouts.len(), day_id);
                let rows = workouts
                    .iter()
                    .map(|workout| {
                        CheckboxRow::new(
                            workout_label(workout),
                            Association::WorkoutToDay {
                                day_id,
                                workout_id: workout.workout_id,
                            },
                            workout.is_selected,
                        )
                    })
                    .collect();
                PageContent::Ready(CheckboxList::new(rows))
            }
            Err(e) => {
                notifier.notify(Notification::warning(format!("Error loading workouts: {}", e)));
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
        if page.with(|page| page.day_id.is_none()) {
            warn!("Select workout page opened without a day id");
            return;
        }
        let result = api.list_workouts().await;
        page.with(|page| page.loaded(result, notifier));
    }
}
