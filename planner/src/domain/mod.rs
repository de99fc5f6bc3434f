pub mod association;
pub mod calendar;
pub mod day_detail;
pub mod day_ids;
pub mod notifications;
pub mod routes;

pub use association::{
    settle, Association, AssociationAction, AssociationService, PendingToggle, ToggleControl,
    ToggleResolution, ToggleState,
};
pub use calendar::CalendarService;
pub use day_detail::{DayDetail, DayDetailService, DaySchedulePanel, DayWorkouts, WorkoutLine};
pub use day_ids::{DayIdList, DayIdStore};
pub use notifications::{LogNotifier, Notification, Notifier, Severity};
pub use routes::{trailing_id, Route};
