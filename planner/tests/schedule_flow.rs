//! Walks the schedule flow end to end against a fake server: build the month,
//! open a day, schedule a workout on it, and see it show up.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use shared::{DayId, WorkoutId};
use workout_planner::domain::day_detail::NO_WORKOUTS_MESSAGE;
use workout_planner::pages::{toggle_row, SelectWorkoutPage};
use workout_planner::{
    ApiClient, ApiRequest, ApiResponse, Association, AssociationService, CalendarService,
    ClientError, DayDetailService, DaySchedulePanel, HttpTransport, MemoryStorage, Method,
    Notification, Notifier, PlannerConfig, Route, ToggleResolution,
};

/// Keeps workout↔day links in memory and answers like the real server
#[derive(Clone, Default)]
struct FakeServer {
    scheduled: Rc<RefCell<HashMap<u32, Vec<u64>>>>,
    fail_writes: Rc<RefCell<bool>>,
}

const WORKOUTS: [(u64, &str, &str); 2] = [(1, "Leg Day", "Legs"), (2, "Push", "Chest")];

impl FakeServer {
    fn workout_json(id: u64) -> String {
        let (_, name, focus) = WORKOUTS.iter().find(|(w, _, _)| *w == id).copied().unwrap();
        format!(r#"{{"workout_id": {}, "name": "{}", "focus": "{}", "intensity": "High"}}"#, id, name, focus)
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let segments: Vec<&str> = request.url.trim_start_matches('/').split('/').collect();
        match (request.method, segments.as_slice()) {
            (Method::Get, ["api", "workouts"]) => {
                let all: Vec<String> = WORKOUTS.iter().map(|(id, _, _)| Self::workout_json(*id)).collect();
                Ok(ApiResponse::new(200, format!("[{}]", all.join(","))))
            }
            (Method::Get, ["api", "workouts-by-day", day]) => {
                let day: u32 = day.parse().unwrap();
                let ids = self.scheduled.borrow().get(&day).cloned().unwrap_or_default();
                let list: Vec<String> = ids.into_iter().map(Self::workout_json).collect();
                Ok(ApiResponse::new(200, format!("[{}]", list.join(","))))
            }
            (method, ["api", "workout-to-day", day, workout]) => {
                if *self.fail_writes.borrow() {
                    return Ok(ApiResponse::new(
                        500,
                        r#"{"success": false, "message": "database is locked"}"#,
                    ));
                }
                let day: u32 = day.parse().unwrap();
                let workout: u64 = workout.parse().unwrap();
                let mut scheduled = self.scheduled.borrow_mut();
                let entry = scheduled.entry(day).or_default();
                match method {
                    Method::Post => entry.push(workout),
                    _ => entry.retain(|w| *w != workout),
                }
                Ok(ApiResponse::new(200, r#"{"success": true, "message": "ok"}"#))
            }
            _ => Ok(ApiResponse::new(404, "not found")),
        }
    }
}

#[derive(Clone, Default)]
struct Alerts(Rc<RefCell<Vec<Notification>>>);

impl Notifier for Alerts {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

#[tokio::test]
async fn test_schedule_a_workout_on_a_day() {
    let config = PlannerConfig::default();
    let storage = MemoryStorage::new();
    let server = FakeServer::default();
    let alerts = Alerts::default();
    let api = config.api_client(server.clone());

    // Month grid with cached identifiers
    let calendar = CalendarService::new();
    let day_ids = config.day_id_store(storage.clone()).load_or_generate(2026, 10);
    let grid = calendar.build_grid(&day_ids);
    assert_eq!(grid.month_days().count(), 31);
    let again = config.day_id_store(storage.clone()).load_or_generate(2026, 10);
    assert_eq!(again, day_ids);

    // Open the 15th: nothing scheduled yet
    let day_id = grid.day_id_for(15).unwrap();
    let details = DayDetailService::new(api.clone(), alerts.clone());
    let panel = RefCell::new(DaySchedulePanel::new());
    details.show_day(&panel, day_id).await;
    let detail = panel.borrow().current().cloned().unwrap();
    assert_eq!(detail.workouts.message(), Some(NO_WORKOUTS_MESSAGE));

    // Follow "Schedule Workout" and tick Leg Day
    let route = Route::parse(&detail.schedule_route().to_path());
    let Route::SelectWorkout(Some(selected_day)) = route else {
        panic!("unexpected route {:?}", route);
    };
    let page = RefCell::new(SelectWorkoutPage::new(Some(selected_day)));
    SelectWorkoutPage::load(&page, &api, &alerts).await;
    let service = AssociationService::new(api.clone(), alerts.clone());
    let link = Association::WorkoutToDay {
        day_id,
        workout_id: WorkoutId(1),
    };
    let resolution = toggle_row(&page, SelectWorkoutPage::checkboxes_mut, &service, link, true).await;
    assert_eq!(resolution, Some(ToggleResolution::Confirmed));

    // Back on the schedule the day lists it
    details.show_day(&panel, day_id).await;
    let lines: Vec<String> = panel
        .borrow()
        .current()
        .unwrap()
        .workouts
        .lines()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, vec!["Workout: Leg Day, Focus: Legs"]);
    assert!(alerts.0.borrow().is_empty());
}

#[tokio::test]
async fn test_failed_schedule_rolls_back_and_alerts() {
    let server = FakeServer::default();
    *server.fail_writes.borrow_mut() = true;
    let alerts = Alerts::default();
    let api = ApiClient::new(server.clone());
    let day_id = DayId(4242);

    let page = RefCell::new(SelectWorkoutPage::new(Some(day_id)));
    SelectWorkoutPage::load(&page, &api, &alerts).await;
    let service = AssociationService::new(api, alerts.clone());
    let link = Association::WorkoutToDay {
        day_id,
        workout_id: WorkoutId(2),
    };

    let resolution = toggle_row(&page, SelectWorkoutPage::checkboxes_mut, &service, link, true).await;

    assert_eq!(
        resolution,
        Some(ToggleResolution::RolledBack {
            message: "database is locked".to_string()
        })
    );
    let page = page.borrow();
    let row = page.content().ready().unwrap().row(link).unwrap();
    assert!(!row.control.checked());
    assert_eq!(alerts.0.borrow().as_slice(), [Notification::error("database is locked")]);
    assert!(server.scheduled.borrow().is_empty());
}
