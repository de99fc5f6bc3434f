use std::rc::Rc;

use shared::{DayId, ScheduleGrid};
use wasm_bindgen_futures::spawn_local;
use workout_planner::domain::DayDetail;
use workout_planner::{CalendarService, DaySchedulePanel};
use yew::prelude::*;

use super::use_page_model::use_page_model;
use super::use_planner::use_planner;
use crate::services::storage::BrowserStorage;

pub struct ScheduleState {
    pub title: String,
    pub grid: Rc<ScheduleGrid>,
    pub detail: Option<DayDetail>,
}

pub struct UseScheduleResult {
    pub state: ScheduleState,
    pub open_day: Callback<DayId>,
}

#[hook]
pub fn use_schedule() -> UseScheduleResult {
    let planner = use_planner();

    // Identifiers are generated once per month and reused from storage
    let grid = use_memo((), {
        let config = planner.config.clone();
        move |_| {
            let calendar = CalendarService::new();
            let (year, month) = calendar.current_month();
            let day_ids = config.day_id_store(BrowserStorage).load_or_generate(year, month);
            calendar.build_grid(&day_ids)
        }
    });

    let panel = use_page_model(DaySchedulePanel::new);

    let open_day = {
        let panel = panel.clone();
        let service = planner.day_details();
        Callback::from(move |day_id: DayId| {
            let panel = panel.clone();
            let service = service.clone();
            spawn_local(async move {
                service.show_day(&panel, day_id).await;
            });
        })
    };

    let title = format!(
        "{} {}",
        CalendarService::new().month_name(grid.month),
        grid.year
    );
    let detail = panel.read().current().cloned();

    UseScheduleResult {
        state: ScheduleState {
            title,
            grid,
            detail,
        },
        open_day,
    }
}
